//! Core content model types for the newsroom platform.
//!
//! This crate carries the entity enums, natural-key constants, and slug
//! helper shared by the platform and its tooling. Server handlers, admin
//! views, and exports live in their own crates; everything here is plain
//! data with no I/O.

pub mod models;
pub mod slug;

pub use models::{
    ArticleStatus, ClientSummary, ContentLength, InteractionKind, MediaKind, ShareChannel, builtin,
};
pub use slug::slugify;
