//! Demo data generation for the newsroom platform.
//!
//! This crate fills a development database with a fully interlinked content
//! graph: industries, clients, the editorial author, categories, tags,
//! articles, media assets, and the engagement records the dashboards read.
//! Article copy and vocabularies come from external services when enabled,
//! falling back to a static template bank so a run always completes offline.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let options = SeedOptions {
//!     article_total: 25,
//!     reset: true,
//!     ..SeedOptions::default()
//! };
//! let summary = pipeline::run(&pool, options, EventSink::disabled()).await?;
//! println!("{} articles seeded", summary.articles.total);
//! ```

pub mod assets;
pub mod config;
pub mod content;
pub mod db;
pub mod distribution;
pub mod events;
pub mod generators;
pub mod pipeline;

// Re-export core types from the newsroom crate
pub use newsroom::models::{ArticleStatus, ContentLength, InteractionKind, MediaKind, builtin};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::assets::AssetClient;
    pub use crate::config::{SeedOptions, SeedPhase};
    pub use crate::content::{AiClient, ContentResolver, NewsClient, TagSet, TemplateBank};
    pub use crate::db::{SeedError, Seeder, reset};
    pub use crate::distribution::{ScaledRange, scale_range, split_weighted};
    pub use crate::events::{EventSink, LogLevel, ProgressEvent};
    pub use crate::pipeline::{self, SeedSummary};
    pub use crate::{ArticleStatus, ContentLength, MediaKind, builtin};
}
