//! Database persistence and reset.

pub mod reset;
pub mod seeder;

pub use reset::reset;
pub use seeder::{InteractionTarget, Seeder};

use thiserror::Error;

/// Fatal seeding failures. Everything else is absorbed at the call site and
/// surfaces only through the progress log.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no clients available; articles cannot be attributed")]
    NoClients,

    #[error("seeding is disabled in the '{0}' environment")]
    EnvironmentGate(String),

    #[error("{0} is enabled but {1} is not set")]
    MissingCredentials(&'static str, &'static str),
}
