//! Configuration for seeding runs.

use newsroom::models::{ArticleStatus, ContentLength};
use serde::{Deserialize, Serialize};

/// Which subset of the pipeline a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPhase {
    /// Seed tiers, industries, clients, and the author singleton, then stop.
    ClientsOnly,
    /// Seed the complete content graph.
    Full,
}

impl std::str::FromStr for SeedPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clients-only" | "clients_only" | "clients" => Ok(SeedPhase::ClientsOnly),
            "full" => Ok(SeedPhase::Full),
            other => Err(format!("unknown phase '{other}' (expected clients-only or full)")),
        }
    }
}

/// Options for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOptions {
    /// Requested article count. Drives proportional scaling of every
    /// related-record range.
    pub article_total: usize,

    /// Explicit client count; falls back to [`DEFAULT_CLIENT_COUNT`].
    pub client_count: Option<usize>,

    /// Free-text domain brief used to bias externally sourced content.
    pub brief: Option<String>,

    /// Query the news aggregation service for titles and tag vocabulary.
    pub use_news: bool,

    /// Query the AI copy service for descriptions, vocabularies, and bodies.
    pub use_ai: bool,

    /// Upload real images through the asset service instead of placeholders.
    pub use_media: bool,

    /// Delete previously seeded data before creating anything.
    pub reset: bool,

    /// Pipeline subset to execute.
    pub phase: SeedPhase,

    /// Fixed RNG seed for reproducible output; entropy-seeded when absent.
    pub rng_seed: Option<u64>,

    /// Language code passed to external content sources.
    pub language: String,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            article_total: 20,
            client_count: None,
            brief: None,
            use_news: false,
            use_ai: false,
            use_media: false,
            reset: false,
            phase: SeedPhase::Full,
            rng_seed: None,
            language: "en".to_string(),
        }
    }
}

/// Published/draft split applied to the requested article total.
pub const STATUS_WEIGHTS: [(ArticleStatus, f64); 2] = [
    (ArticleStatus::Published, 0.6),
    (ArticleStatus::Draft, 0.4),
];

/// Short/medium/long split applied to the requested article total.
pub const LENGTH_WEIGHTS: [(ContentLength, f64); 3] = [
    (ContentLength::Short, 0.3),
    (ContentLength::Medium, 0.4),
    (ContentLength::Long, 0.3),
];

/// Clients created when no explicit count is given.
pub const DEFAULT_CLIENT_COUNT: usize = 5;

/// Upper bound on clients reused from an existing store in the full phase.
pub const CLIENT_SAMPLE_CAP: usize = 25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_parsing() {
        assert_eq!("full".parse::<SeedPhase>(), Ok(SeedPhase::Full));
        assert_eq!("clients-only".parse::<SeedPhase>(), Ok(SeedPhase::ClientsOnly));
        assert!("everything".parse::<SeedPhase>().is_err());
    }

    #[test]
    fn test_weights_sum_to_one() {
        let status: f64 = STATUS_WEIGHTS.iter().map(|(_, w)| w).sum();
        let length: f64 = LENGTH_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((status - 1.0).abs() < f64::EPSILON);
        assert!((length - 1.0).abs() < f64::EPSILON);
    }
}
