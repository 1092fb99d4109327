//! Content sourcing with ordered fallback tiers.
//!
//! Each content kind resolves through a fixed tier order (news service,
//! then AI service, then the static template bank), degrading to the next
//! tier on any failure. The bank is compiled in and non-empty for every
//! kind, so resolution always produces something.

mod ai;
mod news;
mod resolver;
mod templates;

pub use ai::AiClient;
pub use news::NewsClient;
pub use resolver::ContentResolver;
pub use templates::TemplateBank;

use std::collections::HashSet;

use newsroom::models::ContentLength;
use serde::Deserialize;
use thiserror::Error;

/// What a source tier is being asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    IndustryProfiles,
    CategoryVocabulary,
    TagVocabulary,
    ArticleTitles,
    ArticleBody(ContentLength),
    FaqTemplates,
}

impl ContentKind {
    /// Wire identifier sent to the AI service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::IndustryProfiles => "industry-profiles",
            ContentKind::CategoryVocabulary => "category-vocabulary",
            ContentKind::TagVocabulary => "tag-vocabulary",
            ContentKind::ArticleTitles => "article-titles",
            ContentKind::ArticleBody(_) => "article-body",
            ContentKind::FaqTemplates => "faq-templates",
        }
    }
}

/// Request context shared by all tiers.
#[derive(Debug, Clone, Default)]
pub struct ContentContext {
    pub language: String,
    pub brief: Option<String>,
    pub count: usize,
}

/// An article headline with the tags its source attached, if any.
#[derive(Debug, Clone, Deserialize)]
pub struct Headline {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Industry name and descriptive copy.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryProfile {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Question/answer pair for client FAQ seeding.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqSeed {
    pub question: String,
    pub answer: String,
}

/// Payload returned by a tier. The variant always matches the requested
/// [`ContentKind`]; a mismatch is treated as a tier failure by the resolver.
#[derive(Debug, Clone)]
pub enum Payload {
    Headlines(Vec<Headline>),
    Profiles(Vec<IndustryProfile>),
    Terms(Vec<String>),
    Body(String),
    Faqs(Vec<FaqSeed>),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} returned an empty result")]
    Empty(&'static str),
    #[error("missing {0} in environment")]
    MissingCredentials(&'static str),
}

/// Case-insensitive tag collection that preserves first-seen casing.
///
/// Vocabulary arrives from more than one source; "SEO" and "seo" must end
/// up as a single tag, spelled the way it was first seen.
#[derive(Debug, Default)]
pub struct TagSet {
    seen: HashSet<String>,
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, returning whether it was new. Whitespace is trimmed
    /// and blank entries are dropped.
    pub fn insert(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }

        if self.seen.insert(trimmed.to_lowercase()) {
            self.tags.push(trimmed.to_string());
            true
        } else {
            false
        }
    }

    pub fn extend<I>(&mut self, tags: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for tag in tags {
            self.insert(tag.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagset_case_insensitive_dedup() {
        let mut set = TagSet::new();
        set.extend(["SEO", "seo", " SEO "]);

        assert_eq!(set.into_vec(), vec!["SEO".to_string()]);
    }

    #[test]
    fn test_tagset_first_seen_casing_wins() {
        let mut set = TagSet::new();
        set.extend(["content marketing", "Content Marketing", "SaaS"]);

        assert_eq!(
            set.into_vec(),
            vec!["content marketing".to_string(), "SaaS".to_string()]
        );
    }

    #[test]
    fn test_tagset_merges_across_sources() {
        let mut set = TagSet::new();
        set.extend(["Fintech", "growth"]);
        set.extend(["fintech", "Growth", "analytics"]);

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_tagset_drops_blank_entries() {
        let mut set = TagSet::new();
        set.extend(["", "   ", "real"]);

        assert_eq!(set.len(), 1);
    }
}
