use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fixed identifiers for singleton and built-in rows.
///
/// These are natural keys, not surrogate ids: upserts key on them so that
/// repeated seeding (or a redeploy) updates rows in place instead of
/// multiplying them.
pub mod builtin {
    /// Natural key of the editorial author singleton.
    pub const AUTHOR_EMAIL: &str = "editorial@newsroom.dev";

    /// Natural key of the site settings singleton.
    pub const SETTINGS_KEY: &str = "default";

    /// Slugs of the built-in subscription tiers, cheapest first.
    pub const TIER_SLUGS: [&str; 3] = ["starter", "growth", "enterprise"];
}

/// Publication state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Published,
    Draft,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Published => "published",
            ArticleStatus::Draft => "draft",
        }
    }
}

/// Length class assigned to an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

impl ContentLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        }
    }
}

/// Role a media asset plays for its owning entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Logo,
    OgImage,
    TwitterImage,
    PostImage,
    Gallery,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Logo => "logo",
            MediaKind::OgImage => "og_image",
            MediaKind::TwitterImage => "twitter_image",
            MediaKind::PostImage => "post_image",
            MediaKind::Gallery => "gallery",
        }
    }
}

/// Reaction recorded against an article, client, or comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Dislike,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Like => "like",
            InteractionKind::Dislike => "dislike",
        }
    }
}

/// Channel an article share went out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareChannel {
    Linkedin,
    Facebook,
    Twitter,
    Email,
    Link,
}

impl ShareChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareChannel::Linkedin => "linkedin",
            ShareChannel::Facebook => "facebook",
            ShareChannel::Twitter => "twitter",
            ShareChannel::Email => "email",
            ShareChannel::Link => "link",
        }
    }

    /// All channels, in display order.
    pub const ALL: [ShareChannel; 5] = [
        ShareChannel::Linkedin,
        ShareChannel::Facebook,
        ShareChannel::Twitter,
        ShareChannel::Email,
        ShareChannel::Link,
    ];
}

/// Minimal client projection used when reusing rows from an existing store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientSummary {
    pub id: Uuid,
    pub slug: String,
    pub legal_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_labels() {
        assert_eq!(ArticleStatus::Published.as_str(), "published");
        assert_eq!(ArticleStatus::Draft.as_str(), "draft");
    }

    #[test]
    fn test_media_kind_labels_are_snake_case() {
        for kind in [
            MediaKind::Logo,
            MediaKind::OgImage,
            MediaKind::TwitterImage,
            MediaKind::PostImage,
            MediaKind::Gallery,
        ] {
            let label = kind.as_str();
            assert!(!label.is_empty());
            assert!(label.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn test_builtin_tier_slugs_are_unique() {
        let unique: std::collections::HashSet<_> = builtin::TIER_SLUGS.iter().collect();
        assert_eq!(unique.len(), builtin::TIER_SLUGS.len());
    }
}
