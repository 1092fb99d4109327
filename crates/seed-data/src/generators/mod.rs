//! Entity generators for demo data.
//!
//! Generators are pure: they take resolved content, parent ids, and an
//! injected RNG, and return `Generated*` structs ready for persistence.
//! Database access lives in [`crate::db::Seeder`]; keeping the two apart is
//! what makes the graph shape testable without a store.

pub mod article;
pub mod author;
pub mod client;
pub mod engagement;
pub mod extras;
pub mod industry;
pub mod media;
pub mod social;
pub mod taxonomy;

pub use article::{ArticleGenerator, GeneratedArticle, LengthBodies};
pub use author::{GeneratedAuthor, editorial_author};
pub use client::{ClientGenConfig, ClientGenerator, GeneratedClient};
pub use engagement::{
    EngagementGenerator, GeneratedAnalytics, GeneratedCampaignAttribution, GeneratedConversion,
    GeneratedCtaClick, GeneratedEngagementDuration, GeneratedLeadScore, GeneratedLinkClick,
    GeneratedShare, GeneratedView, PublishedArticleRef,
};
pub use extras::{
    GeneratedArticleVersion, GeneratedFaq, GeneratedRelated, GeneratedSettings, GeneratedTier,
    build_faqs, build_related, build_versions, builtin_tiers, default_settings,
};
pub use industry::{GeneratedIndustry, build_industries};
pub use media::{GeneratedArticleMedia, GeneratedMedia};
pub use social::{
    GeneratedClientComment, GeneratedComment, GeneratedInteraction, GeneratedSubscriber,
    SocialGenConfig, SocialGenerator,
};
pub use taxonomy::{CategoryGenerator, GeneratedCategory, GeneratedTag, build_tags};
