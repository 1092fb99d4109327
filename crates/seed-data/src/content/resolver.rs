//! Ordered-tier content resolution.
//!
//! The resolver walks a fixed tier list for every content kind and returns
//! the first success. Remote tier failures are logged and absorbed; the
//! template bank terminates the chain and cannot fail.

use newsroom::models::ContentLength;

use super::{
    AiClient, ContentContext, ContentKind, FaqSeed, Headline, IndustryProfile, NewsClient,
    Payload, SourceError, TagSet, TemplateBank,
};
use crate::events::EventSink;

/// A remote content source in priority order.
enum SourceTier {
    News(NewsClient),
    Ai(AiClient),
}

impl SourceTier {
    fn name(&self) -> &'static str {
        match self {
            SourceTier::News(_) => "news service",
            SourceTier::Ai(_) => "AI service",
        }
    }

    fn supports(&self, kind: ContentKind) -> bool {
        match self {
            SourceTier::News(_) => NewsClient::supports(kind),
            SourceTier::Ai(_) => true,
        }
    }

    async fn fetch(&self, kind: ContentKind, ctx: &ContentContext) -> Result<Payload, SourceError> {
        match self {
            SourceTier::News(client) => client.fetch(kind, ctx).await,
            SourceTier::Ai(client) => client.fetch(kind, ctx).await,
        }
    }
}

/// Resolves content through the enabled tiers, falling back to the bank.
pub struct ContentResolver {
    tiers: Vec<SourceTier>,
    bank: TemplateBank,
    language: String,
    brief: Option<String>,
}

impl ContentResolver {
    pub fn new(
        news: Option<NewsClient>,
        ai: Option<AiClient>,
        language: impl Into<String>,
        brief: Option<String>,
    ) -> Self {
        let mut tiers = Vec::new();
        if let Some(client) = news {
            tiers.push(SourceTier::News(client));
        }
        if let Some(client) = ai {
            tiers.push(SourceTier::Ai(client));
        }

        Self {
            tiers,
            bank: TemplateBank::new(),
            language: language.into(),
            brief,
        }
    }

    /// Bank-only resolver for runs with every external source disabled.
    pub fn offline(language: impl Into<String>) -> Self {
        Self::new(None, None, language, None)
    }

    fn context(&self, count: usize) -> ContentContext {
        ContentContext {
            language: self.language.clone(),
            brief: self.brief.clone(),
            count,
        }
    }

    /// Walks the tier list and returns the first successful payload whose
    /// variant matches the request, ending at the bank.
    async fn resolve(&self, kind: ContentKind, count: usize, sink: &EventSink) -> Payload {
        let ctx = self.context(count);

        for tier in &self.tiers {
            if !tier.supports(kind) {
                continue;
            }
            match tier.fetch(kind, &ctx).await {
                Ok(payload) if payload_matches(kind, &payload) => return payload,
                Ok(_) => {
                    sink.error(format!(
                        "{} returned a mismatched payload for {}; falling back",
                        tier.name(),
                        kind.as_str()
                    ));
                }
                Err(err) => {
                    sink.error(format!(
                        "{} failed for {}: {err}; falling back",
                        tier.name(),
                        kind.as_str()
                    ));
                }
            }
        }

        self.bank.produce(kind, &ctx)
    }

    pub async fn industry_profiles(&self, count: usize, sink: &EventSink) -> Vec<IndustryProfile> {
        match self.resolve(ContentKind::IndustryProfiles, count, sink).await {
            Payload::Profiles(profiles) => profiles,
            _ => self.bank.industry_profiles(count),
        }
    }

    pub async fn category_names(&self, count: usize, sink: &EventSink) -> Vec<String> {
        match self.resolve(ContentKind::CategoryVocabulary, count, sink).await {
            Payload::Terms(terms) => terms,
            _ => self.bank.category_names(count),
        }
    }

    /// Resolves the tag vocabulary. The news tier contributes additively:
    /// its headline tags are merged with whichever of AI/bank wins the
    /// vocabulary request, case-insensitively and first-casing-preserved.
    pub async fn tag_vocabulary(&self, count: usize, sink: &EventSink) -> Vec<String> {
        let ctx = self.context(count);
        let mut tags = TagSet::new();

        for tier in &self.tiers {
            if let SourceTier::News(client) = tier {
                match client.fetch(ContentKind::TagVocabulary, &ctx).await {
                    Ok(Payload::Terms(terms)) => tags.extend(terms),
                    Ok(_) => {}
                    Err(err) => {
                        sink.error(format!("news service failed for tag vocabulary: {err}"));
                    }
                }
            }
        }

        let vocabulary = match self.ai_tier() {
            Some(tier) => match tier.fetch(ContentKind::TagVocabulary, &ctx).await {
                Ok(Payload::Terms(terms)) => terms,
                Ok(_) => self.bank.tag_vocabulary(count),
                Err(err) => {
                    sink.error(format!("AI service failed for tag vocabulary: {err}"));
                    self.bank.tag_vocabulary(count)
                }
            },
            None => self.bank.tag_vocabulary(count),
        };
        tags.extend(vocabulary);

        tags.into_vec()
    }

    pub async fn article_titles(&self, count: usize, sink: &EventSink) -> Vec<Headline> {
        match self.resolve(ContentKind::ArticleTitles, count, sink).await {
            Payload::Headlines(headlines) => headlines,
            _ => self.bank.article_titles(count),
        }
    }

    pub async fn article_body(&self, length: ContentLength, sink: &EventSink) -> String {
        match self.resolve(ContentKind::ArticleBody(length), 1, sink).await {
            Payload::Body(body) => body,
            _ => self.bank.article_body(length),
        }
    }

    pub async fn faq_templates(&self, count: usize, sink: &EventSink) -> Vec<FaqSeed> {
        match self.resolve(ContentKind::FaqTemplates, count, sink).await {
            Payload::Faqs(faqs) => faqs,
            _ => self.bank.faq_templates(count),
        }
    }

    fn ai_tier(&self) -> Option<&SourceTier> {
        self.tiers
            .iter()
            .find(|tier| matches!(tier, SourceTier::Ai(_)))
    }
}

fn payload_matches(kind: ContentKind, payload: &Payload) -> bool {
    matches!(
        (kind, payload),
        (ContentKind::IndustryProfiles, Payload::Profiles(_))
            | (ContentKind::CategoryVocabulary, Payload::Terms(_))
            | (ContentKind::TagVocabulary, Payload::Terms(_))
            | (ContentKind::ArticleTitles, Payload::Headlines(_))
            | (ContentKind::ArticleBody(_), Payload::Body(_))
            | (ContentKind::FaqTemplates, Payload::Faqs(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolver whose remote tiers point at a port nothing listens on, so
    /// every remote call fails fast with a connection error.
    fn failing_resolver() -> ContentResolver {
        ContentResolver::new(
            Some(NewsClient::new("http://127.0.0.1:1", "k")),
            Some(AiClient::new("http://127.0.0.1:1", "k")),
            "en",
            None,
        )
    }

    #[tokio::test]
    async fn test_offline_resolver_uses_bank() {
        let resolver = ContentResolver::offline("en");
        let sink = EventSink::disabled();

        let titles = resolver.article_titles(10, &sink).await;
        assert_eq!(titles.len(), 10);

        let body = resolver.article_body(ContentLength::Medium, &sink).await;
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn test_failing_tiers_fall_back_to_bank() {
        let resolver = failing_resolver();
        let (sink, mut rx) = EventSink::channel();

        let profiles = resolver.industry_profiles(4, &sink).await;
        assert_eq!(profiles.len(), 4);

        // The failed AI call must have been reported, not swallowed silently
        let event = rx.try_recv().expect("expected a failure event");
        assert_eq!(event.level, crate::events::LogLevel::Error);
    }

    #[tokio::test]
    async fn test_tag_vocabulary_survives_total_failure() {
        let resolver = failing_resolver();
        let (sink, mut rx) = EventSink::channel();

        let tags = resolver.tag_vocabulary(12, &sink).await;
        assert!(!tags.is_empty());

        // One failure event per remote tier
        let mut failures = 0;
        while rx.try_recv().is_ok() {
            failures += 1;
        }
        assert_eq!(failures, 2);
    }

    #[tokio::test]
    async fn test_tag_vocabulary_is_deduplicated() {
        let resolver = ContentResolver::offline("en");
        let sink = EventSink::disabled();

        let tags = resolver.tag_vocabulary(60, &sink).await;
        let lowered: std::collections::HashSet<String> =
            tags.iter().map(|t| t.to_lowercase()).collect();
        assert_eq!(lowered.len(), tags.len());
    }
}
