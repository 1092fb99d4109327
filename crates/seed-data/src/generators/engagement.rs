//! Engagement and tracking record generation.
//!
//! Everything here attaches to a published article or a client; drafts get
//! no engagement. Per-article counts come from the proportional ranges the
//! pipeline computes, with Poisson sampling where a long-tailed count is
//! more realistic than a uniform one.

use newsroom::models::ShareChannel;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::distribution::ScaledRange;

/// A published article and the context its engagement hangs off.
#[derive(Debug, Clone, Copy)]
pub struct PublishedArticleRef {
    pub article_id: Uuid,
    pub client_id: Uuid,
    pub published_at: OffsetDateTime,
}

/// Aggregate counters, one row per published article.
#[derive(Debug, Clone)]
pub struct GeneratedAnalytics {
    pub id: Uuid,
    pub article_id: Uuid,
    pub views: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub shares: i64,
}

/// A single recorded view.
#[derive(Debug, Clone)]
pub struct GeneratedView {
    pub id: Uuid,
    pub article_id: Uuid,
    pub session_id: Uuid,
    pub referrer: Option<String>,
    pub viewed_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedShare {
    pub id: Uuid,
    pub article_id: Uuid,
    pub channel: ShareChannel,
    pub shared_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedConversion {
    pub id: Uuid,
    pub article_id: Option<Uuid>,
    pub client_id: Uuid,
    pub kind: String,
    pub value_cents: i64,
    pub converted_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedCtaClick {
    pub id: Uuid,
    pub article_id: Uuid,
    pub label: String,
    pub clicked_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedCampaignAttribution {
    pub id: Uuid,
    pub article_id: Uuid,
    pub campaign: String,
    pub source: String,
    pub medium: String,
    pub attributed_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedLeadScore {
    pub id: Uuid,
    pub client_id: Uuid,
    pub article_id: Option<Uuid>,
    pub score: i32,
    pub captured_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedEngagementDuration {
    pub id: Uuid,
    pub article_id: Uuid,
    pub seconds: i32,
    pub sampled_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedLinkClick {
    pub id: Uuid,
    pub article_id: Uuid,
    pub target_url: String,
    pub clicked_at: OffsetDateTime,
}

const REFERRERS: &[&str] = &[
    "https://www.google.com/",
    "https://www.linkedin.com/",
    "https://news.ycombinator.com/",
    "https://twitter.com/",
    "https://duckduckgo.com/",
];

const CONVERSION_KINDS: &[&str] = &["newsletter", "demo_request", "contact", "download"];

const CTA_LABELS: &[&str] = &[
    "Book a demo",
    "Download the report",
    "Subscribe to updates",
    "Talk to sales",
    "Start free trial",
];

const CAMPAIGNS: &[(&str, &str, &str)] = &[
    ("q3-awareness", "linkedin", "paid_social"),
    ("evergreen-search", "google", "organic"),
    ("newsletter-weekly", "newsletter", "email"),
    ("partner-syndication", "partner", "referral"),
    ("retargeting-spring", "display", "paid"),
];

const LINK_TARGETS: &[&str] = &[
    "https://example.com/pricing",
    "https://example.com/case-studies",
    "https://example.com/resources/report.pdf",
    "https://example.com/contact",
];

/// Generates engagement families for published articles and clients.
pub struct EngagementGenerator {
    now: OffsetDateTime,
}

impl EngagementGenerator {
    pub fn new() -> Self {
        Self {
            now: OffsetDateTime::now_utc(),
        }
    }

    /// Aggregate counters per published article. Reaction counts derive
    /// from the sampled view count so the numbers stay plausible together.
    pub fn analytics(
        &self,
        published: &[PublishedArticleRef],
        views_range: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedAnalytics> {
        published
            .iter()
            .map(|article| {
                let views = views_range.sample(rng) as i64;
                let likes = poisson_count(views as f64 * 0.06, rng);
                let dislikes = poisson_count(views as f64 * 0.008, rng);
                let shares = poisson_count(views as f64 * 0.02, rng);
                GeneratedAnalytics {
                    id: Uuid::new_v4(),
                    article_id: article.article_id,
                    views,
                    likes,
                    dislikes,
                    shares,
                }
            })
            .collect()
    }

    /// Individual view rows per published article.
    pub fn views(
        &self,
        published: &[PublishedArticleRef],
        per_article: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedView> {
        let mut views = Vec::new();
        for article in published {
            for _ in 0..per_article.sample(rng) {
                views.push(GeneratedView {
                    id: Uuid::new_v4(),
                    article_id: article.article_id,
                    session_id: Uuid::new_v4(),
                    referrer: if rng.r#gen::<f64>() < 0.7 {
                        Some(pick(REFERRERS, rng).to_string())
                    } else {
                        None
                    },
                    viewed_at: self.event_time(article.published_at, rng),
                });
            }
        }
        views
    }

    pub fn shares(
        &self,
        published: &[PublishedArticleRef],
        per_article: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedShare> {
        let mut shares = Vec::new();
        for article in published {
            for _ in 0..per_article.sample(rng) {
                shares.push(GeneratedShare {
                    id: Uuid::new_v4(),
                    article_id: article.article_id,
                    channel: ShareChannel::ALL[rng.gen_range(0..ShareChannel::ALL.len())],
                    shared_at: self.event_time(article.published_at, rng),
                });
            }
        }
        shares
    }

    pub fn conversions(
        &self,
        published: &[PublishedArticleRef],
        per_article: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedConversion> {
        let mut conversions = Vec::new();
        for article in published {
            for _ in 0..per_article.sample(rng) {
                conversions.push(GeneratedConversion {
                    id: Uuid::new_v4(),
                    article_id: Some(article.article_id),
                    client_id: article.client_id,
                    kind: pick(CONVERSION_KINDS, rng).to_string(),
                    value_cents: i64::from(rng.gen_range(500..50_000)),
                    converted_at: self.event_time(article.published_at, rng),
                });
            }
        }
        conversions
    }

    pub fn cta_clicks(
        &self,
        published: &[PublishedArticleRef],
        per_article: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCtaClick> {
        let mut clicks = Vec::new();
        for article in published {
            for _ in 0..per_article.sample(rng) {
                clicks.push(GeneratedCtaClick {
                    id: Uuid::new_v4(),
                    article_id: article.article_id,
                    label: pick(CTA_LABELS, rng).to_string(),
                    clicked_at: self.event_time(article.published_at, rng),
                });
            }
        }
        clicks
    }

    pub fn campaign_attributions(
        &self,
        published: &[PublishedArticleRef],
        per_article: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCampaignAttribution> {
        let mut attributions = Vec::new();
        for article in published {
            for _ in 0..per_article.sample(rng) {
                let (campaign, source, medium) = pick(CAMPAIGNS, rng);
                attributions.push(GeneratedCampaignAttribution {
                    id: Uuid::new_v4(),
                    article_id: article.article_id,
                    campaign: (*campaign).to_string(),
                    source: (*source).to_string(),
                    medium: (*medium).to_string(),
                    attributed_at: self.event_time(article.published_at, rng),
                });
            }
        }
        attributions
    }

    /// Lead-scoring snapshots per client, optionally attributed to one of
    /// the client's published articles.
    pub fn lead_scores(
        &self,
        client_ids: &[Uuid],
        published: &[PublishedArticleRef],
        per_client: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedLeadScore> {
        let mut scores = Vec::new();
        for &client_id in client_ids {
            let client_articles: Vec<&PublishedArticleRef> = published
                .iter()
                .filter(|a| a.client_id == client_id)
                .collect();

            for _ in 0..per_client.sample(rng) {
                let article_id = if !client_articles.is_empty() && rng.r#gen::<f64>() < 0.6 {
                    Some(client_articles[rng.gen_range(0..client_articles.len())].article_id)
                } else {
                    None
                };
                scores.push(GeneratedLeadScore {
                    id: Uuid::new_v4(),
                    client_id,
                    article_id,
                    score: rng.gen_range(1..=100),
                    captured_at: self.now - Duration::days(rng.gen_range(0..180)),
                });
            }
        }
        scores
    }

    pub fn engagement_durations(
        &self,
        published: &[PublishedArticleRef],
        per_article: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedEngagementDuration> {
        let mut durations = Vec::new();
        for article in published {
            for _ in 0..per_article.sample(rng) {
                durations.push(GeneratedEngagementDuration {
                    id: Uuid::new_v4(),
                    article_id: article.article_id,
                    seconds: poisson_count(150.0, rng).max(5) as i32,
                    sampled_at: self.event_time(article.published_at, rng),
                });
            }
        }
        durations
    }

    pub fn link_clicks(
        &self,
        published: &[PublishedArticleRef],
        per_article: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedLinkClick> {
        let mut clicks = Vec::new();
        for article in published {
            for _ in 0..per_article.sample(rng) {
                clicks.push(GeneratedLinkClick {
                    id: Uuid::new_v4(),
                    article_id: article.article_id,
                    target_url: pick(LINK_TARGETS, rng).to_string(),
                    clicked_at: self.event_time(article.published_at, rng),
                });
            }
        }
        clicks
    }

    /// A timestamp after publication, capped at now.
    fn event_time(&self, published_at: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
        let offset = Duration::minutes(rng.gen_range(5..43_200));
        (published_at + offset).min(self.now)
    }
}

impl Default for EngagementGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Poisson sample floored at zero; a zero mean yields zero.
fn poisson_count(mean: f64, rng: &mut impl Rng) -> i64 {
    if mean <= 0.0 {
        return 0;
    }
    match Poisson::new(mean) {
        Ok(dist) => dist.sample(rng) as i64,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn published(n: usize) -> Vec<PublishedArticleRef> {
        let now = OffsetDateTime::now_utc();
        (0..n)
            .map(|i| PublishedArticleRef {
                article_id: Uuid::new_v4(),
                client_id: Uuid::new_v4(),
                published_at: now - Duration::days(i as i64 + 1),
            })
            .collect()
    }

    #[test]
    fn test_event_times_never_precede_publication() {
        let mut rng = StdRng::seed_from_u64(4);
        let articles = published(5);
        let generator = EngagementGenerator::new();

        let views = generator.views(&articles, ScaledRange { min: 3, max: 8 }, &mut rng);
        for view in &views {
            let article = articles
                .iter()
                .find(|a| a.article_id == view.article_id)
                .unwrap();
            assert!(view.viewed_at >= article.published_at);
            assert!(view.viewed_at <= generator.now);
        }
    }

    #[test]
    fn test_only_given_articles_receive_engagement() {
        let mut rng = StdRng::seed_from_u64(8);
        let articles = published(3);
        let generator = EngagementGenerator::new();

        let shares = generator.shares(&articles, ScaledRange { min: 1, max: 2 }, &mut rng);
        let known: std::collections::HashSet<Uuid> =
            articles.iter().map(|a| a.article_id).collect();
        assert!(shares.iter().all(|s| known.contains(&s.article_id)));
        assert!(!shares.is_empty());
    }

    #[test]
    fn test_analytics_counts_are_consistent() {
        let mut rng = StdRng::seed_from_u64(15);
        let articles = published(10);
        let generator = EngagementGenerator::new();

        let analytics =
            generator.analytics(&articles, ScaledRange { min: 50, max: 200 }, &mut rng);
        assert_eq!(analytics.len(), 10);
        for row in &analytics {
            assert!(row.views >= 50 && row.views <= 200);
            assert!(row.likes >= 0 && row.dislikes >= 0 && row.shares >= 0);
        }
    }

    #[test]
    fn test_lead_scores_attach_to_clients() {
        let mut rng = StdRng::seed_from_u64(23);
        let articles = published(4);
        let clients: Vec<Uuid> = articles.iter().map(|a| a.client_id).collect();
        let generator = EngagementGenerator::new();

        let scores =
            generator.lead_scores(&clients, &articles, ScaledRange { min: 1, max: 3 }, &mut rng);
        assert!(scores.len() >= clients.len());
        for score in &scores {
            assert!(clients.contains(&score.client_id));
            assert!(score.score >= 1 && score.score <= 100);
        }
    }

    #[test]
    fn test_no_published_articles_means_no_engagement() {
        let mut rng = StdRng::seed_from_u64(2);
        let generator = EngagementGenerator::new();

        assert!(generator.views(&[], ScaledRange { min: 1, max: 5 }, &mut rng).is_empty());
        assert!(generator.shares(&[], ScaledRange { min: 1, max: 5 }, &mut rng).is_empty());
    }
}
