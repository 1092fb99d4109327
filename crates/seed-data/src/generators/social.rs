//! Comments, client comments, subscribers, and interaction rows.

use fake::Fake;
use fake::faker::name::en::Name;
use newsroom::models::InteractionKind;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::distribution::ScaledRange;
use crate::generators::engagement::PublishedArticleRef;

/// Generated article comment. Threading is one level deep: a reply's
/// parent is always a root comment generated earlier for the same article.
#[derive(Debug, Clone)]
pub struct GeneratedComment {
    pub id: Uuid,
    pub article_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_name: String,
    pub author_email: String,
    pub body: String,
    pub created_at: OffsetDateTime,
}

/// Generated client testimonial/comment, same one-level threading rule.
#[derive(Debug, Clone)]
pub struct GeneratedClientComment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_name: String,
    pub body: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GeneratedSubscriber {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub source: String,
    pub subscribed_at: OffsetDateTime,
}

/// Reaction row; the pipeline decides which table it lands in.
#[derive(Debug, Clone)]
pub struct GeneratedInteraction {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub kind: InteractionKind,
    pub occurred_at: OffsetDateTime,
}

/// Configuration for social record generation.
#[derive(Debug, Clone)]
pub struct SocialGenConfig {
    /// Average comments per published article (Poisson mean).
    pub avg_comments_per_article: f64,
    /// Probability that a comment replies to an earlier root comment.
    pub reply_probability: f64,
    /// Fraction of interactions that are likes rather than dislikes.
    pub like_ratio: f64,
}

impl Default for SocialGenConfig {
    fn default() -> Self {
        Self {
            avg_comments_per_article: 2.5,
            reply_probability: 0.3,
            like_ratio: 0.85,
        }
    }
}

const COMMENT_TEMPLATES: &[&str] = &[
    "Great breakdown, sharing this with my team.",
    "We tried this last quarter and saw similar numbers.",
    "Would love a follow-up on how this applies to smaller teams.",
    "The measurement section alone was worth the read.",
    "Bookmarked. This is the clearest take I've seen on the topic.",
    "Curious how this holds up in regulated industries.",
    "Solid framework, we're adopting part of it already.",
    "This matches what we're seeing in our own funnel.",
    "Any data on how long these results take to materialize?",
    "Finally an article that talks about distribution honestly.",
];

const REPLY_TEMPLATES: &[&str] = &[
    "Thanks, glad it was useful!",
    "Good question — planning a follow-up piece on exactly that.",
    "Same here, the first quarter is the hardest.",
    "Agreed, context matters a lot for this one.",
    "Appreciate you sharing your numbers.",
];

const SUBSCRIBER_SOURCES: &[&str] = &["footer_form", "article_inline", "webinar", "import"];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "outlook.com", "yahoo.com", "proton.me"];

/// Generates social records.
pub struct SocialGenerator {
    config: SocialGenConfig,
    now: OffsetDateTime,
}

impl SocialGenerator {
    pub fn new() -> Self {
        Self::with_config(SocialGenConfig::default())
    }

    pub fn with_config(config: SocialGenConfig) -> Self {
        Self {
            config,
            now: OffsetDateTime::now_utc(),
        }
    }

    /// Generates comments for published articles. Roots come first per
    /// article, so inserting in order never references a missing parent.
    pub fn comments(
        &self,
        published: &[PublishedArticleRef],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedComment> {
        let mut comments = Vec::new();

        for article in published {
            let count = self.poisson_count(self.config.avg_comments_per_article, rng);
            let mut root_ids: Vec<Uuid> = Vec::new();

            for _ in 0..count {
                let parent_id = if !root_ids.is_empty()
                    && rng.r#gen::<f64>() < self.config.reply_probability
                {
                    Some(root_ids[rng.gen_range(0..root_ids.len())])
                } else {
                    None
                };

                let name: String = Name().fake_with_rng(rng);
                let id = Uuid::new_v4();
                if parent_id.is_none() {
                    root_ids.push(id);
                }

                comments.push(GeneratedComment {
                    id,
                    article_id: article.article_id,
                    parent_id,
                    author_email: email_for(&name, rng),
                    author_name: name,
                    body: comment_text(parent_id.is_some(), rng),
                    created_at: event_after(article.published_at, self.now, rng),
                });
            }
        }

        comments
    }

    /// Generates client comments with the same one-level threading rule.
    pub fn client_comments(
        &self,
        client_ids: &[Uuid],
        per_client: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedClientComment> {
        let mut comments = Vec::new();

        for &client_id in client_ids {
            let mut root_ids: Vec<Uuid> = Vec::new();

            for _ in 0..per_client.sample(rng) {
                let parent_id = if !root_ids.is_empty()
                    && rng.r#gen::<f64>() < self.config.reply_probability
                {
                    Some(root_ids[rng.gen_range(0..root_ids.len())])
                } else {
                    None
                };

                let name: String = Name().fake_with_rng(rng);
                let id = Uuid::new_v4();
                if parent_id.is_none() {
                    root_ids.push(id);
                }

                comments.push(GeneratedClientComment {
                    id,
                    client_id,
                    parent_id,
                    author_name: name,
                    body: comment_text(parent_id.is_some(), rng),
                    created_at: self.now - Duration::days(rng.gen_range(0..365)),
                });
            }
        }

        comments
    }

    pub fn subscribers(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedSubscriber> {
        (0..count)
            .map(|_| {
                let name: String = Name().fake_with_rng(rng);
                GeneratedSubscriber {
                    id: Uuid::new_v4(),
                    email: email_for(&name, rng),
                    name,
                    source: SUBSCRIBER_SOURCES[rng.gen_range(0..SUBSCRIBER_SOURCES.len())]
                        .to_string(),
                    subscribed_at: self.now - Duration::days(rng.gen_range(0..365)),
                }
            })
            .collect()
    }

    /// Like/dislike rows for arbitrary subjects (articles, clients, or
    /// comments).
    pub fn interactions(
        &self,
        subject_ids: &[Uuid],
        per_subject: ScaledRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedInteraction> {
        let mut interactions = Vec::new();

        for &subject_id in subject_ids {
            for _ in 0..per_subject.sample(rng) {
                let kind = if rng.r#gen::<f64>() < self.config.like_ratio {
                    InteractionKind::Like
                } else {
                    InteractionKind::Dislike
                };
                interactions.push(GeneratedInteraction {
                    id: Uuid::new_v4(),
                    subject_id,
                    kind,
                    occurred_at: self.now - Duration::days(rng.gen_range(0..180)),
                });
            }
        }

        interactions
    }

    fn poisson_count(&self, mean: f64, rng: &mut impl Rng) -> usize {
        if mean <= 0.0 {
            return 0;
        }
        match Poisson::new(mean) {
            Ok(dist) => dist.sample(rng) as usize,
            Err(_) => 0,
        }
    }
}

impl Default for SocialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn comment_text(is_reply: bool, rng: &mut impl Rng) -> String {
    let pool = if is_reply { REPLY_TEMPLATES } else { COMMENT_TEMPLATES };
    pool[rng.gen_range(0..pool.len())].to_string()
}

/// Builds an email from a display name: lowercase, dot-joined, numeric
/// suffix, common free-mail domain.
fn email_for(name: &str, rng: &mut impl Rng) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");

    let suffix: u32 = rng.gen_range(1..9999);
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];

    format!("{normalized}{suffix}@{domain}")
}

fn event_after(
    published_at: OffsetDateTime,
    now: OffsetDateTime,
    rng: &mut impl Rng,
) -> OffsetDateTime {
    (published_at + Duration::minutes(rng.gen_range(30..20_160))).min(now)
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
                published_at: now - Duration::days(30 + i as i64),
            })
            .collect()
    }

    #[test]
    fn test_replies_are_one_level_deep() {
        let mut rng = StdRng::seed_from_u64(77);
        let generator = SocialGenerator::with_config(SocialGenConfig {
            avg_comments_per_article: 6.0,
            reply_probability: 0.6,
            ..Default::default()
        });

        let comments = generator.comments(&published(5), &mut rng);
        assert!(!comments.is_empty());

        for comment in &comments {
            if let Some(parent_id) = comment.parent_id {
                let parent = comments.iter().find(|c| c.id == parent_id).unwrap();
                assert!(parent.parent_id.is_none(), "reply to a reply");
                assert_eq!(parent.article_id, comment.article_id);
            }
        }
    }

    #[test]
    fn test_parents_precede_replies_in_output() {
        let mut rng = StdRng::seed_from_u64(31);
        let generator = SocialGenerator::with_config(SocialGenConfig {
            avg_comments_per_article: 5.0,
            reply_probability: 0.5,
            ..Default::default()
        });

        let comments = generator.comments(&published(4), &mut rng);
        for (idx, comment) in comments.iter().enumerate() {
            if let Some(parent_id) = comment.parent_id {
                let parent_idx = comments.iter().position(|c| c.id == parent_id);
                assert!(parent_idx.is_some_and(|p| p < idx));
            }
        }
    }

    #[test]
    fn test_subscriber_emails_look_valid() {
        let mut rng = StdRng::seed_from_u64(12);
        let subscribers = SocialGenerator::new().subscribers(20, &mut rng);

        assert_eq!(subscribers.len(), 20);
        for subscriber in &subscribers {
            assert!(subscriber.email.contains('@'));
            assert!(!subscriber.name.is_empty());
        }
    }

    #[test]
    fn test_interactions_respect_like_ratio_extremes() {
        let mut rng = StdRng::seed_from_u64(6);
        let subjects: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();

        let all_likes = SocialGenerator::with_config(SocialGenConfig {
            like_ratio: 1.0,
            ..Default::default()
        })
        .interactions(&subjects, ScaledRange { min: 2, max: 4 }, &mut rng);

        assert!(all_likes.iter().all(|i| i.kind == InteractionKind::Like));
    }
}
