//! Tier configuration, FAQs, settings, versions, and related articles.

use std::collections::HashSet;

use newsroom::models::builtin;
use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::content::FaqSeed;
use crate::distribution::ScaledRange;

/// Subscription tier row; upserted by slug.
#[derive(Debug, Clone)]
pub struct GeneratedTier {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub monthly_price_cents: i64,
    pub article_quota: i32,
}

/// The built-in tier ladder. Slugs are fixed natural keys so re-seeding
/// updates prices in place.
pub fn builtin_tiers() -> Vec<GeneratedTier> {
    let specs: [(&str, i64, i32); 3] = [
        ("Starter", 49_900, 4),
        ("Growth", 149_900, 12),
        ("Enterprise", 499_900, 40),
    ];

    builtin::TIER_SLUGS
        .iter()
        .zip(specs)
        .map(|(slug, (name, price, quota))| GeneratedTier {
            id: Uuid::new_v4(),
            slug: (*slug).to_string(),
            name: name.to_string(),
            monthly_price_cents: price,
            article_quota: quota,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct GeneratedFaq {
    pub id: Uuid,
    pub client_id: Uuid,
    pub question: String,
    pub answer: String,
    pub position: i32,
}

/// Builds per-client FAQ entries from resolved templates.
pub fn build_faqs(
    client_ids: &[Uuid],
    templates: &[FaqSeed],
    per_client: ScaledRange,
    rng: &mut impl Rng,
) -> Vec<GeneratedFaq> {
    if templates.is_empty() {
        return Vec::new();
    }

    let mut faqs = Vec::new();
    for &client_id in client_ids {
        let count = per_client.sample(rng).min(templates.len());
        let mut order: Vec<usize> = (0..templates.len()).collect();
        order.shuffle(rng);

        for (position, &template_idx) in order.iter().take(count).enumerate() {
            let template = &templates[template_idx];
            faqs.push(GeneratedFaq {
                id: Uuid::new_v4(),
                client_id,
                question: template.question.clone(),
                answer: template.answer.clone(),
                position: position as i32,
            });
        }
    }
    faqs
}

/// The site settings singleton; upserted by its fixed key.
#[derive(Debug, Clone)]
pub struct GeneratedSettings {
    pub key: String,
    pub site_title: String,
    pub tagline: String,
    pub contact_email: String,
    pub footer_text: String,
}

pub fn default_settings() -> GeneratedSettings {
    GeneratedSettings {
        key: builtin::SETTINGS_KEY.to_string(),
        site_title: "Newsroom".to_string(),
        tagline: "Content that moves pipeline".to_string(),
        contact_email: "hello@newsroom.dev".to_string(),
        footer_text: "© Newsroom. All rights reserved.".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedArticleVersion {
    pub id: Uuid,
    pub article_id: Uuid,
    pub version: i32,
    pub title: String,
    pub body_snapshot: String,
    pub created_at: OffsetDateTime,
}

/// Builds ascending revision snapshots per article.
pub fn build_versions(
    articles: &[(Uuid, String)],
    per_article: ScaledRange,
    rng: &mut impl Rng,
) -> Vec<GeneratedArticleVersion> {
    let now = OffsetDateTime::now_utc();
    let mut versions = Vec::new();

    for (article_id, title) in articles {
        let count = per_article.sample(rng).max(1);
        for version in 1..=count {
            versions.push(GeneratedArticleVersion {
                id: Uuid::new_v4(),
                article_id: *article_id,
                version: version as i32,
                title: if version == count {
                    title.clone()
                } else {
                    format!("{title} (draft {version})")
                },
                body_snapshot: format!("Revision {version} of \"{title}\"."),
                created_at: now - Duration::days((count - version) as i64 * 3),
            });
        }
    }
    versions
}

/// Self-join row relating two articles in the same category.
#[derive(Debug, Clone)]
pub struct GeneratedRelated {
    pub article_id: Uuid,
    pub related_article_id: Uuid,
    pub position: i32,
}

/// Builds related-article links scoped to the article's own category.
/// Self-links and duplicate pairs are skipped.
pub fn build_related(
    articles: &[(Uuid, Uuid)],
    per_article: ScaledRange,
    rng: &mut impl Rng,
) -> Vec<GeneratedRelated> {
    let mut related = Vec::new();
    let mut seen: HashSet<(Uuid, Uuid)> = HashSet::new();

    for &(article_id, category_id) in articles {
        let candidates: Vec<Uuid> = articles
            .iter()
            .filter(|(other_id, other_category)| {
                *other_id != article_id && *other_category == category_id
            })
            .map(|(other_id, _)| *other_id)
            .collect();

        if candidates.is_empty() {
            continue;
        }

        let count = per_article.sample(rng).min(candidates.len());
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.shuffle(rng);

        for (position, &candidate_idx) in order.iter().take(count).enumerate() {
            let related_id = candidates[candidate_idx];
            if seen.insert((article_id, related_id)) {
                related.push(GeneratedRelated {
                    article_id,
                    related_article_id: related_id,
                    position: position as i32,
                });
            }
        }
    }
    related
}
