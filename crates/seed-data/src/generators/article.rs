//! Article generation.
//!
//! Status and length classes are assigned by the weighted splitter so the
//! bucket sums always match the requested total exactly; the shuffle inside
//! the splitter removes any positional bias between titles and buckets.

use std::collections::HashSet;

use newsroom::models::{ArticleStatus, ContentLength};
use newsroom::slugify;
use rand::Rng;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::config::{LENGTH_WEIGHTS, STATUS_WEIGHTS};
use crate::content::Headline;
use crate::distribution::split_weighted;

/// Minutes in the 12-month window published timestamps are sampled from.
const PUBLISH_WINDOW_MINUTES: i64 = 365 * 24 * 60;

/// Generated article row ready for upsert.
#[derive(Debug, Clone)]
pub struct GeneratedArticle {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub status: ArticleStatus,
    pub length: ContentLength,
    pub client_id: Uuid,
    pub category_id: Uuid,
    pub author_id: Uuid,
    /// Set only for published articles, uniform over the last 12 months.
    pub published_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// Resolved body copy per length class.
#[derive(Debug, Clone)]
pub struct LengthBodies {
    pub short: String,
    pub medium: String,
    pub long: String,
}

impl LengthBodies {
    pub fn for_length(&self, length: ContentLength) -> &str {
        match length {
            ContentLength::Short => &self.short,
            ContentLength::Medium => &self.medium,
            ContentLength::Long => &self.long,
        }
    }
}

/// Generates articles wired to already-created clients, categories, and the
/// author singleton.
pub struct ArticleGenerator {
    now: OffsetDateTime,
}

impl ArticleGenerator {
    pub fn new() -> Self {
        Self {
            now: OffsetDateTime::now_utc(),
        }
    }

    /// Generates exactly `total` articles. `client_ids` and `category_ids`
    /// must be non-empty; titles cycle when fewer than `total` were
    /// resolved, with slug suffixes keeping the natural key unique.
    pub fn generate_batch(
        &self,
        total: usize,
        titles: &[Headline],
        bodies: &LengthBodies,
        client_ids: &[Uuid],
        category_ids: &[Uuid],
        author_id: Uuid,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedArticle> {
        if total == 0 || titles.is_empty() || client_ids.is_empty() || category_ids.is_empty() {
            return Vec::new();
        }

        let statuses = split_weighted(total, &STATUS_WEIGHTS, rng);
        let lengths = split_weighted(total, &LENGTH_WEIGHTS, rng);

        let mut used_slugs = HashSet::new();
        let mut articles = Vec::with_capacity(total);

        for i in 0..total {
            let headline = &titles[i % titles.len()];
            let status = statuses[i];
            let length = lengths[i];

            let published_at = match status {
                ArticleStatus::Published => Some(
                    self.now - Duration::minutes(rng.gen_range(0..PUBLISH_WINDOW_MINUTES)),
                ),
                ArticleStatus::Draft => None,
            };

            // Drafts sit on a recent editing timeline; published articles
            // predate their publish timestamp by up to a week.
            let created_at = match published_at {
                Some(published) => published - Duration::minutes(rng.gen_range(60..10_080)),
                None => self.now - Duration::minutes(rng.gen_range(0..43_200)),
            };

            let body = bodies.for_length(length).to_string();

            articles.push(GeneratedArticle {
                id: Uuid::new_v4(),
                slug: unique_slug(&headline.title, &mut used_slugs),
                title: headline.title.clone(),
                excerpt: excerpt_of(&body),
                body,
                status,
                length,
                client_id: client_ids[rng.gen_range(0..client_ids.len())],
                category_id: category_ids[rng.gen_range(0..category_ids.len())],
                author_id,
                published_at,
                created_at,
            });
        }

        articles
    }
}

impl Default for ArticleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// First ~180 characters of the body, cut at a word boundary.
fn excerpt_of(body: &str) -> String {
    let first_line = body.lines().next().unwrap_or_default();
    if first_line.chars().count() <= 180 {
        return first_line.to_string();
    }

    let cut: String = first_line.chars().take(180).collect();
    match cut.rfind(' ') {
        Some(idx) => format!("{}…", &cut[..idx]),
        None => cut,
    }
}

fn unique_slug(title: &str, used: &mut HashSet<String>) -> String {
    let base = slugify(title);
    let base = if base.is_empty() { "article".to_string() } else { base };

    if used.insert(base.clone()) {
        return base;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixtures() -> (Vec<Headline>, LengthBodies, Vec<Uuid>, Vec<Uuid>, Uuid) {
        let titles = vec![
            Headline {
                title: "The Complete Guide to Lead Generation".into(),
                tags: vec![],
            },
            Headline {
                title: "Why Retention Matters More Than Ever".into(),
                tags: vec![],
            },
        ];
        let bodies = LengthBodies {
            short: "Short body.".into(),
            medium: "Medium body.\n\nWith more.".into(),
            long: "Long body.\n\nWith much more.\n\nAnd more still.".into(),
        };
        (
            titles,
            bodies,
            vec![Uuid::new_v4(), Uuid::new_v4()],
            vec![Uuid::new_v4()],
            Uuid::new_v4(),
        )
    }

    #[test]
    fn test_status_split_is_exact_for_ten() {
        let (titles, bodies, clients, categories, author) = fixtures();
        let mut rng = StdRng::seed_from_u64(42);

        let articles = ArticleGenerator::new()
            .generate_batch(10, &titles, &bodies, &clients, &categories, author, &mut rng);

        assert_eq!(articles.len(), 10);
        let published = articles
            .iter()
            .filter(|a| a.status == ArticleStatus::Published)
            .count();
        assert_eq!(published, 6);
        assert_eq!(articles.len() - published, 4);
    }

    #[test]
    fn test_publish_timestamps_follow_status() {
        let (titles, bodies, clients, categories, author) = fixtures();
        let mut rng = StdRng::seed_from_u64(7);
        let now = OffsetDateTime::now_utc();

        let articles = ArticleGenerator::new()
            .generate_batch(20, &titles, &bodies, &clients, &categories, author, &mut rng);

        for article in &articles {
            match article.status {
                ArticleStatus::Published => {
                    let published = article.published_at.expect("published without timestamp");
                    assert!(published <= now);
                    assert!(now - published <= Duration::days(366));
                    assert!(article.created_at <= published);
                }
                ArticleStatus::Draft => assert!(article.published_at.is_none()),
            }
        }
    }

    #[test]
    fn test_length_split_is_exact_for_ten() {
        let (titles, bodies, clients, categories, author) = fixtures();
        let mut rng = StdRng::seed_from_u64(3);

        let articles = ArticleGenerator::new()
            .generate_batch(10, &titles, &bodies, &clients, &categories, author, &mut rng);

        let count = |l: ContentLength| articles.iter().filter(|a| a.length == l).count();
        // 30/40/30 with the remainder absorbed by the first bucket
        assert_eq!(count(ContentLength::Short), 3);
        assert_eq!(count(ContentLength::Medium), 4);
        assert_eq!(count(ContentLength::Long), 3);
    }

    #[test]
    fn test_slugs_unique_when_titles_cycle() {
        let (titles, bodies, clients, categories, author) = fixtures();
        let mut rng = StdRng::seed_from_u64(9);

        let articles = ArticleGenerator::new()
            .generate_batch(7, &titles, &bodies, &clients, &categories, author, &mut rng);

        let slugs: HashSet<_> = articles.iter().map(|a| a.slug.clone()).collect();
        assert_eq!(slugs.len(), 7);
    }

    #[test]
    fn test_foreign_keys_come_from_provided_parents() {
        let (titles, bodies, clients, categories, author) = fixtures();
        let mut rng = StdRng::seed_from_u64(13);

        let articles = ArticleGenerator::new()
            .generate_batch(15, &titles, &bodies, &clients, &categories, author, &mut rng);

        for article in &articles {
            assert!(clients.contains(&article.client_id));
            assert!(categories.contains(&article.category_id));
            assert_eq!(article.author_id, author);
        }
    }

    #[test]
    fn test_empty_parents_generate_nothing() {
        let (titles, bodies, _, categories, author) = fixtures();
        let mut rng = StdRng::seed_from_u64(1);

        let articles = ArticleGenerator::new()
            .generate_batch(5, &titles, &bodies, &[], &categories, author, &mut rng);
        assert!(articles.is_empty());
    }
}
