//! Database seeder for generated rows.
//!
//! Every entity with a stable natural key is upserted (`ON CONFLICT ... DO
//! UPDATE ... RETURNING id`), so re-running without a reset updates rows in
//! place and hands back the id of whichever row won. Referential ordering
//! is purely call ordering; the seeder never opens a multi-table
//! transaction. Individual row failures are logged and skipped; the only
//! fatal conditions live in the pipeline.

use std::collections::HashMap;

use newsroom::models::ClientSummary;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use super::SeedError;
use crate::generators::{
    GeneratedAnalytics, GeneratedArticle, GeneratedArticleMedia, GeneratedArticleVersion,
    GeneratedAuthor, GeneratedCampaignAttribution, GeneratedCategory, GeneratedClient,
    GeneratedClientComment, GeneratedComment, GeneratedConversion, GeneratedCtaClick,
    GeneratedEngagementDuration, GeneratedFaq, GeneratedIndustry, GeneratedLeadScore,
    GeneratedLinkClick, GeneratedMedia, GeneratedRelated, GeneratedSettings, GeneratedShare,
    GeneratedSubscriber, GeneratedTag, GeneratedTier, GeneratedView,
};

/// Which table an interaction row lands in.
#[derive(Debug, Clone, Copy)]
pub enum InteractionTarget {
    Article,
    Client,
    Comment,
}

impl InteractionTarget {
    fn table(&self) -> &'static str {
        match self {
            InteractionTarget::Article => "article_interactions",
            InteractionTarget::Client => "client_interactions",
            InteractionTarget::Comment => "comment_interactions",
        }
    }

    fn fk_column(&self) -> &'static str {
        match self {
            InteractionTarget::Article => "article_id",
            InteractionTarget::Client => "client_id",
            InteractionTarget::Comment => "comment_id",
        }
    }
}

/// Database seeder for inserting generated demo data.
pub struct Seeder {
    pool: PgPool,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 50,
        }
    }

    /// Sets the batch size used for chunked inserts and progress cadence.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn count_clients(&self) -> Result<i64, SeedError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Fetches a bounded sample of existing clients for reuse.
    pub async fn fetch_clients(&self, cap: usize) -> Result<Vec<ClientSummary>, SeedError> {
        let clients = sqlx::query_as::<_, ClientSummary>(
            "SELECT id, slug, legal_name FROM clients ORDER BY created_at LIMIT $1",
        )
        .bind(cap as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(clients)
    }

    /// Upserts the subscription tier ladder, keyed by slug.
    pub async fn seed_tiers(&self, tiers: &[GeneratedTier]) -> Result<Vec<Uuid>, SeedError> {
        let mut ids = Vec::with_capacity(tiers.len());

        for tier in tiers {
            let result: Result<Uuid, sqlx::Error> = sqlx::query_scalar(
                r#"
                INSERT INTO subscription_tiers (id, slug, name, monthly_price_cents, article_quota, created_at)
                VALUES ($1, $2, $3, $4, $5, NOW())
                ON CONFLICT (slug) DO UPDATE SET
                    name = EXCLUDED.name,
                    monthly_price_cents = EXCLUDED.monthly_price_cents,
                    article_quota = EXCLUDED.article_quota
                RETURNING id
                "#,
            )
            .bind(tier.id)
            .bind(&tier.slug)
            .bind(&tier.name)
            .bind(tier.monthly_price_cents)
            .bind(tier.article_quota)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(id) => ids.push(id),
                Err(err) => warn!("Skipping tier {}: {err}", tier.slug),
            }
        }

        info!("Seeded {} subscription tiers", ids.len());
        Ok(ids)
    }

    /// Upserts industries, keyed by slug.
    pub async fn seed_industries(
        &self,
        industries: &[GeneratedIndustry],
    ) -> Result<Vec<Uuid>, SeedError> {
        let mut ids = Vec::with_capacity(industries.len());

        for industry in industries {
            let result: Result<Uuid, sqlx::Error> = sqlx::query_scalar(
                r#"
                INSERT INTO industries (id, slug, name, description, seo_title, seo_description, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, NOW())
                ON CONFLICT (slug) DO UPDATE SET
                    name = EXCLUDED.name,
                    description = EXCLUDED.description,
                    seo_title = EXCLUDED.seo_title,
                    seo_description = EXCLUDED.seo_description
                RETURNING id
                "#,
            )
            .bind(industry.id)
            .bind(&industry.slug)
            .bind(&industry.name)
            .bind(&industry.description)
            .bind(&industry.seo_title)
            .bind(&industry.seo_description)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(id) => ids.push(id),
                Err(err) => warn!("Skipping industry {}: {err}", industry.slug),
            }
        }

        info!("Seeded {} industries", ids.len());
        Ok(ids)
    }

    /// Upserts clients, keyed by slug. Parent-organization references are
    /// remapped to the ids the upserts actually returned, so a reused slug
    /// never leaves a child pointing at a generated id that was discarded.
    pub async fn seed_clients(
        &self,
        clients: &[GeneratedClient],
    ) -> Result<Vec<ClientSummary>, SeedError> {
        let mut seeded = Vec::with_capacity(clients.len());
        let mut id_map: HashMap<Uuid, Uuid> = HashMap::new();

        for client in clients {
            let parent_org_id = client
                .parent_org_id
                .and_then(|generated| id_map.get(&generated).copied());

            let result: Result<Uuid, sqlx::Error> = sqlx::query_scalar(
                r#"
                INSERT INTO clients (
                    id, slug, legal_name, display_name, contact_email, website,
                    description, industry_id, tier_id, parent_org_id, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
                ON CONFLICT (slug) DO UPDATE SET
                    legal_name = EXCLUDED.legal_name,
                    display_name = EXCLUDED.display_name,
                    contact_email = EXCLUDED.contact_email,
                    website = EXCLUDED.website,
                    description = EXCLUDED.description,
                    industry_id = EXCLUDED.industry_id,
                    tier_id = EXCLUDED.tier_id,
                    parent_org_id = EXCLUDED.parent_org_id
                RETURNING id
                "#,
            )
            .bind(client.id)
            .bind(&client.slug)
            .bind(&client.legal_name)
            .bind(&client.display_name)
            .bind(&client.contact_email)
            .bind(&client.website)
            .bind(&client.description)
            .bind(client.industry_id)
            .bind(client.tier_id)
            .bind(parent_org_id)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(id) => {
                    id_map.insert(client.id, id);
                    seeded.push(ClientSummary {
                        id,
                        slug: client.slug.clone(),
                        legal_name: client.legal_name.clone(),
                    });
                }
                Err(err) => warn!("Skipping client {}: {err}", client.slug),
            }
        }

        info!("Seeded {} clients", seeded.len());
        Ok(seeded)
    }

    /// Upserts the editorial author singleton, keyed by email.
    pub async fn seed_author(&self, author: &GeneratedAuthor) -> Result<Uuid, SeedError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO authors (id, email, name, title, bio, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (email) DO UPDATE SET
                name = EXCLUDED.name,
                title = EXCLUDED.title,
                bio = EXCLUDED.bio
            RETURNING id
            "#,
        )
        .bind(author.id)
        .bind(&author.email)
        .bind(&author.name)
        .bind(&author.title)
        .bind(&author.bio)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Upserts categories in order, remapping parent references the same
    /// way as clients. Input order guarantees parents land first.
    pub async fn seed_categories(
        &self,
        categories: &[GeneratedCategory],
    ) -> Result<Vec<Uuid>, SeedError> {
        let mut ids = Vec::with_capacity(categories.len());
        let mut id_map: HashMap<Uuid, Uuid> = HashMap::new();

        for category in categories {
            let parent_id = category
                .parent_id
                .and_then(|generated| id_map.get(&generated).copied());

            let result: Result<Uuid, sqlx::Error> = sqlx::query_scalar(
                r#"
                INSERT INTO categories (id, slug, name, description, parent_id, created_at)
                VALUES ($1, $2, $3, $4, $5, NOW())
                ON CONFLICT (slug) DO UPDATE SET
                    name = EXCLUDED.name,
                    description = EXCLUDED.description,
                    parent_id = EXCLUDED.parent_id
                RETURNING id
                "#,
            )
            .bind(category.id)
            .bind(&category.slug)
            .bind(&category.name)
            .bind(&category.description)
            .bind(parent_id)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(id) => {
                    id_map.insert(category.id, id);
                    ids.push(id);
                }
                Err(err) => warn!("Skipping category {}: {err}", category.slug),
            }
        }

        info!("Seeded {} categories", ids.len());
        Ok(ids)
    }

    /// Upserts tags, keyed by slug.
    pub async fn seed_tags(&self, tags: &[GeneratedTag]) -> Result<Vec<Uuid>, SeedError> {
        let mut ids = Vec::with_capacity(tags.len());

        for tag in tags {
            let result: Result<Uuid, sqlx::Error> = sqlx::query_scalar(
                r#"
                INSERT INTO tags (id, slug, name, created_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (slug) DO UPDATE SET name = tags.name
                RETURNING id
                "#,
            )
            .bind(tag.id)
            .bind(&tag.slug)
            .bind(&tag.name)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(id) => ids.push(id),
                Err(err) => warn!("Skipping tag {}: {err}", tag.slug),
            }
        }

        info!("Seeded {} tags", ids.len());
        Ok(ids)
    }

    /// Upserts articles, keyed by slug. Returns `(input index, row id)`
    /// pairs for the rows that made it in.
    pub async fn seed_articles(
        &self,
        articles: &[GeneratedArticle],
    ) -> Result<Vec<(usize, Uuid)>, SeedError> {
        let mut seeded = Vec::with_capacity(articles.len());

        for (i, article) in articles.iter().enumerate() {
            let result: Result<Uuid, sqlx::Error> = sqlx::query_scalar(
                r#"
                INSERT INTO articles (
                    id, slug, title, excerpt, body, status, length,
                    client_id, category_id, author_id, published_at, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                ON CONFLICT (slug) DO UPDATE SET
                    title = EXCLUDED.title,
                    excerpt = EXCLUDED.excerpt,
                    body = EXCLUDED.body,
                    status = EXCLUDED.status,
                    length = EXCLUDED.length,
                    client_id = EXCLUDED.client_id,
                    category_id = EXCLUDED.category_id,
                    author_id = EXCLUDED.author_id,
                    published_at = EXCLUDED.published_at
                RETURNING id
                "#,
            )
            .bind(article.id)
            .bind(&article.slug)
            .bind(&article.title)
            .bind(&article.excerpt)
            .bind(&article.body)
            .bind(article.status.as_str())
            .bind(article.length.as_str())
            .bind(article.client_id)
            .bind(article.category_id)
            .bind(article.author_id)
            .bind(article.published_at)
            .bind(article.created_at)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(id) => seeded.push((i, id)),
                Err(err) => warn!("Skipping article {}: {err}", article.slug),
            }

            if (i + 1) % self.batch_size == 0 {
                info!("  Seeded {}/{} articles", i + 1, articles.len());
            }
        }

        info!("Seeded {} articles", seeded.len());
        Ok(seeded)
    }

    /// Links articles to tags.
    pub async fn link_article_tags(&self, links: &[(Uuid, Uuid)]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for (article_id, tag_id) in links {
            let result = sqlx::query(
                r#"
                INSERT INTO article_tags (article_id, tag_id)
                VALUES ($1, $2)
                ON CONFLICT (article_id, tag_id) DO NOTHING
                "#,
            )
            .bind(article_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping article tag link: {err}"),
            }
        }

        info!("Linked {} article tags", inserted);
        Ok(inserted)
    }

    /// Inserts a single media row.
    pub async fn seed_media(&self, media: &GeneratedMedia) -> Result<Uuid, SeedError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO media (id, kind, url, public_id, alt_text, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id
            "#,
        )
        .bind(media.id)
        .bind(media.kind.as_str())
        .bind(&media.url)
        .bind(&media.public_id)
        .bind(&media.alt_text)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Backfills a client's media references once its assets exist.
    pub async fn set_client_media(
        &self,
        client_id: Uuid,
        logo_id: Option<Uuid>,
        og_image_id: Option<Uuid>,
        twitter_image_id: Option<Uuid>,
    ) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            UPDATE clients SET
                logo_media_id = COALESCE($2, logo_media_id),
                og_image_media_id = COALESCE($3, og_image_media_id),
                twitter_image_media_id = COALESCE($4, twitter_image_media_id)
            WHERE id = $1
            "#,
        )
        .bind(client_id)
        .bind(logo_id)
        .bind(og_image_id)
        .bind(twitter_image_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Upserts per-article analytics counters.
    pub async fn seed_analytics(&self, rows: &[GeneratedAnalytics]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for row in rows {
            let result = sqlx::query(
                r#"
                INSERT INTO article_analytics (id, article_id, views, likes, dislikes, shares, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, NOW())
                ON CONFLICT (article_id) DO UPDATE SET
                    views = EXCLUDED.views,
                    likes = EXCLUDED.likes,
                    dislikes = EXCLUDED.dislikes,
                    shares = EXCLUDED.shares,
                    updated_at = NOW()
                "#,
            )
            .bind(row.id)
            .bind(row.article_id)
            .bind(row.views)
            .bind(row.likes)
            .bind(row.dislikes)
            .bind(row.shares)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping analytics row: {err}"),
            }
        }

        info!("Seeded {} analytics rows", inserted);
        Ok(inserted)
    }

    pub async fn seed_faqs(&self, faqs: &[GeneratedFaq]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for faq in faqs {
            let result = sqlx::query(
                r#"
                INSERT INTO faqs (id, client_id, question, answer, position, created_at)
                VALUES ($1, $2, $3, $4, $5, NOW())
                "#,
            )
            .bind(faq.id)
            .bind(faq.client_id)
            .bind(&faq.question)
            .bind(&faq.answer)
            .bind(faq.position)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping FAQ: {err}"),
            }
        }

        info!("Seeded {} FAQs", inserted);
        Ok(inserted)
    }

    pub async fn seed_related(&self, links: &[GeneratedRelated]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for link in links {
            let result = sqlx::query(
                r#"
                INSERT INTO related_articles (article_id, related_article_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (article_id, related_article_id) DO NOTHING
                "#,
            )
            .bind(link.article_id)
            .bind(link.related_article_id)
            .bind(link.position)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping related-article link: {err}"),
            }
        }

        info!("Linked {} related articles", inserted);
        Ok(inserted)
    }

    /// Upserts subscribers, keyed by email.
    pub async fn seed_subscribers(
        &self,
        subscribers: &[GeneratedSubscriber],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for chunk in subscribers.chunks(self.batch_size) {
            for subscriber in chunk {
                let result = sqlx::query(
                    r#"
                    INSERT INTO subscribers (id, email, name, source, subscribed_at)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (email) DO NOTHING
                    "#,
                )
                .bind(subscriber.id)
                .bind(&subscriber.email)
                .bind(&subscriber.name)
                .bind(&subscriber.source)
                .bind(subscriber.subscribed_at)
                .execute(&self.pool)
                .await;

                match result {
                    Ok(_) => inserted += 1,
                    Err(err) => warn!("Skipping subscriber: {err}"),
                }
            }
        }

        info!("Seeded {} subscribers", inserted);
        Ok(inserted)
    }

    /// Upserts the site settings singleton, keyed by its fixed key.
    pub async fn seed_settings(&self, settings: &GeneratedSettings) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, site_title, tagline, contact_email, footer_text, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (key) DO UPDATE SET
                site_title = EXCLUDED.site_title,
                tagline = EXCLUDED.tagline,
                contact_email = EXCLUDED.contact_email,
                footer_text = EXCLUDED.footer_text,
                updated_at = NOW()
            "#,
        )
        .bind(&settings.key)
        .bind(&settings.site_title)
        .bind(&settings.tagline)
        .bind(&settings.contact_email)
        .bind(&settings.footer_text)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn seed_versions(
        &self,
        versions: &[GeneratedArticleVersion],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for version in versions {
            let result = sqlx::query(
                r#"
                INSERT INTO article_versions (id, article_id, version, title, body_snapshot, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (article_id, version) DO NOTHING
                "#,
            )
            .bind(version.id)
            .bind(version.article_id)
            .bind(version.version)
            .bind(&version.title)
            .bind(&version.body_snapshot)
            .bind(version.created_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping article version: {err}"),
            }
        }

        info!("Seeded {} article versions", inserted);
        Ok(inserted)
    }

    pub async fn link_article_media(
        &self,
        links: &[GeneratedArticleMedia],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for link in links {
            let result = sqlx::query(
                r#"
                INSERT INTO article_media (article_id, media_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (article_id, media_id) DO NOTHING
                "#,
            )
            .bind(link.article_id)
            .bind(link.media_id)
            .bind(link.position)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping gallery link: {err}"),
            }
        }

        Ok(inserted)
    }

    /// Inserts article comments. Input order has roots before replies, so
    /// sequential insertion never references a missing parent.
    pub async fn seed_comments(&self, comments: &[GeneratedComment]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for comment in comments {
            let result = sqlx::query(
                r#"
                INSERT INTO comments (id, article_id, parent_id, author_name, author_email, body, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(comment.id)
            .bind(comment.article_id)
            .bind(comment.parent_id)
            .bind(&comment.author_name)
            .bind(&comment.author_email)
            .bind(&comment.body)
            .bind(comment.created_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping comment: {err}"),
            }
        }

        info!("Seeded {} comments", inserted);
        Ok(inserted)
    }

    pub async fn seed_client_comments(
        &self,
        comments: &[GeneratedClientComment],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for comment in comments {
            let result = sqlx::query(
                r#"
                INSERT INTO client_comments (id, client_id, parent_id, author_name, body, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(comment.id)
            .bind(comment.client_id)
            .bind(comment.parent_id)
            .bind(&comment.author_name)
            .bind(&comment.body)
            .bind(comment.created_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping client comment: {err}"),
            }
        }

        info!("Seeded {} client comments", inserted);
        Ok(inserted)
    }

    /// Inserts interaction rows into the table for `target`.
    pub async fn seed_interactions(
        &self,
        target: InteractionTarget,
        rows: &[crate::generators::GeneratedInteraction],
    ) -> Result<usize, SeedError> {
        let sql = format!(
            "INSERT INTO {} (id, {}, kind, occurred_at) VALUES ($1, $2, $3, $4)",
            target.table(),
            target.fk_column()
        );
        let mut inserted = 0;

        for row in rows {
            let result = sqlx::query(&sql)
                .bind(row.id)
                .bind(row.subject_id)
                .bind(row.kind.as_str())
                .bind(row.occurred_at)
                .execute(&self.pool)
                .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping {} row: {err}", target.table()),
            }
        }

        info!("Seeded {} {} rows", inserted, target.table());
        Ok(inserted)
    }

    /// Inserts individual view rows, chunked with progress logging.
    pub async fn seed_views(&self, views: &[GeneratedView]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for (i, view) in views.iter().enumerate() {
            let result = sqlx::query(
                r#"
                INSERT INTO article_views (id, article_id, session_id, referrer, viewed_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(view.id)
            .bind(view.article_id)
            .bind(view.session_id)
            .bind(&view.referrer)
            .bind(view.viewed_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping view: {err}"),
            }

            if (i + 1) % self.batch_size == 0 {
                info!("  Seeded {}/{} views", i + 1, views.len());
            }
        }

        info!("Seeded {} views", inserted);
        Ok(inserted)
    }

    pub async fn seed_shares(&self, shares: &[GeneratedShare]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for share in shares {
            let result = sqlx::query(
                r#"
                INSERT INTO article_shares (id, article_id, channel, shared_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(share.id)
            .bind(share.article_id)
            .bind(share.channel.as_str())
            .bind(share.shared_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping share: {err}"),
            }
        }

        Ok(inserted)
    }

    pub async fn seed_conversions(
        &self,
        conversions: &[GeneratedConversion],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for conversion in conversions {
            let result = sqlx::query(
                r#"
                INSERT INTO conversions (id, article_id, client_id, kind, value_cents, converted_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(conversion.id)
            .bind(conversion.article_id)
            .bind(conversion.client_id)
            .bind(&conversion.kind)
            .bind(conversion.value_cents)
            .bind(conversion.converted_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping conversion: {err}"),
            }
        }

        Ok(inserted)
    }

    pub async fn seed_cta_clicks(&self, clicks: &[GeneratedCtaClick]) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for click in clicks {
            let result = sqlx::query(
                r#"
                INSERT INTO cta_clicks (id, article_id, label, clicked_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(click.id)
            .bind(click.article_id)
            .bind(&click.label)
            .bind(click.clicked_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping CTA click: {err}"),
            }
        }

        Ok(inserted)
    }

    pub async fn seed_campaign_attributions(
        &self,
        attributions: &[GeneratedCampaignAttribution],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for attribution in attributions {
            let result = sqlx::query(
                r#"
                INSERT INTO campaign_attributions (id, article_id, campaign, source, medium, attributed_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(attribution.id)
            .bind(attribution.article_id)
            .bind(&attribution.campaign)
            .bind(&attribution.source)
            .bind(&attribution.medium)
            .bind(attribution.attributed_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping campaign attribution: {err}"),
            }
        }

        Ok(inserted)
    }

    pub async fn seed_lead_scores(
        &self,
        scores: &[GeneratedLeadScore],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for score in scores {
            let result = sqlx::query(
                r#"
                INSERT INTO lead_scores (id, client_id, article_id, score, captured_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(score.id)
            .bind(score.client_id)
            .bind(score.article_id)
            .bind(score.score)
            .bind(score.captured_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping lead score: {err}"),
            }
        }

        Ok(inserted)
    }

    pub async fn seed_engagement_durations(
        &self,
        durations: &[GeneratedEngagementDuration],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for duration in durations {
            let result = sqlx::query(
                r#"
                INSERT INTO engagement_durations (id, article_id, seconds, sampled_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(duration.id)
            .bind(duration.article_id)
            .bind(duration.seconds)
            .bind(duration.sampled_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping engagement duration: {err}"),
            }
        }

        Ok(inserted)
    }

    pub async fn seed_link_clicks(
        &self,
        clicks: &[GeneratedLinkClick],
    ) -> Result<usize, SeedError> {
        let mut inserted = 0;

        for click in clicks {
            let result = sqlx::query(
                r#"
                INSERT INTO link_clicks (id, article_id, target_url, clicked_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(click.id)
            .bind(click.article_id)
            .bind(&click.target_url)
            .bind(click.clicked_at)
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!("Skipping link click: {err}"),
            }
        }

        Ok(inserted)
    }
}
