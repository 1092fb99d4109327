//! Dependency-ordered deletion of seeded data.
//!
//! The sequence runs strictly from leaves to aggregates: join and event
//! tables first, then content, then the entities everything hangs off.
//! Self-references and optional cross-aggregate references are nulled
//! before their target rows are removed. Every delete counts first and
//! skips silently on zero, so re-running against an empty store is a no-op.

use sqlx::PgPool;

use super::SeedError;
use crate::events::EventSink;

/// One step of the reset sequence.
#[derive(Debug, Clone, Copy)]
enum ResetOp {
    /// Clear a reference column so its target table can be emptied.
    Null {
        table: &'static str,
        column: &'static str,
    },
    /// Delete all rows of a table.
    Delete { table: &'static str },
}

fn null(table: &'static str, column: &'static str) -> ResetOp {
    ResetOp::Null { table, column }
}

fn delete(table: &'static str) -> ResetOp {
    ResetOp::Delete { table }
}

/// Reverse dependency order. Children always go before parents; reference
/// columns are nulled immediately before the table owning them is touched
/// or before their target table is deleted.
fn reset_sequence() -> Vec<ResetOp> {
    vec![
        // Deep join and tracking tables
        delete("article_tags"),
        delete("faqs"),
        delete("article_analytics"),
        delete("article_media"),
        delete("related_articles"),
        delete("article_versions"),
        delete("comment_interactions"),
        delete("article_interactions"),
        delete("client_interactions"),
        delete("article_views"),
        delete("article_shares"),
        delete("conversions"),
        delete("cta_clicks"),
        delete("campaign_attributions"),
        delete("lead_scores"),
        delete("engagement_durations"),
        delete("link_clicks"),
        // Content tables
        null("comments", "parent_id"),
        delete("comments"),
        null("client_comments", "parent_id"),
        delete("client_comments"),
        delete("articles"),
        delete("tags"),
        delete("subscribers"),
        // Aggregates
        null("clients", "logo_media_id"),
        null("clients", "og_image_media_id"),
        null("clients", "twitter_image_media_id"),
        null("clients", "parent_org_id"),
        delete("clients"),
        delete("media"),
        null("categories", "parent_id"),
        delete("categories"),
        delete("authors"),
        delete("industries"),
        delete("site_settings"),
        delete("subscription_tiers"),
    ]
}

/// Deletes all seeded data in reverse dependency order. Idempotent: safe to
/// call on an empty store, and a second run in a row deletes nothing.
pub async fn reset(pool: &PgPool, sink: &EventSink) -> Result<(), SeedError> {
    sink.info("Resetting seeded data");

    for op in reset_sequence() {
        match op {
            ResetOp::Null { table, column } => {
                sqlx::query(&format!(
                    "UPDATE {table} SET {column} = NULL WHERE {column} IS NOT NULL"
                ))
                .execute(pool)
                .await?;
            }
            ResetOp::Delete { table } => {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await?;

                if count == 0 {
                    continue;
                }

                sqlx::query(&format!("DELETE FROM {table}"))
                    .execute(pool)
                    .await?;
                sink.info(format!("Deleted {count} rows from {table}"));
            }
        }
    }

    sink.success("Reset complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete_position(table: &str) -> usize {
        reset_sequence()
            .iter()
            .position(|op| matches!(op, ResetOp::Delete { table: t } if *t == table))
            .unwrap_or_else(|| panic!("{table} missing from reset sequence"))
    }

    #[test]
    fn test_children_delete_before_parents() {
        // Article-owned rows before articles
        for child in [
            "article_tags",
            "article_analytics",
            "article_media",
            "related_articles",
            "article_versions",
            "article_views",
            "comments",
        ] {
            assert!(
                delete_position(child) < delete_position("articles"),
                "{child} must delete before articles"
            );
        }

        // Client-owned rows before clients
        for child in ["faqs", "client_comments", "client_interactions", "articles"] {
            assert!(
                delete_position(child) < delete_position("clients"),
                "{child} must delete before clients"
            );
        }

        // Aggregates in their own order
        assert!(delete_position("clients") < delete_position("media"));
        assert!(delete_position("clients") < delete_position("subscription_tiers"));
        assert!(delete_position("articles") < delete_position("categories"));
        assert!(delete_position("articles") < delete_position("authors"));
        assert!(delete_position("clients") < delete_position("industries"));
    }

    #[test]
    fn test_references_null_before_target_deletes() {
        let sequence = reset_sequence();
        let null_position = |table: &str, column: &str| {
            sequence
                .iter()
                .position(|op| {
                    matches!(op, ResetOp::Null { table: t, column: c } if *t == table && *c == column)
                })
                .unwrap_or_else(|| panic!("missing null step for {table}.{column}"))
        };

        // Self-references cleared before their own table is deleted
        assert!(null_position("comments", "parent_id") < delete_position("comments"));
        assert!(null_position("categories", "parent_id") < delete_position("categories"));
        assert!(null_position("clients", "parent_org_id") < delete_position("clients"));

        // Client media references cleared before media goes away
        for column in ["logo_media_id", "og_image_media_id", "twitter_image_media_id"] {
            assert!(null_position("clients", column) < delete_position("media"));
        }
    }

    #[test]
    fn test_each_table_deleted_exactly_once() {
        let mut tables: Vec<&str> = reset_sequence()
            .iter()
            .filter_map(|op| match op {
                ResetOp::Delete { table } => Some(*table),
                _ => None,
            })
            .collect();
        let total = tables.len();
        tables.sort_unstable();
        tables.dedup();
        assert_eq!(tables.len(), total, "duplicate delete step");
    }
}
