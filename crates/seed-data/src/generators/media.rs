//! Media asset rows.

use newsroom::models::MediaKind;
use uuid::Uuid;

use crate::assets::{UploadedAsset, placeholder_url};

/// Generated media row ready for insertion.
#[derive(Debug, Clone)]
pub struct GeneratedMedia {
    pub id: Uuid,
    pub kind: MediaKind,
    /// Delivery URL; an optimized asset-service URL or a placeholder.
    pub url: String,
    /// Permanent asset-service identifier, absent for placeholders.
    pub public_id: Option<String>,
    pub alt_text: String,
}

impl GeneratedMedia {
    /// Media row backed by a successful asset-service upload.
    pub fn uploaded(kind: MediaKind, asset: UploadedAsset, alt_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            url: asset.secure_url,
            public_id: Some(asset.public_id),
            alt_text: alt_text.into(),
        }
    }

    /// Placeholder media row used when the asset service is disabled or an
    /// upload failed; the owning routine continues either way.
    pub fn placeholder(kind: MediaKind, slug: &str, alt_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            url: placeholder_url(kind, slug),
            public_id: None,
            alt_text: alt_text.into(),
        }
    }
}

/// Join row linking a gallery image to its article.
#[derive(Debug, Clone)]
pub struct GeneratedArticleMedia {
    pub article_id: Uuid,
    pub media_id: Uuid,
    pub position: i32,
}
