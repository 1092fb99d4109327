//! Industry generation from resolved profiles.

use std::collections::HashSet;

use newsroom::slugify;
use uuid::Uuid;

use crate::content::IndustryProfile;

/// Generated industry row ready for upsert.
#[derive(Debug, Clone)]
pub struct GeneratedIndustry {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
}

/// Builds industry rows from resolved profiles, dropping duplicate slugs
/// so the unique natural key holds even when a source repeats itself.
pub fn build_industries(profiles: &[IndustryProfile]) -> Vec<GeneratedIndustry> {
    let mut seen = HashSet::new();
    let mut industries = Vec::with_capacity(profiles.len());

    for profile in profiles {
        let slug = slugify(&profile.name);
        if slug.is_empty() || !seen.insert(slug.clone()) {
            continue;
        }

        industries.push(GeneratedIndustry {
            id: Uuid::new_v4(),
            name: profile.name.clone(),
            slug,
            description: profile.description.clone(),
            seo_title: format!("{} Insights & Trends", profile.name),
            seo_description: profile
                .seo_description
                .clone()
                .unwrap_or_else(|| truncate(&profile.description, 160)),
        });
    }

    industries
}

/// Truncates to a character budget without splitting a word mid-way.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(idx) => format!("{}…", &cut[..idx]),
        None => cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> IndustryProfile {
        IndustryProfile {
            name: name.to_string(),
            description: "A market full of buyers with long consideration cycles.".to_string(),
            seo_description: None,
        }
    }

    #[test]
    fn test_duplicate_profiles_collapse_by_slug() {
        let profiles = vec![profile("Healthcare"), profile("healthcare"), profile("Fintech")];
        let industries = build_industries(&profiles);

        assert_eq!(industries.len(), 2);
        assert_eq!(industries[0].slug, "healthcare");
        assert_eq!(industries[1].slug, "fintech");
    }

    #[test]
    fn test_seo_fields_are_filled() {
        let industries = build_industries(&[profile("Logistics")]);
        assert!(industries[0].seo_title.contains("Logistics"));
        assert!(!industries[0].seo_description.is_empty());
    }

    #[test]
    fn test_truncate_respects_word_boundary() {
        let out = truncate("alpha beta gamma delta", 12);
        assert!(out.chars().count() <= 13); // budget plus ellipsis
        assert!(!out.contains("gam"));
    }
}
