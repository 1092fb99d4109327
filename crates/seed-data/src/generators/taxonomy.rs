//! Category tree and tag generation.

use std::collections::HashSet;

use newsroom::slugify;
use rand::Rng;
use uuid::Uuid;

use crate::content::TagSet;

/// Generated category row. Parents always precede children in the returned
/// vector, so inserting in order never hits a missing self-reference.
#[derive(Debug, Clone)]
pub struct GeneratedCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
}

/// Generated tag row.
#[derive(Debug, Clone)]
pub struct GeneratedTag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Builds a category tree from resolved names.
pub struct CategoryGenerator {
    /// Probability that a non-root category attaches under an earlier one.
    child_probability: f64,
    /// Categories guaranteed to stay roots at the head of the list.
    root_count: usize,
}

impl CategoryGenerator {
    pub fn new() -> Self {
        Self {
            child_probability: 0.35,
            root_count: 3,
        }
    }

    pub fn with_child_probability(mut self, probability: f64) -> Self {
        self.child_probability = probability;
        self
    }

    /// Generates categories from names, skipping duplicate slugs. Children
    /// only ever reference categories generated before them, which keeps
    /// the tree acyclic by construction at any depth.
    pub fn generate(&self, names: &[String], rng: &mut impl Rng) -> Vec<GeneratedCategory> {
        let mut seen = HashSet::new();
        let mut categories: Vec<GeneratedCategory> = Vec::with_capacity(names.len());

        for name in names {
            let slug = slugify(name);
            if slug.is_empty() || !seen.insert(slug.clone()) {
                continue;
            }

            let parent_id = if categories.len() >= self.root_count
                && rng.r#gen::<f64>() < self.child_probability
            {
                Some(categories[rng.gen_range(0..categories.len())].id)
            } else {
                None
            };

            categories.push(GeneratedCategory {
                id: Uuid::new_v4(),
                name: name.clone(),
                description: Some(format!("Articles filed under {name}.")),
                parent_id,
                slug,
            });
        }

        categories
    }
}

impl Default for CategoryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds tag rows from a vocabulary, deduplicating case-insensitively with
/// first-seen casing preserved.
pub fn build_tags(vocabulary: &[String]) -> Vec<GeneratedTag> {
    let mut merged = TagSet::new();
    merged.extend(vocabulary);

    let mut seen_slugs = HashSet::new();
    merged
        .into_vec()
        .into_iter()
        .filter_map(|name| {
            let slug = slugify(&name);
            if slug.is_empty() || !seen_slugs.insert(slug.clone()) {
                return None;
            }
            Some(GeneratedTag {
                id: Uuid::new_v4(),
                name,
                slug,
            })
        })
        .collect()
}
