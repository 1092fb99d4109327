//! Client generation.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::company::en::{CatchPhrase, CompanyName, CompanySuffix};
use newsroom::slugify;
use rand::Rng;
use uuid::Uuid;

/// Generated client row ready for upsert.
#[derive(Debug, Clone)]
pub struct GeneratedClient {
    pub id: Uuid,
    pub slug: String,
    pub legal_name: String,
    pub display_name: String,
    pub contact_email: String,
    pub website: String,
    pub description: String,
    pub industry_id: Option<Uuid>,
    pub tier_id: Option<Uuid>,
    /// Parent organization; always an earlier client in the same batch so
    /// the self-reference is insertable in generation order.
    pub parent_org_id: Option<Uuid>,
}

/// Configuration for client generation.
#[derive(Debug, Clone)]
pub struct ClientGenConfig {
    /// Probability that a client is a subsidiary of an earlier one.
    pub parent_org_probability: f64,
}

impl Default for ClientGenConfig {
    fn default() -> Self {
        Self {
            parent_org_probability: 0.2,
        }
    }
}

/// Generates client companies wired to already-created industries and tiers.
pub struct ClientGenerator {
    config: ClientGenConfig,
}

impl ClientGenerator {
    pub fn new() -> Self {
        Self {
            config: ClientGenConfig::default(),
        }
    }

    pub fn with_config(config: ClientGenConfig) -> Self {
        Self { config }
    }

    /// Generates a batch of clients. `industry_ids` and `tier_ids` must
    /// already exist in the store; either may be empty, leaving the
    /// reference unset.
    pub fn generate_batch(
        &self,
        count: usize,
        industry_ids: &[Uuid],
        tier_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedClient> {
        let mut clients: Vec<GeneratedClient> = Vec::with_capacity(count);
        let mut used_slugs = HashSet::new();

        for _ in 0..count {
            let name: String = CompanyName().fake_with_rng(rng);
            let slug = unique_slug(&name, &mut used_slugs);
            let suffix: String = CompanySuffix().fake_with_rng(rng);
            let description: String = CatchPhrase().fake_with_rng(rng);

            let industry_id = pick(industry_ids, rng);
            let tier_id = pick(tier_ids, rng);

            let parent_org_id = if !clients.is_empty()
                && rng.r#gen::<f64>() < self.config.parent_org_probability
            {
                Some(clients[rng.gen_range(0..clients.len())].id)
            } else {
                None
            };

            clients.push(GeneratedClient {
                id: Uuid::new_v4(),
                legal_name: format!("{name} {suffix}"),
                display_name: name,
                contact_email: format!("hello@{slug}.example.com"),
                website: format!("https://{slug}.example.com"),
                description,
                industry_id,
                tier_id,
                parent_org_id,
                slug,
            });
        }

        clients
    }
}

impl Default for ClientGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(ids: &[Uuid], rng: &mut impl Rng) -> Option<Uuid> {
    if ids.is_empty() {
        None
    } else {
        Some(ids[rng.gen_range(0..ids.len())])
    }
}

/// Slugifies a name, suffixing a counter on collision.
fn unique_slug(name: &str, used: &mut HashSet<String>) -> String {
    let base = slugify(name);
    let base = if base.is_empty() { "client".to_string() } else { base };

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

    #[test]
    fn test_generate_batch_count_and_unique_slugs() {
        let mut rng = StdRng::seed_from_u64(11);
        let industries = vec![Uuid::new_v4(), Uuid::new_v4()];
        let tiers = vec![Uuid::new_v4()];

        let clients = ClientGenerator::new().generate_batch(30, &industries, &tiers, &mut rng);

        assert_eq!(clients.len(), 30);
        let slugs: HashSet<_> = clients.iter().map(|c| c.slug.clone()).collect();
        assert_eq!(slugs.len(), 30);
    }

    #[test]
    fn test_parent_org_references_point_backwards() {
        let mut rng = StdRng::seed_from_u64(5);
        let clients = ClientGenerator::with_config(ClientGenConfig {
            parent_org_probability: 0.8,
        })
        .generate_batch(40, &[], &[], &mut rng);

        for (idx, client) in clients.iter().enumerate() {
            if let Some(parent) = client.parent_org_id {
                let parent_idx = clients.iter().position(|c| c.id == parent);
                assert!(parent_idx.is_some_and(|p| p < idx), "forward parent reference");
            }
        }
    }

    #[test]
    fn test_empty_parent_lists_leave_references_unset() {
        let mut rng = StdRng::seed_from_u64(1);
        let clients = ClientGenerator::new().generate_batch(5, &[], &[], &mut rng);

        assert!(clients.iter().all(|c| c.industry_id.is_none()));
        assert!(clients.iter().all(|c| c.tier_id.is_none()));
    }
}
