//! The explicit seeding plan.
//!
//! The seed order is a declared sequence, not an accident of call order.
//! Each step names the entity it provides and the entities it needs to
//! already exist; a unit test holds the declaration to the same standard
//! the store's foreign keys would.

/// Entities the pipeline can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Tiers,
    Industries,
    Clients,
    Author,
    Categories,
    Tags,
    Articles,
    ArticleTags,
    Media,
    Analytics,
    Faqs,
    RelatedArticles,
    Subscribers,
    Settings,
    ArticleVersions,
    Galleries,
    Comments,
    ClientComments,
    Interactions,
    Views,
    Tracking,
}

/// One step of the plan.
#[derive(Debug, Clone, Copy)]
pub struct PlanStep {
    pub name: &'static str,
    pub provides: Entity,
    pub requires: &'static [Entity],
}

/// Number of leading steps executed in the clients-only phase.
pub const CLIENTS_ONLY_STEPS: usize = 4;

const PLAN: &[PlanStep] = &[
    PlanStep {
        name: "subscription tiers",
        provides: Entity::Tiers,
        requires: &[],
    },
    PlanStep {
        name: "industries",
        provides: Entity::Industries,
        requires: &[],
    },
    PlanStep {
        name: "clients",
        provides: Entity::Clients,
        requires: &[Entity::Tiers, Entity::Industries],
    },
    PlanStep {
        name: "author",
        provides: Entity::Author,
        requires: &[],
    },
    PlanStep {
        name: "categories",
        provides: Entity::Categories,
        requires: &[],
    },
    PlanStep {
        name: "tags",
        provides: Entity::Tags,
        requires: &[],
    },
    PlanStep {
        name: "articles",
        provides: Entity::Articles,
        requires: &[Entity::Clients, Entity::Categories, Entity::Author],
    },
    PlanStep {
        name: "article tags",
        provides: Entity::ArticleTags,
        requires: &[Entity::Articles, Entity::Tags],
    },
    PlanStep {
        name: "media",
        provides: Entity::Media,
        requires: &[Entity::Clients, Entity::Articles],
    },
    PlanStep {
        name: "analytics",
        provides: Entity::Analytics,
        requires: &[Entity::Articles],
    },
    PlanStep {
        name: "faqs",
        provides: Entity::Faqs,
        requires: &[Entity::Clients],
    },
    PlanStep {
        name: "related articles",
        provides: Entity::RelatedArticles,
        requires: &[Entity::Articles],
    },
    PlanStep {
        name: "subscribers",
        provides: Entity::Subscribers,
        requires: &[],
    },
    PlanStep {
        name: "settings",
        provides: Entity::Settings,
        requires: &[],
    },
    PlanStep {
        name: "article versions",
        provides: Entity::ArticleVersions,
        requires: &[Entity::Articles],
    },
    PlanStep {
        name: "galleries",
        provides: Entity::Galleries,
        requires: &[Entity::Articles],
    },
    PlanStep {
        name: "comments",
        provides: Entity::Comments,
        requires: &[Entity::Articles],
    },
    PlanStep {
        name: "client comments",
        provides: Entity::ClientComments,
        requires: &[Entity::Clients],
    },
    PlanStep {
        name: "interactions",
        provides: Entity::Interactions,
        requires: &[Entity::Articles, Entity::Clients, Entity::Comments],
    },
    PlanStep {
        name: "views",
        provides: Entity::Views,
        requires: &[Entity::Articles],
    },
    PlanStep {
        name: "tracking",
        provides: Entity::Tracking,
        requires: &[Entity::Articles, Entity::Clients],
    },
];

/// The full seed plan, in execution order.
pub fn plan() -> &'static [PlanStep] {
    PLAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_requirement_is_provided_earlier() {
        let steps = plan();
        for (idx, step) in steps.iter().enumerate() {
            for requirement in step.requires {
                let provider = steps
                    .iter()
                    .position(|s| s.provides == *requirement)
                    .unwrap_or_else(|| panic!("nothing provides {requirement:?}"));
                assert!(
                    provider < idx,
                    "step '{}' requires {requirement:?}, provided only at position {provider}",
                    step.name
                );
            }
        }
    }

    #[test]
    fn test_no_entity_provided_twice() {
        let steps = plan();
        for (idx, step) in steps.iter().enumerate() {
            let duplicate = steps[idx + 1..].iter().find(|s| s.provides == step.provides);
            assert!(duplicate.is_none(), "{:?} provided twice", step.provides);
        }
    }

    #[test]
    fn test_clients_only_prefix_covers_the_client_graph() {
        let prefix: Vec<Entity> = plan()[..CLIENTS_ONLY_STEPS]
            .iter()
            .map(|s| s.provides)
            .collect();
        assert_eq!(
            prefix,
            vec![
                Entity::Tiers,
                Entity::Industries,
                Entity::Clients,
                Entity::Author
            ]
        );
    }

    #[test]
    fn test_articles_come_before_every_dependent() {
        let steps = plan();
        let articles = steps
            .iter()
            .position(|s| s.provides == Entity::Articles)
            .unwrap();
        for dependent in [
            Entity::ArticleTags,
            Entity::Analytics,
            Entity::RelatedArticles,
            Entity::ArticleVersions,
            Entity::Galleries,
            Entity::Comments,
            Entity::Views,
            Entity::Tracking,
        ] {
            let position = steps.iter().position(|s| s.provides == dependent).unwrap();
            assert!(position > articles);
        }
    }
}
