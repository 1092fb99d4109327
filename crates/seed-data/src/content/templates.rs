//! Static template bank, the terminal content tier.
//!
//! Compiled-in copy for every content kind. Selection cycles
//! deterministically so a seeded run is reproducible; uniqueness of the
//! derived slugs is the caller's concern.

use newsroom::models::ContentLength;

use super::{ContentContext, ContentKind, FaqSeed, Headline, IndustryProfile, Payload};

const INDUSTRY_PROFILES: &[(&str, &str)] = &[
    (
        "Financial Services",
        "Banks, insurers, and fintech challengers navigating regulation while modernizing customer experience.",
    ),
    (
        "Healthcare",
        "Providers, payers, and digital health companies balancing patient outcomes with operational efficiency.",
    ),
    (
        "Software & SaaS",
        "Product-led software companies competing on onboarding, retention, and expansion revenue.",
    ),
    (
        "Manufacturing",
        "Industrial manufacturers digitizing supply chains and selling through increasingly technical buyers.",
    ),
    (
        "Retail & E-commerce",
        "Omnichannel retailers fighting for margin with loyalty programs, private labels, and logistics.",
    ),
    (
        "Professional Services",
        "Consultancies, agencies, and firms packaging expertise into productized, recurring offerings.",
    ),
    (
        "Real Estate",
        "Brokerages, proptech platforms, and developers marketing to long-cycle, high-consideration buyers.",
    ),
    (
        "Education",
        "Institutions and edtech vendors reaching learners across admissions, upskilling, and certification.",
    ),
    (
        "Energy & Utilities",
        "Utilities and renewables companies communicating reliability, sustainability, and rate value.",
    ),
    (
        "Logistics & Transportation",
        "Carriers and freight platforms selling speed, visibility, and reliability to operations leaders.",
    ),
];

const CATEGORY_NAMES: &[&str] = &[
    "Industry Trends",
    "Case Studies",
    "How-To Guides",
    "Product Updates",
    "Thought Leadership",
    "Market Research",
    "Best Practices",
    "Customer Stories",
    "Company News",
    "Webinars & Events",
    "Data & Analytics",
    "Strategy",
    "Interviews",
    "Opinion",
    "Tutorials",
    "Announcements",
];

const TAG_VOCABULARY: &[&str] = &[
    "SEO",
    "content marketing",
    "lead generation",
    "B2B",
    "SaaS",
    "growth",
    "analytics",
    "branding",
    "email marketing",
    "social media",
    "conversion",
    "automation",
    "customer success",
    "product marketing",
    "demand generation",
    "thought leadership",
    "case study",
    "ROI",
    "strategy",
    "digital transformation",
    "AI",
    "personalization",
    "retention",
    "onboarding",
    "pricing",
    "market research",
    "webinar",
    "newsletter",
];

const TITLE_TEMPLATES: &[&str] = &[
    "7 Ways to Improve Your {topic} This Quarter",
    "The Complete Guide to {topic}",
    "Why {topic} Matters More Than Ever",
    "How Industry Leaders Approach {topic}",
    "{topic}: Common Mistakes and How to Avoid Them",
    "What Nobody Tells You About {topic}",
    "A Practical Framework for {topic}",
    "The Future of {topic} in a Changing Market",
    "From Zero to Results: Getting Started with {topic}",
    "Measuring What Matters in {topic}",
    "5 Trends Reshaping {topic} This Year",
    "Building a Business Case for {topic}",
];

const TITLE_TOPICS: &[&str] = &[
    "Content Marketing",
    "Lead Generation",
    "Customer Retention",
    "Marketing Automation",
    "Brand Strategy",
    "Demand Generation",
    "Account-Based Marketing",
    "Conversion Optimization",
    "Email Campaigns",
    "Sales Enablement",
    "Product Launches",
    "Market Positioning",
    "Customer Onboarding",
    "Data-Driven Marketing",
];

const BODY_PARAGRAPHS: &[&str] = &[
    "Every growth team eventually confronts the same tension: the channels that built the pipeline last year rarely scale at the same cost this year. The organizations that keep compounding are the ones that treat distribution as a portfolio, rebalancing spend as unit economics shift rather than defending last quarter's playbook.",
    "Start with the audience, not the asset. Before a single word is drafted, the team should be able to name the reader, the decision that reader is weighing, and the objection most likely to stall it. Content produced without that sentence written down tends to read well and convert poorly.",
    "Measurement is where most programs quietly fail. Page views and time-on-page flatter the author; pipeline influence and sales-cycle acceleration pay the bills. Instrumenting the path between the two takes a quarter of unglamorous work, and it is the single highest-leverage investment a content team can make.",
    "Distribution deserves as much creative energy as production. A strong piece republished, excerpted, translated into a checklist, and cut into a webinar outline will outperform three new pieces shipped into silence. The teams that win treat every asset as a family of formats, not a single URL.",
    "Consistency beats intensity. A sustainable cadence the team can hold for a year builds more authority than a burst of launches followed by silence. Editorial calendars exist to protect that cadence from the urgent requests that would otherwise consume it.",
    "Sales conversations are the cheapest research program available. The questions prospects ask in the last two weeks are next month's highest-converting headlines, in the buyer's own vocabulary. A standing interview with the sales team costs one hour and replaces a quarter of guesswork.",
    "Internal expertise is the moat. Generic advice is abundant and free; the perspective of the people who have shipped, priced, migrated, and failed is scarce. The editorial function's real job is extraction: getting what the experts know out of their heads and into the market's hands.",
    "Finally, resist the urge to chase every format at once. Master one channel until it produces predictable results, document what made it work, and only then expand. Breadth before depth is how content programs end up busy, expensive, and invisible.",
];

const FAQ_TEMPLATES: &[(&str, &str)] = &[
    (
        "What industries do you specialize in?",
        "We work across B2B sectors with deep experience in software, financial services, healthcare, and manufacturing. Our strategists pair industry context with your in-house expertise.",
    ),
    (
        "How quickly can we expect results?",
        "Most clients see meaningful movement in organic traffic and engagement within one to two quarters. Pipeline impact typically follows in the second quarter as content compounds.",
    ),
    (
        "Do you work with our existing brand guidelines?",
        "Yes. Every engagement starts with an onboarding review of your brand voice, visual identity, and compliance requirements before anything is published.",
    ),
    (
        "Who owns the content you produce?",
        "You do. All deliverables, source files, and performance data belong to your organization from the moment they are created.",
    ),
    (
        "Can you integrate with our marketing stack?",
        "We publish and report through the tools you already use, including the major CMS, CRM, and analytics platforms. Custom integrations are scoped during onboarding.",
    ),
    (
        "How is pricing structured?",
        "Engagements are tiered by volume and strategic depth. Each tier includes a fixed monthly deliverable set, and you can change tiers at the start of any quarter.",
    ),
    (
        "What does the revision process look like?",
        "Every piece includes two revision rounds with your reviewers. Feedback is consolidated in a shared workspace so approvals stay fast and auditable.",
    ),
    (
        "Do you support multiple languages?",
        "Yes. Content can be produced or localized in the languages your markets require, with native-speaking editors reviewing every localized piece.",
    ),
];

/// Compiled-in content for every kind the resolver can request.
#[derive(Debug, Default)]
pub struct TemplateBank;

impl TemplateBank {
    pub fn new() -> Self {
        Self
    }

    /// Produces bank content for a kind. Unlike the remote tiers this
    /// cannot fail, which is what makes the chain total.
    pub fn produce(&self, kind: ContentKind, ctx: &ContentContext) -> Payload {
        match kind {
            ContentKind::IndustryProfiles => Payload::Profiles(self.industry_profiles(ctx.count)),
            ContentKind::CategoryVocabulary => Payload::Terms(self.category_names(ctx.count)),
            ContentKind::TagVocabulary => Payload::Terms(self.tag_vocabulary(ctx.count)),
            ContentKind::ArticleTitles => Payload::Headlines(self.article_titles(ctx.count)),
            ContentKind::ArticleBody(length) => Payload::Body(self.article_body(length)),
            ContentKind::FaqTemplates => Payload::Faqs(self.faq_templates(ctx.count)),
        }
    }

    pub fn industry_profiles(&self, count: usize) -> Vec<IndustryProfile> {
        cycle(INDUSTRY_PROFILES, count)
            .map(|(name, description)| IndustryProfile {
                name: (*name).to_string(),
                description: (*description).to_string(),
                seo_description: None,
            })
            .collect()
    }

    pub fn category_names(&self, count: usize) -> Vec<String> {
        cycle(CATEGORY_NAMES, count).map(|s| (*s).to_string()).collect()
    }

    pub fn tag_vocabulary(&self, count: usize) -> Vec<String> {
        cycle(TAG_VOCABULARY, count).map(|s| (*s).to_string()).collect()
    }

    /// Builds `count` headlines by crossing title templates with topics.
    /// The template index advances fastest, so consecutive titles differ in
    /// shape rather than only in subject.
    pub fn article_titles(&self, count: usize) -> Vec<Headline> {
        (0..count.max(1))
            .map(|i| {
                let template = TITLE_TEMPLATES[i % TITLE_TEMPLATES.len()];
                let topic = TITLE_TOPICS[(i / TITLE_TEMPLATES.len() + i) % TITLE_TOPICS.len()];
                Headline {
                    title: template.replace("{topic}", topic),
                    tags: vec![topic.to_string()],
                }
            })
            .collect()
    }

    /// Body copy sized to the length class: 2 paragraphs for short, 4 for
    /// medium, all 8 for long.
    pub fn article_body(&self, length: ContentLength) -> String {
        let paragraphs = match length {
            ContentLength::Short => 2,
            ContentLength::Medium => 4,
            ContentLength::Long => BODY_PARAGRAPHS.len(),
        };
        BODY_PARAGRAPHS[..paragraphs].join("\n\n")
    }

    pub fn faq_templates(&self, count: usize) -> Vec<FaqSeed> {
        cycle(FAQ_TEMPLATES, count)
            .map(|(question, answer)| FaqSeed {
                question: (*question).to_string(),
                answer: (*answer).to_string(),
            })
            .collect()
    }
}

/// Cycles a static slice to yield exactly `count.max(1)` items.
fn cycle<T>(items: &[T], count: usize) -> impl Iterator<Item = &T> {
    items.iter().cycle().take(count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_non_empty() {
        let bank = TemplateBank::new();
        let ctx = ContentContext {
            count: 5,
            ..Default::default()
        };

        for kind in [
            ContentKind::IndustryProfiles,
            ContentKind::CategoryVocabulary,
            ContentKind::TagVocabulary,
            ContentKind::ArticleTitles,
            ContentKind::ArticleBody(ContentLength::Short),
            ContentKind::FaqTemplates,
        ] {
            let non_empty = match bank.produce(kind, &ctx) {
                Payload::Headlines(v) => !v.is_empty(),
                Payload::Profiles(v) => !v.is_empty(),
                Payload::Terms(v) => !v.is_empty(),
                Payload::Body(s) => !s.is_empty(),
                Payload::Faqs(v) => !v.is_empty(),
            };
            assert!(non_empty, "bank produced nothing for {kind:?}");
        }
    }

    #[test]
    fn test_title_count_respected() {
        let bank = TemplateBank::new();
        assert_eq!(bank.article_titles(40).len(), 40);
        assert_eq!(bank.article_titles(0).len(), 1);
    }

    #[test]
    fn test_titles_have_no_placeholder_left() {
        let bank = TemplateBank::new();
        for headline in bank.article_titles(30) {
            assert!(!headline.title.contains("{topic}"), "{}", headline.title);
        }
    }

    #[test]
    fn test_body_lengths_are_ordered() {
        let bank = TemplateBank::new();
        let short = bank.article_body(ContentLength::Short).len();
        let medium = bank.article_body(ContentLength::Medium).len();
        let long = bank.article_body(ContentLength::Long).len();
        assert!(short < medium && medium < long);
    }
}
