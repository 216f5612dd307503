use kaycore_common::{BlogPost, ContentBlock};

fn p(text: &str) -> ContentBlock {
    ContentBlock::Paragraph { text: text.to_string() }
}

fn h(text: &str) -> ContentBlock {
    ContentBlock::Heading { text: text.to_string() }
}

fn list(items: &[&str]) -> ContentBlock {
    ContentBlock::List { items: items.iter().map(|s| s.to_string()).collect() }
}

fn quote(text: &str, attribution: Option<&str>) -> ContentBlock {
    ContentBlock::Quote {
        text: text.to_string(),
        attribution: attribution.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: u32,
    title: &str,
    slug: &str,
    excerpt: &str,
    date: &str,
    category: &str,
    read_time: &str,
    content: Option<Vec<ContentBlock>>,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        author: "Kaycore Team".to_string(),
        category: category.to_string(),
        read_time: read_time.to_string(),
        image: format!("/assets/blog/{slug}.webp"),
        content,
    }
}

/// Posts bundled with the site, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "The State of Enterprise AI in 2025",
            "enterprise-ai-2025",
            "Most AI pilots never reach production. We look at what separates the teams that ship from the ones stuck in proof-of-concept purgatory.",
            "March 12, 2025",
            "AI & Machine Learning",
            "8 min read",
            Some(vec![
                p("Every board deck now has an AI slide. Far fewer companies have an AI system that a customer actually touches. Over the past year we have helped a dozen teams move models from notebooks into production, and the same patterns keep showing up."),
                h("Start from a decision, not a model"),
                p("The projects that ship begin with a business decision that is made repeatedly and can be measured: approving a claim, routing a ticket, flagging a transaction. The model is a means to make that decision faster or better."),
                list(&[
                    "Pick one workflow and one owner",
                    "Define the metric before collecting data",
                    "Budget for evaluation as much as for training",
                ]),
                h("Production is a data problem"),
                p("Drift, missing fields and silent schema changes break more models than bad architectures do. Monitoring inputs is at least as important as monitoring accuracy."),
                quote("The model was the easy part. Getting clean data to it every day was the project.", Some("CTO, logistics client")),
            ]),
        ),
        post(
            2,
            "Zero Trust Guide for Mid-Sized Companies",
            "zero-trust-guide",
            "Zero trust is not a product you buy. A practical roadmap for teams without a dedicated security department.",
            "February 27, 2025",
            "Cybersecurity",
            "6 min read",
            Some(vec![
                p("Perimeter security assumed that everything inside the network could be trusted. Remote work and SaaS sprawl ended that assumption."),
                h("Three steps that pay off first"),
                list(&[
                    "Enforce single sign-on with phishing-resistant MFA",
                    "Inventory devices and block unmanaged ones from sensitive apps",
                    "Replace standing admin rights with just-in-time access",
                ]),
                p("None of these require a large budget, and together they close the paths used in most breaches we investigate."),
            ]),
        ),
        post(
            3,
            "Cloud Cost Optimization Without the Pain",
            "cloud-cost-optimization",
            "Cloud bills grow quietly. How we cut a client's monthly spend by 38% without touching application code.",
            "February 10, 2025",
            "Cloud Technology",
            "7 min read",
            Some(vec![
                p("Most cloud waste hides in three places: idle environments, oversized instances and forgotten storage."),
                h("Measure before you migrate"),
                p("Tagging every resource with an owner and a cost center turned an opaque bill into a list of conversations. Half the savings came from simply turning things off."),
                quote("You can't optimize what nobody owns.", None),
            ]),
        ),
        post(
            4,
            "Building Data Pipelines That Don't Break at 3 AM",
            "reliable-data-pipelines",
            "Idempotent jobs, explicit contracts and boring technology: lessons from running pipelines for a regional bank.",
            "January 22, 2025",
            "Data Engineering",
            "9 min read",
            None,
        ),
        post(
            5,
            "Kubernetes Is Not Always the Answer",
            "kubernetes-not-always",
            "Container orchestration solves real problems, just not everyone's. A decision framework for choosing your runtime platform.",
            "January 8, 2025",
            "Cloud Technology",
            "5 min read",
            None,
        ),
        post(
            6,
            "LLM Token Budgets: A Field Guide",
            "llm-token-budgets",
            "Prompt length drives both latency and cost. How to estimate, measure and trim token usage in production LLM features.",
            "December 16, 2024",
            "AI & Machine Learning",
            "6 min read",
            None,
        ),
        post(
            7,
            "Incident Response Playbooks That People Actually Use",
            "incident-response-playbooks",
            "A playbook nobody reads at 2 AM is just documentation. How to write runbooks that hold up under pressure.",
            "November 30, 2024",
            "Cybersecurity",
            "7 min read",
            None,
        ),
        post(
            8,
            "Chaos Engineering for Teams Without Netflix's Budget",
            "chaos-engineering-small-teams",
            "Game days, fault injection and steady-state hypotheses on a shoestring: resilience testing for the rest of us.",
            "November 12, 2024",
            "DevOps",
            "8 min read",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_and_ids_are_unique() {
        let posts = blog_posts();
        let slugs: HashSet<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        let ids: HashSet<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(slugs.len(), posts.len());
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn required_display_fields_are_present() {
        for post in blog_posts() {
            assert!(!post.title.is_empty());
            assert!(!post.excerpt.is_empty());
            assert!(!post.category.is_empty());
            assert!(!post.date.is_empty());
        }
    }
}
