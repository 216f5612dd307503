use kaycore_common::{CaseStudy, Industry, Partner, TeamMember};

fn member(name: &str, role: &str, bio: &str, image: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        image: format!("/assets/team/{image}.webp"),
    }
}

pub fn team() -> Vec<TeamMember> {
    vec![
        member(
            "Kay Okafor",
            "Founder & Principal Consultant",
            "Fifteen years building data platforms for banks and logistics companies before starting Kaycore.",
            "kay",
        ),
        member(
            "Mira Lindqvist",
            "Head of AI",
            "Former research engineer who now spends her time getting models out of notebooks and into products.",
            "mira",
        ),
        member(
            "Daniel Reyes",
            "Cloud Architect",
            "Has migrated more data centers than he cares to count and still enjoys reading cloud invoices.",
            "daniel",
        ),
        member(
            "Aisha Rahman",
            "Security Lead",
            "Runs our security practice and the occasional tabletop exercise that leaves executives sweating.",
            "aisha",
        ),
    ]
}

fn industry(name: &str, description: &str, icon: &str) -> Industry {
    Industry {
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

pub fn industries() -> Vec<Industry> {
    vec![
        industry("Financial Services", "Risk models, fraud detection and compliant cloud platforms.", "🏦"),
        industry("Healthcare & Life Sciences", "Clinical data pipelines and genomics workloads.", "🧬"),
        industry("Logistics", "Route optimization and real-time tracking at scale.", "🚚"),
        industry("Retail & E-commerce", "Personalization, demand forecasting and resilient storefronts.", "🛒"),
        industry("Manufacturing", "Predictive maintenance and connected factory data.", "🏭"),
        industry("Public Sector", "Secure, accessible digital services for citizens.", "🏛️"),
    ]
}

fn partner(name: &str, logo: &str, url: &str) -> Partner {
    Partner {
        name: name.to_string(),
        logo: format!("/assets/partners/{logo}.svg"),
        url: url.to_string(),
    }
}

pub fn partners() -> Vec<Partner> {
    vec![
        partner("Amazon Web Services", "aws", "https://aws.amazon.com"),
        partner("Microsoft Azure", "azure", "https://azure.microsoft.com"),
        partner("Google Cloud", "gcp", "https://cloud.google.com"),
        partner("Databricks", "databricks", "https://www.databricks.com"),
        partner("Snowflake", "snowflake", "https://www.snowflake.com"),
    ]
}

fn case_study(
    id: u32,
    client: &str,
    industry: &str,
    title: &str,
    summary: &str,
    outcomes: &[&str],
) -> CaseStudy {
    CaseStudy {
        id,
        client: client.to_string(),
        industry: industry.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        outcomes: outcomes.iter().map(|o| o.to_string()).collect(),
        slug: title.to_lowercase().replace(|c: char| !c.is_ascii_alphanumeric(), "-"),
    }
}

pub fn case_studies() -> Vec<CaseStudy> {
    vec![
        case_study(
            1,
            "Nordbank",
            "Financial Services",
            "Real-time fraud scoring",
            "Replaced a nightly batch rules engine with a streaming model that scores card transactions in under 50 ms.",
            &["62% fewer false positives", "Fraud losses down 31%", "Scoring latency p99 < 50 ms"],
        ),
        case_study(
            2,
            "Helix Diagnostics",
            "Healthcare & Life Sciences",
            "Genomics pipeline on the cloud",
            "Moved sequencing analysis from an on-premise cluster to autoscaling cloud batch jobs.",
            &["Turnaround from 5 days to 18 hours", "Compute cost down 44%"],
        ),
        case_study(
            3,
            "Freightline",
            "Logistics",
            "AI document processing",
            "Automated extraction of bills of lading and customs forms with human review for low-confidence fields.",
            &["80% of documents fully automated", "Processing time per document from 6 min to 20 s"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_study_slugs_are_url_safe() {
        for study in case_studies() {
            assert!(study.slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
            assert!(!study.outcomes.is_empty());
        }
        assert_eq!(case_studies()[0].slug, "real-time-fraud-scoring");
    }
}
