use kaycore_common::Service;

fn service(id: u32, title: &str, slug: &str, description: &str, features: &[&str]) -> Service {
    Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        slug: slug.to_string(),
        image: format!("/assets/services/{slug}.webp"),
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            1,
            "AI & Machine Learning",
            "ai-machine-learning",
            "From first use case to production model: we design, build and operate AI systems that earn their keep.",
            &[
                "Use-case discovery workshops",
                "LLM integration and retrieval pipelines",
                "Model evaluation and monitoring",
                "MLOps platform setup",
            ],
        ),
        service(
            2,
            "Cloud Migration & Architecture",
            "cloud-migration",
            "Move workloads to the cloud without surprises, then keep the bill under control.",
            &[
                "Migration assessment and roadmap",
                "Landing zone and infrastructure as code",
                "Cost optimization reviews",
                "Multi-cloud and hybrid designs",
            ],
        ),
        service(
            3,
            "Cybersecurity",
            "cybersecurity",
            "Practical security programs sized for your organization, from zero trust rollouts to incident response.",
            &[
                "Security posture assessment",
                "Zero trust architecture",
                "Penetration testing coordination",
                "Incident response playbooks",
            ],
        ),
        service(
            4,
            "Data Engineering",
            "data-engineering",
            "Reliable pipelines and warehouses so analysts and models get clean data on time, every time.",
            &[
                "Pipeline design and orchestration",
                "Data warehouse modernization",
                "Data quality contracts",
                "Real-time streaming",
            ],
        ),
        service(
            5,
            "Custom Software Development",
            "custom-software",
            "Product-minded engineering teams that build web platforms and internal tools with you, not just for you.",
            &[
                "Web and mobile applications",
                "API design and integration",
                "Legacy modernization",
                "Team augmentation",
            ],
        ),
        service(
            6,
            "DevOps & Reliability",
            "devops-reliability",
            "Ship faster and sleep better with delivery pipelines, observability and resilience testing.",
            &[
                "CI/CD pipelines",
                "Observability stacks",
                "Chaos engineering game days",
                "On-call and SLO practices",
            ],
        ),
    ]
}

pub fn find_service(slug: &str) -> Option<Service> {
    services().into_iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_is_findable_by_slug() {
        for s in services() {
            assert_eq!(find_service(&s.slug).map(|f| f.id), Some(s.id));
            assert!(!s.features.is_empty());
        }
        assert!(find_service("underwater-basket-weaving").is_none());
    }
}
