use kaycore_common::JobOpportunity;

fn job(
    id: u32,
    title: &str,
    department: &str,
    location: &str,
    employment_type: &str,
    description: &str,
    requirements: &[&str],
) -> JobOpportunity {
    JobOpportunity {
        id,
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        employment_type: employment_type.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn job_openings() -> Vec<JobOpportunity> {
    vec![
        job(
            1,
            "Senior Machine Learning Engineer",
            "AI & Machine Learning",
            "Remote (EU)",
            "Full-time",
            "Design and ship ML systems for clients in finance and logistics, from feature pipelines to model serving.",
            &[
                "5+ years building production ML systems",
                "Strong Python and SQL",
                "Experience with at least one major cloud provider",
            ],
        ),
        job(
            2,
            "Cloud Platform Engineer",
            "Cloud",
            "Helsinki or Remote",
            "Full-time",
            "Build landing zones, CI/CD and observability for client platforms using infrastructure as code.",
            &[
                "Terraform or Pulumi in production",
                "Kubernetes operations experience",
                "Comfortable talking to clients",
            ],
        ),
        job(
            3,
            "Security Consultant",
            "Cybersecurity",
            "Remote (EU)",
            "Full-time",
            "Run security assessments and help clients roll out zero trust architectures.",
            &[
                "Background in identity and access management",
                "Hands-on incident response experience",
                "Relevant certification is a plus",
            ],
        ),
        job(
            4,
            "Data Engineering Intern",
            "Data Engineering",
            "Helsinki",
            "Internship",
            "Work alongside senior engineers on real client pipelines for six months.",
            &["Studying computer science or similar", "Some SQL and Python"],
        ),
    ]
}

/// "All" plus each department that has an opening, in listing order.
pub fn departments(jobs: &[JobOpportunity]) -> Vec<String> {
    let mut out = vec!["All".to_string()];
    for job in jobs {
        if !out.contains(&job.department) {
            out.push(job.department.clone());
        }
    }
    out
}

pub fn openings_in<'a>(jobs: &'a [JobOpportunity], department: &str) -> Vec<&'a JobOpportunity> {
    jobs.iter()
        .filter(|j| department == "All" || j.department == department)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_filter() {
        let jobs = job_openings();
        let departments = departments(&jobs);
        assert_eq!(departments[0], "All");
        assert_eq!(openings_in(&jobs, "All").len(), jobs.len());
        assert_eq!(openings_in(&jobs, "Cybersecurity").len(), 1);
        assert!(openings_in(&jobs, "Finance").is_empty());
    }
}
