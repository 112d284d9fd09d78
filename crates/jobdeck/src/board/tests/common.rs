use crate::board::domain::JobRecord;

pub(super) fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    job_type: &str,
    remote: bool,
) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        job_type: job_type.to_string(),
        remote,
        experience: "2-4 years".to_string(),
        description: None,
        tags: Vec::new(),
        posted: "2026-08-01".to_string(),
        rating: None,
        reviews: None,
        apply_link: None,
    }
}

/// Six postings covering every filter dimension: two shared locations, a
/// malformed salary, an internship, and a mix of remote/on-site.
pub(super) fn sample_jobs() -> Vec<JobRecord> {
    let mut frontend = job(
        "job-1",
        "Frontend Engineer",
        "Pixelworks",
        "Bengaluru",
        "50000 - 70000",
        "Full-time",
        false,
    );
    frontend.description = Some("Build dashboards and design systems".to_string());
    frontend.tags = vec!["react".to_string(), "ui".to_string()];

    let mut backend = job(
        "job-2",
        "Backend Engineer",
        "Stacklane",
        "Pune",
        "80000 - 100000",
        "Full-time",
        true,
    );
    backend.description = Some("Rust services and streaming pipelines".to_string());
    backend.rating = Some(4.2);
    backend.reviews = Some(318);
    backend.apply_link = Some("https://stacklane.example/careers/2".to_string());

    let intern = job(
        "job-3",
        "Data Analyst Intern",
        "Numbercrunch",
        "Bengaluru",
        "20000 - 30000",
        "Internship",
        false,
    );

    let platform = job(
        "job-4",
        "Platform Engineer",
        "Cloudloom",
        "Hyderabad",
        "120000 - 150000",
        "Full-time",
        true,
    );

    let staff = job(
        "job-5",
        "Staff Engineer",
        "Meshworks",
        "Mumbai",
        "140000 - 180000",
        "Full-time",
        true,
    );

    // Salary field that defeats the range parser on purpose.
    let qa = job(
        "job-6",
        "QA Engineer",
        "Stacklane",
        "Pune",
        "Competitive",
        "Full-time",
        false,
    );

    vec![frontend, backend, intern, platform, staff, qa]
}

/// `count` near-identical postings for pagination scenarios.
pub(super) fn many_jobs(count: usize) -> Vec<JobRecord> {
    (1..=count)
        .map(|n| {
            job(
                &format!("job-{n}"),
                &format!("Engineer {n}"),
                "Bulkcorp",
                "Chennai",
                "90000 - 110000",
                "Full-time",
                n % 2 == 0,
            )
        })
        .collect()
}
