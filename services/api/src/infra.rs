use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use jobdeck::board::JobRecord;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn record(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    job_type: &str,
    remote: bool,
    experience: &str,
    description: &str,
    tags: &[&str],
    posted: &str,
) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        job_type: job_type.to_string(),
        remote,
        experience: experience.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        posted: posted.to_string(),
        rating: None,
        reviews: None,
        apply_link: None,
    }
}

/// Built-in catalog used when no `APP_JOBS_CSV` is configured, so `serve`
/// and `demo` work out of the box.
pub(crate) fn sample_catalog() -> Vec<JobRecord> {
    let mut jobs = vec![
        record(
            "job-1",
            "Frontend Engineer",
            "Pixelworks",
            "Bengaluru",
            "50000 - 70000",
            "Full-time",
            false,
            "2-4 years",
            "Ship design-system components for the hiring dashboard.",
            &["react", "ui"],
            "2026-07-28",
        ),
        record(
            "job-2",
            "Backend Engineer",
            "Stacklane",
            "Pune",
            "80000 - 100000",
            "Full-time",
            true,
            "3-5 years",
            "Own Rust services behind the listings API.",
            &["rust", "axum"],
            "2026-07-30",
        ),
        record(
            "job-3",
            "Data Analyst Intern",
            "Numbercrunch",
            "Bengaluru",
            "20000 - 30000",
            "Internship",
            false,
            "0-1 years",
            "Support the analytics team with reporting queries.",
            &["sql"],
            "2026-08-01",
        ),
        record(
            "job-4",
            "Platform Engineer",
            "Cloudloom",
            "Hyderabad",
            "120000 - 150000",
            "Full-time",
            true,
            "5-8 years",
            "Run the multi-region Kubernetes platform.",
            &["kubernetes", "terraform"],
            "2026-08-02",
        ),
        record(
            "job-5",
            "Staff Engineer",
            "Meshworks",
            "Mumbai",
            "140000 - 180000",
            "Full-time",
            true,
            "8+ years",
            "Technical leadership across the payments group.",
            &[],
            "2026-08-03",
        ),
        record(
            "job-6",
            "QA Engineer",
            "Stacklane",
            "Pune",
            "45000 - 60000",
            "Full-time",
            false,
            "2-4 years",
            "Grow the end-to-end regression suite.",
            &["automation"],
            "2026-08-04",
        ),
        record(
            "job-7",
            "ML Research Intern",
            "Remote Labs",
            "Remote City",
            "80000 - 100000",
            "Internship",
            true,
            "0-2 years",
            "Prototype ranking models for job search.",
            &["python", "ml"],
            "2026-08-05",
        ),
        record(
            "job-8",
            "Site Reliability Engineer",
            "Cloudloom",
            "Hyderabad",
            "110000 - 140000",
            "Full-time",
            true,
            "4-6 years",
            "Keep the listing pipeline inside its error budget.",
            &["sre"],
            "2026-08-06",
        ),
        record(
            "job-9",
            "Product Designer",
            "Pixelworks",
            "Bengaluru",
            "70000 - 90000",
            "Full-time",
            false,
            "3-5 years",
            "Design the browse and detail experiences.",
            &["figma"],
            "2026-08-07",
        ),
        record(
            "job-10",
            "Engineering Manager",
            "Meshworks",
            "Mumbai",
            "160000 - 200000",
            "Full-time",
            false,
            "8+ years",
            "Lead the search and discovery team.",
            &[],
            "2026-08-08",
        ),
    ];

    jobs[1].rating = Some(4.2);
    jobs[1].reviews = Some(318);
    jobs[1].apply_link = Some("https://stacklane.example/careers/2".to_string());
    jobs[4].rating = Some(4.7);
    jobs[4].reviews = Some(54);

    jobs
}
