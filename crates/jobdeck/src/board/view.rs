use serde::Serialize;

use super::domain::{JobRecord, SalaryBand};
use super::filter::{filter_jobs, FilterSelection};
use super::paginate::{clamp_page, page_slice, total_pages, PaginationView};

/// Card-sized projection of a record for the list page.
#[derive(Debug, Clone, Serialize)]
pub struct JobCardView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub work_mode: &'static str,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub posted: String,
}

impl JobCardView {
    fn from_record(job: &JobRecord) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            job_type: job.job_type.clone(),
            work_mode: job.work_mode().label(),
            experience: job.experience.clone(),
            description: job.description.clone(),
            tags: job.tags.clone(),
            posted: job.posted.clone(),
        }
    }
}

/// Full projection for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetailView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub work_mode: &'static str,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub posted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
}

impl JobDetailView {
    fn from_record(job: &JobRecord) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            job_type: job.job_type.clone(),
            work_mode: job.work_mode().label(),
            experience: job.experience.clone(),
            description: job.description.clone(),
            tags: job.tags.clone(),
            posted: job.posted.clone(),
            rating: job.rating,
            reviews: job.reviews,
            apply_link: job.apply_link.clone(),
        }
    }
}

/// Everything the presentation layer needs to render one list page: the
/// visible slice, the stable filter option sets, the empty-result flag, and
/// pagination control metadata.
#[derive(Debug, Clone, Serialize)]
pub struct JobListView {
    pub jobs: Vec<JobCardView>,
    pub locations: Vec<String>,
    pub salary_bands: Vec<&'static str>,
    pub total_matches: usize,
    pub empty_result: bool,
    pub pagination: PaginationView,
}

/// Immutable snapshot of the loaded job collection plus the option sets
/// captured from it at load time. Filter options are derived from the full
/// collection, never from a filtered subset, so they stay stable while other
/// filters are applied.
#[derive(Debug, Clone)]
pub struct JobBoard {
    jobs: Vec<JobRecord>,
    locations: Vec<String>,
}

impl JobBoard {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        let mut locations: Vec<String> = Vec::new();
        for job in &jobs {
            if !locations.contains(&job.location) {
                locations.push(job.location.clone());
            }
        }
        Self { jobs, locations }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Distinct locations in first-appearance order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Compose the list view model for a selection and a requested page.
    /// The page is clamped into range; stateful callers pass a page they
    /// already keep valid.
    pub fn browse(&self, selection: &FilterSelection, requested_page: usize) -> JobListView {
        let filtered = filter_jobs(&self.jobs, selection);
        let pages = total_pages(filtered.len());
        let current_page = clamp_page(requested_page, pages);
        let jobs = page_slice(&filtered, current_page)
            .iter()
            .map(|job| JobCardView::from_record(job))
            .collect();

        JobListView {
            jobs,
            locations: self.locations.clone(),
            salary_bands: SalaryBand::ALL.iter().map(|band| band.label()).collect(),
            total_matches: filtered.len(),
            empty_result: filtered.is_empty(),
            pagination: PaginationView::new(current_page, pages),
        }
    }

    /// Detail lookup by the record's stable id.
    pub fn detail(&self, id: &str) -> Option<JobDetailView> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .map(JobDetailView::from_record)
    }
}
