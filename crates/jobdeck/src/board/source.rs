use std::fs::File;
use std::future::Future;
use std::io;
use std::path::Path;

use serde::Deserialize;

use super::domain::JobRecord;

/// Failures surfaced by job sources. None are fatal; the presentation layer
/// renders an error or empty state and carries on.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read job catalog: {0}")]
    Io(#[from] io::Error),
    #[error("malformed job catalog: {0}")]
    Malformed(#[from] csv::Error),
    #[error("job source unavailable: {0}")]
    Unavailable(String),
    #[error("job '{id}' not found")]
    NotFound { id: String },
}

/// Asynchronous provider of the full, ordered job collection.
pub trait JobListSource: Send + Sync {
    fn fetch_jobs(&self) -> impl Future<Output = Result<Vec<JobRecord>, SourceError>> + Send;
}

/// Asynchronous provider of exactly one record by id.
pub trait JobDetailSource: Send + Sync {
    fn fetch_job(&self, id: &str) -> impl Future<Output = Result<JobRecord, SourceError>> + Send;
}

/// Raw CSV row; `id` and the optional attributes may be blank cells.
#[derive(Debug, Deserialize)]
struct CsvJobRow {
    #[serde(default)]
    id: Option<String>,
    title: String,
    company: String,
    location: String,
    salary: String,
    #[serde(rename = "type")]
    job_type: String,
    remote: bool,
    experience: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<String>,
    posted: String,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    reviews: Option<u32>,
    #[serde(default)]
    apply_link: Option<String>,
}

impl CsvJobRow {
    /// `index` is the zero-based row position, used to synthesize a stable
    /// fallback id when the source omits one.
    fn into_record(self, index: usize) -> JobRecord {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("job-{}", index + 1));
        let tags = self
            .tags
            .map(|tags| {
                tags.split(';')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        JobRecord {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type,
            remote: self.remote,
            experience: self.experience,
            description: self.description,
            tags,
            posted: self.posted,
            rating: self.rating,
            reviews: self.reviews,
            apply_link: self.apply_link,
        }
    }
}

/// CSV-backed job catalog serving both the list and detail contracts.
///
/// Expected header: `id,title,company,location,salary,type,remote,experience,
/// description,tags,posted,rating,reviews,apply_link`, tags separated by
/// `;` within their cell.
#[derive(Debug, Clone)]
pub struct CsvJobCatalog {
    jobs: Vec<JobRecord>,
}

impl CsvJobCatalog {
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, SourceError> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut jobs = Vec::new();
        for (index, row) in reader.deserialize::<CsvJobRow>().enumerate() {
            jobs.push(row?.into_record(index));
        }
        Ok(Self { jobs })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_records(jobs: Vec<JobRecord>) -> Self {
        Self { jobs }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<JobRecord> {
        self.jobs
    }
}

impl JobListSource for CsvJobCatalog {
    fn fetch_jobs(&self) -> impl Future<Output = Result<Vec<JobRecord>, SourceError>> + Send {
        async move { Ok(self.jobs.clone()) }
    }
}

impl JobDetailSource for CsvJobCatalog {
    fn fetch_job(&self, id: &str) -> impl Future<Output = Result<JobRecord, SourceError>> + Send {
        async move {
            self.jobs
                .iter()
                .find(|job| job.id == id)
                .cloned()
                .ok_or_else(|| SourceError::NotFound { id: id.to_string() })
        }
    }
}
