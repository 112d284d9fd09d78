use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{JobRecord, SalaryBand, WorkMode};

/// The five-dimension, user-controlled query state. Every dimension defaults
/// to "no restriction"; dimensions combine with logical AND. Selections live
/// for one session only and are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_band: Option<SalaryBand>,
    #[serde(default)]
    pub job_types: BTreeSet<String>,
    #[serde(default)]
    pub work_modes: BTreeSet<WorkMode>,
}

impl FilterSelection {
    /// True iff the record passes all five predicates.
    pub fn matches(&self, job: &JobRecord) -> bool {
        search_matches(job, &self.search_term)
            && location_matches(job, self.location.as_deref())
            && salary_band_matches(job, self.salary_band)
            && job_type_matches(job, &self.job_types)
            && work_mode_matches(job, &self.work_modes)
    }
}

/// Case-insensitive substring match against the textual form of every
/// attribute. An empty term matches everything.
pub fn search_matches(job: &JobRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    job.searchable_values()
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Exact, case-sensitive equality with the selected location.
pub fn location_matches(job: &JobRecord, location: Option<&str>) -> bool {
    location.map_or(true, |location| job.location == location)
}

/// Minimum salary within the band's inclusive bounds. Records whose salary
/// field does not parse are excluded whenever a band is selected.
pub fn salary_band_matches(job: &JobRecord, band: Option<SalaryBand>) -> bool {
    match band {
        None => true,
        Some(band) => job
            .minimum_salary()
            .map_or(false, |minimum| band.contains(minimum)),
    }
}

/// Membership of the job's type in the selected set; an empty set means no
/// restriction.
pub fn job_type_matches(job: &JobRecord, types: &BTreeSet<String>) -> bool {
    types.is_empty() || types.contains(&job.job_type)
}

/// Membership of the job's work mode in the selected set; an empty set means
/// no restriction.
pub fn work_mode_matches(job: &JobRecord, modes: &BTreeSet<WorkMode>) -> bool {
    modes.is_empty() || modes.contains(&job.work_mode())
}

/// Derive the filtered subsequence: every record passing all five predicates,
/// in the input collection's order. Purely derived; callers re-run it on any
/// change to the collection or the selection.
pub fn filter_jobs<'a>(jobs: &'a [JobRecord], selection: &FilterSelection) -> Vec<&'a JobRecord> {
    jobs.iter().filter(|job| selection.matches(job)).collect()
}
