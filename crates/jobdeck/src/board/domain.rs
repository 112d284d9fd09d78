use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One job posting as supplied by a job list source.
///
/// `id` is the sole key used for detail lookup and list rendering; sources
/// must guarantee it is stable and unique. Duplicate ids are a data-source
/// error, not handled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-text salary range, e.g. "80000 - 100000".
    pub salary: String,
    /// Open-ended: "Full-time", "Internship", and whatever future values
    /// sources invent.
    pub job_type: String,
    pub remote: bool,
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub posted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
}

impl JobRecord {
    /// Lower edge of the advertised salary range: the text before the literal
    /// `" - "` separator (the whole field when there is none), stripped of
    /// everything but digits. `None` when nothing parses; band filtering
    /// excludes such records rather than erroring.
    pub fn minimum_salary(&self) -> Option<u32> {
        let head = self.salary.split(" - ").next().unwrap_or(&self.salary);
        let digits: String = head.chars().filter(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    pub fn work_mode(&self) -> WorkMode {
        if self.remote {
            WorkMode::Remote
        } else {
            WorkMode::OnSite
        }
    }

    /// Textual form of every attribute, for the free-text search predicate.
    /// Coercions mirror a loosely typed record: booleans become
    /// "true"/"false", numbers their decimal form, tags a comma-joined list.
    /// Absent optional attributes are skipped.
    pub fn searchable_values(&self) -> Vec<String> {
        let mut values = vec![
            self.id.clone(),
            self.title.clone(),
            self.company.clone(),
            self.location.clone(),
            self.salary.clone(),
            self.job_type.clone(),
            self.remote.to_string(),
            self.experience.clone(),
        ];
        if let Some(description) = &self.description {
            values.push(description.clone());
        }
        if !self.tags.is_empty() {
            values.push(self.tags.join(","));
        }
        values.push(self.posted.clone());
        if let Some(rating) = self.rating {
            values.push(rating.to_string());
        }
        if let Some(reviews) = self.reviews {
            values.push(reviews.to_string());
        }
        if let Some(apply_link) = &self.apply_link {
            values.push(apply_link.clone());
        }
        values
    }
}

/// Whether a posting is worked remotely or on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    #[serde(rename = "On-site")]
    OnSite,
}

impl WorkMode {
    pub const ALL: [WorkMode; 2] = [WorkMode::Remote, WorkMode::OnSite];

    pub const fn label(self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::OnSite => "On-site",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkMode {
    type Err = UnknownWorkMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(WorkMode::Remote),
            "on-site" | "onsite" => Ok(WorkMode::OnSite),
            _ => Err(UnknownWorkMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown work mode '{0}' (expected Remote or On-site)")]
pub struct UnknownWorkMode(pub String);

/// One of the four fixed buckets a posting's minimum salary can fall into.
/// Bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SalaryBand {
    #[serde(rename = "0-70k")]
    UpTo70k,
    #[serde(rename = "70k-100k")]
    From70kTo100k,
    #[serde(rename = "100k-130k")]
    From100kTo130k,
    #[serde(rename = "130k+")]
    Above130k,
}

impl SalaryBand {
    pub const ALL: [SalaryBand; 4] = [
        SalaryBand::UpTo70k,
        SalaryBand::From70kTo100k,
        SalaryBand::From100kTo130k,
        SalaryBand::Above130k,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SalaryBand::UpTo70k => "0-70k",
            SalaryBand::From70kTo100k => "70k-100k",
            SalaryBand::From100kTo130k => "100k-130k",
            SalaryBand::Above130k => "130k+",
        }
    }

    pub const fn bounds(self) -> (u32, Option<u32>) {
        match self {
            SalaryBand::UpTo70k => (0, Some(70_000)),
            SalaryBand::From70kTo100k => (70_000, Some(100_000)),
            SalaryBand::From100kTo130k => (100_000, Some(130_000)),
            SalaryBand::Above130k => (130_000, None),
        }
    }

    pub fn contains(self, minimum_salary: u32) -> bool {
        let (lower, upper) = self.bounds();
        minimum_salary >= lower && upper.map_or(true, |upper| minimum_salary <= upper)
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SalaryBand {
    type Err = UnknownSalaryBand;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SalaryBand::ALL
            .into_iter()
            .find(|band| band.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownSalaryBand(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown salary band '{0}' (expected 0-70k, 70k-100k, 100k-130k, or 130k+)")]
pub struct UnknownSalaryBand(pub String);
