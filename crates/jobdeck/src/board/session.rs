use std::collections::BTreeSet;

use super::domain::{JobRecord, SalaryBand, WorkMode};
use super::filter::{filter_jobs, FilterSelection};
use super::paginate::total_pages;
use super::view::{JobBoard, JobListView};

/// Observable states of the asynchronous catalog fetch. While `Pending` or
/// `Failed` the session runs no derivations; consumers gate rendering on the
/// corresponding [`SessionView`] variants.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Pending,
    Ready(JobBoard),
    Failed { message: String },
}

/// What the presentation layer renders for the current session state.
#[derive(Debug, Clone)]
pub enum SessionView {
    Loading,
    Failed { message: String },
    Ready(JobListView),
}

/// Per-session filter state store: the five selection dimensions plus the
/// current page. Every filter-dimension mutation resets the page to 1, for
/// all dimensions uniformly, so the page never points past the last page of
/// a freshly narrowed result.
#[derive(Debug, Clone)]
pub struct JobBrowserSession {
    catalog: CatalogState,
    selection: FilterSelection,
    current_page: usize,
}

impl Default for JobBrowserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBrowserSession {
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::Pending,
            selection: FilterSelection::default(),
            current_page: 1,
        }
    }

    /// Install a freshly fetched collection. Replacing the collection resets
    /// the page; the selection is kept so a reload does not discard the
    /// user's filters.
    pub fn catalog_loaded(&mut self, jobs: Vec<JobRecord>) {
        self.catalog = CatalogState::Ready(JobBoard::new(jobs));
        self.current_page = 1;
    }

    pub fn catalog_failed(&mut self, message: impl Into<String>) {
        self.catalog = CatalogState::Failed {
            message: message.into(),
        };
        self.current_page = 1;
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.selection.search_term = term.into();
        self.current_page = 1;
    }

    /// `None` clears the dimension.
    pub fn set_location(&mut self, location: Option<String>) {
        self.selection.location = location;
        self.current_page = 1;
    }

    /// `None` clears the dimension.
    pub fn set_salary_band(&mut self, band: Option<SalaryBand>) {
        self.selection.salary_band = band;
        self.current_page = 1;
    }

    pub fn set_job_types(&mut self, types: BTreeSet<String>) {
        self.selection.job_types = types;
        self.current_page = 1;
    }

    /// Add or remove one job type from the selected set.
    pub fn toggle_job_type(&mut self, job_type: impl Into<String>) {
        let job_type = job_type.into();
        if !self.selection.job_types.remove(&job_type) {
            self.selection.job_types.insert(job_type);
        }
        self.current_page = 1;
    }

    pub fn clear_job_types(&mut self) {
        self.selection.job_types.clear();
        self.current_page = 1;
    }

    pub fn set_work_modes(&mut self, modes: BTreeSet<WorkMode>) {
        self.selection.work_modes = modes;
        self.current_page = 1;
    }

    /// Add or remove one work mode from the selected set.
    pub fn toggle_work_mode(&mut self, mode: WorkMode) {
        if !self.selection.work_modes.remove(&mode) {
            self.selection.work_modes.insert(mode);
        }
        self.current_page = 1;
    }

    pub fn clear_work_modes(&mut self) {
        self.selection.work_modes.clear();
        self.current_page = 1;
    }

    /// Reset every dimension to its default.
    pub fn clear_filters(&mut self) {
        self.selection = FilterSelection::default();
        self.current_page = 1;
    }

    /// Page count for the current selection; 0 while no catalog is loaded.
    pub fn total_pages(&self) -> usize {
        match &self.catalog {
            CatalogState::Ready(board) => {
                total_pages(filter_jobs(board.jobs(), &self.selection).len())
            }
            _ => 0,
        }
    }

    /// Advance one page; a no-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Go back one page; a no-op on page 1.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jump to a page; requests outside `1..=total_pages` are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
        }
    }

    /// Derive what to render right now. Recomputed on every call; nothing is
    /// cached across mutations.
    pub fn view(&self) -> SessionView {
        match &self.catalog {
            CatalogState::Pending => SessionView::Loading,
            CatalogState::Failed { message } => SessionView::Failed {
                message: message.clone(),
            },
            CatalogState::Ready(board) => {
                SessionView::Ready(board.browse(&self.selection, self.current_page))
            }
        }
    }
}
