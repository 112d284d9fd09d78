//! The job board core: record model, filter predicates, pagination, the
//! per-session filter state store, and the view-model composer consumed by
//! the CLI and HTTP presentation layers.

pub mod domain;
pub mod filter;
pub mod paginate;
pub mod router;
pub mod session;
pub mod source;
pub mod view;

#[cfg(test)]
mod tests;

pub use domain::{JobRecord, SalaryBand, UnknownSalaryBand, UnknownWorkMode, WorkMode};
pub use filter::{filter_jobs, FilterSelection};
pub use paginate::{clamp_page, page_slice, total_pages, PaginationView, PAGE_SIZE};
pub use router::{board_router, BrowseQuery, SelectionParseError};
pub use session::{CatalogState, JobBrowserSession, SessionView};
pub use source::{CsvJobCatalog, JobDetailSource, JobListSource, SourceError};
pub use view::{JobBoard, JobCardView, JobDetailView, JobListView};
