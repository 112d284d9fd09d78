use crate::infra::sample_catalog;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use jobdeck::board::{
    CsvJobCatalog, JobBrowserSession, JobDetailSource, JobListSource, JobListView, SalaryBand,
    SessionView,
};
use jobdeck::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional CSV catalog to browse instead of the built-in sample data.
    #[arg(long)]
    pub(crate) jobs: Option<PathBuf>,
    /// Search term applied in the free-text step.
    #[arg(long, default_value = "engineer")]
    pub(crate) search: String,
    /// Job id for the detail step (defaults to the first visible job).
    #[arg(long)]
    pub(crate) detail: Option<String>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = match &args.jobs {
        Some(path) => CsvJobCatalog::from_path(path)?,
        None => CsvJobCatalog::from_records(sample_catalog()),
    };

    println!("Jobdeck browse demo ({})", Local::now().date_naive());
    if args.jobs.is_some() {
        println!("Data source: CSV catalog");
    } else {
        println!("Data source: built-in sample catalog");
    }

    let mut session = JobBrowserSession::new();
    session.catalog_loaded(catalog.fetch_jobs().await?);

    println!("\nStep 1: unfiltered first page");
    let first_visible = render_session(&session);

    println!("\nStep 2: search '{}'", args.search);
    session.set_search_term(&args.search);
    render_session(&session);

    println!("\nStep 3: salary band 70k-100k");
    session.clear_filters();
    session.set_salary_band(Some(SalaryBand::From70kTo100k));
    render_session(&session);

    println!("\nStep 4: walk one page forward and back");
    session.clear_filters();
    session.next_page();
    println!("after next_page -> page {}", session.current_page());
    session.prev_page();
    println!("after prev_page -> page {}", session.current_page());

    let detail_id = args.detail.or(first_visible);
    if let Some(id) = detail_id {
        println!("\nStep 5: detail view for '{id}'");
        let job = catalog.fetch_job(&id).await?;
        println!("{} at {} ({})", job.title, job.company, job.location);
        println!("  salary {} | {} | {}", job.salary, job.job_type, job.work_mode());
        if let Some(description) = &job.description {
            println!("  {description}");
        }
    }

    Ok(())
}

/// Prints one page of results and returns the first visible job id.
fn render_session(session: &JobBrowserSession) -> Option<String> {
    match session.view() {
        SessionView::Loading => {
            println!("(still loading)");
            None
        }
        SessionView::Failed { message } => {
            println!("(failed: {message})");
            None
        }
        SessionView::Ready(view) => {
            render_page(&view);
            view.jobs.first().map(|job| job.id.clone())
        }
    }
}

fn render_page(view: &JobListView) {
    if view.empty_result {
        println!("No jobs found. Try adjusting your search.");
        return;
    }

    for job in &view.jobs {
        println!(
            "- [{}] {} at {} | {} | {} | {}",
            job.id, job.title, job.company, job.location, job.salary, job.work_mode
        );
    }
    println!(
        "page {}/{} ({} match{})",
        view.pagination.current_page,
        view.pagination.total_pages,
        view.total_matches,
        if view.total_matches == 1 { "" } else { "es" }
    );
}
