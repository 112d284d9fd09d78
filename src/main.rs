use clap::{Args, Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::str::FromStr;

use jobdeck::board::{
    CsvJobCatalog, JobBrowserSession, JobDetailSource, JobListSource, JobListView, SalaryBand,
    SessionView, SourceError, WorkMode,
};
use jobdeck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "jobdeck",
    about = "Browse job listings from a CSV catalog with filters and pagination",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page of listings for a filter selection
    Browse(BrowseArgs),
    /// Render the detail view for a single job id
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct BrowseArgs {
    /// Path to the CSV job catalog
    #[arg(long)]
    jobs: PathBuf,
    /// Free-text search across every job attribute
    #[arg(long)]
    search: Option<String>,
    /// Exact location filter
    #[arg(long)]
    location: Option<String>,
    /// Salary band: 0-70k, 70k-100k, 100k-130k, or 130k+
    #[arg(long, value_parser = parse_band)]
    band: Option<SalaryBand>,
    /// Job types to keep (repeat or comma-separate)
    #[arg(long, value_delimiter = ',')]
    types: Vec<String>,
    /// Work modes to keep: Remote and/or On-site
    #[arg(long, value_delimiter = ',', value_parser = parse_mode)]
    modes: Vec<WorkMode>,
    /// 1-indexed page to render
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Path to the CSV job catalog
    #[arg(long)]
    jobs: PathBuf,
    /// Job id to look up
    id: String,
}

fn parse_band(raw: &str) -> Result<SalaryBand, String> {
    SalaryBand::from_str(raw).map_err(|err| err.to_string())
}

fn parse_mode(raw: &str) -> Result<WorkMode, String> {
    WorkMode::from_str(raw).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Browse(args) => run_browse(args).await,
        Command::Show(args) => run_show(args).await,
    }
}

async fn run_browse(args: BrowseArgs) -> Result<(), AppError> {
    let catalog = CsvJobCatalog::from_path(&args.jobs)?;

    let mut session = JobBrowserSession::new();
    session.catalog_loaded(catalog.fetch_jobs().await?);

    if let Some(search) = args.search {
        session.set_search_term(search);
    }
    session.set_location(args.location);
    session.set_salary_band(args.band);
    session.set_job_types(args.types.into_iter().collect::<BTreeSet<_>>());
    session.set_work_modes(args.modes.into_iter().collect::<BTreeSet<_>>());
    session.go_to_page(args.page);

    match session.view() {
        SessionView::Loading => println!("Loading jobs..."),
        SessionView::Failed { message } => println!("Could not load jobs: {message}"),
        SessionView::Ready(view) => render_page(&view),
    }

    Ok(())
}

fn render_page(view: &JobListView) {
    println!("Available Jobs");

    if view.empty_result {
        println!("\nNo jobs found. Try adjusting your search.");
        return;
    }

    for job in &view.jobs {
        println!("\n{} — {}", job.title, job.company);
        println!("  {} | {} | {} | {}", job.experience, job.salary, job.location, job.work_mode);
        if let Some(description) = &job.description {
            println!("  {description}");
        }
        if !job.tags.is_empty() {
            println!("  tags: {}", job.tags.join(", "));
        }
        println!("  posted: {} (id: {})", job.posted, job.id);
    }

    println!(
        "\nPage {} of {} — {} matching job(s)",
        view.pagination.current_page, view.pagination.total_pages, view.total_matches
    );
    if view.pagination.has_prev || view.pagination.has_next {
        println!(
            "  prev: {} | next: {}",
            if view.pagination.has_prev { "available" } else { "-" },
            if view.pagination.has_next { "available" } else { "-" },
        );
    }
    println!("  locations: {}", view.locations.join(", "));
    println!("  salary bands: {}", view.salary_bands.join(", "));
}

async fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let catalog = CsvJobCatalog::from_path(&args.jobs)?;

    let job = match catalog.fetch_job(&args.id).await {
        Ok(job) => job,
        Err(SourceError::NotFound { .. }) => {
            println!("Job not found.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", job.title);
    println!("{}", job.company);
    if let (Some(rating), Some(reviews)) = (job.rating, job.reviews) {
        println!("{rating} | {reviews} reviews");
    }
    println!("{} | {} | {}", job.salary, job.location, job.work_mode());
    println!("\nRequirements");
    println!("  experience: {}", job.experience);
    println!("  type: {} ({})", job.job_type, job.work_mode());
    if let Some(description) = &job.description {
        println!("\nJob Description\n{description}");
    }
    if !job.tags.is_empty() {
        println!("\nTags: {}", job.tags.join(", "));
    }
    println!("\nPosted: {}", job.posted);
    if let Some(link) = &job.apply_link {
        println!("Apply: {link}");
    }

    Ok(())
}
