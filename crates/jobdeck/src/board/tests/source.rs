use crate::board::source::{CsvJobCatalog, JobDetailSource, JobListSource, SourceError};

const CATALOG: &str = "\
id,title,company,location,salary,type,remote,experience,description,tags,posted,rating,reviews,apply_link
job-1,Frontend Engineer,Pixelworks,Bengaluru,50000 - 70000,Full-time,false,2-4 years,Build dashboards,react;ui,2026-08-01,4.1,120,https://pixelworks.example/jobs/1
,Backend Engineer,Stacklane,Pune,80000 - 100000,Full-time,true,3-5 years,Rust services,,2026-08-03,,,
job-3,Data Analyst Intern,Numbercrunch,Bengaluru,20000 - 30000,Internship,false,0-1 years,,,2026-08-05,,,
";

#[test]
fn parses_rows_and_splits_tags() {
    let catalog = CsvJobCatalog::from_reader(CATALOG.as_bytes()).expect("catalog parses");
    let jobs = catalog.jobs();
    assert_eq!(jobs.len(), 3);

    assert_eq!(jobs[0].id, "job-1");
    assert_eq!(jobs[0].tags, ["react", "ui"]);
    assert_eq!(jobs[0].rating, Some(4.1));
    assert_eq!(jobs[0].reviews, Some(120));

    assert!(jobs[1].remote);
    assert!(jobs[1].tags.is_empty());
    assert_eq!(jobs[1].rating, None);
    assert_eq!(jobs[2].description, None);
}

#[test]
fn synthesizes_a_positional_id_when_the_cell_is_blank() {
    let catalog = CsvJobCatalog::from_reader(CATALOG.as_bytes()).expect("catalog parses");
    assert_eq!(catalog.jobs()[1].id, "job-2");
}

#[test]
fn rejects_a_malformed_catalog() {
    let bad = "\
id,title,company,location,salary,type,remote,experience,description,tags,posted,rating,reviews,apply_link
job-1,Dev,Co,Pune,1 - 2,Full-time,sometimes,2 years,,,2026-08-01,,,
";
    match CsvJobCatalog::from_reader(bad.as_bytes()) {
        Err(SourceError::Malformed(_)) => {}
        other => panic!("expected malformed catalog error, got {other:?}"),
    }
}

#[test]
fn missing_file_surfaces_an_io_error() {
    match CsvJobCatalog::from_path("/definitely/not/here/jobs.csv") {
        Err(SourceError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_source_returns_the_full_ordered_collection() {
    let catalog = CsvJobCatalog::from_reader(CATALOG.as_bytes()).expect("catalog parses");
    let jobs = catalog.fetch_jobs().await.expect("fetch succeeds");
    let ids: Vec<&str> = jobs.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, ["job-1", "job-2", "job-3"]);
}

#[tokio::test]
async fn detail_source_finds_by_id_or_reports_not_found() {
    let catalog = CsvJobCatalog::from_reader(CATALOG.as_bytes()).expect("catalog parses");

    let job = catalog.fetch_job("job-3").await.expect("job-3 exists");
    assert_eq!(job.title, "Data Analyst Intern");

    match catalog.fetch_job("job-42").await {
        Err(SourceError::NotFound { id }) => assert_eq!(id, "job-42"),
        other => panic!("expected not found, got {other:?}"),
    }
}
