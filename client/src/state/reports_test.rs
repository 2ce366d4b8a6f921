use super::*;

fn report(id: i64, name: Option<&str>, status: Option<&str>) -> Report {
    Report {
        id,
        name: name.map(str::to_owned),
        status: status.map(str::to_owned),
        ..Report::default()
    }
}

fn sample() -> Vec<Report> {
    vec![
        report(1, Some("Final Report"), Some("completed")),
        report(2, Some("Weekly log"), Some("pending")),
        report(3, Some("Old draft"), None),
        report(4, None, Some("completed")),
    ]
}

fn ids(reports: &[Report]) -> Vec<i64> {
    reports.iter().map(|r| r.id).collect()
}

#[test]
fn default_filter_admits_everything() {
    assert_eq!(ids(&ReportFilter::default().apply(&sample())), [1, 2, 3, 4]);
}

#[test]
fn search_is_case_insensitive_and_skips_unnamed() {
    let filter = ReportFilter { search: "REPORT".to_owned(), ..ReportFilter::default() };
    assert_eq!(ids(&filter.apply(&sample())), [1]);
}

#[test]
fn status_filter_matches_exact_status() {
    let filter = ReportFilter { status: StatusFilter::Completed, ..ReportFilter::default() };
    assert_eq!(ids(&filter.apply(&sample())), [1, 4]);
}

#[test]
fn missing_status_counts_as_archived() {
    let filter = ReportFilter { status: StatusFilter::Archived, ..ReportFilter::default() };
    assert_eq!(ids(&filter.apply(&sample())), [3]);
    assert_eq!(report_status(&sample()[2]), "archived");
}

#[test]
fn search_and_status_combine() {
    let filter = ReportFilter { search: "log".to_owned(), status: StatusFilter::Completed };
    assert!(filter.apply(&sample()).is_empty());
}

#[test]
fn parse_unknown_value_falls_back_to_all() {
    assert_eq!(StatusFilter::parse("pending"), StatusFilter::Pending);
    assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
}
