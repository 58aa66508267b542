//! End-to-end runs over real files in a temporary directory.

use flights_core::Flight;
use flights_pipeline::{PipelineConfig, PipelineError, check, run};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "flight_id,origin,destination,departure_datetime,arrival_datetime,price";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_output(self.path("db.json"))
            .with_errors(self.path("errors.txt"))
    }
}

fn read_flights(path: &Path) -> Vec<Flight> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn ids(flights: &[Flight]) -> Vec<&str> {
    flights.iter().map(|f| f.flight_id.as_str()).collect()
}

#[test]
fn test_mixed_file_writes_both_sinks() {
    let ws = Workspace::new();
    let input = ws.write(
        "flights.csv",
        &format!(
            "{HEADER}\n\
             AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n\
             AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 08:00,150.00\n\
             # comment\n\
             A,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n\
             ZZ9,rix,JF,2024-02-30 10:00,2024-05-01 12:00,abc\n\
             BT301,RIX,TLL,2024-02-29 06:45,2024-02-29 07:40,49.5\n"
        ),
    );

    let summary = run(&ws.config().with_input(&input)).unwrap();

    assert_eq!(summary.sources, 1);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.rejected, 3);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.output, ws.path("db.json"));
    assert_eq!(summary.diagnostics, Some(ws.path("errors.txt")));

    let flights = read_flights(&ws.path("db.json"));
    assert_eq!(ids(&flights), vec!["AB12", "BT301"]);
    assert_eq!(flights[1].price, 49.5);

    let report = fs::read_to_string(ws.path("errors.txt")).unwrap();
    let expected = "\
Line 3: AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 08:00,150.00 -> arrival_datetime must be after departure_datetime
Line 5: A,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00 -> identifier must be 2-8 alphanumeric characters
Line 6: ZZ9,rix,JF,2024-02-30 10:00,2024-05-01 12:00,abc -> origin must be 3 uppercase letters; destination must be 3 uppercase letters; departure_datetime has invalid format (expected YYYY-MM-DD HH:MM); price must be a number
";
    assert_eq!(report, expected);
}

#[test]
fn test_rejected_rows_after_empty_lines_keep_physical_numbers() {
    let ws = Workspace::new();
    let input = ws.write(
        "gaps.csv",
        &format!(
            "{HEADER}\n\
             AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n\
             \n\
             A,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n\
             \n\
             \n\
             XY99,RIX,JFK\n"
        ),
    );

    let summary = run(&ws.config().with_input(&input)).unwrap();

    assert_eq!(summary.accepted, 1);
    assert_eq!(
        fs::read_to_string(ws.path("errors.txt")).unwrap(),
        "Line 4: A,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00 -> identifier must be 2-8 alphanumeric characters\n\
         Line 7: XY99,RIX,JFK -> missing required fields\n"
    );
}

#[test]
fn test_header_below_empty_line_is_validated_as_data() {
    let ws = Workspace::new();
    let input = ws.write(
        "late_header.csv",
        &format!("\n{HEADER}\nAB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n"),
    );

    let summary = run(&ws.config().with_input(&input)).unwrap();

    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.skipped, 0);
    let report = fs::read_to_string(ws.path("errors.txt")).unwrap();
    assert!(report.starts_with(&format!("Line 2: {HEADER} -> ")), "{report}");
}

#[test]
fn test_input_file_precedes_directory_matches() {
    let ws = Workspace::new();
    let explicit = ws.write(
        "explicit.csv",
        "ZZ1,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,1\n",
    );
    ws.write(
        "dir/b.csv",
        "BB1,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,2\n\
         BB2,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,3\n",
    );
    ws.write(
        "dir/a.csv",
        "AA1,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,4\n",
    );
    ws.write(
        "dir/ignored.txt",
        "XX1,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,5\n",
    );

    let config = ws
        .config()
        .with_input(&explicit)
        .with_directory(ws.path("dir"));
    let summary = run(&config).unwrap();

    assert_eq!(summary.sources, 3);
    assert_eq!(summary.diagnostics, None);
    assert_eq!(
        ids(&read_flights(&ws.path("db.json"))),
        vec!["ZZ1", "AA1", "BB1", "BB2"]
    );
}

#[test]
fn test_clean_run_leaves_previous_report_untouched() {
    let ws = Workspace::new();
    let input = ws.write(
        "ok.csv",
        "AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n",
    );
    ws.write("errors.txt", "Line 9: from an earlier run -> price must be a number\n");

    let summary = run(&ws.config().with_input(&input)).unwrap();

    assert_eq!(summary.diagnostics, None);
    assert_eq!(
        fs::read_to_string(ws.path("errors.txt")).unwrap(),
        "Line 9: from an earlier run -> price must be a number\n"
    );
}

#[test]
fn test_clean_run_creates_no_report() {
    let ws = Workspace::new();
    let input = ws.write(
        "ok.csv",
        "AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n",
    );

    run(&ws.config().with_input(&input)).unwrap();

    assert!(!ws.path("errors.txt").exists());
}

#[test]
fn test_no_accepted_rows_still_writes_empty_array() {
    let ws = Workspace::new();
    let input = ws.write("bad.csv", &format!("{HEADER}\nonly,three,fields\n"));

    let summary = run(&ws.config().with_input(&input)).unwrap();

    assert_eq!(summary.accepted, 0);
    assert_eq!(fs::read_to_string(ws.path("db.json")).unwrap(), "[]\n");
    assert_eq!(
        fs::read_to_string(ws.path("errors.txt")).unwrap(),
        "Line 2: only,three,fields -> missing required fields\n"
    );
}

#[test]
fn test_header_only_file_writes_empty_array() {
    let ws = Workspace::new();
    let input = ws.write("empty.csv", &format!("{HEADER}\n"));

    let summary = run(&ws.config().with_input(&input)).unwrap();

    assert_eq!(summary.accepted, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(fs::read_to_string(ws.path("db.json")).unwrap(), "[]\n");
    assert!(!ws.path("errors.txt").exists());
}

#[test]
fn test_repeated_runs_are_identical() {
    let ws = Workspace::new();
    ws.write(
        "dir/one.csv",
        "AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\nbad\n",
    );
    ws.write(
        "dir/two.csv",
        "CD34,LHR,CDG,2024-06-01 07:15,2024-06-01 09:30,80\nX,RIX,JFK,a,b,0\n",
    );
    let config = ws.config().with_directory(ws.path("dir"));

    run(&config).unwrap();
    let first_output = fs::read(ws.path("db.json")).unwrap();
    let first_report = fs::read(ws.path("errors.txt")).unwrap();

    run(&config).unwrap();
    assert_eq!(fs::read(ws.path("db.json")).unwrap(), first_output);
    assert_eq!(fs::read(ws.path("errors.txt")).unwrap(), first_report);
}

#[test]
fn test_no_sources_writes_nothing() {
    let ws = Workspace::new();
    fs::create_dir(ws.path("empty")).unwrap();

    for config in [ws.config(), ws.config().with_directory(ws.path("empty"))] {
        assert!(matches!(run(&config), Err(PipelineError::NoSources)));
    }

    assert!(!ws.path("db.json").exists());
    assert!(!ws.path("errors.txt").exists());
}

#[test]
fn test_unreadable_source_writes_nothing() {
    let ws = Workspace::new();
    let good = ws.write(
        "dir/a.csv",
        "AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n",
    );
    ws.write("dir/b.csv", "");
    fs::write(ws.path("dir/c.csv"), b"AB12,RIX,JFK,\xff\n").unwrap();

    let config = ws.config().with_input(good).with_directory(ws.path("dir"));
    assert!(matches!(run(&config), Err(PipelineError::Parser(_))));
    assert!(!ws.path("db.json").exists());
}

#[test]
fn test_check_does_not_write() {
    let ws = Workspace::new();
    let input = ws.write("flights.csv", "A,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,1\n");

    let outcome = check(&ws.config().with_input(&input)).unwrap();

    assert_eq!(outcome.sources, vec![input]);
    assert_eq!(outcome.result.rejected_count(), 1);
    assert!(!ws.path("db.json").exists());
    assert!(!ws.path("errors.txt").exists());
}

#[test]
fn test_semicolon_delimited_directory() {
    let ws = Workspace::new();
    ws.write(
        "dir/flights.txt",
        "AB12;RIX;JFK;2024-05-01 10:00;2024-05-01 12:00;150.00\nA;RIX;JFK;x;y;1\n",
    );

    let config = ws
        .config()
        .with_directory(ws.path("dir"))
        .with_extension("txt")
        .with_delimiter(';');
    let summary = run(&config).unwrap();

    assert_eq!(summary.accepted, 1);
    let report = fs::read_to_string(ws.path("errors.txt")).unwrap();
    assert!(report.starts_with("Line 2: A;RIX;JFK;x;y;1 -> "), "{report}");
}
