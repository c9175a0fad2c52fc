use super::*;

use std::io::Write;

const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
3,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1
4,KSC LC-39A,1,2490,F9 FT B1031.1,FT
";

#[test]
fn reads_records_and_ignores_unused_columns() {
    let records = read_launch_records(SAMPLE.as_bytes()).expect("parse sample");

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].site, SiteName::new("CCAFS LC-40"));
    assert_eq!(records[1].payload_mass_kg, 525.0);
    assert_eq!(records[3].outcome, Outcome::Success);
    assert_eq!(records[3].booster_category, BoosterCategory::new("FT"));
}

#[test]
fn reports_missing_required_column() {
    let csv = "Launch Site,class,Booster Version Category\nCCAFS LC-40,1,FT\n";
    let err = read_launch_records(csv.as_bytes()).expect_err("missing payload column");

    assert!(matches!(err, IngestError::MissingColumn(PAYLOAD_COLUMN)));
}

#[test]
fn rejects_class_outside_zero_and_one_with_line_number() {
    let csv = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,100,1,FT
CCAFS LC-40,200,3,FT
";
    let err = read_launch_records(csv.as_bytes()).expect_err("bad class");

    match err {
        IngestError::InvalidOutcome { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparseable_payload_surfaces_as_csv_error() {
    let csv = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,heavy,1,FT
";
    let err = read_launch_records(csv.as_bytes()).expect_err("bad payload");

    assert!(matches!(err, IngestError::Csv { line: 2, .. }));
}

#[test]
fn header_only_file_yields_no_records() {
    let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
    let records = read_launch_records(csv.as_bytes()).expect("header only");

    assert!(records.is_empty());
}

#[test]
fn loads_dataset_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");

    let records = load_launch_records(file.path()).expect("load from disk");
    assert_eq!(records.len(), 4);
}

#[test]
fn load_reports_path_when_file_is_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.csv");

    let err = load_launch_records(&missing).expect_err("missing file");
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn resolves_plain_paths_unchanged() {
    assert_eq!(
        resolve_dataset_path(" data/launches.csv "),
        PathBuf::from("data/launches.csv")
    );
}
