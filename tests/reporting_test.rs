use design_patterns::{LocalStorage, ReportGenerator, ReportSaver};
use tempfile::TempDir;

#[test]
fn test_generate_report_returns_expected_string() {
    let generator = ReportGenerator::new();
    let test_data = "Test Data";
    let expected = "Report based on: Test Data";

    let result = generator.generate_report(test_data);

    assert_eq!(result.as_str(), expected);
}

#[test]
fn test_every_report_carries_the_template() {
    let generator = ReportGenerator::new();

    for data in ["", "forged, no template", "Report based on: x"] {
        let report = generator.generate_report(data);
        assert_eq!(report.to_string(), format!("Report based on: {}", data));
        assert!(report.as_str().starts_with("Report based on: "));
    }
}

#[test]
fn test_generate_report_touches_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new();

    let first = generator.generate_report("Sample Data");
    let second = generator.generate_report("Sample Data");

    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_save_round_trips_bytes_and_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");
    let path_str = path.to_str().unwrap();
    let generator = ReportGenerator::new();
    let saver = ReportSaver::new(LocalStorage::default());

    let long = generator.generate_report("a rather long first payload\nwith two lines");
    saver.save_to_file(&long, path_str).await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), long.as_str().as_bytes());

    let short = generator.generate_report("short");
    saver.save_to_file(&short, path_str).await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Report based on: short");
}

#[tokio::test]
async fn test_save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.txt");
    let saver = ReportSaver::new(LocalStorage::default());
    let report = ReportGenerator::new().generate_report("Sample Data");

    let result = saver.save_to_file(&report, path.to_str().unwrap()).await;

    tokio_test::assert_err!(result);
    assert!(!path.exists());
}
