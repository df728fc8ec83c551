//! Report exporter scenario: tabular data in, named PDF out, failures
//! contained behind an alert.

use kasira_client::report::{Report, ReportBranding, ReportExporter};
use kasira_integration_tests::RecordingShell;

fn daily_sales_report() -> Report {
    Report {
        filename: "report".to_string(),
        title: "Daily Sales".to_string(),
        columns: vec!["Date".to_string(), "Total".to_string()],
        rows: vec![vec!["2024-01-01".to_string(), "100".to_string()]],
        footer_text: None,
    }
}

fn acme() -> ReportBranding {
    ReportBranding {
        store_name: "Acme".to_string(),
        store_address: Some("Jakarta, ID".to_string()),
    }
}

#[test]
fn test_export_produces_named_pdf_download() {
    let dir = tempfile::tempdir().expect("tempdir");
    let exporter = ReportExporter::new(dir.path());
    let shell = RecordingShell::default();

    exporter.export(&daily_sales_report(), &acme(), &shell);

    let path = dir.path().join("report.pdf");
    let bytes = std::fs::read(&path).expect("report.pdf written");
    assert!(bytes.starts_with(b"%PDF"), "artifact is a PDF document");
    assert!(bytes.len() > 500, "document carries rendered content");
    assert!(shell.alerts().is_empty());
}

#[test]
fn test_export_without_address_still_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let exporter = ReportExporter::new(dir.path());
    let shell = RecordingShell::default();

    let branding = ReportBranding {
        store_name: "Acme".to_string(),
        store_address: None,
    };
    exporter.export(&daily_sales_report(), &branding, &shell);

    assert!(dir.path().join("report.pdf").exists());
    assert!(shell.alerts().is_empty());
}

#[test]
fn test_export_failure_is_contained_behind_alert() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocked = dir.path().join("not-a-dir");
    std::fs::write(&blocked, b"x").expect("block the download dir");

    let exporter = ReportExporter::new(&blocked);
    let shell = RecordingShell::default();
    exporter.export(&daily_sales_report(), &acme(), &shell);

    let alerts = shell.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts.first().expect("one alert").contains("Failed to export report"));
    assert!(!blocked.is_dir());
}
