use super::helpers::{stderr, stdout, TestProject, LIBX_SBOM};
use std::fs;

#[test]
fn test_denied_license_fails_with_report() {
    let project = TestProject::new().with_denylist("GPL-3.0\n");
    project.write("sbom-app.json", LIBX_SBOM);

    let output = project.run_gate(&[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Forbidden licenses detected:"));
    assert!(out.contains("- libx@1.0 | GPL-3.0 | pkg:generic/libx@1.0 | sbom-app.json"));
    assert!(out.contains("Report: forbidden-licenses.json"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.report_path()).unwrap()).unwrap();
    assert_eq!(
        report,
        serde_json::json!([{
            "name": "libx",
            "version": "1.0",
            "license": "GPL-3.0",
            "purl": "pkg:generic/libx@1.0",
            "sbom": "sbom-app.json"
        }])
    );
}

#[test]
fn test_active_exception_passes_without_report() {
    let project = TestProject::new()
        .with_denylist("GPL-3.0\n")
        .with_exceptions(r#"{"exceptions": [{"purl": "pkg:generic/libx@1.0", "expires": "2999-12-31", "reason": "migration"}]}"#);
    project.write("sbom-app.json", LIBX_SBOM);

    let output = project.run_gate(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("OK: no forbidden licenses found."));
    assert!(!project.report_path().exists());
}

#[test]
fn test_expired_exception_is_ignored() {
    let project = TestProject::new()
        .with_denylist("GPL-3.0\n")
        .with_exceptions(r#"{"exceptions": [{"purl": "pkg:generic/libx@1.0", "expires": "2000-01-01"}]}"#);
    project.write("sbom-app.json", LIBX_SBOM);

    let output = project.run_gate(&[]);

    assert_eq!(output.status.code(), Some(1));
    let report: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(project.report_path()).unwrap()).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["name"], "libx");
}

#[test]
fn test_no_sboms_is_non_blocking() {
    let project = TestProject::new().with_denylist("GPL-3.0\n");

    let output = project.run_gate(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No SBOM files found. (This is non-blocking.)"));
    assert!(!project.report_path().exists());
}

#[test]
fn test_license_name_without_id() {
    let project = TestProject::new().with_denylist("# in-house terms\nCustom License\n");
    project.write(
        "services/api/bom.json",
        r#"{"components": [{"name": "inhouse", "version": "3.2", "licenses": [{"license": {"name": "Custom License"}}]}]}"#,
    );

    let output = project.run_gate(&[]);

    assert_eq!(output.status.code(), Some(1));
    let report: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(project.report_path()).unwrap()).unwrap();
    assert_eq!(report[0]["license"], "Custom License");
    assert_eq!(report[0]["purl"], "");
}

#[test]
fn test_missing_denylist_is_fatal() {
    let project = TestProject::new();
    project.write("sbom-app.json", LIBX_SBOM);

    let output = project.run_gate(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to read denylist file"));
    assert!(!project.report_path().exists());
}

#[test]
fn test_malformed_exceptions_is_fatal() {
    let project = TestProject::new()
        .with_denylist("GPL-3.0\n")
        .with_exceptions(r#"{"exceptions": [{"purl": "pkg:generic/libx@1.0", "expires": "soon"}]}"#);
    project.write("sbom-app.json", LIBX_SBOM);

    let output = project.run_gate(&["check"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid 'expires' date 'soon'"));
    assert!(!project.report_path().exists());
}

#[test]
fn test_malformed_sbom_is_skipped() {
    let project = TestProject::new().with_denylist("GPL-3.0\n");
    project.write("a/sbom-broken.json", "{ this is not json");
    project.write("b/sbom-app.json", LIBX_SBOM);

    let output = project.run_gate(&[]);

    assert_eq!(output.status.code(), Some(1));
    let report: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(project.report_path()).unwrap()).unwrap();
    assert_eq!(report.len(), 1);
    assert!(report[0]["sbom"].as_str().unwrap().ends_with("sbom-app.json"));
    assert!(stderr(&output).contains("Skipping"));
}
