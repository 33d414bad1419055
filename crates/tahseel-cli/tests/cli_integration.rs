use assert_cmd::Command;
use predicates::prelude::*;

mod helpers;
use helpers::{write_file, LABELS_JSON, RECORDS_JSON};

fn tahseel() -> Command {
    let mut cmd = Command::cargo_bin("tahseel-cli").expect("binary builds");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn export_writes_rtl_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_file(dir.path(), "records.json", RECORDS_JSON);
    let out = dir.path().join("fees.xlsx");

    tahseel()
        .current_dir(dir.path())
        .args(["export", "--records"])
        .arg(&records)
        .arg("--out")
        .arg(&out)
        .args(["--title", "المدفوعات"])
        .assert()
        .success()
        .stdout(predicate::str::contains("XLSX saved to"))
        .stdout(predicate::str::contains("2 rows x 3 columns"));

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn template_without_samples_is_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let labels = write_file(dir.path(), "labels.json", LABELS_JSON);
    let out = dir.path().join("template.xlsx");

    tahseel()
        .current_dir(dir.path())
        .args(["template", "--labels"])
        .arg(&labels)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 columns, 0 sample rows"));

    assert!(out.exists());
}

#[test]
fn print_composes_rtl_document_and_skips_bad_styles() {
    let dir = tempfile::tempdir().unwrap();
    let fragment = write_file(
        dir.path(),
        "fragment.html",
        "<table><tr><td>أحمد</td></tr></table>",
    );
    let good_css = write_file(dir.path(), "app.css", "td { padding: 4px; }");
    let out = dir.path().join("doc.html");

    tahseel()
        .current_dir(dir.path())
        .args(["print", "--fragment"])
        .arg(&fragment)
        .arg("--style")
        .arg(&good_css)
        .args(["--style", "missing.css"])
        .args(["--title", "إيصال"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("print document written to"))
        .stderr(predicate::str::contains("skipped"));

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("<html lang=\"ar\" dir=\"rtl\">"));
    assert!(doc.contains("td { padding: 4px; }"));
    assert!(doc.contains("أحمد"));
    assert!(doc.contains("window.print()"));
}

#[test]
fn report_formats_cells_per_kind() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_file(dir.path(), "records.json", RECORDS_JSON);
    let labels = write_file(dir.path(), "labels.json", LABELS_JSON);
    let kinds = write_file(
        dir.path(),
        "kinds.json",
        r#"{"amount": "currency", "status": "payment_status"}"#,
    );
    let out = dir.path().join("report.html");

    tahseel()
        .current_dir(dir.path())
        .args(["report", "--records"])
        .arg(&records)
        .arg("--labels")
        .arg(&labels)
        .arg("--kinds")
        .arg(&kinds)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("report written to"));

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("اسم الطالب"));
    assert!(doc.contains("جنيه"));
    assert!(doc.contains("مدفوع"));
    assert!(doc.contains("dir=\"rtl\""));
}

#[test]
fn schema_dump_writes_dto_schemas() {
    let dir = tempfile::tempdir().unwrap();
    tahseel()
        .current_dir(dir.path())
        .args(["schema", "--out-dir", "schemas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("schemas dumped"));

    for name in [
        "export_summary.schema.json",
        "print_summary.schema.json",
        "field_kind.schema.json",
    ] {
        assert!(dir.path().join("schemas").join(name).exists(), "{name} missing");
    }
}

#[test]
fn export_rejects_non_array_records() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_file(dir.path(), "records.json", r#"{"name": "x"}"#);

    tahseel()
        .current_dir(dir.path())
        .args(["export", "--records"])
        .arg(&records)
        .args(["--out", "out.xlsx"])
        .assert()
        .failure();
}
