use std::path::{Path, PathBuf};

/// Write `content` under `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write test input");
    path
}

/// Sample fee records shared by the integration tests.
pub const RECORDS_JSON: &str = r#"[
  {"name": "أحمد", "amount": 1500, "status": "paid"},
  {"name": "سارة", "amount": 2300.5, "status": "partial"}
]"#;

pub const LABELS_JSON: &str =
    r#"{"name": "اسم الطالب", "amount": "المبلغ", "status": "حالة الدفع"}"#;
