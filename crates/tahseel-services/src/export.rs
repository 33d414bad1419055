use std::path::Path;

use tahseel_core::{Record, Result};
use tahseel_domain::{ExportSummary, SCHEMA_VERSION};

const DEFAULT_SHEET_TITLE: &str = "تقرير";

fn resolve_sheet_title(explicit: Option<&str>) -> String {
    if let Some(t) = explicit {
        return t.to_string();
    }
    let cfg = tahseel_config::load_config().unwrap_or_default();
    cfg.export
        .and_then(|e| e.sheet_title)
        .unwrap_or_else(|| DEFAULT_SHEET_TITLE.to_string())
}

/// Export already-fetched records to an RTL `.xlsx` at `dest`.
pub fn export_records_xlsx(
    records: &[Record],
    dest: &Path,
    sheet_title: Option<&str>,
) -> Result<ExportSummary> {
    let title = resolve_sheet_title(sheet_title);
    let stats = tahseel_export_xlsx::export_records(records, dest, &title)?;
    Ok(ExportSummary {
        schema_version: SCHEMA_VERSION,
        mode: "records".to_string(),
        rows: stats.rows,
        columns: stats.columns,
        path: dest.display().to_string(),
        sheet: title,
    })
}

/// Export a fill-in template whose column set is fixed by `header_labels`.
pub fn export_template_xlsx(
    header_labels: &[(String, String)],
    sample_records: &[Record],
    dest: &Path,
    sheet_title: Option<&str>,
) -> Result<ExportSummary> {
    let title = resolve_sheet_title(sheet_title);
    let stats =
        tahseel_export_xlsx::export_template(header_labels, sample_records, dest, &title)?;
    Ok(ExportSummary {
        schema_version: SCHEMA_VERSION,
        mode: "template".to_string(),
        rows: stats.rows,
        columns: stats.columns,
        path: dest.display().to_string(),
        sheet: title,
    })
}
