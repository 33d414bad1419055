//! Turns an ordered set of records into a downloadable `.xlsx` artifact
//! with right-to-left sheet orientation and normalized Arabic cell text.
//!
//! The pipeline is linear: normalize, (relabel for templates), build the
//! sheet grid, tag RTL, serialize, deliver. Serialization is delegated to
//! `rust_xlsxwriter`; this crate is the policy layer around it.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tahseel_core::{Record, Result, Value};
use tahseel_normalize::normalize_str;

/// Row/column counts of a finished export, excluding the header row.
#[derive(Debug, Clone, Copy)]
pub struct ExportStats {
    pub rows: usize,
    pub columns: usize,
}

/// Intermediate tabular form: header names plus one value row per record.
/// Kept public so the grid can be asserted on without unzipping the binary.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Export records as-is: columns follow first-seen field order.
pub fn export_records(records: &[Record], dest: &Path, sheet_title: &str) -> Result<ExportStats> {
    let normalized = normalize_records(records);
    let sheet = build_sheet(&normalized);
    let stats = ExportStats {
        rows: sheet.rows.len(),
        columns: sheet.columns.len(),
    };
    let buffer = write_workbook(&sheet, sheet_title)?;
    deliver(&buffer, dest)?;
    tracing::info!(
        event = "xlsx_exported",
        path = %dest.display(),
        rows = stats.rows,
        columns = stats.columns,
    );
    Ok(stats)
}

/// Export a fill-in template: `header_labels` maps field names to display
/// labels and fixes the column set; sample records seed the rows. Fields
/// missing from a sample are emitted as empty cells, never dropped, so
/// every row has the same shape.
pub fn export_template(
    header_labels: &[(String, String)],
    sample_records: &[Record],
    dest: &Path,
    sheet_title: &str,
) -> Result<ExportStats> {
    let normalized = normalize_records(sample_records);
    let relabeled = relabel_records(header_labels, &normalized);
    let sheet = Sheet {
        columns: header_labels
            .iter()
            .map(|(_, label)| normalize_str(label))
            .collect(),
        rows: relabeled,
    };
    let stats = ExportStats {
        rows: sheet.rows.len(),
        columns: sheet.columns.len(),
    };
    let buffer = write_workbook(&sheet, sheet_title)?;
    deliver(&buffer, dest)?;
    tracing::info!(
        event = "xlsx_template_exported",
        path = %dest.display(),
        rows = stats.rows,
        columns = stats.columns,
    );
    Ok(stats)
}

/// Step 1: every text value goes through the normalizer exactly once;
/// numbers and absent cells pass through untouched. Field names are left
/// raw here so label-map lookups still match; they are normalized at the
/// point where they become header cells.
fn normalize_records(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .map(|rec| {
            rec.iter()
                .map(|(name, value)| {
                    let value = match value {
                        Value::Text(s) => Value::Text(normalize_str(s)),
                        other => other.clone(),
                    };
                    (name.to_string(), value)
                })
                .collect()
        })
        .collect()
}

/// Step 2 (template mode): project each record onto the label set, in
/// label order.
fn relabel_records(header_labels: &[(String, String)], records: &[Record]) -> Vec<Vec<Value>> {
    records
        .iter()
        .map(|rec| {
            header_labels
                .iter()
                .map(|(field, _)| rec.get(field).cloned().unwrap_or(Value::Absent))
                .collect()
        })
        .collect()
}

/// Step 3: first-seen field order across all records defines the columns.
fn build_sheet(records: &[Record]) -> Sheet {
    let mut columns: Vec<String> = Vec::new();
    for rec in records {
        for name in rec.names() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
    }
    let rows = records
        .iter()
        .map(|rec| {
            columns
                .iter()
                .map(|col| rec.get(col).cloned().unwrap_or(Value::Absent))
                .collect()
        })
        .collect();
    Sheet {
        columns: columns.iter().map(|c| normalize_str(c)).collect(),
        rows,
    }
}

/// Steps 4–5: RTL-tagged worksheet, serialized to an in-memory buffer.
/// Failures are logged here and re-raised; the caller owns user messaging.
fn write_workbook(sheet: &Sheet, sheet_title: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let title = normalize_str(sheet_title);
    if !title.is_empty() {
        if let Err(e) = worksheet.set_name(&title) {
            // Excel rejects some names (length, reserved characters); fall
            // back to the default sheet name instead of losing the export.
            tracing::warn!(event = "sheet_name_rejected", title = %title, error = %e);
        }
    }
    worksheet.set_right_to_left(true);

    if let Err(e) = fill_worksheet(worksheet, sheet) {
        tracing::error!(event = "sheet_construction_failed", error = %e);
        return Err(e.into());
    }
    match workbook.save_to_buffer() {
        Ok(buffer) => Ok(buffer),
        Err(e) => {
            tracing::error!(event = "xlsx_serialization_failed", error = %e);
            Err(e.into())
        }
    }
}

fn fill_worksheet(ws: &mut Worksheet, sheet: &Sheet) -> std::result::Result<(), XlsxError> {
    let header_format = Format::new().set_bold();
    for (c, name) in sheet.columns.iter().enumerate() {
        ws.write_string_with_format(0, c as u16, name, &header_format)?;
    }
    for (r, row) in sheet.rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            match value {
                Value::Text(s) => {
                    ws.write_string(r as u32 + 1, c as u16, s)?;
                }
                Value::Number(n) => {
                    ws.write_number(r as u32 + 1, c as u16, *n)?;
                }
                Value::Absent => {}
            }
        }
    }
    Ok(())
}

/// Step 6: hand the buffer over through a scoped temporary file in the
/// destination directory, persisted atomically. The temporary handle is
/// released on every exit path, including delivery failure (drop removes
/// the file if persist never ran).
fn deliver(buffer: &[u8], dest: &Path) -> Result<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(buffer)?;
    tmp.flush()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
