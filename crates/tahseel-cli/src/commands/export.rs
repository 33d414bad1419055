use std::path::PathBuf;

use crate::records::read_records;

pub fn run_export(
    records: PathBuf,
    out: PathBuf,
    title: Option<String>,
    use_color: bool,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "export_args", records = ?records, out = ?out, title = ?title);

    let records = read_records(&records)?;
    let summary = tahseel_services::export_records_xlsx(&records, &out, title.as_deref())?;

    let path = if use_color {
        use owo_colors::OwoColorize;
        format!("{}", summary.path.green())
    } else {
        summary.path.clone()
    };
    crate::ui_ok!(
        "XLSX saved to {} ({} rows x {} columns, sheet \"{}\")",
        path,
        summary.rows,
        summary.columns,
        summary.sheet
    );
    Ok(())
}
