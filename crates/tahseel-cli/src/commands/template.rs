use std::path::PathBuf;

use crate::records::{read_labels, read_records};

pub fn run_template(
    labels: PathBuf,
    samples: Option<PathBuf>,
    out: PathBuf,
    title: Option<String>,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "template_args", labels = ?labels, samples = ?samples, out = ?out, title = ?title);

    let labels = read_labels(&labels)?;
    let samples = match samples {
        Some(path) => read_records(&path)?,
        None => Vec::new(),
    };
    let summary =
        tahseel_services::export_template_xlsx(&labels, &samples, &out, title.as_deref())?;
    crate::ui_ok!(
        "template saved to {} ({} columns, {} sample rows)",
        summary.path,
        summary.columns,
        summary.rows
    );
    Ok(())
}
