use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::records::{read_kinds, read_labels, read_records};

/// Render records into a formatted RTL table and push it through the print
/// path, the way the admin screens print a fee report.
pub fn run_report(
    records: PathBuf,
    labels: Option<PathBuf>,
    kinds: Option<PathBuf>,
    title: Option<String>,
    out: Option<PathBuf>,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "report_args", records = ?records, labels = ?labels, kinds = ?kinds, title = ?title, out = ?out);

    let records = read_records(&records)?;
    let labels = match labels {
        Some(path) => Some(read_labels(&path)?),
        None => None,
    };
    let kinds = match kinds {
        Some(path) => read_kinds(&path)?,
        None => BTreeMap::new(),
    };

    let currency_label = tahseel_services::render::currency_label_from_config();
    let markup = tahseel_services::render_report_fragment(
        &records,
        labels.as_deref(),
        &kinds,
        &currency_label,
    );

    let notify = |msg: &str| crate::ui_err!("{}", msg);
    let summary =
        tahseel_services::print_fragment(&markup, &[], title.as_deref(), out.as_deref(), &notify)?;

    if let Some(path) = out {
        crate::ui_ok!("report written to {}", path.display());
    } else if summary.opened {
        crate::ui_ok!("report print view opened ({} rows)", records.len());
    }
    Ok(())
}
