use std::path::PathBuf;

use tahseel_services::{CssFile, StyleSource};

pub fn run_print(
    fragment: PathBuf,
    styles: Vec<PathBuf>,
    title: Option<String>,
    out: Option<PathBuf>,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "print_args", fragment = ?fragment, styles = ?styles, title = ?title, out = ?out);

    let markup = std::fs::read_to_string(&fragment)?;
    let css: Vec<CssFile> = styles.into_iter().map(CssFile::new).collect();
    let sources: Vec<&dyn StyleSource> = css.iter().map(|c| c as &dyn StyleSource).collect();

    let notify = |msg: &str| crate::ui_err!("{}", msg);
    let summary = tahseel_services::print_fragment(
        &markup,
        &sources,
        title.as_deref(),
        out.as_deref(),
        &notify,
    )?;

    if summary.styles_skipped > 0 {
        crate::ui_info!("{} style source(s) could not be read and were skipped", summary.styles_skipped);
    }
    if let Some(path) = out {
        crate::ui_ok!("print document written to {}", path.display());
    } else if summary.opened {
        crate::ui_ok!("print view opened ({} style sources)", summary.styles_captured);
    }
    Ok(())
}
