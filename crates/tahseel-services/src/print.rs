use std::path::Path;

use tahseel_core::Result;
use tahseel_domain::{PrintSummary, SCHEMA_VERSION};
use tahseel_print::{capture, compose, present, PresentOutcome, PrintOptions, StyleSource};

fn options_from_config(title: Option<&str>) -> PrintOptions {
    let cfg = tahseel_config::load_config()
        .unwrap_or_default()
        .print
        .unwrap_or_default();
    let mut opts = PrintOptions::default();
    if let Some(t) = title {
        opts.title = t.to_string();
    }
    if let Some(ms) = cfg.delay_ms {
        opts.print_delay_ms = ms;
    }
    if let Some(size) = cfg.page_size {
        opts.page_size = size;
    }
    if let Some(mm) = cfg.margins_mm {
        opts.margins_mm = mm;
    }
    if let Some(font) = cfg.font_family {
        opts.font_family = font;
    }
    opts
}

/// Capture, compose and present a printable rendition of a fragment.
///
/// With `out` set the composed document is written there instead of being
/// opened; otherwise it is handed to a new viewing context, fire-and-forget.
/// Platform failures on that path surface through `notify`, never as an
/// error: the caller has no UI error boundary to catch one.
pub fn print_fragment(
    markup: &str,
    style_sources: &[&dyn StyleSource],
    title: Option<&str>,
    out: Option<&Path>,
    notify: &dyn Fn(&str),
) -> Result<PrintSummary> {
    let fragment = capture(markup, style_sources);
    let opts = options_from_config(title);
    let document = compose(&fragment, &opts);
    tracing::debug!(
        event = "print_composed",
        bytes = document.len(),
        styles = fragment.styles.len(),
        skipped = fragment.skipped,
    );

    let opened = match out {
        Some(path) => {
            std::fs::write(path, &document)?;
            tracing::info!(event = "print_document_written", path = %path.display());
            false
        }
        None => matches!(present(&document, notify), PresentOutcome::Opened { .. }),
    };

    Ok(PrintSummary {
        schema_version: SCHEMA_VERSION,
        title: opts.title,
        styles_captured: fragment.styles.len(),
        styles_skipped: fragment.skipped,
        opened,
    })
}
