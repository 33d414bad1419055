use std::path::PathBuf;

/// A source of style rules active in the calling context at capture time.
pub trait StyleSource {
    fn name(&self) -> &str;
    fn read_rules(&self) -> std::io::Result<String>;
}

/// Stylesheet on disk, the common case for CLI callers.
pub struct CssFile {
    path: PathBuf,
    name: String,
}

impl CssFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl StyleSource for CssFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_rules(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

/// Snapshot of a rendered fragment: serialized markup by value plus the
/// style rules that were readable at capture time.
#[derive(Debug, Clone)]
pub struct RenderFragment {
    pub markup: String,
    pub styles: Vec<String>,
    /// Style sources that could not be read and were left out.
    pub skipped: usize,
}

/// Capture the fragment's markup together with every readable style source.
///
/// An unreadable source is logged and skipped; partial styling is
/// preferable to aborting the whole print export.
pub fn capture(markup: &str, sources: &[&dyn StyleSource]) -> RenderFragment {
    let mut styles = Vec::with_capacity(sources.len());
    let mut skipped = 0usize;
    for source in sources {
        match source.read_rules() {
            Ok(rules) => styles.push(rules),
            Err(e) => {
                tracing::warn!(event = "style_source_skipped", source = source.name(), error = %e);
                skipped += 1;
            }
        }
    }
    RenderFragment {
        markup: markup.to_string(),
        styles,
        skipped,
    }
}
