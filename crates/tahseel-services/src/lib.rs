//! High-level orchestration layer over the lower-level crates.
//! Intentionally thin: exposes stable functions used by the CLI (and any
//! future GUI) without those clients importing export/print crates.

pub use tahseel_core::{Record, Result, Value};
pub use tahseel_print::{CssFile, StyleSource};

pub mod export;
pub mod print;
pub mod render;

pub use export::{export_records_xlsx, export_template_xlsx};
pub use print::print_fragment;
pub use render::render_report_fragment;
