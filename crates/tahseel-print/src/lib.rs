//! Printable document rendering for already-rendered UI fragments.
//!
//! Binary document generators have poor Arabic shaping fidelity, so instead
//! of producing one this crate composes a fully self-contained RTL HTML
//! document and hands it to a new viewing context, reusing the platform's
//! own text layout engine for glyph shaping.

pub mod capture;
pub mod compose;
pub mod present;

pub use capture::{capture, CssFile, RenderFragment, StyleSource};
pub use compose::{compose, PrintOptions};
pub use present::{present, PresentOutcome};
