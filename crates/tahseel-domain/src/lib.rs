use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportSummary {
    pub schema_version: u32,
    /// "records" or "template"
    pub mode: String,
    pub rows: usize,
    pub columns: usize,
    pub path: String,
    pub sheet: String,
}

/// How a field's raw value is turned into its Arabic display form when a
/// report fragment is rendered for printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Currency,
    Date,
    Role,
    SchoolStatus,
    Transport,
    PaymentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PrintSummary {
    pub schema_version: u32,
    pub title: String,
    pub styles_captured: usize,
    pub styles_skipped: usize,
    /// false when the viewing context could not be created
    pub opened: bool,
}
