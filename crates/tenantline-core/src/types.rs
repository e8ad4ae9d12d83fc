//! Core types shared by every pipeline stage.
//!
//! A log [`Entry`] carries its [`LabelSet`], the [`ExtractedFields`] produced
//! by earlier stages, a timestamp and the raw line.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label name the downstream client reads to route a batch to a tenant.
pub const RESERVED_LABEL_TENANT_ID: &str = "__tenant_id__";

/// Label name → label value metadata attached to an entry.
pub type LabelSet = HashMap<String, String>;

/// Transient key/value data extracted from the raw line by earlier stages.
pub type ExtractedFields = HashMap<String, serde_json::Value>;

/// A log entry as it flows through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub labels: LabelSet,
    #[serde(default)]
    pub extracted: ExtractedFields,
    #[serde(default = "chrono::Utc::now")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub line: String,
}

impl Entry {
    /// An entry with no labels or extracted data, timestamped now.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            labels: LabelSet::new(),
            extracted: ExtractedFields::new(),
            timestamp: chrono::Utc::now(),
            line: line.into(),
        }
    }

    /// The tenant this entry is routed to, if a stage assigned one.
    pub fn tenant(&self) -> Option<&str> {
        self.labels.get(RESERVED_LABEL_TENANT_ID).map(String::as_str)
    }
}
