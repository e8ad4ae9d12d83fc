//! Pipeline stages.
//!
//! Every stage implements [`Stage`] and is built from a generic
//! configuration payload by [`new_stage`]. Construction is where all
//! validation happens; [`Stage::process`] never fails.

pub mod tenant;

use crate::error::StageError;
use crate::types::{Entry, ExtractedFields, LabelSet};
use std::sync::atomic::{AtomicBool, Ordering};

/// Stage type identifier for [`tenant::TenantStage`].
pub const STAGE_TYPE_TENANT: &str = "tenant";

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Turn per-entry stage diagnostics on or off for the whole process.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Whether stages should emit per-entry debug diagnostics.
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// A single transformation applied to each log entry.
///
/// Stages hold only immutable configuration, so one instance may be shared
/// by several workers processing different entries.
pub trait Stage: Send + Sync {
    /// Fixed stage type identifier.
    fn name(&self) -> &'static str;

    /// Transform one entry in place. `timestamp` and `line` are passed to
    /// every stage; stages that don't need them ignore them.
    fn process(
        &self,
        labels: &mut LabelSet,
        extracted: &mut ExtractedFields,
        timestamp: Option<&mut chrono::DateTime<chrono::Utc>>,
        line: Option<&mut String>,
    );

    fn process_entry(&self, entry: &mut Entry) {
        self.process(
            &mut entry.labels,
            &mut entry.extracted,
            Some(&mut entry.timestamp),
            Some(&mut entry.line),
        );
    }
}

/// Build a stage of `stage_type` from its configuration payload.
pub fn new_stage(
    stage_type: &str,
    config: &serde_json::Value,
) -> Result<Box<dyn Stage>, StageError> {
    match stage_type {
        STAGE_TYPE_TENANT => Ok(Box::new(tenant::TenantStage::from_value(config)?)),
        other => Err(StageError::UnknownType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_stage_builds_tenant() {
        let stage = new_stage(STAGE_TYPE_TENANT, &json!({ "value": "team-a" })).unwrap();
        assert_eq!(stage.name(), "tenant");
    }

    #[test]
    fn new_stage_rejects_unknown_type() {
        let err = new_stage("regex", &json!({})).err().unwrap();
        assert!(matches!(err, StageError::UnknownType(t) if t == "regex"));
    }

    #[test]
    fn process_entry_forwards_labels() {
        let stage = new_stage(STAGE_TYPE_TENANT, &json!({ "value": "team-a" })).unwrap();
        let mut entry = Entry::new("hello");
        stage.process_entry(&mut entry);
        assert_eq!(entry.tenant(), Some("team-a"));
        assert_eq!(entry.line, "hello");
    }
}
