#![allow(dead_code)]
//! Test builders — ergonomic constructors for entries and tenant stages.
//!
//! These panic on invalid input rather than returning `Result`.

use tenantline::{Entry, StageSpec, TenantConfig, TenantStage};

/// Fluent builder for [`Entry`] fixtures.
///
/// ```rust
/// let entry = EntryBuilder::new("payment accepted")
///     .label("app", "payments")
///     .field("org", "acme")
///     .build();
/// ```
pub struct EntryBuilder {
    entry: Entry,
}

impl EntryBuilder {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            entry: Entry::new(line),
        }
    }

    pub fn label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry.labels.insert(name.into(), value.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.entry.extracted.insert(key.into(), value.into());
        self
    }

    pub fn ts(mut self, ts: chrono::DateTime<chrono::Utc>) -> Self {
        self.entry.timestamp = ts;
        self
    }

    pub fn build(self) -> Entry {
        self.entry
    }
}

pub fn value_stage(value: &str) -> TenantStage {
    TenantStage::new(TenantConfig {
        value: value.to_string(),
        ..Default::default()
    })
    .unwrap()
}

pub fn source_stage(source: &str) -> TenantStage {
    TenantStage::new(TenantConfig {
        source: source.to_string(),
        ..Default::default()
    })
    .unwrap()
}

pub fn label_stage(label: &str) -> TenantStage {
    TenantStage::new(TenantConfig {
        label: label.to_string(),
        ..Default::default()
    })
    .unwrap()
}

/// A single-key pipeline stage spec.
pub fn spec(stage_type: &str, config: serde_json::Value) -> StageSpec {
    StageSpec::from([(stage_type.to_string(), config)])
}
