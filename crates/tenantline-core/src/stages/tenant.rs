//! Tenant stage — routes an entry to a tenant by setting
//! [`RESERVED_LABEL_TENANT_ID`].
//!
//! The tenant comes from exactly one of three places, fixed at construction:
//!
//! | Config key | Tenant taken from                     |
//! |------------|---------------------------------------|
//! | `source`   | an extracted field (coerced to text)  |
//! | `label`    | an existing label on the entry        |
//! | `value`    | the configured string itself          |
//!
//! If the lookup finds nothing usable the entry is left untouched.

use super::{debug_enabled, Stage, STAGE_TYPE_TENANT};
use crate::error::{CoercionError, StageError, TenantConfigError};
use crate::types::{ExtractedFields, LabelSet, RESERVED_LABEL_TENANT_ID};
use serde::Deserialize;
use serde_json::Value;

/// Configuration of a tenant stage. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TenantConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub value: String,
}

impl TenantConfig {
    /// Check that exactly one of `label`, `source` and `value` is set.
    pub fn validate(&self) -> Result<(), TenantConfigError> {
        let set = [&self.label, &self.source, &self.value]
            .iter()
            .filter(|s| !s.is_empty())
            .count();
        match set {
            0 => Err(TenantConfigError::Empty),
            1 => Ok(()),
            _ => Err(TenantConfigError::Conflicting),
        }
    }
}

/// Sets the reserved tenant label from a fixed value, a label, or an
/// extracted field.
#[derive(Debug, Clone)]
pub struct TenantStage {
    cfg: TenantConfig,
}

impl TenantStage {
    pub fn new(cfg: TenantConfig) -> Result<Self, TenantConfigError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Decode a generic configuration payload, then validate it.
    ///
    /// A `null` payload (a bare `tenant:` key) decodes to an empty config.
    pub fn from_value(config: &Value) -> Result<Self, StageError> {
        let cfg = match config {
            Value::Null => TenantConfig::default(),
            other => TenantConfig::deserialize(other).map_err(|source| StageError::Decode {
                stage: STAGE_TYPE_TENANT,
                source,
            })?,
        };
        Ok(Self::new(cfg)?)
    }

    pub fn config(&self) -> &TenantConfig {
        &self.cfg
    }

    /// Resolve the tenant for one entry. An empty string means "no decision".
    fn resolve(&self, labels: &LabelSet, extracted: &ExtractedFields) -> String {
        if !self.cfg.source.is_empty() {
            self.tenant_from_source(extracted)
        } else if !self.cfg.label.is_empty() {
            self.tenant_from_label(labels)
        } else {
            self.cfg.value.clone()
        }
    }

    fn tenant_from_source(&self, extracted: &ExtractedFields) -> String {
        let Some(value) = extracted.get(&self.cfg.source) else {
            if debug_enabled() {
                tracing::debug!(
                    source = %self.cfg.source,
                    "the tenant source does not exist in the extracted data"
                );
            }
            return String::new();
        };

        match coerce_to_string(value) {
            Ok(tenant) => tenant,
            Err(err) => {
                if debug_enabled() {
                    tracing::debug!(
                        source = %self.cfg.source,
                        kind = %value_kind(value),
                        error = %err,
                        "failed to convert value to string"
                    );
                }
                String::new()
            }
        }
    }

    fn tenant_from_label(&self, labels: &LabelSet) -> String {
        match labels.get(&self.cfg.label) {
            Some(tenant) => tenant.clone(),
            None => {
                if debug_enabled() {
                    tracing::debug!(
                        label = %self.cfg.label,
                        "the tenant label does not exist in the labels"
                    );
                }
                String::new()
            }
        }
    }
}

impl Stage for TenantStage {
    fn name(&self) -> &'static str {
        STAGE_TYPE_TENANT
    }

    fn process(
        &self,
        labels: &mut LabelSet,
        extracted: &mut ExtractedFields,
        _timestamp: Option<&mut chrono::DateTime<chrono::Utc>>,
        _line: Option<&mut String>,
    ) {
        let tenant = self.resolve(labels, extracted);
        if tenant.is_empty() {
            return;
        }
        labels.insert(RESERVED_LABEL_TENANT_ID.to_string(), tenant);
    }
}

/// Render a scalar extracted value as text.
///
/// Strings pass through, booleans become `true`/`false`, integers are
/// printed in decimal and floats in their shortest form without an exponent.
/// Null, arrays and objects have no string form.
pub fn coerce_to_string(value: &Value) -> Result<String, CoercionError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(if let Some(i) = n.as_i64() {
            i.to_string()
        } else if let Some(u) = n.as_u64() {
            u.to_string()
        } else {
            n.as_f64().unwrap_or_default().to_string()
        }),
        other => Err(CoercionError::Unsupported {
            kind: value_kind(other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
