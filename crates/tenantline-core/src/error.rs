//! Error types for stage and pipeline construction.
//!
//! All of these surface before any entry is processed. Processing itself
//! never fails.

/// Tenant stage configuration rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TenantConfigError {
    #[error("label, source or value config are required")]
    Empty,
    #[error(
        "label, source and value are mutually exclusive: you should set source, value or label but not all"
    )]
    Conflicting,
}

/// An extracted value that has no string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error("can't convert {kind} value to string")]
    Unsupported { kind: &'static str },
}

/// Failure to build a single stage from its configuration payload.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("unknown stage type: {0}")]
    UnknownType(String),
    #[error("failed to decode {stage} stage config: {source}")]
    Decode {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Tenant(#[from] TenantConfigError),
}

/// Failure to build a pipeline from its list of stage specs.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("pipeline stage {index} must contain exactly one key, found {found}")]
    StageKeys { index: usize, found: usize },
    #[error("pipeline stage {index} ({stage_type}): {source}")]
    Stage {
        index: usize,
        stage_type: String,
        #[source]
        source: StageError,
    },
}
