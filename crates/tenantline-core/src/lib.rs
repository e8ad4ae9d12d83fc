//! tenantline-core — pipeline stages for tenant routing of log entries.
//!
//! This crate exposes the entry types shared by every stage, the [`Stage`]
//! trait, the tenant stage, and a small [`Pipeline`] that runs configured
//! stages in order.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Pipeline ──► [Stage, Stage, ...] ──► Entry (labels mutated)
//! ```
//!
//! Stages are constructed and validated once. Processing an entry never
//! fails; a stage that cannot make a decision leaves the entry untouched.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod stages;
pub mod types;

pub use error::{CoercionError, PipelineError, StageError, TenantConfigError};
pub use pipeline::{Pipeline, StageSpec};
pub use stages::tenant::{TenantConfig, TenantStage};
pub use stages::{debug_enabled, new_stage, set_debug, Stage, STAGE_TYPE_TENANT};
pub use types::{Entry, ExtractedFields, LabelSet, RESERVED_LABEL_TENANT_ID};
