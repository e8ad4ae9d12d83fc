//! tenantline — tenant routing for log pipelines.
//!
//! The stage logic lives in [`tenantline_core`]; this crate adds the
//! line-oriented [`ingestor`] used by the binary and re-exports the core
//! types so integration tests can import everything from one place.
//!
//! ```text
//! stdin (JSON lines) ──► Ingestor ──► Pipeline ──► stdout (JSON lines)
//! ```

pub mod ingestor;

pub use tenantline_core::*;
