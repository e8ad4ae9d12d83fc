//! Pipeline — an ordered list of stages built from configuration.

use crate::error::PipelineError;
use crate::stages::{new_stage, Stage};
use crate::types::Entry;
use std::collections::BTreeMap;

/// One configured stage: a single key naming the stage type, mapped to
/// that stage's configuration payload.
///
/// ```yaml
/// - tenant:
///     source: tenant_id
/// ```
pub type StageSpec = BTreeMap<String, serde_json::Value>;

/// Stages applied in order to every entry.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(specs: &[StageSpec]) -> Result<Self, PipelineError> {
        let mut stages = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            let mut iter = spec.iter();
            let (stage_type, config) = match (iter.next(), iter.next()) {
                (Some(only), None) => only,
                _ => {
                    return Err(PipelineError::StageKeys {
                        index,
                        found: spec.len(),
                    })
                }
            };
            let stage = new_stage(stage_type, config).map_err(|source| PipelineError::Stage {
                index,
                stage_type: stage_type.clone(),
                source,
            })?;
            tracing::debug!(index, stage = stage.name(), "pipeline stage ready");
            stages.push(stage);
        }
        Ok(Self { stages })
    }

    pub fn process(&self, entry: &mut Entry) {
        for stage in &self.stages {
            stage.process_entry(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
