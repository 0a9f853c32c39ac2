//! Process flowchart response types.

use procmap_service::{DotSource, ProcessStep, ProcessStructure};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generated Graphviz source.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DotResponse {
    /// DOT source starting with `digraph`.
    pub dot: String,
}

impl From<DotSource> for DotResponse {
    fn from(dot: DotSource) -> Self {
        Self {
            dot: dot.into_inner(),
        }
    }
}

/// Steps extracted from a process description.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StepsResponse {
    /// Steps in the order they were found.
    pub steps_roles_types: Vec<ProcessStep>,
}

impl From<Vec<ProcessStep>> for StepsResponse {
    fn from(steps_roles_types: Vec<ProcessStep>) -> Self {
        Self { steps_roles_types }
    }
}

/// Nodes and edges extracted from a process description.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StructureResponse {
    pub structure: ProcessStructure,
}

impl From<ProcessStructure> for StructureResponse {
    fn from(structure: ProcessStructure) -> Self {
        Self { structure }
    }
}
