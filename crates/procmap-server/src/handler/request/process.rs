//! Process description request types.

use procmap_service::{Error, ProcessStructure, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Message returned when `text` is absent or blank.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Message returned when `structure` is absent or has no nodes.
pub const NO_STRUCTURE_PROVIDED: &str = "No structure provided";

/// Request body carrying a free-text process description.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TextRequest {
    /// Free-text description of the process.
    #[serde(default)]
    pub text: Option<String>,
}

impl TextRequest {
    /// Creates a request with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Returns the text, rejecting an absent or blank value.
    pub fn into_text(self) -> Result<String> {
        match self.text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(Error::missing_input().with_message(NO_TEXT_PROVIDED)),
        }
    }
}

/// Request body carrying an already extracted process structure.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StructureRequest {
    /// Nodes, edges and an optional title.
    #[serde(default)]
    pub structure: Option<ProcessStructure>,
}

impl StructureRequest {
    /// Creates a request with the given structure.
    pub fn new(structure: ProcessStructure) -> Self {
        Self {
            structure: Some(structure),
        }
    }

    /// Returns the structure, rejecting an absent one or one without nodes.
    pub fn into_structure(self) -> Result<ProcessStructure> {
        match self.structure {
            Some(structure) if !structure.is_empty() => Ok(structure),
            _ => Err(Error::missing_input().with_message(NO_STRUCTURE_PROVIDED)),
        }
    }
}
