//! Prompt templates for flowchart generation and process analysis.
//!
//! Each route uses one fixed [`PromptTemplate`]. Rendering substitutes the
//! caller's text for the `{user_input}` placeholder in a single pass, so
//! text that itself contains the placeholder is left as is.

mod templates;

use strum::{AsRefStr, EnumIter};

use crate::Result;
use crate::types::ProcessStructure;

/// Placeholder replaced by the caller's input.
const PLACEHOLDER: &str = "{user_input}";

/// Title used when a structure does not carry one.
pub const DEFAULT_TITLE: &str = "Process Flow";

/// The fixed instruction templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PromptTemplate {
    /// Free text to a styled DOT flowchart.
    GenerateDot,
    /// A reviewed node/edge structure to a DOT flowchart.
    GenerateDotFromStructure,
    /// Free text to a JSON array of steps with roles and node types.
    ExtractStepsRolesTypes,
    /// Free text to a JSON object of nodes and edges.
    ExtractProcessStructure,
}

impl PromptTemplate {
    /// Returns the raw template text, placeholder included.
    pub fn template(self) -> &'static str {
        match self {
            Self::GenerateDot => templates::GENERATE_DOT,
            Self::GenerateDotFromStructure => templates::GENERATE_DOT_FROM_STRUCTURE,
            Self::ExtractStepsRolesTypes => templates::EXTRACT_STEPS_ROLES_TYPES,
            Self::ExtractProcessStructure => templates::EXTRACT_PROCESS_STRUCTURE,
        }
    }

    /// Substitutes `input` for the placeholder.
    pub fn render(self, input: &str) -> String {
        self.template().replacen(PLACEHOLDER, input, 1)
    }
}

/// Renders the structure-to-DOT prompt.
///
/// The payload carries the title (or [`DEFAULT_TITLE`]) and the structure as
/// pretty-printed JSON.
pub fn render_structure_prompt(structure: &ProcessStructure) -> Result<String> {
    let title = structure
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE);
    let json = serde_json::to_string_pretty(structure)?;

    let payload = format!("Title: {title}\n\nStructure (JSON):\n{json}");
    Ok(PromptTemplate::GenerateDotFromStructure.render(&payload))
}
