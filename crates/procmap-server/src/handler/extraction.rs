//! Process extraction handlers.
//!
//! These routes return JSON recovered from the reply instead of DOT. A reply
//! without any JSON yields an empty result rather than an error.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use procmap_service::CompletionService;
use procmap_service::extract::{extract_steps, extract_structure};
use procmap_service::prompt::PromptTemplate;

use crate::extract::Json;
use crate::handler::request::TextRequest;
use crate::handler::response::{StepsResponse, StructureResponse};
use crate::handler::{ErrorResponse, Result};
use crate::service::ServiceState;

/// Tracing target for process extraction.
const TRACING_TARGET: &str = "procmap_server::handler::extraction";

/// Extracts the steps of a process with their role and node type.
#[tracing::instrument(skip_all)]
async fn extract_steps_roles_types(
    State(completion): State<CompletionService>,
    Json(request): Json<TextRequest>,
) -> Result<(StatusCode, Json<StepsResponse>)> {
    let text = request.into_text()?;

    tracing::debug!(
        target: TRACING_TARGET,
        text_len = text.len(),
        "Extracting process steps"
    );

    let prompt = PromptTemplate::ExtractStepsRolesTypes.render(&text);
    let reply = completion.complete_prompt(prompt).await?;
    let steps = extract_steps(&reply)?;

    tracing::info!(
        target: TRACING_TARGET,
        steps = steps.len(),
        "Process steps extracted"
    );

    Ok((StatusCode::OK, Json(steps.into())))
}

fn extract_steps_roles_types_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Extract steps")
        .description(
            "Lists the steps of a process with a short description, the \
            Responsible role and the node type of each step.",
        )
        .response::<200, Json<StepsResponse>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Extracts the nodes and edges of a process.
#[tracing::instrument(skip_all)]
async fn extract_process_structure(
    State(completion): State<CompletionService>,
    Json(request): Json<TextRequest>,
) -> Result<(StatusCode, Json<StructureResponse>)> {
    let text = request.into_text()?;

    tracing::debug!(
        target: TRACING_TARGET,
        text_len = text.len(),
        "Extracting process structure"
    );

    let prompt = PromptTemplate::ExtractProcessStructure.render(&text);
    let reply = completion.complete_prompt(prompt).await?;
    let structure = extract_structure(&reply)?;

    tracing::info!(
        target: TRACING_TARGET,
        nodes = structure.nodes.len(),
        edges = structure.edges.len(),
        "Process structure extracted"
    );

    Ok((StatusCode::OK, Json(structure.into())))
}

fn extract_process_structure_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Extract structure")
        .description(
            "Returns the nodes and edges of a process. Edge labels are only set \
            on decision branches. The result can be edited and sent to \
            `/api/generate-dot-from-structure`.",
        )
        .response::<200, Json<StructureResponse>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all process extraction routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/extract-steps-roles-types",
            post_with(extract_steps_roles_types, extract_steps_roles_types_docs),
        )
        .api_route(
            "/api/extract-process-structure",
            post_with(extract_process_structure, extract_process_structure_docs),
        )
        .with_path_items(|item| item.tag("Extraction"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use procmap_service::MockProvider;
    use serde_json::{Value, json};

    use crate::handler::response::{StepsResponse, StructureResponse};
    use crate::handler::test::create_test_server_with_provider;

    const STEPS_REPLY: &str = r#"Sure! Here are the steps:
[
  {"description": "Submit request", "role": "Employee", "node_type": "start"},
  {"description": "Approved?", "role": null, "node_type": "decision"},
  {"description": "Archive"}
]"#;

    const STRUCTURE_REPLY: &str = r#"```json
{
  "nodes": [
    {"id": "1", "description": "Submit request", "role": "Employee", "node_type": "start"},
    {"id": "2", "description": "Approved?", "role": "Manager", "node_type": "decision"},
    {"id": "3", "description": "Notify", "role": "HR"}
  ],
  "edges": [
    {"from": "1", "to": "2"},
    {"from": "2", "to": "3", "label": "Yes"}
  ]
}
```"#;

    #[tokio::test]
    async fn extract_steps_decodes_array() -> anyhow::Result<()> {
        let provider = MockProvider::with_reply(STEPS_REPLY);
        let server = create_test_server_with_provider(&provider)?;

        let response = server
            .post("/api/extract-steps-roles-types")
            .json(&json!({ "text": "An employee submits a request." }))
            .await;
        response.assert_status_ok();

        let body = response.json::<StepsResponse>();
        let steps = body.steps_roles_types;
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].role.as_deref(), Some("Employee"));
        assert_eq!(steps[1].role, None);
        assert_eq!(steps[1].node_type, "decision");
        assert_eq!(steps[2].node_type, "process");

        let prompts = provider.prompts().await;
        assert!(prompts[0].contains("An employee submits a request."));

        Ok(())
    }

    #[tokio::test]
    async fn extract_steps_without_json_is_empty() -> anyhow::Result<()> {
        let provider = MockProvider::with_reply("I could not find any steps.");
        let server = create_test_server_with_provider(&provider)?;

        let response = server
            .post("/api/extract-steps-roles-types")
            .json(&json!({ "text": "Nothing happens." }))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "steps_roles_types": [] })
        );

        Ok(())
    }

    #[tokio::test]
    async fn extract_steps_with_broken_json_fails() -> anyhow::Result<()> {
        let provider = MockProvider::with_reply("[{\"description\": }]");
        let server = create_test_server_with_provider(&provider)?;

        let response = server
            .post("/api/extract-steps-roles-types")
            .json(&json!({ "text": "Broken." }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["name"], "extraction_failed");

        Ok(())
    }

    #[tokio::test]
    async fn extract_steps_rejects_missing_text() -> anyhow::Result<()> {
        let provider = MockProvider::with_reply(STEPS_REPLY);
        let server = create_test_server_with_provider(&provider)?;

        let response = server
            .post("/api/extract-steps-roles-types")
            .json(&json!({ "text": "" }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "No text provided");
        assert_eq!(provider.call_count().await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn extract_structure_decodes_object() -> anyhow::Result<()> {
        let provider = MockProvider::with_reply(STRUCTURE_REPLY);
        let server = create_test_server_with_provider(&provider)?;

        let response = server
            .post("/api/extract-process-structure")
            .json(&json!({ "text": "An employee submits a request." }))
            .await;
        response.assert_status_ok();

        let structure = response.json::<StructureResponse>().structure;
        assert_eq!(structure.nodes.len(), 3);
        assert_eq!(structure.nodes[2].node_type, "process");
        assert_eq!(structure.edges.len(), 2);
        assert_eq!(structure.edges[0].label, None);
        assert_eq!(structure.edges[1].label.as_deref(), Some("Yes"));

        Ok(())
    }

    #[tokio::test]
    async fn extract_structure_without_json_is_empty() -> anyhow::Result<()> {
        let provider = MockProvider::with_reply("No structure here.");
        let server = create_test_server_with_provider(&provider)?;

        let response = server
            .post("/api/extract-process-structure")
            .json(&json!({ "text": "Nothing happens." }))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "structure": { "nodes": [], "edges": [] } })
        );

        Ok(())
    }

    #[tokio::test]
    async fn extract_structure_rejects_missing_text() -> anyhow::Result<()> {
        let provider = MockProvider::with_reply(STRUCTURE_REPLY);
        let server = create_test_server_with_provider(&provider)?;

        let response = server
            .post("/api/extract-process-structure")
            .json(&json!({}))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(provider.call_count().await, 0);

        Ok(())
    }
}
