//! Flowchart generation handlers.
//!
//! Both routes make exactly one completion call and answer with DOT source
//! that starts with `digraph`.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use procmap_service::CompletionService;
use procmap_service::extract::extract_dot;
use procmap_service::prompt::{PromptTemplate, render_structure_prompt};

use crate::extract::Json;
use crate::handler::request::{StructureRequest, TextRequest};
use crate::handler::response::DotResponse;
use crate::handler::{ErrorResponse, Result};
use crate::service::ServiceState;

/// Tracing target for flowchart generation.
const TRACING_TARGET: &str = "procmap_server::handler::generate";

/// Generates a flowchart from a free-text process description.
#[tracing::instrument(skip_all)]
async fn generate_dot(
    State(completion): State<CompletionService>,
    Json(request): Json<TextRequest>,
) -> Result<(StatusCode, Json<DotResponse>)> {
    let text = request.into_text()?;

    tracing::debug!(
        target: TRACING_TARGET,
        text_len = text.len(),
        "Generating flowchart from text"
    );

    let prompt = PromptTemplate::GenerateDot.render(&text);
    let reply = completion.complete_prompt(prompt).await?;
    let dot = extract_dot(&reply)?;

    tracing::info!(
        target: TRACING_TARGET,
        dot_len = dot.len(),
        "Flowchart generated"
    );

    Ok((StatusCode::OK, Json(dot.into())))
}

fn generate_dot_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Generate flowchart")
        .description(
            "Turns a free-text process description into Graphviz DOT source. \
            Only the Responsible role of each step is kept.",
        )
        .response::<200, Json<DotResponse>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Generates a flowchart from an edited process structure.
#[tracing::instrument(skip_all)]
async fn generate_dot_from_structure(
    State(completion): State<CompletionService>,
    Json(request): Json<StructureRequest>,
) -> Result<(StatusCode, Json<DotResponse>)> {
    let structure = request.into_structure()?;

    tracing::debug!(
        target: TRACING_TARGET,
        nodes = structure.nodes.len(),
        edges = structure.edges.len(),
        has_title = structure.title.is_some(),
        "Generating flowchart from structure"
    );

    let prompt = render_structure_prompt(&structure)?;
    let reply = completion.complete_prompt(prompt).await?;
    let dot = extract_dot(&reply)?;

    tracing::info!(
        target: TRACING_TARGET,
        dot_len = dot.len(),
        "Flowchart generated"
    );

    Ok((StatusCode::OK, Json(dot.into())))
}

fn generate_dot_from_structure_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Generate flowchart from structure")
        .description(
            "Renders Graphviz DOT source from nodes and edges, using the supplied \
            descriptions, roles and labels as given.",
        )
        .response::<200, Json<DotResponse>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all flowchart generation routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/generate-dot",
            post_with(generate_dot, generate_dot_docs),
        )
        .api_route(
            "/api/generate-dot-from-structure",
            post_with(generate_dot_from_structure, generate_dot_from_structure_docs),
        )
        .with_path_items(|item| item.tag("Flowcharts"))
}
