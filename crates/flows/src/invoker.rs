//! The generic prompt-flow invoker.
//!
//! One invocation is a single round trip: render the instruction template
//! with the typed input, compose it with the schema's field instructions,
//! submit prompt plus JSON Schema to the provider, validate the reply, and
//! deserialize it into the typed artifact.
//!
//! The invoker is stateless. Failure modes map onto the error taxonomy:
//! upstream failures surface as `AppError::Llm`, non-conforming replies as
//! `AppError::Schema`. An empty-but-valid reply (e.g., zero features) is a
//! success; presentation is the caller's decision.

use forge_core::{AppError, AppResult};
use forge_llm::{LlmClient, LlmRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::schema::ObjectSchema;
use crate::template;

/// One flow: an instruction template plus the declarative output schema.
///
/// The template carries the role and task text with input placeholders; the
/// schema declares the reply shape. They are kept separate and composed at
/// call time.
pub struct FlowDefinition {
    /// Flow identifier used in logs (e.g., "features", "dev-plan")
    pub name: &'static str,

    /// Handlebars instruction template
    pub instruction: &'static str,

    /// Expected reply shape
    pub output_schema: ObjectSchema,
}

/// Invoke a flow: render, submit, validate, deserialize.
pub async fn invoke<I, O>(
    client: &dyn LlmClient,
    model: &str,
    flow: &FlowDefinition,
    input: &I,
) -> AppResult<O>
where
    I: Serialize,
    O: DeserializeOwned,
{
    tracing::info!(flow = flow.name, provider = client.provider_name(), "Invoking flow");

    let rendered = template::render(flow.instruction, input)?;
    let prompt = format!(
        "{}\n\nReply with a single JSON object containing these fields:\n{}",
        rendered.trim_end(),
        flow.output_schema.instructions()
    );

    tracing::debug!(flow = flow.name, prompt_len = prompt.len(), "Rendered prompt");

    let request =
        LlmRequest::new(prompt, model).with_response_schema(flow.output_schema.to_json_schema());

    let response = client.complete(&request).await?;

    let raw = strip_code_fence(&response.content);
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        AppError::Schema(format!(
            "Flow '{}' reply is not valid JSON: {}",
            flow.name, e
        ))
    })?;

    flow.output_schema.validate(&value)?;

    let artifact = serde_json::from_value(value).map_err(|e| {
        AppError::Schema(format!(
            "Flow '{}' reply does not match the expected shape: {}",
            flow.name, e
        ))
    })?;

    tracing::info!(flow = flow.name, "Flow completed");

    Ok(artifact)
}

/// Strip a surrounding Markdown code fence from a reply, if present.
///
/// Some models wrap structured replies in ```json fences even when a schema
/// was requested.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence line
    match inner.split_once('\n') {
        Some((first_line, rest)) if !first_line.trim().is_empty() => rest.trim(),
        _ => inner.trim(),
    }
}
