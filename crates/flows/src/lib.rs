//! Prompt-flow system for the Idea Forge CLI.
//!
//! A *flow* is one schema-validated round trip to a generative LLM service:
//! render a prompt from a Handlebars template, submit it together with a
//! declarative output schema, validate the structured reply, and return a
//! typed planning artifact.
//!
//! This crate provides:
//! - Declarative output schemas ([`schema`]) used both to instruct the model
//!   and to validate its reply
//! - Handlebars template rendering ([`template`])
//! - The generic flow invoker ([`invoker`])
//! - The six planning flows ([`flows`]) and their artifact types ([`types`])
//! - Per-flow session state and the flow dependency graph ([`session`],
//!   [`graph`])

pub mod flows;
pub mod graph;
pub mod invoker;
pub mod schema;
pub mod session;
pub mod template;
pub mod types;

// Re-export main types
pub use graph::FlowKind;
pub use invoker::{invoke, FlowDefinition};
pub use schema::{FieldSpec, FieldType, ObjectSchema};
pub use session::{FlowState, Session};
pub use types::{
    AiDevPlan, AiDevPlanPhase, AiFeatureImplementation, Complexity, DescriptionInput, DevPlan,
    DevPlanPhase, FeatureAlignment, FeatureDetail, FeatureList, LeanCanvas,
    MonetizationStrategy, PersonaList, PlanningInput, ProblemSolutionFit, PromptSuggestion,
    StrategyList, UserPersona,
};
