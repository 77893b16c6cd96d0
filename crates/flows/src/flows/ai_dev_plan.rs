//! AI-accelerated development plan flow.
//!
//! A variant of the development plan that assumes the team leans heavily on
//! AI developer tools. Every feature carries implementation notes and a
//! concrete coding-assistant prompt.

use crate::invoker::FlowDefinition;
use crate::schema::{FieldSpec, FieldType, ObjectSchema};

const INSTRUCTION: &str = "\
You are an expert Software Architect and Lead Developer specializing in AI-accelerated software development methodologies.
Your task is to create a high-level development plan for a new application, assuming the development team will heavily utilize AI developer tools (in-IDE code assistants, AI for UI generation, automated testing tools) to maximize speed and efficiency for implementing ALL features.

App Description:
{{appDescription}}

Previously Suggested Features (with name, description, category, complexity):
{{#each features}}
- Name: {{name}}
  Description: {{description}}
  Category: {{category}}
  Complexity: {{complexity}}
{{/each}}

Aim for 2-4 phases and logically group features into them, considering how AI tools might change the order or grouping compared to a traditional plan. For every feature in a phase give practical notes on how AI developer tools specifically accelerate it, plus a concrete, actionable prompt a developer could give to an AI coding assistant to generate code, components, or logic for that feature. This is a prompt for code generation during development, not a runtime AI prompt.
Example prompt: \"Generate a functional component for a user login form with email and password fields. Include client-side validation for email format and password length.\"

Focus on practical, actionable advice for a team embracing AI-assisted development. The suggested coding-assistant prompts should be specific enough to be useful.";

fn feature_implementation_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "featureName",
            "The exact name of the feature from the provided list.",
            FieldType::String,
        ),
        FieldSpec::new(
            "aiDevelopmentNotes",
            "Brief, practical notes (1-2 sentences) on how AI developer tools can specifically accelerate the implementation of this feature.",
            FieldType::String,
        ),
        FieldSpec::new(
            "suggestedCodingAssistantPrompt",
            "A concrete, actionable prompt a developer could give an AI coding assistant to generate code for this specific feature.",
            FieldType::String,
        ),
    ])
}

fn phase_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "phaseTitle",
            "Title of the development phase (e.g., 'Phase 1: AI-Assisted Core Setup & MVP').",
            FieldType::String,
        ),
        FieldSpec::new(
            "phaseGoal",
            "A brief goal for this phase, emphasizing AI-driven efficiency.",
            FieldType::String,
        ),
        FieldSpec::new(
            "featuresToImplement",
            "Features to be implemented in this phase, each with AI development notes and a coding assistant prompt.",
            FieldType::array(FieldType::Object(feature_implementation_schema())),
        ),
        FieldSpec::new(
            "estimatedDurationWithAiSupport",
            "Estimated duration for this phase, considering the acceleration provided by AI developer tools (e.g., '1-2 weeks').",
            FieldType::String,
        ),
    ])
}

/// The AI-accelerated development plan flow.
pub fn definition() -> FlowDefinition {
    FlowDefinition {
        name: "ai-dev-plan",
        instruction: INSTRUCTION,
        output_schema: ObjectSchema::new(vec![
            FieldSpec::new(
                "projectName",
                "A suitable name for the project, consistent with the initial plan if available.",
                FieldType::String,
            ),
            FieldSpec::new(
                "executiveSummary",
                "A brief 1-2 sentence executive summary of this AI-accelerated plan, highlighting speed and modern tooling.",
                FieldType::String,
            ),
            FieldSpec::new(
                "phases",
                "An array of development phases structured for AI-assisted development.",
                FieldType::array(FieldType::Object(phase_schema())),
            ),
            FieldSpec::new(
                "overallTimelineWithAiSupport",
                "A summary of the total estimated project timeline, reflecting AI-assisted efficiencies.",
                FieldType::String,
            ),
            FieldSpec::new(
                "generalAiToolingRecommendations",
                "At least 2-3 key general recommendations for leveraging AI developer tools throughout the project.",
                FieldType::array(FieldType::String),
            ),
        ]),
    }
}
