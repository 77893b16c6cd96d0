//! Standard development plan flow.
//!
//! Groups the suggested features into phased work with durations, an
//! overall timeline, and recommendations. Phases containing AI-powered
//! features additionally carry conceptual runtime prompt ideas.

use crate::invoker::FlowDefinition;
use crate::schema::{FieldSpec, FieldType, ObjectSchema};

const INSTRUCTION: &str = "\
You are an expert Project Manager and Lead Developer. Your task is to create a high-level development plan and indicative calendar for a new application based on its description and a list of suggested features (including their complexities).

App Description:
{{appDescription}}

Suggested Features (with name, description, category, complexity):
{{#each features}}
- Name: {{name}}
  Description: {{description}}
  Category: {{category}}
  Complexity: {{complexity}}
{{/each}}

Logically group features into phases. Consider feature complexities (Low, Medium, High) and dependencies. Typically, start with core functionality and lower complexity items for an MVP or initial release; more complex or supplementary features come in later phases. Aim for 2-4 phases.

For features within a phase that are categorized as 'AI-Powered' or could significantly benefit from AI at runtime, include prompt suggestions: each one names a feature from that phase and gives a high-level conceptual instruction for an AI model, suitable as a starting point for a developer. Do not include code syntax in a suggested prompt; it must be a plain natural-language instruction. Omit the prompt suggestions field for phases without relevant AI features.

Provide at least 2-3 distinct recommendations for the development process, such as advice on technology choices, testing strategies, deployment, or user feedback loops.";

fn prompt_suggestion_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "featureName",
            "The name of the feature this prompt relates to.",
            FieldType::String,
        ),
        FieldSpec::new(
            "suggestedPrompt",
            "A high-level conceptual starter prompt for implementing this feature with AI, as a natural-language instruction, not code.",
            FieldType::String,
        ),
    ])
}

fn phase_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "phaseTitle",
            "Title of the development phase (e.g., 'Phase 1: Core Functionality & MVP').",
            FieldType::String,
        ),
        FieldSpec::new(
            "phaseGoal",
            "A brief goal for this phase, explaining what will be achieved.",
            FieldType::String,
        ),
        FieldSpec::new(
            "featuresToImplement",
            "List of feature names (from the provided list) to be implemented in this phase.",
            FieldType::array(FieldType::String),
        ),
        FieldSpec::new(
            "estimatedDuration",
            "Estimated duration for this phase (e.g., '2-3 weeks', '1 month').",
            FieldType::String,
        ),
        FieldSpec::new(
            "promptSuggestions",
            "Conceptual runtime AI prompt ideas for AI-powered features in this phase. Only populated when the phase has relevant AI features.",
            FieldType::array(FieldType::Object(prompt_suggestion_schema())),
        )
        .optional(),
    ])
}

/// The standard development plan flow.
pub fn definition() -> FlowDefinition {
    FlowDefinition {
        name: "dev-plan",
        instruction: INSTRUCTION,
        output_schema: ObjectSchema::new(vec![
            FieldSpec::new(
                "projectName",
                "A suitable and concise name for the project, inferred from the app description.",
                FieldType::String,
            ),
            FieldSpec::new(
                "executiveSummary",
                "A brief 1-2 sentence executive summary of the overall development plan and timeline.",
                FieldType::String,
            ),
            FieldSpec::new(
                "phases",
                "An array of development phases. Each phase logically groups features by complexity and dependencies.",
                FieldType::array(FieldType::Object(phase_schema())),
            ),
            FieldSpec::new(
                "overallTimeline",
                "A summary of the total estimated project timeline (e.g., 'Total estimated duration: 3-4 months').",
                FieldType::String,
            ),
            FieldSpec::new(
                "recommendations",
                "Key recommendations or strategic considerations for the development process. At least 2-3 distinct recommendations.",
                FieldType::array(FieldType::String),
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Complexity, FeatureDetail, PlanningInput};

    #[test]
    fn test_instruction_renders_feature_block() {
        let input = PlanningInput {
            app_description: "A recipe app".to_string(),
            features: vec![FeatureDetail {
                name: "Search".to_string(),
                description: "Find recipes".to_string(),
                category: "Core Functionality".to_string(),
                complexity: Complexity::Medium,
            }],
        };

        let rendered = crate::template::render(INSTRUCTION, &input).unwrap();
        assert!(rendered.contains("- Name: Search"));
        assert!(rendered.contains("Complexity: Medium"));
    }

    #[test]
    fn test_instruction_renders_with_zero_features() {
        let input = PlanningInput {
            app_description: "A recipe app".to_string(),
            features: vec![],
        };

        let rendered = crate::template::render(INSTRUCTION, &input).unwrap();
        assert!(rendered.contains("A recipe app"));
        assert!(!rendered.contains("- Name:"));
    }

    #[test]
    fn test_prompt_suggestions_are_optional() {
        let reply = serde_json::json!({
            "projectName": "P",
            "executiveSummary": "S",
            "phases": [{
                "phaseTitle": "Phase 1",
                "phaseGoal": "G",
                "featuresToImplement": ["Search"],
                "estimatedDuration": "1 week"
            }],
            "overallTimeline": "1 week",
            "recommendations": ["r1", "r2"]
        });
        assert!(definition().output_schema.validate(&reply).is_ok());
    }
}
