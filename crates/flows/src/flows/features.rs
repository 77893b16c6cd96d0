//! Feature suggestion flow.
//!
//! Seed flow of every planning session: takes the app description and
//! returns a list of detailed feature suggestions.

use super::LEVELS;
use crate::invoker::FlowDefinition;
use crate::schema::{FieldSpec, FieldType, ObjectSchema};

const INSTRUCTION: &str = "\
You are an AI-powered app idea consultant. Given a description of an application a user wants to build, you will return a list of possible features for that application.

For each feature, provide a concise name, a brief (1-2 sentences) explanation of what the feature entails and its benefit to the user or business, a category, and an implementation complexity estimate.

Classify each feature into one of the following categories or a similar relevant one: \"Core Functionality\", \"User Interface\", \"AI-Powered\", \"Data & Analytics\", \"Monetization\", \"Security\", \"User Engagement\", \"Accessibility\", \"Performance & Scalability\".

Description of the application:
{{appDescription}}";

/// Schema for one feature entry.
fn feature_detail_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "name",
            "The concise name of the feature (e.g., \"User Authentication\", \"AI Image Generation\").",
            FieldType::String,
        ),
        FieldSpec::new(
            "description",
            "A brief (1-2 sentences) explanation of what the feature entails and its benefit.",
            FieldType::String,
        ),
        FieldSpec::new(
            "category",
            "A category for the feature (e.g., \"Core Functionality\", \"User Interface\", \"AI-Powered\").",
            FieldType::String,
        ),
        FieldSpec::new(
            "complexity",
            "An estimated complexity level (Low, Medium, or High) for implementing the feature.",
            FieldType::StringEnum(LEVELS),
        ),
    ])
}

/// The feature suggestion flow.
pub fn definition() -> FlowDefinition {
    FlowDefinition {
        name: "features",
        instruction: INSTRUCTION,
        output_schema: ObjectSchema::new(vec![FieldSpec::new(
            "features",
            "A list of detailed feature suggestions for the described application.",
            FieldType::array(FieldType::Object(feature_detail_schema())),
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_complexity_enum() {
        let schema = definition().output_schema.to_json_schema();
        let complexity =
            &schema["properties"]["features"]["items"]["properties"]["complexity"]["enum"];
        assert_eq!(complexity[0], "Low");
        assert_eq!(complexity[2], "High");
    }

    #[test]
    fn test_instruction_renders_description() {
        let input = crate::types::DescriptionInput {
            app_description: "A recipe app".to_string(),
        };
        let rendered = crate::template::render(INSTRUCTION, &input).unwrap();
        assert!(rendered.contains("A recipe app"));
        assert!(!rendered.contains("{{"));
    }
}
