//! Lean Canvas generation flow.
//!
//! Produces the nine fixed canvas sections from the app description and the
//! feature list (the features feed the Solution and UVP sections).

use crate::invoker::FlowDefinition;
use crate::schema::{FieldSpec, FieldType, ObjectSchema};

const INSTRUCTION: &str = "\
You are an expert Business Strategist and Startup Coach specializing in the Lean Startup methodology.
Your task is to generate a Lean Canvas for the provided application idea.

App Description:
{{appDescription}}

Key Features (for context, especially for Solution and UVP):
{{#each features}}
- Name: {{name}}
  Description: {{description}}
{{/each}}

Fill out every section of the Lean Canvas based on the app description and features. For sections that ask for lists, provide 1 to 3 distinct, concise points. Be concise and actionable for each section.";

fn points() -> FieldType {
    FieldType::bounded_array(FieldType::String, 1, 3)
}

/// The Lean Canvas flow.
pub fn definition() -> FlowDefinition {
    FlowDefinition {
        name: "lean-canvas",
        instruction: INSTRUCTION,
        output_schema: ObjectSchema::new(vec![
            FieldSpec::new(
                "problem",
                "The top 1-3 problems this application aims to solve for its target users.",
                points(),
            ),
            FieldSpec::new(
                "customerSegments",
                "The specific target customer segments, including the likely early adopters.",
                points(),
            ),
            FieldSpec::new(
                "uniqueValueProposition",
                "The single, clear, compelling message that states why this application is different and worth using.",
                FieldType::String,
            ),
            FieldSpec::new(
                "solution",
                "The top 1-3 key features or aspects of the application that directly address the identified problems.",
                points(),
            ),
            FieldSpec::new(
                "channels",
                "The primary pathways to reach and acquire the customer segments.",
                points(),
            ),
            FieldSpec::new(
                "revenueStreams",
                "How the application will generate income (e.g., subscriptions, ads, sales).",
                points(),
            ),
            FieldSpec::new(
                "costStructure",
                "The major fixed and variable costs involved (e.g., development, marketing, operations).",
                points(),
            ),
            FieldSpec::new(
                "keyMetrics",
                "The key activities or numbers to measure to track how the business is doing.",
                points(),
            ),
            FieldSpec::new(
                "unfairAdvantage",
                "Something about this application or business that cannot be easily copied or bought by competitors.",
                FieldType::String,
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_has_nine_sections() {
        let schema = definition().output_schema.to_json_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 9);
        assert_eq!(schema["required"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_list_sections_bounded() {
        let reply = serde_json::json!({
            "problem": ["p1", "p2", "p3", "p4"],
            "customerSegments": ["c"],
            "uniqueValueProposition": "uvp",
            "solution": ["s"],
            "channels": ["ch"],
            "revenueStreams": ["r"],
            "costStructure": ["co"],
            "keyMetrics": ["k"],
            "unfairAdvantage": "ua"
        });
        assert!(definition().output_schema.validate(&reply).is_err());
    }
}
