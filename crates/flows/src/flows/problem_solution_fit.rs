//! Problem/solution fit analysis flow.

use crate::invoker::FlowDefinition;
use crate::schema::{FieldSpec, FieldType, ObjectSchema};

const INSTRUCTION: &str = "\
You are an expert Product Analyst and Strategist. Your task is to analyze the provided application description and its key features to articulate its problem/solution fit.

App Description:
{{appDescription}}

Key Features:
{{#each features}}
- Name: {{name}}
  Description: {{description}}
  Category: {{category}}
  Complexity: {{complexity}}
{{/each}}

Concisely state the primary problem the application aims to solve for its target users, explain how the application leverages its features to solve it, select the 2 to 4 most impactful features and describe how each directly contributes to the solution, and close with a brief assessment of the strength of the fit, mentioning its potential or areas for deeper validation.

Ensure your analysis is insightful and directly tied to the provided app description and features. Focus on clarity and conciseness.";

fn alignment_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "featureName",
            "The name of one of the key suggested features.",
            FieldType::String,
        ),
        FieldSpec::new(
            "alignmentNote",
            "A brief explanation of how this specific feature directly contributes to addressing the identified core problem.",
            FieldType::String,
        ),
    ])
}

/// The problem/solution fit flow.
pub fn definition() -> FlowDefinition {
    FlowDefinition {
        name: "problem-solution-fit",
        instruction: INSTRUCTION,
        output_schema: ObjectSchema::new(vec![
            FieldSpec::new(
                "identifiedProblem",
                "A concise (1-2 sentences) articulation of the core problem the application appears to solve.",
                FieldType::String,
            ),
            FieldSpec::new(
                "solutionOverview",
                "A brief (2-3 sentences) overview of how the application and its key features propose to solve the identified problem.",
                FieldType::String,
            ),
            FieldSpec::new(
                "featureAlignmentAnalysis",
                "An analysis of how 2-4 key features specifically align with solving the core problem.",
                FieldType::bounded_array(FieldType::Object(alignment_schema()), 2, 4),
            ),
            FieldSpec::new(
                "overallAssessment",
                "A concluding thought (1-2 sentences) on the potential problem/solution fit.",
                FieldType::String,
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(name: &str) -> serde_json::Value {
        serde_json::json!({"featureName": name, "alignmentNote": "note"})
    }

    #[test]
    fn test_alignment_count_bounds() {
        let base = |alignments: Vec<serde_json::Value>| {
            serde_json::json!({
                "identifiedProblem": "P",
                "solutionOverview": "S",
                "featureAlignmentAnalysis": alignments,
                "overallAssessment": "A"
            })
        };

        let schema = definition().output_schema;
        assert!(schema.validate(&base(vec![alignment("a")])).is_err());
        assert!(schema
            .validate(&base(vec![alignment("a"), alignment("b")]))
            .is_ok());
        assert!(schema
            .validate(&base(vec![
                alignment("a"),
                alignment("b"),
                alignment("c"),
                alignment("d"),
                alignment("e")
            ]))
            .is_err());
    }
}
