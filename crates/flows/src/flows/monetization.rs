//! Monetization strategy suggestion flow.

use crate::invoker::FlowDefinition;
use crate::schema::{FieldSpec, FieldType, ObjectSchema};

const INSTRUCTION: &str = "\
You are an expert Business Strategist and App Monetization Consultant.
Your task is to analyze the provided application description and its key features, and then suggest 2-3 distinct and relevant monetization strategies.

App Description:
{{appDescription}}

Key Features:
{{#each features}}
- Name: {{name}}
  Description: {{description}}
  Category: {{category}}
  Complexity: {{complexity}}
{{/each}}

For each strategy, name it by its common name (e.g., \"Subscription Model\", \"Freemium with Ad Support\", \"In-App Purchases for Premium Content\", \"One-Time Purchase\", \"Affiliate Marketing\"), explain how it works in general, explain specifically why it fits this particular application and its value proposition, call out its key drawbacks, and list the important questions the developer should weigh before pursuing it.

Ensure the strategies are diverse and practical for the given app concept.";

fn strategy_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "strategyName",
            "The common name of the strategy (e.g., \"Subscription Model\", \"Freemium with Ad Support\").",
            FieldType::String,
        ),
        FieldSpec::new(
            "description",
            "A brief (1-2 sentences) explanation of how this monetization strategy works in general.",
            FieldType::String,
        ),
        FieldSpec::new(
            "suitabilityRationale",
            "A specific explanation (2-3 sentences) of why this strategy is a good fit for this particular application, considering its purpose and features.",
            FieldType::String,
        ),
        FieldSpec::new(
            "potentialDrawbacks",
            "One or two key potential challenges or downsides of implementing this strategy for this specific app.",
            FieldType::String,
        ),
        FieldSpec::new(
            "keyConsiderations",
            "2-3 important questions or factors the developer should consider when pursuing this strategy.",
            FieldType::bounded_array(FieldType::String, 2, 3),
        ),
    ])
}

/// The monetization strategy flow.
pub fn definition() -> FlowDefinition {
    FlowDefinition {
        name: "monetization",
        instruction: INSTRUCTION,
        output_schema: ObjectSchema::new(vec![FieldSpec::new(
            "strategies",
            "A list of 2-3 potential monetization strategies relevant to the described application and its features.",
            FieldType::array(FieldType::Object(strategy_schema())),
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_considerations_bounds() {
        let strategy = serde_json::json!({
            "strategyName": "Subscriptions",
            "description": "D",
            "suitabilityRationale": "R",
            "potentialDrawbacks": "P",
            "keyConsiderations": ["q1", "q2", "q3", "q4"]
        });
        let reply = serde_json::json!({"strategies": [strategy]});
        assert!(definition().output_schema.validate(&reply).is_err());
    }
}
