//! User persona generation flow.

use super::LEVELS;
use crate::invoker::FlowDefinition;
use crate::schema::{FieldSpec, FieldType, ObjectSchema};

const INSTRUCTION: &str = "\
You are an expert UX Researcher and Product Strategist. Your task is to generate 2-3 distinct user personas based on the provided application description. These personas should help in understanding the target audience and guiding product development.

Each persona needs a creative and descriptive name, an estimated age range, an occupation, a short narrative bio (1-2 paragraphs) describing their lifestyle, background and values, their specific goals for an app like this one, the frustrations they currently face that the app could solve, the key reasons that would compel them to use it, and their general comfort level with technology.

Application Description:
{{appDescription}}

Ensure the personas are diverse enough to represent different segments of potential users.";

fn persona_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        FieldSpec::new(
            "personaName",
            "A creative and descriptive name for the persona (e.g., \"Tech-Savvy Tina\", \"Busy Parent Ben\").",
            FieldType::String,
        ),
        FieldSpec::new(
            "ageRange",
            "An estimated age range for this persona (e.g., \"25-35\", \"40-55\").",
            FieldType::String,
        ),
        FieldSpec::new(
            "occupation",
            "The primary occupation or role of this persona.",
            FieldType::String,
        ),
        FieldSpec::new(
            "briefBio",
            "A short, 1-2 paragraph narrative biography describing the persona, their lifestyle, and relevant background.",
            FieldType::String,
        ),
        FieldSpec::new(
            "keyGoals",
            "2-4 key goals this persona hopes to achieve by using an application like the one described.",
            FieldType::bounded_array(FieldType::String, 2, 4),
        ),
        FieldSpec::new(
            "painPoints",
            "2-4 pain points or frustrations this persona currently experiences with existing solutions or the lack thereof.",
            FieldType::bounded_array(FieldType::String, 2, 4),
        ),
        FieldSpec::new(
            "motivationsForUsingApp",
            "2-4 key motivations or reasons why this persona would be attracted to and use the described application.",
            FieldType::bounded_array(FieldType::String, 2, 4),
        ),
        FieldSpec::new(
            "techSavviness",
            "The general level of comfort and expertise this persona has with technology, strictly Low, Medium, or High.",
            FieldType::StringEnum(LEVELS),
        ),
    ])
}

/// The user persona flow.
pub fn definition() -> FlowDefinition {
    FlowDefinition {
        name: "personas",
        instruction: INSTRUCTION,
        output_schema: ObjectSchema::new(vec![FieldSpec::new(
            "personas",
            "A list of 2-3 distinct user personas relevant to the described application.",
            FieldType::array(FieldType::Object(persona_schema())),
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_savviness_uses_shared_levels() {
        let schema = definition().output_schema.to_json_schema();
        let savviness =
            &schema["properties"]["personas"]["items"]["properties"]["techSavviness"]["enum"];
        assert_eq!(savviness[1], "Medium");
    }

    #[test]
    fn test_goal_bounds_enforced() {
        let persona = serde_json::json!({
            "personaName": "N",
            "ageRange": "20-30",
            "occupation": "O",
            "briefBio": "B",
            "keyGoals": ["only one"],
            "painPoints": ["p1", "p2"],
            "motivationsForUsingApp": ["m1", "m2"],
            "techSavviness": "Low"
        });
        let reply = serde_json::json!({"personas": [persona]});
        assert!(definition().output_schema.validate(&reply).is_err());
    }
}
