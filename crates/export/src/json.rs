//! JSON export.

use forge_core::{AppError, AppResult};
use serde::Serialize;

/// Serialize an artifact to pretty-printed JSON.
///
/// Parsing the output back yields an object deep-equal to the input.
pub fn to_json_string<T: Serialize>(artifact: &T) -> AppResult<String> {
    serde_json::to_string_pretty(artifact)
        .map_err(|e| AppError::Serialization(format!("Failed to serialize artifact: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_flows::{Complexity, FeatureDetail, LeanCanvas, UserPersona};

    #[test]
    fn test_feature_round_trip() {
        let features = vec![
            FeatureDetail {
                name: "Search".to_string(),
                description: "Find recipes".to_string(),
                category: "Core Functionality".to_string(),
                complexity: Complexity::Medium,
            },
            FeatureDetail {
                name: "Accounts".to_string(),
                description: "Sign in".to_string(),
                category: "Security".to_string(),
                complexity: Complexity::Low,
            },
        ];

        let json = to_json_string(&features).unwrap();
        let parsed: Vec<FeatureDetail> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, features);
    }

    #[test]
    fn test_persona_round_trip() {
        let personas = vec![UserPersona {
            persona_name: "Busy Parent Ben".to_string(),
            age_range: "35-45".to_string(),
            occupation: "Manager".to_string(),
            brief_bio: "Bio".to_string(),
            key_goals: vec!["g1".to_string(), "g2".to_string()],
            pain_points: vec!["p1".to_string(), "p2".to_string()],
            motivations_for_using_app: vec!["m1".to_string(), "m2".to_string()],
            tech_savviness: Complexity::Medium,
        }];

        let json = to_json_string(&personas).unwrap();
        let parsed: Vec<UserPersona> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, personas);
    }

    #[test]
    fn test_lean_canvas_round_trip() {
        let canvas = LeanCanvas {
            problem: vec!["p".to_string()],
            customer_segments: vec!["c".to_string()],
            unique_value_proposition: "uvp".to_string(),
            solution: vec!["s".to_string()],
            channels: vec!["ch".to_string()],
            revenue_streams: vec!["r".to_string()],
            cost_structure: vec!["co".to_string()],
            key_metrics: vec!["k".to_string()],
            unfair_advantage: "ua".to_string(),
        };

        let json = to_json_string(&canvas).unwrap();
        let parsed: LeanCanvas = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, canvas);
    }
}
