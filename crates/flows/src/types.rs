//! Planning artifact types exchanged between flows and the CLI.
//!
//! All artifacts are plain immutable value objects with camelCase wire
//! names. None has a lifecycle beyond a single request/response cycle.

use serde::{Deserialize, Serialize};

/// Implementation complexity estimate. Also used for persona tech savviness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single suggested feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDetail {
    /// Concise name of the feature (e.g., "User Authentication")
    pub name: String,

    /// Brief explanation of what the feature entails and its benefit
    pub description: String,

    /// Category (e.g., "Core Functionality", "AI-Powered", "Security")
    pub category: String,

    /// Estimated implementation complexity
    pub complexity: Complexity,
}

/// Output of the feature flow. An empty list is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureList {
    pub features: Vec<FeatureDetail>,
}

/// A conceptual runtime AI prompt idea attached to a dev-plan phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSuggestion {
    pub feature_name: String,
    pub suggested_prompt: String,
}

/// One phase of the standard development plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevPlanPhase {
    pub phase_title: String,
    pub phase_goal: String,
    /// Feature names from the input list assigned to this phase
    pub features_to_implement: Vec<String>,
    pub estimated_duration: String,
    /// Only present when the phase contains AI-powered features
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_suggestions: Option<Vec<PromptSuggestion>>,
}

/// Standard development plan artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevPlan {
    pub project_name: String,
    pub executive_summary: String,
    pub phases: Vec<DevPlanPhase>,
    pub overall_timeline: String,
    pub recommendations: Vec<String>,
}

/// Per-feature implementation guidance for the AI-accelerated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFeatureImplementation {
    pub feature_name: String,
    /// How AI developer tools accelerate this feature's implementation
    pub ai_development_notes: String,
    /// A concrete prompt for an in-IDE coding assistant
    pub suggested_coding_assistant_prompt: String,
}

/// One phase of the AI-accelerated development plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDevPlanPhase {
    pub phase_title: String,
    pub phase_goal: String,
    pub features_to_implement: Vec<AiFeatureImplementation>,
    pub estimated_duration_with_ai_support: String,
}

/// AI-accelerated development plan artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDevPlan {
    pub project_name: String,
    pub executive_summary: String,
    pub phases: Vec<AiDevPlanPhase>,
    pub overall_timeline_with_ai_support: String,
    pub general_ai_tooling_recommendations: Vec<String>,
}

/// A target-audience persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPersona {
    pub persona_name: String,
    pub age_range: String,
    pub occupation: String,
    pub brief_bio: String,
    pub key_goals: Vec<String>,
    pub pain_points: Vec<String>,
    pub motivations_for_using_app: Vec<String>,
    pub tech_savviness: Complexity,
}

/// Output of the persona flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaList {
    pub personas: Vec<UserPersona>,
}

/// A suggested monetization strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetizationStrategy {
    pub strategy_name: String,
    pub description: String,
    pub suitability_rationale: String,
    pub potential_drawbacks: String,
    pub key_considerations: Vec<String>,
}

/// Output of the monetization flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyList {
    pub strategies: Vec<MonetizationStrategy>,
}

/// How one feature contributes to solving the identified problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAlignment {
    pub feature_name: String,
    pub alignment_note: String,
}

/// Problem/solution fit analysis artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSolutionFit {
    pub identified_problem: String,
    pub solution_overview: String,
    /// 2-4 key feature alignments
    pub feature_alignment_analysis: Vec<FeatureAlignment>,
    pub overall_assessment: String,
}

/// Lean Canvas artifact: nine fixed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeanCanvas {
    pub problem: Vec<String>,
    pub customer_segments: Vec<String>,
    pub unique_value_proposition: String,
    pub solution: Vec<String>,
    pub channels: Vec<String>,
    pub revenue_streams: Vec<String>,
    pub cost_structure: Vec<String>,
    pub key_metrics: Vec<String>,
    pub unfair_advantage: String,
}

/// Input for flows seeded by the app description alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionInput {
    pub app_description: String,
}

/// Input for flows that also consume the generated feature list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningInput {
    pub app_description: String,
    pub features: Vec<FeatureDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_serde() {
        let parsed: Complexity = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Complexity::Medium);
        assert_eq!(serde_json::to_string(&Complexity::High).unwrap(), "\"High\"");
    }

    #[test]
    fn test_complexity_rejects_unknown_value() {
        let result: Result<Complexity, _> = serde_json::from_str("\"Extreme\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_feature_detail_wire_names() {
        let json = r#"{
            "name": "User Authentication",
            "description": "Account creation and sign-in.",
            "category": "Security",
            "complexity": "Low"
        }"#;
        let feature: FeatureDetail = serde_json::from_str(json).unwrap();
        assert_eq!(feature.name, "User Authentication");
        assert_eq!(feature.complexity, Complexity::Low);
    }

    #[test]
    fn test_persona_camel_case_wire_names() {
        let persona = UserPersona {
            persona_name: "Tester".to_string(),
            age_range: "20-30".to_string(),
            occupation: "QA".to_string(),
            brief_bio: "Bio".to_string(),
            key_goals: vec!["goal".to_string()],
            pain_points: vec!["pain".to_string()],
            motivations_for_using_app: vec!["motivation".to_string()],
            tech_savviness: Complexity::High,
        };

        let json = serde_json::to_value(&persona).unwrap();
        assert!(json.get("personaName").is_some());
        assert!(json.get("motivationsForUsingApp").is_some());
        assert_eq!(json["techSavviness"], "High");
    }

    #[test]
    fn test_dev_plan_phase_omits_empty_prompt_suggestions() {
        let phase = DevPlanPhase {
            phase_title: "Phase 1".to_string(),
            phase_goal: "Goal".to_string(),
            features_to_implement: vec![],
            estimated_duration: "1 week".to_string(),
            prompt_suggestions: None,
        };

        let json = serde_json::to_value(&phase).unwrap();
        assert!(json.get("promptSuggestions").is_none());
        assert!(json.get("featuresToImplement").is_some());
    }
}
