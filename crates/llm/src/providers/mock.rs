//! Mock LLM provider with deterministic canned replies.
//!
//! Used for tests and offline runs. In its default mode the client inspects
//! the request's response schema and returns a canned planning artifact whose
//! shape matches it, so every flow can run end to end without a network.

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use forge_core::{AppError, AppResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

enum MockMode {
    /// Pick a canned artifact matching the request's response schema
    Canned,
    /// Pop scripted replies in order
    Scripted(Mutex<VecDeque<String>>),
    /// Fail every call with an upstream error
    Failing(String),
}

/// Mock provider for testing and development.
///
/// Replies are deterministic: the same request always produces the same
/// content. The call counter lets tests assert that no upstream call was
/// issued on a rejected input.
pub struct MockClient {
    mode: MockMode,
    calls: AtomicUsize,
}

impl MockClient {
    /// Create a schema-aware mock that serves canned artifacts.
    pub fn new() -> Self {
        Self {
            mode: MockMode::Canned,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that replays the given replies in order.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            mode: MockMode::Scripted(Mutex::new(responses.into())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that fails every call with an upstream error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            mode: MockMode::Failing(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion calls issued against this client.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Select a canned artifact based on a distinguishing property of the
    /// response schema.
    fn canned_for_schema(schema: Option<&serde_json::Value>) -> AppResult<&'static str> {
        let properties = schema
            .and_then(|s| s.get("properties"))
            .and_then(|p| p.as_object())
            .ok_or_else(|| {
                AppError::Llm("Mock provider requires a response schema".to_string())
            })?;

        let has = |key: &str| properties.contains_key(key);

        if has("features") && !has("phases") {
            Ok(CANNED_FEATURES)
        } else if has("personas") {
            Ok(CANNED_PERSONAS)
        } else if has("strategies") {
            Ok(CANNED_STRATEGIES)
        } else if has("identifiedProblem") {
            Ok(CANNED_PROBLEM_SOLUTION_FIT)
        } else if has("uniqueValueProposition") {
            Ok(CANNED_LEAN_CANVAS)
        } else if has("overallTimelineWithAiSupport") {
            Ok(CANNED_AI_DEV_PLAN)
        } else if has("overallTimeline") {
            Ok(CANNED_DEV_PLAN)
        } else {
            Err(AppError::Llm(
                "Mock provider has no canned reply for this schema".to_string(),
            ))
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let content = match &self.mode {
            MockMode::Canned => {
                Self::canned_for_schema(request.response_schema.as_ref())?.to_string()
            }
            MockMode::Scripted(queue) => {
                let mut queue = queue
                    .lock()
                    .map_err(|_| AppError::Other("Mock reply queue poisoned".to_string()))?;
                queue.pop_front().ok_or_else(|| {
                    AppError::Llm("Mock provider has no scripted replies left".to_string())
                })?
            }
            MockMode::Failing(message) => return Err(AppError::Llm(message.clone())),
        };

        Ok(LlmResponse {
            content,
            model: request.model.clone(),
            usage: LlmUsage::new(0, 0),
        })
    }
}

const CANNED_FEATURES: &str = r#"{
  "features": [
    {
      "name": "Ingredient-Based Search",
      "description": "Lets users enter the ingredients they have on hand and returns matching recipes. Reduces food waste and shopping trips.",
      "category": "Core Functionality",
      "complexity": "Medium"
    },
    {
      "name": "User Authentication",
      "description": "Account creation and sign-in so users can save preferences and favorites.",
      "category": "Security",
      "complexity": "Low"
    },
    {
      "name": "AI Meal Suggestions",
      "description": "Generates personalized meal ideas from dietary preferences and past choices.",
      "category": "AI-Powered",
      "complexity": "High"
    }
  ]
}"#;

const CANNED_PERSONAS: &str = r#"{
  "personas": [
    {
      "personaName": "Busy Parent Ben",
      "ageRange": "35-45",
      "occupation": "Operations Manager",
      "briefBio": "Ben juggles a full-time job and two kids. He wants weeknight dinners sorted with whatever is already in the fridge.",
      "keyGoals": ["Plan dinners in under five minutes", "Use up leftovers"],
      "painPoints": ["Recipe sites assume a stocked pantry", "Meal planning takes too long"],
      "motivationsForUsingApp": ["Less food waste", "Faster weeknight decisions"],
      "techSavviness": "Medium"
    },
    {
      "personaName": "Student Sam",
      "ageRange": "18-24",
      "occupation": "University Student",
      "briefBio": "Sam cooks on a tight budget in a shared kitchen and wants cheap, simple meals from a small set of staples.",
      "keyGoals": ["Cook on a budget", "Learn basic techniques"],
      "painPoints": ["Limited ingredients", "Little cooking experience"],
      "motivationsForUsingApp": ["Budget-friendly suggestions", "Simple step-by-step recipes"],
      "techSavviness": "High"
    }
  ]
}"#;

const CANNED_STRATEGIES: &str = r#"{
  "strategies": [
    {
      "strategyName": "Freemium with Premium Subscription",
      "description": "The core app is free while advanced capabilities sit behind a monthly subscription.",
      "suitabilityRationale": "Ingredient search drives adoption for free, while AI meal suggestions are a natural premium tier users will pay for.",
      "potentialDrawbacks": "Free users may never convert if the free tier solves their whole problem.",
      "keyConsiderations": [
        "Which features belong in the premium tier?",
        "What monthly price matches the value of personalized suggestions?"
      ]
    },
    {
      "strategyName": "Affiliate Grocery Partnerships",
      "description": "Earn referral fees by linking missing ingredients to online grocery services.",
      "suitabilityRationale": "The app already knows which ingredients the user lacks, making grocery referrals a natural fit.",
      "potentialDrawbacks": "Revenue depends on partner availability in the user's region.",
      "keyConsiderations": [
        "Which grocery partners cover the target market?",
        "How to disclose affiliate links without hurting trust?"
      ]
    }
  ]
}"#;

const CANNED_DEV_PLAN: &str = r#"{
  "projectName": "Pantry Chef",
  "executiveSummary": "A phased plan that ships an ingredient-search MVP first and layers AI personalization on top.",
  "phases": [
    {
      "phaseTitle": "Phase 1: Core Functionality & MVP",
      "phaseGoal": "Ship ingredient-based search with accounts.",
      "featuresToImplement": ["Ingredient-Based Search", "User Authentication"],
      "estimatedDuration": "3-4 weeks",
      "promptSuggestions": []
    },
    {
      "phaseTitle": "Phase 2: AI Personalization",
      "phaseGoal": "Add personalized meal suggestions.",
      "featuresToImplement": ["AI Meal Suggestions"],
      "estimatedDuration": "4-6 weeks",
      "promptSuggestions": [
        {
          "featureName": "AI Meal Suggestions",
          "suggestedPrompt": "Suggest three dinner ideas using the provided ingredient list and dietary preferences."
        }
      ]
    }
  ],
  "overallTimeline": "Total estimated duration: 2-3 months",
  "recommendations": [
    "Prioritize a robust ingredient data model early.",
    "Run user testing after Phase 1 to validate the core search flow."
  ]
}"#;

const CANNED_AI_DEV_PLAN: &str = r#"{
  "projectName": "Pantry Chef",
  "executiveSummary": "An accelerated plan assuming heavy use of AI developer tooling across every feature.",
  "phases": [
    {
      "phaseTitle": "Phase 1: AI-Assisted Core Setup & MVP",
      "phaseGoal": "Stand up search and accounts quickly with generated boilerplate.",
      "featuresToImplement": [
        {
          "featureName": "Ingredient-Based Search",
          "aiDevelopmentNotes": "Use an AI assistant to scaffold the search index and API endpoints.",
          "suggestedCodingAssistantPrompt": "Generate a REST endpoint that accepts a list of ingredient names and returns matching recipes ranked by coverage."
        },
        {
          "featureName": "User Authentication",
          "aiDevelopmentNotes": "Generate session handling and form validation boilerplate.",
          "suggestedCodingAssistantPrompt": "Create a login form component with email and password fields including client-side validation."
        }
      ],
      "estimatedDurationWithAiSupport": "1-2 weeks"
    }
  ],
  "overallTimelineWithAiSupport": "Total estimated duration: 1-2 months with AI dev tools",
  "generalAiToolingRecommendations": [
    "Adopt an AI pair programmer in the IDE for all developers.",
    "Use AI tooling to generate initial unit test skeletons."
  ]
}"#;

const CANNED_PROBLEM_SOLUTION_FIT: &str = r#"{
  "identifiedProblem": "Home cooks struggle to decide what to make from the ingredients they already have, leading to waste and repeat takeout.",
  "solutionOverview": "The app turns the user's pantry into the starting point: enter what you have, get matching recipes, and let AI fill the gaps with personalized suggestions.",
  "featureAlignmentAnalysis": [
    {
      "featureName": "Ingredient-Based Search",
      "alignmentNote": "Directly answers the core question of what can be cooked right now."
    },
    {
      "featureName": "AI Meal Suggestions",
      "alignmentNote": "Extends the solution when exact matches are scarce by proposing close alternatives."
    }
  ],
  "overallAssessment": "Strong fit for the stated problem; validating retention beyond the first week is the key next step."
}"#;

const CANNED_LEAN_CANVAS: &str = r#"{
  "problem": ["Deciding meals from available ingredients is slow", "Unused ingredients go to waste"],
  "customerSegments": ["Busy families", "Budget-conscious students"],
  "uniqueValueProposition": "Turn whatever is in your fridge into tonight's dinner.",
  "solution": ["Ingredient-based recipe search", "AI meal suggestions"],
  "channels": ["App stores", "Food-focused social media"],
  "revenueStreams": ["Premium subscription", "Grocery affiliate fees"],
  "costStructure": ["Development", "Model inference costs", "Marketing"],
  "keyMetrics": ["Weekly active cooks", "Recipes cooked per user"],
  "unfairAdvantage": "Learning loop from logged pantry contents and cooked recipes."
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_with(property: &str) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { property: {"type": "array"} }
        })
    }

    #[tokio::test]
    async fn test_mock_is_deterministic() {
        let client = MockClient::new();
        let request =
            LlmRequest::new("prompt", "mock-model").with_response_schema(schema_with("features"));

        let first = client.complete(&request).await.unwrap();
        let second = client.complete(&request).await.unwrap();
        assert_eq!(first.content, second.content);
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_canned_replies_are_valid_json() {
        for canned in [
            CANNED_FEATURES,
            CANNED_PERSONAS,
            CANNED_STRATEGIES,
            CANNED_DEV_PLAN,
            CANNED_AI_DEV_PLAN,
            CANNED_PROBLEM_SOLUTION_FIT,
            CANNED_LEAN_CANVAS,
        ] {
            let parsed: serde_json::Value = serde_json::from_str(canned).unwrap();
            assert!(parsed.is_object());
        }
    }

    #[tokio::test]
    async fn test_mock_scripted_replies() {
        let client = MockClient::with_responses(vec!["one".to_string(), "two".to_string()]);
        let request = LlmRequest::new("prompt", "mock-model");

        assert_eq!(client.complete(&request).await.unwrap().content, "one");
        assert_eq!(client.complete(&request).await.unwrap().content, "two");
        assert!(client.complete(&request).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let client = MockClient::failing("simulated outage");
        let request = LlmRequest::new("prompt", "mock-model");

        match client.complete(&request).await {
            Err(AppError::Llm(message)) => assert!(message.contains("simulated outage")),
            other => panic!("Expected upstream error, got {:?}", other.map(|r| r.content)),
        }
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_requires_schema() {
        let client = MockClient::new();
        let request = LlmRequest::new("prompt", "mock-model");
        assert!(client.complete(&request).await.is_err());
    }
}
