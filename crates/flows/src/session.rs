//! Per-flow session state.
//!
//! One planning session holds the app description and an explicit state
//! record per flow. Each record is independent: one flow's failure never
//! blocks or corrupts another's in-flight or completed state. Regenerating
//! the feature list resets every feature-dependent artifact, since those
//! were derived from the previous list.

use forge_core::{AppError, AppResult};

use crate::graph::FlowKind;
use crate::types::{
    AiDevPlan, DevPlan, FeatureDetail, LeanCanvas, MonetizationStrategy, ProblemSolutionFit,
    UserPersona,
};

/// State of a single flow within a session.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FlowState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FlowState<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The artifact, if this flow succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The stored error message, if this flow failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// One planning session: the seed description plus per-flow state records.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub app_description: String,
    pub features: FlowState<Vec<FeatureDetail>>,
    pub personas: FlowState<Vec<UserPersona>>,
    pub dev_plan: FlowState<DevPlan>,
    pub ai_dev_plan: FlowState<AiDevPlan>,
    pub monetization: FlowState<Vec<MonetizationStrategy>>,
    pub problem_solution_fit: FlowState<ProblemSolutionFit>,
    pub lean_canvas: FlowState<LeanCanvas>,
}

impl Session {
    pub fn new(app_description: impl Into<String>) -> Self {
        Self {
            app_description: app_description.into(),
            ..Self::default()
        }
    }

    /// Store a fresh feature list and reset every dependent artifact.
    pub fn set_features(&mut self, features: Vec<FeatureDetail>) {
        self.features = FlowState::Success(features);
        self.dev_plan = FlowState::Idle;
        self.ai_dev_plan = FlowState::Idle;
        self.monetization = FlowState::Idle;
        self.problem_solution_fit = FlowState::Idle;
        self.lean_canvas = FlowState::Idle;
    }

    /// Record a feature-flow failure, resetting dependents.
    pub fn set_features_error(&mut self, message: impl Into<String>) {
        self.features = FlowState::Error(message.into());
        self.dev_plan = FlowState::Idle;
        self.ai_dev_plan = FlowState::Idle;
        self.monetization = FlowState::Idle;
        self.problem_solution_fit = FlowState::Idle;
        self.lean_canvas = FlowState::Idle;
    }

    /// Whether a flow's prerequisites are satisfied.
    ///
    /// An empty feature list still satisfies the `Features` dependency:
    /// downstream flows must render an empty iteration block, not fail.
    pub fn ensure_ready(&self, kind: FlowKind) -> AppResult<()> {
        for dependency in kind.dependencies() {
            let satisfied = match dependency {
                FlowKind::Features => self.features.is_success(),
                FlowKind::Personas => self.personas.is_success(),
                FlowKind::DevPlan => self.dev_plan.is_success(),
                FlowKind::AiDevPlan => self.ai_dev_plan.is_success(),
                FlowKind::Monetization => self.monetization.is_success(),
                FlowKind::ProblemSolutionFit => self.problem_solution_fit.is_success(),
                FlowKind::LeanCanvas => self.lean_canvas.is_success(),
            };
            if !satisfied {
                return Err(AppError::Flow(format!(
                    "Flow '{}' requires '{}' to be generated first",
                    kind, dependency
                )));
            }
        }
        Ok(())
    }

    /// The generated feature list, or an empty slice before generation.
    pub fn feature_list(&self) -> &[FeatureDetail] {
        self.features.data().map(Vec::as_slice).unwrap_or(&[])
    }
}
