//! Flow dependency graph.
//!
//! Every flow except feature suggestion and personas consumes the generated
//! feature list, so the graph is a shallow DAG with `Features` at the root.
//! Dependencies are validated before invocation rather than implied by UI
//! gating. The AI-accelerated plan depends only on the feature list; it has
//! no invoker-level requirement on the standard plan.

use std::fmt;

/// Identifies one of the planning flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Features,
    Personas,
    DevPlan,
    AiDevPlan,
    Monetization,
    ProblemSolutionFit,
    LeanCanvas,
}

impl FlowKind {
    /// All flows in invocation order (dependencies before dependents).
    pub const ALL: &'static [FlowKind] = &[
        FlowKind::Features,
        FlowKind::Personas,
        FlowKind::DevPlan,
        FlowKind::AiDevPlan,
        FlowKind::Monetization,
        FlowKind::ProblemSolutionFit,
        FlowKind::LeanCanvas,
    ];

    /// Stable identifier used in logs and CLI messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Personas => "personas",
            Self::DevPlan => "dev-plan",
            Self::AiDevPlan => "ai-dev-plan",
            Self::Monetization => "monetization",
            Self::ProblemSolutionFit => "problem-solution-fit",
            Self::LeanCanvas => "lean-canvas",
        }
    }

    /// Flows whose artifacts must exist before this flow may run.
    pub fn dependencies(&self) -> &'static [FlowKind] {
        match self {
            Self::Features | Self::Personas => &[],
            Self::DevPlan
            | Self::AiDevPlan
            | Self::Monetization
            | Self::ProblemSolutionFit
            | Self::LeanCanvas => &[FlowKind::Features],
        }
    }

    /// Filename suffix used when exporting this flow's artifact.
    pub fn export_suffix(&self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Personas => "user-personas",
            Self::DevPlan => "standard-dev-plan",
            Self::AiDevPlan => "ai-accelerated-dev-plan",
            Self::Monetization => "monetization-strategies",
            Self::ProblemSolutionFit => "problem-solution-fit",
            Self::LeanCanvas => "lean-canvas",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_flows_have_no_dependencies() {
        assert!(FlowKind::Features.dependencies().is_empty());
        assert!(FlowKind::Personas.dependencies().is_empty());
    }

    #[test]
    fn test_dependent_flows_require_features() {
        for kind in [
            FlowKind::DevPlan,
            FlowKind::AiDevPlan,
            FlowKind::Monetization,
            FlowKind::ProblemSolutionFit,
            FlowKind::LeanCanvas,
        ] {
            assert_eq!(kind.dependencies(), &[FlowKind::Features]);
        }
    }

    #[test]
    fn test_invocation_order_respects_dependencies() {
        let position = |kind: FlowKind| {
            FlowKind::ALL
                .iter()
                .position(|k| *k == kind)
                .expect("flow missing from ALL")
        };

        for kind in FlowKind::ALL {
            for dependency in kind.dependencies() {
                assert!(position(*dependency) < position(*kind));
            }
        }
    }

    #[test]
    fn test_export_suffixes_are_unique() {
        let mut suffixes: Vec<_> = FlowKind::ALL.iter().map(|k| k.export_suffix()).collect();
        suffixes.sort();
        suffixes.dedup();
        assert_eq!(suffixes.len(), FlowKind::ALL.len());
    }
}
