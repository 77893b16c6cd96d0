//! Markdown export.
//!
//! One fixed-template renderer per artifact. Rendering is a pure function:
//! the same artifact always serializes to the same Markdown text.

use forge_flows::{
    AiDevPlan, DevPlan, FeatureDetail, LeanCanvas, MonetizationStrategy, ProblemSolutionFit,
    UserPersona,
};

/// Shorten the description for document titles.
fn title_excerpt(description: &str) -> String {
    const LIMIT: usize = 50;
    if description.chars().count() <= LIMIT {
        description.to_string()
    } else {
        let head: String = description.chars().take(LIMIT).collect();
        format!("{}...", head)
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a feature list to Markdown.
pub fn features_markdown(description: &str, features: &[FeatureDetail]) -> String {
    let mut md = format!(
        "# Suggested Features for \"{}\"\n\n",
        title_excerpt(description)
    );
    md.push_str(&format!(
        "Based on your description: \"{}\"\n\n---\n\n",
        description
    ));
    for feature in features {
        md.push_str(&format!("## {}\n", feature.name));
        md.push_str(&format!("**Description:** {}\n", feature.description));
        md.push_str(&format!("**Category:** {}\n", feature.category));
        md.push_str(&format!("**Complexity:** {}\n\n---\n\n", feature.complexity));
    }
    md
}

/// Render user personas to Markdown.
pub fn personas_markdown(description: &str, personas: &[UserPersona]) -> String {
    let mut md = format!("# User Personas for \"{}\"\n\n", title_excerpt(description));
    md.push_str(&format!(
        "Based on your description: \"{}\"\n\n---\n\n",
        description
    ));
    for persona in personas {
        md.push_str(&format!("## Persona: {}\n\n", persona.persona_name));
        md.push_str(&format!("**Age Range:** {}\n", persona.age_range));
        md.push_str(&format!("**Occupation:** {}\n", persona.occupation));
        md.push_str(&format!(
            "**Tech Savviness:** {}\n\n",
            persona.tech_savviness
        ));
        md.push_str(&format!("### Bio:\n{}\n\n", persona.brief_bio));
        md.push_str(&format!(
            "### Key Goals:\n{}\n\n",
            bullet_list(&persona.key_goals)
        ));
        md.push_str(&format!(
            "### Pain Points:\n{}\n\n",
            bullet_list(&persona.pain_points)
        ));
        md.push_str(&format!(
            "### Motivations for Using App:\n{}\n\n---\n\n",
            bullet_list(&persona.motivations_for_using_app)
        ));
    }
    md
}

/// Render the standard development plan to Markdown.
pub fn dev_plan_markdown(description: &str, plan: &DevPlan) -> String {
    let mut md = format!("# Development Plan: {}\n\n", plan.project_name);
    md.push_str(&format!("**Based on App Description:** {}\n\n", description));
    md.push_str(&format!(
        "## Executive Summary\n{}\n\n---\n\n",
        plan.executive_summary
    ));
    md.push_str("## Development Phases\n");
    for phase in &plan.phases {
        md.push_str(&format!("### {}\n", phase.phase_title));
        md.push_str(&format!("**Goal:** {}\n", phase.phase_goal));
        md.push_str(&format!(
            "**Estimated Duration:** {}\n",
            phase.estimated_duration
        ));
        md.push_str(&format!(
            "**Features to Implement:**\n{}\n",
            bullet_list(&phase.features_to_implement)
        ));
        if let Some(suggestions) = &phase.prompt_suggestions {
            if !suggestions.is_empty() {
                md.push_str("\n**AI Prompt Ideas (for AI Features):**\n");
                for suggestion in suggestions {
                    md.push_str(&format!(
                        "  - **For Feature \"{}\":** `{}`\n",
                        suggestion.feature_name, suggestion.suggested_prompt
                    ));
                }
            }
        }
        md.push('\n');
    }
    md.push_str(&format!(
        "---\n\n## Overall Estimated Timeline\n{}\n\n---\n\n",
        plan.overall_timeline
    ));
    md.push_str(&format!(
        "## Key Recommendations\n{}\n",
        bullet_list(&plan.recommendations)
    ));
    md
}

/// Render the AI-accelerated development plan to Markdown.
pub fn ai_dev_plan_markdown(description: &str, plan: &AiDevPlan) -> String {
    let mut md = format!(
        "# AI-Accelerated Development Plan: {}\n\n",
        plan.project_name
    );
    md.push_str(&format!("**Based on App Description:** {}\n\n", description));
    md.push_str(&format!(
        "## Executive Summary (AI-Accelerated)\n{}\n\n---\n\n",
        plan.executive_summary
    ));
    md.push_str("## AI-Accelerated Development Phases\n");
    for phase in &plan.phases {
        md.push_str(&format!("### {}\n", phase.phase_title));
        md.push_str(&format!("**Goal:** {}\n", phase.phase_goal));
        md.push_str(&format!(
            "**Estimated Duration (with AI Support):** {}\n",
            phase.estimated_duration_with_ai_support
        ));
        md.push_str("**Features to Implement (AI-Assisted Approach):**\n");
        for feature in &phase.features_to_implement {
            md.push_str(&format!("  - **Feature: {}**\n", feature.feature_name));
            md.push_str(&format!(
                "    - *AI Development Notes:* {}\n",
                feature.ai_development_notes
            ));
            md.push_str(&format!(
                "    - *Suggested Coding Assistant Prompt:* `{}`\n",
                feature.suggested_coding_assistant_prompt
            ));
        }
        md.push('\n');
    }
    md.push_str(&format!(
        "---\n\n## Overall Estimated Timeline (with AI Support)\n{}\n\n---\n\n",
        plan.overall_timeline_with_ai_support
    ));
    md.push_str(&format!(
        "## General AI Tooling Recommendations\n{}\n",
        bullet_list(&plan.general_ai_tooling_recommendations)
    ));
    md
}

/// Render monetization strategies to Markdown.
pub fn monetization_markdown(description: &str, strategies: &[MonetizationStrategy]) -> String {
    let mut md = format!(
        "# Monetization Strategies for \"{}\"\n\n",
        title_excerpt(description)
    );
    md.push_str("Based on your app description and features.\n\n---\n\n");
    for strategy in strategies {
        md.push_str(&format!("## Strategy: {}\n\n", strategy.strategy_name));
        md.push_str(&format!("**Description:** {}\n\n", strategy.description));
        md.push_str(&format!(
            "**Suitability for this App:** {}\n\n",
            strategy.suitability_rationale
        ));
        md.push_str(&format!(
            "**Potential Drawbacks:** {}\n\n",
            strategy.potential_drawbacks
        ));
        md.push_str(&format!(
            "**Key Considerations:**\n{}\n\n---\n\n",
            bullet_list(&strategy.key_considerations)
        ));
    }
    md
}

/// Render the problem/solution fit analysis to Markdown.
pub fn problem_solution_fit_markdown(description: &str, analysis: &ProblemSolutionFit) -> String {
    let mut md = format!(
        "# Problem/Solution Fit Analysis for \"{}\"\n\n",
        title_excerpt(description)
    );
    md.push_str(&format!(
        "Based on your app description: \"{}\"\n\n---\n\n",
        description
    ));
    md.push_str(&format!(
        "## Identified Problem\n{}\n\n",
        analysis.identified_problem
    ));
    md.push_str(&format!(
        "## Solution Overview\n{}\n\n",
        analysis.solution_overview
    ));
    md.push_str("## Feature Alignment Analysis\n");
    for alignment in &analysis.feature_alignment_analysis {
        md.push_str(&format!("### Feature: {}\n", alignment.feature_name));
        md.push_str(&format!(
            "**Alignment Note:** {}\n\n",
            alignment.alignment_note
        ));
    }
    md.push_str(&format!(
        "## Overall Assessment\n{}\n",
        analysis.overall_assessment
    ));
    md
}

/// Render the Lean Canvas to Markdown.
pub fn lean_canvas_markdown(description: &str, canvas: &LeanCanvas) -> String {
    let mut md = format!("# Lean Canvas for \"{}\"\n\n", title_excerpt(description));
    md.push_str(&format!(
        "Based on your description: \"{}\"\n\n---\n\n",
        description
    ));
    md.push_str(&format!("## Problem\n{}\n\n", bullet_list(&canvas.problem)));
    md.push_str(&format!(
        "## Customer Segments\n{}\n\n",
        bullet_list(&canvas.customer_segments)
    ));
    md.push_str(&format!(
        "## Unique Value Proposition\n{}\n\n",
        canvas.unique_value_proposition
    ));
    md.push_str(&format!(
        "## Solution\n{}\n\n",
        bullet_list(&canvas.solution)
    ));
    md.push_str(&format!(
        "## Channels\n{}\n\n",
        bullet_list(&canvas.channels)
    ));
    md.push_str(&format!(
        "## Revenue Streams\n{}\n\n",
        bullet_list(&canvas.revenue_streams)
    ));
    md.push_str(&format!(
        "## Cost Structure\n{}\n\n",
        bullet_list(&canvas.cost_structure)
    ));
    md.push_str(&format!(
        "## Key Metrics\n{}\n\n",
        bullet_list(&canvas.key_metrics)
    ));
    md.push_str(&format!(
        "## Unfair Advantage\n{}\n",
        canvas.unfair_advantage
    ));
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_flows::{Complexity, DevPlanPhase, PromptSuggestion};

    fn sample_features() -> Vec<FeatureDetail> {
        vec![FeatureDetail {
            name: "Ingredient-Based Search".to_string(),
            description: "Find recipes from what you have.".to_string(),
            category: "Core Functionality".to_string(),
            complexity: Complexity::Medium,
        }]
    }

    fn sample_plan() -> DevPlan {
        DevPlan {
            project_name: "Pantry Chef".to_string(),
            executive_summary: "Ship search first.".to_string(),
            phases: vec![DevPlanPhase {
                phase_title: "Phase 1: MVP".to_string(),
                phase_goal: "Core search".to_string(),
                features_to_implement: vec!["Ingredient-Based Search".to_string()],
                estimated_duration: "3 weeks".to_string(),
                prompt_suggestions: Some(vec![PromptSuggestion {
                    feature_name: "Ingredient-Based Search".to_string(),
                    suggested_prompt: "Suggest meals from a pantry list.".to_string(),
                }]),
            }],
            overall_timeline: "2 months".to_string(),
            recommendations: vec!["Test early".to_string()],
        }
    }

    #[test]
    fn test_features_markdown_structure() {
        let md = features_markdown("A recipe app", &sample_features());
        assert!(md.starts_with("# Suggested Features for \"A recipe app\"\n"));
        assert!(md.contains("## Ingredient-Based Search\n"));
        assert!(md.contains("**Complexity:** Medium"));
    }

    #[test]
    fn test_markdown_is_idempotent() {
        let plan = sample_plan();
        let first = dev_plan_markdown("A recipe app", &plan);
        let second = dev_plan_markdown("A recipe app", &plan);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dev_plan_markdown_includes_prompt_ideas() {
        let md = dev_plan_markdown("A recipe app", &sample_plan());
        assert!(md.contains("**AI Prompt Ideas (for AI Features):**"));
        assert!(md.contains("`Suggest meals from a pantry list.`"));
    }

    #[test]
    fn test_dev_plan_markdown_omits_empty_prompt_ideas() {
        let mut plan = sample_plan();
        plan.phases[0].prompt_suggestions = Some(vec![]);
        let md = dev_plan_markdown("A recipe app", &plan);
        assert!(!md.contains("AI Prompt Ideas"));
    }

    #[test]
    fn test_title_excerpt_truncates_long_descriptions() {
        let long = "x".repeat(80);
        let excerpt = title_excerpt(&long);
        assert_eq!(excerpt.chars().count(), 53);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_lean_canvas_markdown_lists_all_sections() {
        let canvas = LeanCanvas {
            problem: vec!["Waste".to_string()],
            customer_segments: vec!["Families".to_string()],
            unique_value_proposition: "Fridge to dinner.".to_string(),
            solution: vec!["Search".to_string()],
            channels: vec!["App stores".to_string()],
            revenue_streams: vec!["Subscriptions".to_string()],
            cost_structure: vec!["Development".to_string()],
            key_metrics: vec!["Weekly cooks".to_string()],
            unfair_advantage: "Data loop".to_string(),
        };

        let md = lean_canvas_markdown("A recipe app", &canvas);
        for heading in [
            "## Problem",
            "## Customer Segments",
            "## Unique Value Proposition",
            "## Solution",
            "## Channels",
            "## Revenue Streams",
            "## Cost Structure",
            "## Key Metrics",
            "## Unfair Advantage",
        ] {
            assert!(md.contains(heading), "missing {}", heading);
        }
    }
}
