//! Handlebars prompt template rendering.
//!
//! Templates use `{{variable}}` placeholders and `{{#each list}}` blocks for
//! repeating sections (e.g., one block per feature). An empty list renders an
//! empty block, never an error.

use forge_core::{AppError, AppResult};
use handlebars::Handlebars;
use serde::Serialize;

/// Render a Handlebars template with the given input data.
pub fn render<T: Serialize>(template: &str, data: &T) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Prompts are plain text, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Template(format!("Failed to register template: {}", e)))?;

    handlebars
        .render("prompt", data)
        .map_err(|e| AppError::Template(format!("Failed to render template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Complexity, FeatureDetail, PlanningInput};

    #[test]
    fn test_render_simple_placeholder() {
        let data = serde_json::json!({"appDescription": "A recipe app"});
        let rendered = render("App: {{appDescription}}", &data).unwrap();
        assert_eq!(rendered, "App: A recipe app");
    }

    #[test]
    fn test_render_each_block_over_features() {
        let input = PlanningInput {
            app_description: "A recipe app".to_string(),
            features: vec![
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
            ],
        };

        let template = "{{#each features}}- {{name}} ({{complexity}})\n{{/each}}";
        let rendered = render(template, &input).unwrap();
        assert_eq!(rendered, "- Search (Medium)\n- Accounts (Low)\n");
    }

    #[test]
    fn test_render_each_block_with_empty_list() {
        let input = PlanningInput {
            app_description: "A recipe app".to_string(),
            features: vec![],
        };

        let template = "Features:\n{{#each features}}- {{name}}\n{{/each}}Done";
        let rendered = render(template, &input).unwrap();
        assert_eq!(rendered, "Features:\nDone");
    }

    #[test]
    fn test_render_does_not_escape_html() {
        let data = serde_json::json!({"appDescription": "a <b> & c"});
        let rendered = render("{{appDescription}}", &data).unwrap();
        assert_eq!(rendered, "a <b> & c");
    }

    #[test]
    fn test_render_invalid_template() {
        let data = serde_json::json!({});
        let result = render("{{#each}}", &data);
        assert!(matches!(result, Err(AppError::Template(_))));
    }
}
