//! Export filename derivation.

use forge_flows::FlowKind;

/// Fallback when no project name is available.
const DEFAULT_PROJECT_NAME: &str = "app";

/// Lowercase and hyphenate a project name for use in filenames.
///
/// Whitespace runs become single hyphens; anything outside `[a-z0-9-]` is
/// stripped. Empty input falls back to a default name.
pub fn sanitize_project_name(name: Option<&str>) -> String {
    let Some(name) = name else {
        return DEFAULT_PROJECT_NAME.to_string();
    };

    let mut sanitized = String::with_capacity(name.len());
    let mut last_was_hyphen = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !sanitized.is_empty() && !last_was_hyphen {
                sanitized.push('-');
                last_was_hyphen = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '-' {
            sanitized.push(c);
            last_was_hyphen = c == '-';
        }
    }

    let sanitized = sanitized.trim_matches('-');
    if sanitized.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        sanitized.to_string()
    }
}

/// Build the export filename for an artifact.
///
/// E.g., project "Pantry Chef" + features + "json" →
/// `pantry-chef-features.json`.
pub fn export_filename(project_name: Option<&str>, kind: FlowKind, extension: &str) -> String {
    format!(
        "{}-{}.{}",
        sanitize_project_name(project_name),
        kind.export_suffix(),
        extension
    )
}
