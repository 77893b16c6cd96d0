//! Command handlers for the Idea Forge CLI.
//!
//! Every flow command shares the same shape: read the description, build the
//! provider client, invoke one flow, print the artifact, optionally export it.
//! The shared plumbing lives here; each submodule holds one command.

pub mod ai_dev_plan;
pub mod all;
pub mod dev_plan;
pub mod features;
pub mod fit;
pub mod lean_canvas;
pub mod monetization;
pub mod personas;

pub use ai_dev_plan::AiDevPlanCommand;
pub use all::AllCommand;
pub use dev_plan::DevPlanCommand;
pub use features::FeaturesCommand;
pub use fit::FitCommand;
pub use lean_canvas::LeanCanvasCommand;
pub use monetization::MonetizationCommand;
pub use personas::PersonasCommand;

use clap::Args;
use forge_core::{config::AppConfig, AppError, AppResult};
use forge_export::{export_filename, to_json_string};
use forge_flows::{FeatureDetail, FeatureList, FlowKind};
use forge_llm::{create_client, LlmClient};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments shared by every flow command.
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// App description (alternative to --file)
    pub description: Option<String>,

    /// Read the app description from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Write JSON and Markdown exports alongside the stdout output
    #[arg(long)]
    pub export: bool,

    /// Directory for exported files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Project name used in export filenames
    #[arg(long)]
    pub project_name: Option<String>,
}

impl FlowArgs {
    /// Resolve the app description from the positional argument or a file.
    ///
    /// Rejects an empty or whitespace-only description before any provider
    /// client is constructed.
    pub fn read_description(&self) -> AppResult<String> {
        let raw = if let Some(ref text) = self.description {
            text.clone()
        } else if let Some(ref path) = self.file {
            std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read description file {:?}: {}", path, e))
            })?
        } else {
            return Err(AppError::Config(
                "No app description provided. Pass it as an argument or via --file.".to_string(),
            ));
        };

        let description = raw.trim();
        if description.is_empty() {
            return Err(AppError::Config(
                "App description must not be empty".to_string(),
            ));
        }
        Ok(description.to_string())
    }
}

/// Load a previously exported feature list.
///
/// Accepts either the bare array exported by `forge features` or a full
/// `{"features": [...]}` document.
pub fn load_features(path: &Path) -> AppResult<Vec<FeatureDetail>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read features file {:?}: {}", path, e)))?;

    if let Ok(features) = serde_json::from_str::<Vec<FeatureDetail>>(&contents) {
        return Ok(features);
    }

    let list: FeatureList = serde_json::from_str(&contents).map_err(|e| {
        AppError::Config(format!(
            "Features file {:?} is not a feature list: {}",
            path, e
        ))
    })?;
    Ok(list.features)
}

/// Build the provider client from the resolved configuration.
pub fn make_client(config: &AppConfig) -> AppResult<Arc<dyn LlmClient>> {
    create_client(
        &config.provider,
        config.resolve_endpoint(),
        config.resolve_api_key().as_deref(),
    )
}

/// Print an artifact as pretty JSON to stdout.
pub fn print_artifact<T: Serialize>(artifact: &T) -> AppResult<()> {
    println!("{}", to_json_string(artifact)?);
    Ok(())
}

/// Write the JSON and Markdown exports for one artifact.
pub fn write_exports(
    out_dir: &Path,
    project_name: Option<&str>,
    kind: FlowKind,
    json: &str,
    markdown: &str,
) -> AppResult<()> {
    std::fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join(export_filename(project_name, kind, "json"));
    std::fs::write(&json_path, json)?;
    tracing::info!(path = %json_path.display(), "Wrote JSON export");

    let md_path = out_dir.join(export_filename(project_name, kind, "md"));
    std::fs::write(&md_path, markdown)?;
    tracing::info!(path = %md_path.display(), "Wrote Markdown export");

    eprintln!("Exported {} and {}", json_path.display(), md_path.display());
    Ok(())
}

/// Export one artifact: serialize to JSON and Markdown, then write both files.
pub fn export_artifact<T: Serialize>(
    args: &FlowArgs,
    kind: FlowKind,
    artifact: &T,
    markdown: &str,
) -> AppResult<()> {
    let json = to_json_string(artifact)?;
    write_exports(
        &args.out_dir,
        args.project_name.as_deref(),
        kind,
        &json,
        markdown,
    )
}
