//! Lean Canvas command.

use clap::Args;
use forge_core::{config::AppConfig, AppResult};
use forge_export::markdown;
use forge_flows::{flows, invoke, FlowKind, LeanCanvas, PlanningInput};
use std::path::PathBuf;

use crate::commands::{self, FlowArgs};

/// Generate a Lean Canvas
#[derive(Args, Debug)]
pub struct LeanCanvasCommand {
    #[command(flatten)]
    pub args: FlowArgs,

    /// Previously exported features JSON (from `forge features --export`)
    #[arg(long)]
    pub features: PathBuf,
}

impl LeanCanvasCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let description = self.args.read_description()?;
        let features = commands::load_features(&self.features)?;
        let client = commands::make_client(config)?;

        let flow = flows::lean_canvas::definition();
        let input = PlanningInput {
            app_description: description.clone(),
            features,
        };
        let canvas: LeanCanvas = invoke(client.as_ref(), &config.model, &flow, &input).await?;

        commands::print_artifact(&canvas)?;

        if self.args.export {
            let md = markdown::lean_canvas_markdown(&description, &canvas);
            commands::export_artifact(&self.args, FlowKind::LeanCanvas, &canvas, &md)?;
        }

        Ok(())
    }
}
