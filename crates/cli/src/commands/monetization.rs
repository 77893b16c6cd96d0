//! Monetization strategy command.

use clap::Args;
use forge_core::{config::AppConfig, AppResult};
use forge_export::markdown;
use forge_flows::{flows, invoke, FlowKind, PlanningInput, StrategyList};
use std::path::PathBuf;

use crate::commands::{self, FlowArgs};

/// Suggest monetization strategies
#[derive(Args, Debug)]
pub struct MonetizationCommand {
    #[command(flatten)]
    pub args: FlowArgs,

    /// Previously exported features JSON (from `forge features --export`)
    #[arg(long)]
    pub features: PathBuf,
}

impl MonetizationCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let description = self.args.read_description()?;
        let features = commands::load_features(&self.features)?;
        let client = commands::make_client(config)?;

        let flow = flows::monetization::definition();
        let input = PlanningInput {
            app_description: description.clone(),
            features,
        };
        let output: StrategyList = invoke(client.as_ref(), &config.model, &flow, &input).await?;

        commands::print_artifact(&output.strategies)?;

        if self.args.export {
            let md = markdown::monetization_markdown(&description, &output.strategies);
            commands::export_artifact(
                &self.args,
                FlowKind::Monetization,
                &output.strategies,
                &md,
            )?;
        }

        Ok(())
    }
}
