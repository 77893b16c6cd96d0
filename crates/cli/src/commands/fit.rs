//! Problem/solution fit command.

use clap::Args;
use forge_core::{config::AppConfig, AppResult};
use forge_export::markdown;
use forge_flows::{flows, invoke, FlowKind, PlanningInput, ProblemSolutionFit};
use std::path::PathBuf;

use crate::commands::{self, FlowArgs};

/// Analyze problem/solution fit
#[derive(Args, Debug)]
pub struct FitCommand {
    #[command(flatten)]
    pub args: FlowArgs,

    /// Previously exported features JSON (from `forge features --export`)
    #[arg(long)]
    pub features: PathBuf,
}

impl FitCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let description = self.args.read_description()?;
        let features = commands::load_features(&self.features)?;
        let client = commands::make_client(config)?;

        let flow = flows::problem_solution_fit::definition();
        let input = PlanningInput {
            app_description: description.clone(),
            features,
        };
        let analysis: ProblemSolutionFit =
            invoke(client.as_ref(), &config.model, &flow, &input).await?;

        commands::print_artifact(&analysis)?;

        if self.args.export {
            let md = markdown::problem_solution_fit_markdown(&description, &analysis);
            commands::export_artifact(&self.args, FlowKind::ProblemSolutionFit, &analysis, &md)?;
        }

        Ok(())
    }
}
