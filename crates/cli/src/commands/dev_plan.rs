//! Standard development plan command.

use clap::Args;
use forge_core::{config::AppConfig, AppResult};
use forge_export::markdown;
use forge_flows::{flows, invoke, DevPlan, FlowKind, PlanningInput};
use std::path::PathBuf;

use crate::commands::{self, FlowArgs};

/// Generate a standard development plan
#[derive(Args, Debug)]
pub struct DevPlanCommand {
    #[command(flatten)]
    pub args: FlowArgs,

    /// Previously exported features JSON (from `forge features --export`)
    #[arg(long)]
    pub features: PathBuf,
}

impl DevPlanCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let description = self.args.read_description()?;
        let features = commands::load_features(&self.features)?;
        let client = commands::make_client(config)?;

        let flow = flows::dev_plan::definition();
        let input = PlanningInput {
            app_description: description.clone(),
            features,
        };
        let plan: DevPlan = invoke(client.as_ref(), &config.model, &flow, &input).await?;

        commands::print_artifact(&plan)?;

        if self.args.export {
            let md = markdown::dev_plan_markdown(&description, &plan);
            // Export filenames prefer the plan's own project name
            let project = self
                .args
                .project_name
                .clone()
                .unwrap_or_else(|| plan.project_name.clone());
            let json = forge_export::to_json_string(&plan)?;
            commands::write_exports(
                &self.args.out_dir,
                Some(&project),
                FlowKind::DevPlan,
                &json,
                &md,
            )?;
        }

        Ok(())
    }
}
