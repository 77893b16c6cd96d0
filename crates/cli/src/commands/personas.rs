//! User persona command.

use clap::Args;
use forge_core::{config::AppConfig, AppResult};
use forge_export::markdown;
use forge_flows::{flows, invoke, DescriptionInput, FlowKind, PersonaList};

use crate::commands::{self, FlowArgs};

/// Generate user personas
#[derive(Args, Debug)]
pub struct PersonasCommand {
    #[command(flatten)]
    pub args: FlowArgs,
}

impl PersonasCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let description = self.args.read_description()?;
        let client = commands::make_client(config)?;

        let flow = flows::personas::definition();
        let input = DescriptionInput {
            app_description: description.clone(),
        };
        let output: PersonaList = invoke(client.as_ref(), &config.model, &flow, &input).await?;

        commands::print_artifact(&output.personas)?;

        if self.args.export {
            let md = markdown::personas_markdown(&description, &output.personas);
            commands::export_artifact(&self.args, FlowKind::Personas, &output.personas, &md)?;
        }

        Ok(())
    }
}
