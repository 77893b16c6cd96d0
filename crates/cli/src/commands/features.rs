//! Feature suggestion command.

use clap::Args;
use forge_core::{config::AppConfig, AppResult};
use forge_export::markdown;
use forge_flows::{flows, invoke, DescriptionInput, FeatureList, FlowKind};
use forge_llm::LlmClient;

use crate::commands::{self, FlowArgs};

/// Suggest features for an app description
#[derive(Args, Debug)]
pub struct FeaturesCommand {
    #[command(flatten)]
    pub args: FlowArgs,
}

impl FeaturesCommand {
    /// Validate the description, then run the feature flow.
    ///
    /// The description check happens before the client is touched, so a
    /// rejected input never reaches the provider.
    async fn generate(&self, client: &dyn LlmClient, model: &str) -> AppResult<FeatureList> {
        let description = self.args.read_description()?;
        let flow = flows::features::definition();
        let input = DescriptionInput {
            app_description: description,
        };
        invoke(client, model, &flow, &input).await
    }

    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let description = self.args.read_description()?;
        let client = commands::make_client(config)?;

        let output = self.generate(client.as_ref(), &config.model).await?;

        if output.features.is_empty() {
            println!("No features suggested. Try refining your description.");
            return Ok(());
        }

        commands::print_artifact(&output.features)?;

        if self.args.export {
            let md = markdown::features_markdown(&description, &output.features);
            commands::export_artifact(&self.args, FlowKind::Features, &output.features, &md)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::AppError;
    use forge_llm::MockClient;
    use std::path::PathBuf;

    fn command_with_description(text: &str) -> FeaturesCommand {
        FeaturesCommand {
            args: FlowArgs {
                description: Some(text.to_string()),
                file: None,
                export: false,
                out_dir: PathBuf::from("."),
                project_name: None,
            },
        }
    }

    #[tokio::test]
    async fn test_empty_description_never_reaches_provider() {
        let client = MockClient::new();
        let command = command_with_description("   \n\t");

        let result = command.generate(&client, "mock-model").await;

        assert!(matches!(result, Err(AppError::Config(_))));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_description_runs_flow() {
        let client = MockClient::new();
        let command = command_with_description("A recipe app");

        let output = command.generate(&client, "mock-model").await.unwrap();

        assert!(!output.features.is_empty());
        assert_eq!(client.calls(), 1);
    }
}
