//! Full pipeline command.
//!
//! Runs the feature flow first, then every remaining flow concurrently.
//! Each flow's outcome is recorded independently in the session; one
//! failure never aborts the others.

use clap::Args;
use forge_core::{config::AppConfig, AppResult};
use forge_export::{markdown, to_json_string};
use forge_flows::{
    flows, invoke, DescriptionInput, FeatureList, FlowKind, FlowState, PlanningInput, Session,
};
use serde_json::json;

use crate::commands::{self, FlowArgs};

/// Run every flow for one description
#[derive(Args, Debug)]
pub struct AllCommand {
    #[command(flatten)]
    pub args: FlowArgs,
}

fn to_state<T>(result: AppResult<T>) -> FlowState<T> {
    match result {
        Ok(artifact) => FlowState::Success(artifact),
        Err(e) => FlowState::Error(e.to_string()),
    }
}

impl AllCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let description = self.args.read_description()?;
        let client = commands::make_client(config)?;
        let mut session = Session::new(description.clone());

        // Every other flow consumes the feature list, so it runs first
        session.features = FlowState::Loading;
        let feature_input = DescriptionInput {
            app_description: description.clone(),
        };
        let feature_list: FeatureList = match invoke(
            client.as_ref(),
            &config.model,
            &flows::features::definition(),
            &feature_input,
        )
        .await
        {
            Ok(list) => list,
            Err(e) => {
                session.set_features_error(e.to_string());
                return Err(e);
            }
        };

        if feature_list.features.is_empty() {
            session.set_features(vec![]);
            println!("No features suggested. Try refining your description.");
            return Ok(());
        }
        session.set_features(feature_list.features);

        for kind in [
            FlowKind::DevPlan,
            FlowKind::AiDevPlan,
            FlowKind::Monetization,
            FlowKind::ProblemSolutionFit,
            FlowKind::LeanCanvas,
        ] {
            session.ensure_ready(kind)?;
        }

        session.personas = FlowState::Loading;
        session.dev_plan = FlowState::Loading;
        session.ai_dev_plan = FlowState::Loading;
        session.monetization = FlowState::Loading;
        session.problem_solution_fit = FlowState::Loading;
        session.lean_canvas = FlowState::Loading;

        let planning = PlanningInput {
            app_description: description.clone(),
            features: session.feature_list().to_vec(),
        };
        let model = &config.model;
        let client = client.as_ref();

        tracing::info!(
            features = planning.features.len(),
            "Running remaining flows concurrently"
        );

        let personas_def = flows::personas::definition();
        let dev_plan_def = flows::dev_plan::definition();
        let ai_dev_plan_def = flows::ai_dev_plan::definition();
        let monetization_def = flows::monetization::definition();
        let fit_def = flows::problem_solution_fit::definition();
        let canvas_def = flows::lean_canvas::definition();

        let (personas, dev_plan, ai_dev_plan, monetization, fit, canvas) = futures::join!(
            invoke::<_, forge_flows::PersonaList>(client, model, &personas_def, &feature_input),
            invoke::<_, forge_flows::DevPlan>(client, model, &dev_plan_def, &planning),
            invoke::<_, forge_flows::AiDevPlan>(client, model, &ai_dev_plan_def, &planning),
            invoke::<_, forge_flows::StrategyList>(client, model, &monetization_def, &planning),
            invoke::<_, forge_flows::ProblemSolutionFit>(client, model, &fit_def, &planning),
            invoke::<_, forge_flows::LeanCanvas>(client, model, &canvas_def, &planning),
        );

        session.personas = to_state(personas.map(|list| list.personas));
        session.dev_plan = to_state(dev_plan);
        session.ai_dev_plan = to_state(ai_dev_plan);
        session.monetization = to_state(monetization.map(|list| list.strategies));
        session.problem_solution_fit = to_state(fit);
        session.lean_canvas = to_state(canvas);

        self.print_summary(&session);

        if self.args.export {
            self.export_session(&description, &session)?;
        } else {
            self.print_session(&session)?;
        }

        Ok(())
    }

    fn print_summary(&self, session: &Session) {
        eprintln!("Flow results:");
        let lines = [
            ("features", status(&session.features)),
            ("personas", status(&session.personas)),
            ("dev-plan", status(&session.dev_plan)),
            ("ai-dev-plan", status(&session.ai_dev_plan)),
            ("monetization", status(&session.monetization)),
            ("problem-solution-fit", status(&session.problem_solution_fit)),
            ("lean-canvas", status(&session.lean_canvas)),
        ];
        for (name, state) in lines {
            eprintln!("  {:<22} {}", name, state);
        }
    }

    /// Print every successful artifact as one combined JSON document.
    fn print_session(&self, session: &Session) -> AppResult<()> {
        let mut document = serde_json::Map::new();
        if let Some(features) = session.features.data() {
            document.insert("features".to_string(), json!(features));
        }
        if let Some(personas) = session.personas.data() {
            document.insert("personas".to_string(), json!(personas));
        }
        if let Some(plan) = session.dev_plan.data() {
            document.insert("devPlan".to_string(), json!(plan));
        }
        if let Some(plan) = session.ai_dev_plan.data() {
            document.insert("aiDevPlan".to_string(), json!(plan));
        }
        if let Some(strategies) = session.monetization.data() {
            document.insert("monetizationStrategies".to_string(), json!(strategies));
        }
        if let Some(fit) = session.problem_solution_fit.data() {
            document.insert("problemSolutionFit".to_string(), json!(fit));
        }
        if let Some(canvas) = session.lean_canvas.data() {
            document.insert("leanCanvas".to_string(), json!(canvas));
        }
        println!("{}", to_json_string(&document)?);
        Ok(())
    }

    /// Export every successful artifact to the output directory.
    fn export_session(&self, description: &str, session: &Session) -> AppResult<()> {
        // The generated plan supplies the project name unless overridden
        let project = self.args.project_name.clone().or_else(|| {
            session
                .dev_plan
                .data()
                .map(|plan| plan.project_name.clone())
        });
        let project = project.as_deref();
        let out_dir = &self.args.out_dir;

        if let Some(features) = session.features.data() {
            commands::write_exports(
                out_dir,
                project,
                FlowKind::Features,
                &to_json_string(features)?,
                &markdown::features_markdown(description, features),
            )?;
        }
        if let Some(personas) = session.personas.data() {
            commands::write_exports(
                out_dir,
                project,
                FlowKind::Personas,
                &to_json_string(personas)?,
                &markdown::personas_markdown(description, personas),
            )?;
        }
        if let Some(plan) = session.dev_plan.data() {
            commands::write_exports(
                out_dir,
                project,
                FlowKind::DevPlan,
                &to_json_string(plan)?,
                &markdown::dev_plan_markdown(description, plan),
            )?;
        }
        if let Some(plan) = session.ai_dev_plan.data() {
            commands::write_exports(
                out_dir,
                project,
                FlowKind::AiDevPlan,
                &to_json_string(plan)?,
                &markdown::ai_dev_plan_markdown(description, plan),
            )?;
        }
        if let Some(strategies) = session.monetization.data() {
            commands::write_exports(
                out_dir,
                project,
                FlowKind::Monetization,
                &to_json_string(strategies)?,
                &markdown::monetization_markdown(description, strategies),
            )?;
        }
        if let Some(fit) = session.problem_solution_fit.data() {
            commands::write_exports(
                out_dir,
                project,
                FlowKind::ProblemSolutionFit,
                &to_json_string(fit)?,
                &markdown::problem_solution_fit_markdown(description, fit),
            )?;
        }
        if let Some(canvas) = session.lean_canvas.data() {
            commands::write_exports(
                out_dir,
                project,
                FlowKind::LeanCanvas,
                &to_json_string(canvas)?,
                &markdown::lean_canvas_markdown(description, canvas),
            )?;
        }
        Ok(())
    }
}

fn status<T>(state: &FlowState<T>) -> String {
    match state {
        FlowState::Idle => "skipped".to_string(),
        FlowState::Loading => "running".to_string(),
        FlowState::Success(_) => "ok".to_string(),
        FlowState::Error(message) => format!("failed: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::config::AppConfig;
    use std::path::PathBuf;

    fn mock_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.provider = "mock".to_string();
        config.model = "mock-model".to_string();
        config
    }

    #[test]
    fn test_status_labels_cover_every_state() {
        assert_eq!(status::<()>(&FlowState::Idle), "skipped");
        assert_eq!(status::<()>(&FlowState::Loading), "running");
        assert_eq!(status::<()>(&FlowState::Success(())), "ok");
        assert_eq!(
            status::<()>(&FlowState::Error("timeout".to_string())),
            "failed: timeout"
        );
    }

    #[tokio::test]
    async fn test_full_pipeline_exports_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let command = AllCommand {
            args: FlowArgs {
                description: Some(
                    "A recipe app that suggests meals from available ingredients".to_string(),
                ),
                file: None,
                export: true,
                out_dir: dir.path().to_path_buf(),
                project_name: Some("Pantry Chef".to_string()),
            },
        };

        command.execute(&mock_config()).await.unwrap();

        for suffix in [
            "features",
            "user-personas",
            "standard-dev-plan",
            "ai-accelerated-dev-plan",
            "monetization-strategies",
            "problem-solution-fit",
            "lean-canvas",
        ] {
            let json = dir.path().join(format!("pantry-chef-{}.json", suffix));
            let md = dir.path().join(format!("pantry-chef-{}.md", suffix));
            assert!(json.exists(), "missing {}", json.display());
            assert!(md.exists(), "missing {}", md.display());
        }
    }

    #[tokio::test]
    async fn test_pipeline_rejects_empty_description() {
        let command = AllCommand {
            args: FlowArgs {
                description: Some("   ".to_string()),
                file: None,
                export: false,
                out_dir: PathBuf::from("."),
                project_name: None,
            },
        };

        assert!(command.execute(&mock_config()).await.is_err());
    }
}
