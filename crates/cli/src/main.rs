//! Idea Forge CLI
//!
//! Main entry point for the `forge` command-line tool.
//! Turns a plain-language app description into planning artifacts: feature
//! suggestions, development plans, user personas, monetization strategies,
//! a problem/solution fit analysis, and a Lean Canvas.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    AiDevPlanCommand, AllCommand, DevPlanCommand, FeaturesCommand, FitCommand, LeanCanvasCommand,
    MonetizationCommand, PersonasCommand,
};
use forge_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Idea Forge CLI - turn an app idea into planning artifacts
#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(about = "Turn an app idea into planning artifacts", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "FORGE_CONFIG")]
    config: Option<PathBuf>,

    /// LLM provider (gemini, ollama, mock)
    #[arg(short, long, global = true, env = "FORGE_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "FORGE_MODEL")]
    model: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Suggest features for an app description
    Features(FeaturesCommand),

    /// Generate user personas
    Personas(PersonasCommand),

    /// Generate a standard development plan
    DevPlan(DevPlanCommand),

    /// Generate an AI-accelerated development plan
    AiDevPlan(AiDevPlanCommand),

    /// Suggest monetization strategies
    Monetization(MonetizationCommand),

    /// Analyze problem/solution fit
    Fit(FitCommand),

    /// Generate a Lean Canvas
    LeanCanvas(LeanCanvasCommand),

    /// Run every flow for one description
    All(AllCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration, preferring a flag-supplied config file
    let config = AppConfig::load_from(cli.config.clone())?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.config,
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Idea Forge CLI starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    config.validate()?;

    let command_name = match &cli.command {
        Commands::Features(_) => "features",
        Commands::Personas(_) => "personas",
        Commands::DevPlan(_) => "dev-plan",
        Commands::AiDevPlan(_) => "ai-dev-plan",
        Commands::Monetization(_) => "monetization",
        Commands::Fit(_) => "fit",
        Commands::LeanCanvas(_) => "lean-canvas",
        Commands::All(_) => "all",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Features(cmd) => cmd.execute(&config).await,
        Commands::Personas(cmd) => cmd.execute(&config).await,
        Commands::DevPlan(cmd) => cmd.execute(&config).await,
        Commands::AiDevPlan(cmd) => cmd.execute(&config).await,
        Commands::Monetization(cmd) => cmd.execute(&config).await,
        Commands::Fit(cmd) => cmd.execute(&config).await,
        Commands::LeanCanvas(cmd) => cmd.execute(&config).await,
        Commands::All(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
