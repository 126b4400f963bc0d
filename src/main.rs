// Main entry point - Wire settings, inputs and the QuickSight client, then deploy
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::deployment_service::DeploymentService;
use crate::infrastructure::config::{load_deploy_settings, load_environment_config, load_template_definition};
use crate::infrastructure::quicksight_http::HttpQuickSightClient;
use crate::presentation::cli::dispatch;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Arguments are checked before any file or network access
    let cli = match dispatch(std::env::args_os(), &mut std::io::stdout()) {
        Ok(cli) => cli,
        Err(code) => return Ok(ExitCode::from(code)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_deploy_settings().context("Failed to load deploy settings")?;
    let cfg = load_environment_config(&settings.environment_config_path(&cli.env))?;
    let definition = load_template_definition(&settings.template_path)?;
    tracing::debug!(
        "Loaded template definition from {} ({} top-level keys)",
        settings.template_path.display(),
        definition.as_value().as_object().map_or(0, |o| o.len())
    );

    // Create client (infrastructure layer) for the configured region
    let client = Arc::new(HttpQuickSightClient::from_env(&cfg.region, settings.endpoint.clone()).await?);

    let service = DeploymentService::new(client);
    let report = service.deploy(&cli.env, &cfg, &definition).await?;

    tracing::info!(
        "Deployment finished for env={}: template {:?}, dashboard {:?}",
        cli.env,
        report.template,
        report.dashboard
    );
    Ok(ExitCode::SUCCESS)
}
