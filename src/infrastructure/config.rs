use crate::domain::environment::EnvironmentConfig;
use crate::domain::template::TemplateDefinition;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "deploy";
pub const ENV_PREFIX: &str = "QS_DEPLOY";

/// Where deployment inputs live and which QuickSight endpoint to talk to
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DeploySettings {
    pub config_dir: PathBuf,
    pub template_path: PathBuf,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl DeploySettings {
    pub fn environment_config_path(&self, env: &str) -> PathBuf {
        self.config_dir.join(format!("{}.json", env))
    }
}

pub fn load_deploy_settings() -> anyhow::Result<DeploySettings> {
    load_deploy_settings_from(SETTINGS_FILE, None)
}

fn load_deploy_settings_from(
    file: &str,
    env_vars: Option<HashMap<String, String>>,
) -> anyhow::Result<DeploySettings> {
    let settings = config::Config::builder()
        .set_default("config_dir", "config")?
        .set_default("template_path", "templates/sales_template.json")?
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(false)
                .source(env_vars),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_environment_config(path: &Path) -> anyhow::Result<EnvironmentConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read environment config {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid environment config {}", path.display()))
}

pub fn load_template_definition(path: &Path) -> anyhow::Result<TemplateDefinition> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template definition {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid template definition {}", path.display()))
}
