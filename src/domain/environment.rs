// Per-environment deployment settings (config/<env>.json)
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentConfig {
    pub account_id: String,
    pub region: String,
    pub template_id: String,
    pub template_name: String,
    pub dashboard_id: String,
    pub dashboard_name: String,
    pub data_set_placeholders: Vec<DataSetPlaceholder>,
}

/// A template slot and the dataset that fills it in this environment
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DataSetPlaceholder {
    pub placeholder: String,
    pub data_set_arn: String,
}

impl EnvironmentConfig {
    /// ARN of the template the dashboard is built from.
    /// Composed locally; the template is never looked up.
    pub fn template_arn(&self) -> String {
        format!(
            "arn:aws:quicksight:{}:{}:template/{}",
            self.region, self.account_id, self.template_id
        )
    }
}
