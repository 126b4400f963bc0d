// Dashboard source entity - template ARN plus dataset bindings
use super::environment::EnvironmentConfig;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DataSetReference {
    pub data_set_placeholder: String,
    pub data_set_arn: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SourceTemplate {
    pub arn: String,
    pub data_set_references: Vec<DataSetReference>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSourceEntity {
    pub source_template: SourceTemplate,
}

impl DashboardSourceEntity {
    pub fn from_config(cfg: &EnvironmentConfig) -> Self {
        Self {
            source_template: SourceTemplate {
                arn: cfg.template_arn(),
                data_set_references: build_dataset_references(cfg),
            },
        }
    }
}

/// Map configured placeholders one-to-one onto dataset references.
/// Duplicates and unknown placeholders are left for QuickSight to reject.
pub fn build_dataset_references(cfg: &EnvironmentConfig) -> Vec<DataSetReference> {
    cfg.data_set_placeholders
        .iter()
        .map(|p| DataSetReference {
            data_set_placeholder: p.placeholder.clone(),
            data_set_arn: p.data_set_arn.clone(),
        })
        .collect()
}

/// Extract the version number from a dashboard version ARN
/// Example: ".../dashboard/d1/version/3" -> 3
pub fn version_number_from_arn(version_arn: &str) -> Option<i64> {
    let (prefix, number) = version_arn.rsplit_once('/')?;
    if !prefix.ends_with("/version") {
        return None;
    }
    number.parse().ok()
}
