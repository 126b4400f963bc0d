// Port for the QuickSight operations the deployment needs
use crate::domain::dashboard::DashboardSourceEntity;
use crate::domain::template::TemplateDefinition;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";

#[derive(Debug, Error)]
pub enum QuickSightError {
    #[error("{code}: {message}")]
    NotFound { code: String, message: String },

    #[error("QuickSight returned {status} {code}: {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to resolve AWS credentials: {0}")]
    Credentials(String),

    #[error("failed to sign request: {0}")]
    Signing(String),

    #[error("failed to decode QuickSight response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no dashboard version number in VersionArn {0:?}")]
    MissingVersion(Option<String>),
}

impl QuickSightError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuickSightError::NotFound { .. })
    }
}

/// Body of create-template / update-template
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateRequest<'a> {
    pub name: &'a str,
    pub definition: &'a TemplateDefinition,
}

/// Body of create-dashboard / update-dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardRequest<'a> {
    pub name: &'a str,
    pub source_entity: &'a DashboardSourceEntity,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TemplateResponse {
    pub arn: Option<String>,
    pub version_arn: Option<String>,
    pub template_id: Option<String>,
    pub creation_status: Option<String>,
    pub status: Option<i32>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct DashboardResponse {
    pub arn: Option<String>,
    pub version_arn: Option<String>,
    pub dashboard_id: Option<String>,
    pub creation_status: Option<String>,
    pub status: Option<i32>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PublishResponse {
    pub dashboard_arn: Option<String>,
    pub dashboard_id: Option<String>,
    pub status: Option<i32>,
    pub request_id: Option<String>,
}

/// Each call is keyed by the account id and a caller-assigned resource id.
#[async_trait]
pub trait QuickSightClient: Send + Sync {
    async fn update_template(
        &self,
        account_id: &str,
        template_id: &str,
        request: &TemplateRequest<'_>,
    ) -> Result<TemplateResponse, QuickSightError>;

    async fn create_template(
        &self,
        account_id: &str,
        template_id: &str,
        request: &TemplateRequest<'_>,
    ) -> Result<TemplateResponse, QuickSightError>;

    async fn update_dashboard(
        &self,
        account_id: &str,
        dashboard_id: &str,
        request: &DashboardRequest<'_>,
    ) -> Result<DashboardResponse, QuickSightError>;

    /// Make `version_number` the version viewers see
    async fn update_dashboard_published_version(
        &self,
        account_id: &str,
        dashboard_id: &str,
        version_number: i64,
    ) -> Result<PublishResponse, QuickSightError>;

    async fn create_dashboard(
        &self,
        account_id: &str,
        dashboard_id: &str,
        request: &DashboardRequest<'_>,
    ) -> Result<DashboardResponse, QuickSightError>;
}
