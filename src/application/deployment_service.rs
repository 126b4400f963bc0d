// Deployment service - Template first, then the dashboard built from it
use crate::application::dashboard_service::DashboardService;
use crate::application::quicksight_client::{QuickSightClient, QuickSightError};
use crate::application::template_service::TemplateService;
use crate::application::UpsertOutcome;
use crate::domain::environment::EnvironmentConfig;
use crate::domain::template::TemplateDefinition;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentReport {
    pub template: UpsertOutcome,
    pub dashboard: UpsertOutcome,
}

#[derive(Clone)]
pub struct DeploymentService {
    template_service: TemplateService,
    dashboard_service: DashboardService,
}

impl DeploymentService {
    pub fn new(client: Arc<dyn QuickSightClient>) -> Self {
        Self {
            template_service: TemplateService::new(client.clone()),
            dashboard_service: DashboardService::new(client),
        }
    }

    /// A dashboard failure leaves the already upserted template in place.
    pub async fn deploy(
        &self,
        env: &str,
        cfg: &EnvironmentConfig,
        definition: &TemplateDefinition,
    ) -> Result<DeploymentReport, QuickSightError> {
        tracing::info!(
            "Deploying QuickSight assets for env={}, account={}",
            env,
            cfg.account_id
        );

        let template = self.template_service.upsert_template(cfg, definition).await?;
        let dashboard = self.dashboard_service.upsert_dashboard(cfg).await?;

        Ok(DeploymentReport { template, dashboard })
    }
}
