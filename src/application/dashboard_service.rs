// Dashboard service - Upsert the dashboard from the template and publish updates
use crate::application::quicksight_client::{DashboardRequest, QuickSightClient, QuickSightError};
use crate::application::UpsertOutcome;
use crate::domain::dashboard::{version_number_from_arn, DashboardSourceEntity};
use crate::domain::environment::EnvironmentConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    client: Arc<dyn QuickSightClient>,
}

impl DashboardService {
    pub fn new(client: Arc<dyn QuickSightClient>) -> Self {
        Self { client }
    }

    /// The template must already be upserted: the source entity points at its ARN.
    /// A not-found from either the update or the publish call falls back to create.
    /// Only the update path publishes; a freshly created dashboard keeps the
    /// published version QuickSight assigns on creation.
    pub async fn upsert_dashboard(&self, cfg: &EnvironmentConfig) -> Result<UpsertOutcome, QuickSightError> {
        let source_entity = DashboardSourceEntity::from_config(cfg);
        let request = DashboardRequest {
            name: &cfg.dashboard_name,
            source_entity: &source_entity,
        };

        match self.update_and_publish(cfg, &request).await {
            Ok(()) => Ok(UpsertOutcome::Updated),
            Err(e) if e.is_not_found() => {
                tracing::info!("Dashboard {} not found. Creating...", cfg.dashboard_id);
                let resp = self
                    .client
                    .create_dashboard(&cfg.account_id, &cfg.dashboard_id, &request)
                    .await
                    .inspect_err(|e| tracing::error!("Error creating dashboard: {}", e))?;
                tracing::info!("Dashboard created. Status: {}", display_status(resp.status));
                Ok(UpsertOutcome::Created)
            }
            Err(e) => {
                tracing::error!("Error updating/publishing dashboard: {}", e);
                Err(e)
            }
        }
    }

    async fn update_and_publish(
        &self,
        cfg: &EnvironmentConfig,
        request: &DashboardRequest<'_>,
    ) -> Result<(), QuickSightError> {
        tracing::info!("Updating dashboard {}...", cfg.dashboard_id);
        let resp = self
            .client
            .update_dashboard(&cfg.account_id, &cfg.dashboard_id, request)
            .await?;
        tracing::info!("Dashboard updated. Status: {}", display_status(resp.status));

        let version = resp
            .version_arn
            .as_deref()
            .and_then(version_number_from_arn)
            .ok_or_else(|| QuickSightError::MissingVersion(resp.version_arn.clone()))?;

        let published = self
            .client
            .update_dashboard_published_version(&cfg.account_id, &cfg.dashboard_id, version)
            .await?;
        tracing::info!(
            "Dashboard published. Version: {} DashboardArn: {}",
            version,
            published.dashboard_arn.as_deref().unwrap_or("-")
        );
        Ok(())
    }
}

fn display_status(status: Option<i32>) -> String {
    status.map_or_else(|| "-".to_string(), |s| s.to_string())
}
