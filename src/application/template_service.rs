// Template service - Update the template, creating it when QuickSight has none
use crate::application::quicksight_client::{QuickSightClient, QuickSightError, TemplateRequest, TemplateResponse};
use crate::application::UpsertOutcome;
use crate::domain::environment::EnvironmentConfig;
use crate::domain::template::TemplateDefinition;
use std::sync::Arc;

#[derive(Clone)]
pub struct TemplateService {
    client: Arc<dyn QuickSightClient>,
}

impl TemplateService {
    pub fn new(client: Arc<dyn QuickSightClient>) -> Self {
        Self { client }
    }

    pub async fn upsert_template(
        &self,
        cfg: &EnvironmentConfig,
        definition: &TemplateDefinition,
    ) -> Result<UpsertOutcome, QuickSightError> {
        let request = TemplateRequest {
            name: &cfg.template_name,
            definition,
        };

        tracing::info!(
            "Updating template {} in account {}...",
            cfg.template_id,
            cfg.account_id
        );
        match self
            .client
            .update_template(&cfg.account_id, &cfg.template_id, &request)
            .await
        {
            Ok(resp) => {
                tracing::info!("Template updated. VersionArn: {}", display_arn(&resp));
                Ok(UpsertOutcome::Updated)
            }
            Err(e) if e.is_not_found() => {
                tracing::info!("Template {} not found. Creating...", cfg.template_id);
                let resp = self
                    .client
                    .create_template(&cfg.account_id, &cfg.template_id, &request)
                    .await
                    .inspect_err(|e| tracing::error!("Error creating template: {}", e))?;
                tracing::info!("Template created. VersionArn: {}", display_arn(&resp));
                Ok(UpsertOutcome::Created)
            }
            Err(e) => {
                tracing::error!("Error updating template: {}", e);
                Err(e)
            }
        }
    }
}

fn display_arn(resp: &TemplateResponse) -> &str {
    resp.version_arn.as_deref().unwrap_or("-")
}
