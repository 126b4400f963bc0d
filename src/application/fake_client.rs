// In-memory QuickSight used by the service tests
use crate::application::quicksight_client::{
    DashboardRequest, DashboardResponse, PublishResponse, QuickSightClient, QuickSightError,
    TemplateRequest, TemplateResponse, RESOURCE_NOT_FOUND,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    UpdateTemplate { id: String, body: Value },
    CreateTemplate { id: String, body: Value },
    UpdateDashboard { id: String, body: Value },
    PublishDashboard { id: String, version: i64 },
    CreateDashboard { id: String, body: Value },
}

impl Call {
    pub fn name(&self) -> &'static str {
        match self {
            Call::UpdateTemplate { .. } => "update_template",
            Call::CreateTemplate { .. } => "create_template",
            Call::UpdateDashboard { .. } => "update_dashboard",
            Call::PublishDashboard { .. } => "update_dashboard_published_version",
            Call::CreateDashboard { .. } => "create_dashboard",
        }
    }
}

#[derive(Default)]
struct State {
    template_exists: bool,
    dashboard_exists: bool,
    dashboard_version: i64,
    omit_version_arn: bool,
    template_update_error: Option<QuickSightError>,
    dashboard_update_error: Option<QuickSightError>,
    publish_error: Option<QuickSightError>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeQuickSight {
    state: Mutex<State>,
}

pub fn not_found(message: &str) -> QuickSightError {
    QuickSightError::NotFound {
        code: RESOURCE_NOT_FOUND.to_string(),
        message: message.to_string(),
    }
}

pub fn access_denied() -> QuickSightError {
    QuickSightError::Service {
        status: 403,
        code: "AccessDeniedException".to_string(),
        message: "User is not authorized".to_string(),
    }
}

impl FakeQuickSight {
    /// Neither resource exists yet
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_existing(template: bool, dashboard: bool) -> Self {
        let fake = Self::default();
        {
            let mut state = fake.state.lock().unwrap();
            state.template_exists = template;
            state.dashboard_exists = dashboard;
            state.dashboard_version = if dashboard { 1 } else { 0 };
        }
        fake
    }

    pub fn fail_template_update(self, err: QuickSightError) -> Self {
        self.state.lock().unwrap().template_update_error = Some(err);
        self
    }

    pub fn fail_dashboard_update(self, err: QuickSightError) -> Self {
        self.state.lock().unwrap().dashboard_update_error = Some(err);
        self
    }

    pub fn fail_publish(self, err: QuickSightError) -> Self {
        self.state.lock().unwrap().publish_error = Some(err);
        self
    }

    pub fn without_version_arn(self) -> Self {
        self.state.lock().unwrap().omit_version_arn = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::name).collect()
    }

    fn dashboard_response(state: &State, account_id: &str, dashboard_id: &str) -> DashboardResponse {
        let arn = format!("arn:aws:quicksight:us-east-1:{}:dashboard/{}", account_id, dashboard_id);
        let version_arn = if state.omit_version_arn {
            None
        } else {
            Some(format!("{}/version/{}", arn, state.dashboard_version))
        };
        DashboardResponse {
            arn: Some(arn),
            version_arn,
            dashboard_id: Some(dashboard_id.to_string()),
            creation_status: Some("CREATION_IN_PROGRESS".to_string()),
            status: Some(202),
            request_id: Some("req-1".to_string()),
        }
    }
}

#[async_trait]
impl QuickSightClient for FakeQuickSight {
    async fn update_template(
        &self,
        _account_id: &str,
        template_id: &str,
        request: &TemplateRequest<'_>,
    ) -> Result<TemplateResponse, QuickSightError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::UpdateTemplate {
            id: template_id.to_string(),
            body: serde_json::to_value(request)?,
        });
        if let Some(err) = state.template_update_error.take() {
            return Err(err);
        }
        if !state.template_exists {
            return Err(not_found("template does not exist"));
        }
        Ok(TemplateResponse {
            version_arn: Some(format!("template/{}/version/2", template_id)),
            status: Some(202),
            ..Default::default()
        })
    }

    async fn create_template(
        &self,
        _account_id: &str,
        template_id: &str,
        request: &TemplateRequest<'_>,
    ) -> Result<TemplateResponse, QuickSightError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateTemplate {
            id: template_id.to_string(),
            body: serde_json::to_value(request)?,
        });
        state.template_exists = true;
        Ok(TemplateResponse {
            version_arn: Some(format!("template/{}/version/1", template_id)),
            status: Some(202),
            ..Default::default()
        })
    }

    async fn update_dashboard(
        &self,
        account_id: &str,
        dashboard_id: &str,
        request: &DashboardRequest<'_>,
    ) -> Result<DashboardResponse, QuickSightError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::UpdateDashboard {
            id: dashboard_id.to_string(),
            body: serde_json::to_value(request)?,
        });
        if let Some(err) = state.dashboard_update_error.take() {
            return Err(err);
        }
        if !state.dashboard_exists {
            return Err(not_found("dashboard does not exist"));
        }
        state.dashboard_version += 1;
        Ok(Self::dashboard_response(&state, account_id, dashboard_id))
    }

    async fn update_dashboard_published_version(
        &self,
        account_id: &str,
        dashboard_id: &str,
        version_number: i64,
    ) -> Result<PublishResponse, QuickSightError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::PublishDashboard {
            id: dashboard_id.to_string(),
            version: version_number,
        });
        if let Some(err) = state.publish_error.take() {
            return Err(err);
        }
        Ok(PublishResponse {
            dashboard_arn: Some(format!(
                "arn:aws:quicksight:us-east-1:{}:dashboard/{}",
                account_id, dashboard_id
            )),
            dashboard_id: Some(dashboard_id.to_string()),
            status: Some(200),
            request_id: Some("req-2".to_string()),
        })
    }

    async fn create_dashboard(
        &self,
        account_id: &str,
        dashboard_id: &str,
        request: &DashboardRequest<'_>,
    ) -> Result<DashboardResponse, QuickSightError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateDashboard {
            id: dashboard_id.to_string(),
            body: serde_json::to_value(request)?,
        });
        state.dashboard_exists = true;
        state.dashboard_version = 1;
        Ok(Self::dashboard_response(&state, account_id, dashboard_id))
    }
}
