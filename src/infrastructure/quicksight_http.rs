// QuickSight REST client (SigV4-signed JSON over HTTPS)
use crate::application::quicksight_client::{
    DashboardRequest, DashboardResponse, PublishResponse, QuickSightClient, QuickSightError,
    TemplateRequest, TemplateResponse, RESOURCE_NOT_FOUND,
};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningParams, SigningSettings};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::SystemTime;

const SIGNING_NAME: &str = "quicksight";
const CONTENT_TYPE: &str = "application/json";
const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

#[derive(Debug, Clone)]
pub struct HttpQuickSightClient {
    http: reqwest::Client,
    endpoint: String,
    region: String,
    credentials: Credentials,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl HttpQuickSightClient {
    pub fn new(endpoint: Option<String>, region: String, credentials: Credentials) -> Self {
        let endpoint = endpoint.unwrap_or_else(|| default_endpoint(&region));
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            region,
            credentials,
        }
    }

    /// Resolve credentials once from the standard AWS provider chain
    pub async fn from_env(region: &str, endpoint: Option<String>) -> Result<Self, QuickSightError> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| QuickSightError::Credentials("no credentials provider configured".to_string()))?;
        let credentials = provider
            .provide_credentials()
            .await
            .map_err(|e| QuickSightError::Credentials(e.to_string()))?;

        tracing::debug!("Resolved AWS credentials for region {}", region);
        Ok(Self::new(endpoint, region.to_string(), credentials))
    }

    fn resource_url(&self, segments: &[&str]) -> String {
        let path: Vec<String> = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        format!("{}/{}", self.endpoint, path.join("/"))
    }

    fn signed_headers(&self, method: &Method, url: &str, body: &[u8]) -> Result<Vec<(String, String)>, QuickSightError> {
        let identity: Identity = self.credentials.clone().into();
        let params: SigningParams = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(SIGNING_NAME)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| QuickSightError::Signing(e.to_string()))?
            .into();

        let signable = SignableRequest::new(
            method.as_str(),
            url,
            [("content-type", CONTENT_TYPE)].into_iter(),
            SignableBody::Bytes(body),
        )
        .map_err(|e| QuickSightError::Signing(e.to_string()))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|e| QuickSightError::Signing(e.to_string()))?
            .into_parts();

        Ok(instructions
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }

    async fn send<B, R>(&self, method: Method, url: String, body: Option<&B>) -> Result<R, QuickSightError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = match body {
            Some(b) => serde_json::to_vec(b)?,
            None => Vec::new(),
        };

        tracing::debug!("{} {}", method, url);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("content-type", CONTENT_TYPE);
        for (name, value) in self.signed_headers(&method, &url, &payload)? {
            request = request.header(name, value);
        }

        let response = request.body(payload).send().await?;
        let status = response.status();
        let error_type = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;

        if !status.is_success() {
            return Err(classify_error(status, error_type.as_deref(), &text));
        }

        decode_response(status, &text)
    }
}

pub fn default_endpoint(region: &str) -> String {
    format!("https://quicksight.{}.amazonaws.com", region)
}

/// Map an error response onto NotFound / Service.
/// The code comes from the x-amzn-ErrorType header, else from the JSON body.
pub fn classify_error(status: StatusCode, error_type: Option<&str>, body: &str) -> QuickSightError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();

    let code = error_type
        .and_then(|h| h.split(':').next())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .or_else(|| {
            parsed
                .as_ref()
                .and_then(|b| b.error_type.clone().or_else(|| b.code.clone()))
                .map(|c| c.rsplit('#').next().unwrap_or_default().to_string())
        })
        .filter(|c| !c.is_empty());

    let message = parsed
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.to_string());

    match code {
        Some(code) if code == RESOURCE_NOT_FOUND => QuickSightError::NotFound { code, message },
        None if status == StatusCode::NOT_FOUND => QuickSightError::NotFound {
            code: RESOURCE_NOT_FOUND.to_string(),
            message,
        },
        code => QuickSightError::Service {
            status: status.as_u16(),
            code: code.unwrap_or_else(|| "Unknown".to_string()),
            message,
        },
    }
}

/// QuickSight binds `Status` to the HTTP status code rather than the body.
fn decode_response<R: DeserializeOwned>(status: StatusCode, body: &str) -> Result<R, QuickSightError> {
    let mut value: Value = if body.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(body)?
    };
    if let Value::Object(map) = &mut value {
        map.entry("Status").or_insert_with(|| Value::from(status.as_u16()));
    }
    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl QuickSightClient for HttpQuickSightClient {
    async fn update_template(
        &self,
        account_id: &str,
        template_id: &str,
        request: &TemplateRequest<'_>,
    ) -> Result<TemplateResponse, QuickSightError> {
        let url = self.resource_url(&["accounts", account_id, "templates", template_id]);
        self.send(Method::PUT, url, Some(request)).await
    }

    async fn create_template(
        &self,
        account_id: &str,
        template_id: &str,
        request: &TemplateRequest<'_>,
    ) -> Result<TemplateResponse, QuickSightError> {
        let url = self.resource_url(&["accounts", account_id, "templates", template_id]);
        self.send(Method::POST, url, Some(request)).await
    }

    async fn update_dashboard(
        &self,
        account_id: &str,
        dashboard_id: &str,
        request: &DashboardRequest<'_>,
    ) -> Result<DashboardResponse, QuickSightError> {
        let url = self.resource_url(&["accounts", account_id, "dashboards", dashboard_id]);
        self.send(Method::PUT, url, Some(request)).await
    }

    async fn update_dashboard_published_version(
        &self,
        account_id: &str,
        dashboard_id: &str,
        version_number: i64,
    ) -> Result<PublishResponse, QuickSightError> {
        let version = version_number.to_string();
        let url = self.resource_url(&["accounts", account_id, "dashboards", dashboard_id, "versions", &version]);
        self.send::<Value, _>(Method::PUT, url, None).await
    }

    async fn create_dashboard(
        &self,
        account_id: &str,
        dashboard_id: &str,
        request: &DashboardRequest<'_>,
    ) -> Result<DashboardResponse, QuickSightError> {
        let url = self.resource_url(&["accounts", account_id, "dashboards", dashboard_id]);
        self.send(Method::POST, url, Some(request)).await
    }
}
