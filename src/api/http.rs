//! HTTP transport for Guardian REST API calls

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use super::auth::Credentials;
use crate::error::{Error, Result};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and masks potentially sensitive patterns
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..MAX_LOG_BODY_LENGTH],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for the Guardian data protection API.
///
/// Holds the service endpoint and the caller's credentials; paths passed to
/// the request methods are appended to the endpoint verbatim. This layer
/// implements no retries, timeouts, or caching.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl HttpClient {
    pub fn new(endpoint: &str, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("guardctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// The project the credentials are scoped to.
    pub fn project_id(&self) -> &str {
        self.credentials.project_id()
    }

    /// Issue a request and decode the JSON body.
    ///
    /// An empty body decodes as `Value::Null`. 404 maps to
    /// [`Error::NotFound`]; any other non-2xx status to
    /// [`Error::Transport`].
    pub async fn json_request(
        &self,
        method: Method,
        path: &str,
        data: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> Result<(StatusCode, Value)> {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!("{} {}", method, url);

        let token = self.credentials.token(&self.client).await?;
        let mut request = self
            .client
            .request(method, &url)
            .header("X-Auth-Token", &token);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(data) = data {
            request = request.json(data);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(self.status_error(status, path, &body));
        }

        if body.is_empty() {
            return Ok((status, Value::Null));
        }

        let decoded = serde_json::from_str(&body)?;
        Ok((status, decoded))
    }

    /// Issue a request where no decoded body is needed (DELETE).
    pub async fn raw_request(
        &self,
        method: Method,
        path: &str,
        headers: &[(&str, &str)],
    ) -> Result<StatusCode> {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!("{} {}", method, url);

        let token = self.credentials.token(&self.client).await?;
        let mut request = self
            .client
            .request(method, &url)
            .header("X-Auth-Token", &token);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status, path, &body));
        }

        Ok(status)
    }

    fn status_error(&self, status: StatusCode, path: &str, body: &str) -> Error {
        // only log sanitized/truncated error bodies, they may carry
        // credentials or tenant data
        tracing::error!("API error: {} - {}", status, sanitize_for_log(body));

        if status == StatusCode::NOT_FOUND {
            return Error::NotFound(format!("resource not found: {path}"));
        }
        Error::Transport {
            status: status.as_u16(),
            message: sanitize_for_log(body),
        }
    }
}
