//! Identity service authentication
//!
//! Acquires API tokens from the Guardian identity service via the password
//! flow, or wraps a pre-acquired token. Password-flow tokens are cached and
//! refreshed shortly before they expire.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::error::{Error, Result};

/// Token expiry buffer - refresh tokens this much before they actually expire
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Token TTL used when the identity service does not say otherwise
/// (conservative: 30 minutes)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Settings for the password flow.
#[derive(Clone)]
pub struct PasswordAuth {
    pub auth_url: String,
    pub username: String,
    pub password: String,
    pub project_name: String,
}

enum Inner {
    /// Pre-acquired token, no identity service involved.
    Static { token: String, project_id: String },
    Password {
        auth: PasswordAuth,
        project_id: String,
        cache: RwLock<Option<CachedToken>>,
    },
}

/// Credentials holder with token caching.
#[derive(Clone)]
pub struct Credentials {
    inner: Arc<Inner>,
}

impl Credentials {
    /// Use a token acquired out of band, scoped to `project_id`.
    pub fn from_token(token: &str, project_id: &str) -> Self {
        Self {
            inner: Arc::new(Inner::Static {
                token: token.to_string(),
                project_id: project_id.to_string(),
            }),
        }
    }

    /// Run the password flow once to resolve the scoped project and seed the
    /// token cache.
    pub async fn password(client: &Client, auth: PasswordAuth) -> Result<Self> {
        let (token, project_id, expires_at) = request_token(client, &auth).await?;
        tracing::info!("Authenticated against {} as {}", auth.auth_url, auth.username);

        Ok(Self {
            inner: Arc::new(Inner::Password {
                auth,
                project_id,
                cache: RwLock::new(Some(CachedToken { token, expires_at })),
            }),
        })
    }

    /// The project the credentials are scoped to.
    pub fn project_id(&self) -> &str {
        match self.inner.as_ref() {
            Inner::Static { project_id, .. } => project_id,
            Inner::Password { project_id, .. } => project_id,
        }
    }

    /// Get a token for API calls, refreshing through the identity service
    /// when the cached one is about to expire.
    pub async fn token(&self, client: &Client) -> Result<String> {
        let (auth, cache) = match self.inner.as_ref() {
            Inner::Static { token, .. } => return Ok(token.clone()),
            Inner::Password { auth, cache, .. } => (auth, cache),
        };

        {
            let cache = cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let (token, _, expires_at) = request_token(client, auth).await?;
        {
            let mut cache = cache.write().await;
            *cache = Some(CachedToken {
                token: token.clone(),
                expires_at,
            });
        }

        Ok(token)
    }
}

/// POST the password payload to the identity service; the token travels in
/// the `X-Subject-Token` response header, the scoped project in the body.
async fn request_token(
    client: &Client,
    auth: &PasswordAuth,
) -> Result<(String, String, Instant)> {
    let url = format!("{}/v3/auth/tokens", auth.auth_url.trim_end_matches('/'));
    let payload = json!({
        "auth": {
            "identity": {
                "methods": ["password"],
                "password": {
                    "user": {
                        "name": auth.username,
                        "domain": {"id": "default"},
                        "password": auth.password,
                    }
                }
            },
            "scope": {
                "project": {
                    "name": auth.project_name,
                    "domain": {"id": "default"},
                }
            }
        }
    });

    let response = client.post(&url).json(&payload).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Transport {
            status: status.as_u16(),
            message: format!("authentication against {url} failed"),
        });
    }

    let token = response
        .headers()
        .get("X-Subject-Token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| Error::Transport {
            status: status.as_u16(),
            message: "identity service response carried no X-Subject-Token header".to_string(),
        })?;

    let body: Value = response.json().await?;
    let project_id = body
        .pointer("/token/project/id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    // identity reports expiry as a timestamp string; a conservative fixed
    // TTL with a refresh buffer avoids parsing it
    let expires_at = Instant::now() + DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER;

    Ok((token, project_id, expires_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_credentials_never_touch_the_network() {
        let creds = Credentials::from_token("tok", "proj");
        assert_eq!(creds.project_id(), "proj");
        let client = Client::new();
        let token = tokio_test::block_on(creds.token(&client)).unwrap();
        assert_eq!(token, "tok");
    }

    #[test]
    fn cached_token_validity_honors_expiry() {
        let valid = CachedToken {
            token: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(60),
        };
        assert!(valid.is_valid());

        let expired = CachedToken {
            token: "t".to_string(),
            expires_at: Instant::now() - Duration::from_secs(1),
        };
        assert!(!expired.is_valid());
    }
}
