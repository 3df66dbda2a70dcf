//! HTTP implementation of [`ProfileApi`].

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use super::ProfileApi;
use crate::config::ClientConfig;
use crate::envelope::Payload;
use crate::error::{ConfigError, LoadError, LoadResult};
use crate::models::{OrganizationSummary, UserProfile};

/// HTTP client for the profile API.
#[derive(Clone)]
pub struct HttpProfileApi {
    client: reqwest::Client,
    base_url: Url,
    api_token: Option<String>,
}

impl HttpProfileApi {
    /// Create a new API client.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: config.api_url.clone(),
            reason,
        };

        let base_url = Url::parse(config.base_url()).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Issue a GET and decode the body into a [`Payload`].
    async fn get_payload<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &str,
    ) -> LoadResult<Payload<T>> {
        tracing::debug!(url = %url, resource, "Requesting resource");

        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.bytes().await?;
                let payload = Payload::from_slice(&body)?;
                tracing::debug!(
                    resource,
                    enveloped = payload.is_enveloped(),
                    "Resource decoded"
                );
                Ok(payload)
            }
            StatusCode::NOT_FOUND => Err(LoadError::NotFound(resource.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(LoadError::Network(format!("Status {}: {}", status, body)))
            }
        }
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    /// GET /v1/users/{id}
    async fn get_user_by_id(&self, user_id: &str) -> LoadResult<UserProfile> {
        let url = self.endpoint(&["v1", "users", user_id]);
        let payload = self
            .get_payload(url, &format!("user {}", user_id))
            .await?;
        Ok(payload.into_inner())
    }

    /// GET /v1/organizations?user_id={id}
    async fn list_organizations_for_user(
        &self,
        user_id: &str,
    ) -> LoadResult<Vec<OrganizationSummary>> {
        let mut url = self.endpoint(&["v1", "organizations"]);
        url.query_pairs_mut().append_pair("user_id", user_id);
        let payload = self
            .get_payload(url, &format!("organizations of user {}", user_id))
            .await?;
        Ok(payload.into_inner())
    }
}
