use async_trait::async_trait;

use super::AuthenticationDatasource;
use crate::models::AccessToken;
use crate::{Error, Result};

/// Exchanges client credentials for an access token (OAuth2 client-credentials grant).
///
/// Tokens are not cached: every call performs a new token request.
pub struct HttpAuthenticationDatasource {
    client: reqwest::Client,
    login_url: String,
    client_id: String,
    client_secret: String,
}

impl HttpAuthenticationDatasource {
    pub fn new(
        client: reqwest::Client,
        login_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        HttpAuthenticationDatasource {
            client,
            login_url: login_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

#[async_trait]
impl AuthenticationDatasource for HttpAuthenticationDatasource {
    async fn fetch_access_token(&self) -> Result<AccessToken> {
        // The login URL is a complete endpoint, so it is used verbatim.
        let url = url::Url::parse(&self.login_url).map_err(Error::InvalidBaseUrl)?;

        log::debug!(target: "trustbadge", client_id = self.client_id.as_str(); "requesting access token");
        let response = self
            .client
            .post(url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        let response = response.error_for_status().map_err(|err| {
            log::warn!(target: "trustbadge",
                "token request was rejected, check client credentials: {:?}", err.status());
            Error::from(err)
        })?;

        let body = response.text().await?;
        let token: AccessToken = serde_json::from_str(&body).inspect_err(|err| {
            log::warn!(target: "trustbadge", "failed to parse token response: {}", err);
        })?;

        Ok(token)
    }
}
