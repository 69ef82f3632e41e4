use std::path::Path;

use serde::Deserialize;

use crate::{Result, TrustbadgeClient};

/// Deployment stage of the rating service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    /// Staging stage used for integration testing.
    Qa,
    Development,
}

impl Environment {
    /// Base URL of the trust mark CDN. Shop documents live under `/<tsId>/...`.
    pub fn trustbadge_base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://cdn1.api.trustedshops.com/shops",
            Environment::Qa => "https://cdn1.api-qa.trustedshops.com/shops",
            Environment::Development => "https://cdn1.api-dev.trustedshops.com/shops",
        }
    }

    /// Base URL of the channels API. Aggregate ratings live under `/<channelId>/...`.
    pub fn channels_base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.etrusted.com/channels",
            Environment::Qa => "https://api-qa.etrusted.com/channels",
            Environment::Development => "https://api-dev.etrusted.com/channels",
        }
    }

    /// OAuth2 token endpoint.
    pub fn login_url(self) -> &'static str {
        match self {
            Environment::Production => "https://login.etrusted.com/oauth/token",
            Environment::Qa => "https://login-qa.etrusted.com/oauth/token",
            Environment::Development => "https://login-dev.etrusted.com/oauth/token",
        }
    }
}

/// Configuration for [`TrustbadgeClient`].
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) environment: Environment,
    pub(crate) trustbadge_base_url: Option<String>,
    pub(crate) channels_base_url: Option<String>,
    pub(crate) login_url: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("environment", &self.environment)
            .field("trustbadge_base_url", &self.trustbadge_base_url)
            .field("channels_base_url", &self.channels_base_url)
            .field("login_url", &self.login_url)
            .finish()
    }
}

/// Shape of `trustbadge-config.json` shipped with the host application.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    environment: Environment,
}

impl ClientConfig {
    /// Create a production configuration using the specified client credentials.
    ///
    /// ```
    /// # use trustbadge::ClientConfig;
    /// ClientConfig::from_credentials("client-id", "client-secret");
    /// ```
    pub fn from_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> ClientConfig {
        ClientConfig {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            environment: Environment::default(),
            trustbadge_base_url: None,
            channels_base_url: None,
            login_url: None,
        }
    }

    /// Parse the contents of a `trustbadge-config.json` file.
    ///
    /// ```
    /// # use trustbadge::{ClientConfig, Environment};
    /// let config = ClientConfig::from_json_str(
    ///     r#"{"clientId": "id", "clientSecret": "secret", "environment": "qa"}"#,
    /// ).unwrap();
    /// assert_eq!(config.get_environment(), Environment::Qa);
    /// ```
    pub fn from_json_str(json: &str) -> Result<ClientConfig> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Ok(ClientConfig::from_credentials(file.client_id, file.client_secret)
            .environment(file.environment))
    }

    /// Read and parse a `trustbadge-config.json` file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<ClientConfig> {
        let json = std::fs::read_to_string(path)?;
        ClientConfig::from_json_str(&json)
    }

    /// Select the service environment. Defaults to [`Environment::Production`].
    pub fn environment(mut self, environment: Environment) -> ClientConfig {
        self.environment = environment;
        self
    }

    /// Override the trust mark CDN base URL. Clients should use the environment default in most
    /// cases.
    pub fn trustbadge_base_url(mut self, base_url: impl Into<String>) -> ClientConfig {
        self.trustbadge_base_url = Some(base_url.into());
        self
    }

    /// Override the channels API base URL.
    pub fn channels_base_url(mut self, base_url: impl Into<String>) -> ClientConfig {
        self.channels_base_url = Some(base_url.into());
        self
    }

    /// Override the OAuth2 token endpoint.
    pub fn login_url(mut self, login_url: impl Into<String>) -> ClientConfig {
        self.login_url = Some(login_url.into());
        self
    }

    /// Currently selected environment.
    pub fn get_environment(&self) -> Environment {
        self.environment
    }

    pub(crate) fn resolved_trustbadge_base_url(&self) -> String {
        self.trustbadge_base_url
            .clone()
            .unwrap_or_else(|| self.environment.trustbadge_base_url().to_owned())
    }

    pub(crate) fn resolved_channels_base_url(&self) -> String {
        self.channels_base_url
            .clone()
            .unwrap_or_else(|| self.environment.channels_base_url().to_owned())
    }

    pub(crate) fn resolved_login_url(&self) -> String {
        self.login_url
            .clone()
            .unwrap_or_else(|| self.environment.login_url().to_owned())
    }

    /// Create a new [`TrustbadgeClient`] using this configuration.
    ///
    /// ```
    /// # use trustbadge::{ClientConfig, TrustbadgeClient};
    /// let client: TrustbadgeClient = ClientConfig::from_credentials("id", "secret").to_client();
    /// ```
    pub fn to_client(self) -> TrustbadgeClient {
        TrustbadgeClient::new(self)
    }
}
