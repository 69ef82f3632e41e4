use async_trait::async_trait;

use super::{endpoint, TrustbadgeDatasource};
use crate::models::{Shop, TrustMarkEnvelope};
use crate::{Error, Result};

const TRUSTMARK_ENDPOINT: &str = "/mobiles/v1/sdks/android/trustmarks.json";

/// Reads shop trust mark documents from the trustbadge CDN. The CDN is public, no token needed.
pub struct HttpTrustbadgeDatasource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTrustbadgeDatasource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        HttpTrustbadgeDatasource {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TrustbadgeDatasource for HttpTrustbadgeDatasource {
    async fn fetch_trustbadge(&self, ts_id: &str) -> Result<Shop> {
        let url = endpoint(&self.base_url, &format!("/{ts_id}{TRUSTMARK_ENDPOINT}"))?;

        log::debug!(target: "trustbadge", ts_id; "fetching trust mark");
        let response = self.client.get(url).send().await?;

        let response = response.error_for_status().map_err(|err| {
            log::warn!(target: "trustbadge", ts_id;
                "received non-success response while fetching trust mark: {:?}", err.status());
            Error::from(err)
        })?;

        let body = response.text().await?;
        let shop = TrustMarkEnvelope::from_json(&body).inspect_err(|err| {
            log::warn!(target: "trustbadge", ts_id; "failed to parse trust mark body: {}", err);
        })?;

        log::debug!(target: "trustbadge", ts_id; "successfully fetched trust mark");
        Ok(shop)
    }
}
