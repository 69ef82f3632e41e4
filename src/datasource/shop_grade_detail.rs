use async_trait::async_trait;

use super::{endpoint, ShopGradeDetailDatasource};
use crate::models::ChannelInfo;
use crate::{Error, Result};

const AGGREGATE_RATING_ENDPOINT: &str = "/service-reviews/aggregate-rating";

/// Reads channel aggregate ratings from the channels API.
pub struct HttpShopGradeDetailDatasource {
    // Client holds a connection pool internally, so it is shared between datasources.
    client: reqwest::Client,
    base_url: String,
}

impl HttpShopGradeDetailDatasource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        HttpShopGradeDetailDatasource {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ShopGradeDetailDatasource for HttpShopGradeDetailDatasource {
    async fn fetch_shop_grade_detail(
        &self,
        channel_id: &str,
        access_token: &str,
    ) -> Result<ChannelInfo> {
        let url = endpoint(
            &self.base_url,
            &format!("/{channel_id}{AGGREGATE_RATING_ENDPOINT}"),
        )?;

        log::debug!(target: "trustbadge", channel_id; "fetching channel aggregate rating");
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let response = response.error_for_status().map_err(|err| {
            log::warn!(target: "trustbadge", channel_id;
                "received non-success response while fetching aggregate rating: {:?}", err.status());
            Error::from(err)
        })?;

        // The response is consumed here, which releases the connection on every path.
        let body = response.text().await?;
        let info = ChannelInfo::from_json(&body).inspect_err(|err| {
            log::warn!(target: "trustbadge", channel_id;
                "failed to parse aggregate rating body: {}", err);
        })?;

        log::debug!(target: "trustbadge", channel_id; "successfully fetched channel aggregate rating");
        Ok(info)
    }
}
