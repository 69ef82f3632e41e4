//! HTTP datasources of the rating service.
//!
//! Each datasource performs exactly one request per call, reads the whole body and parses it. All
//! failures (network, non-success status, malformed body) are returned as [`Error`](crate::Error)
//! values; nothing is retried.
use async_trait::async_trait;

use crate::models::{AccessToken, ChannelInfo, Shop};
use crate::Result;

mod authentication;
mod shop_grade_detail;
mod trustbadge;

pub use authentication::HttpAuthenticationDatasource;
pub use shop_grade_detail::HttpShopGradeDetailDatasource;
pub use trustbadge::HttpTrustbadgeDatasource;

/// Fetches the aggregate rating of a sales channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopGradeDetailDatasource: Send + Sync {
    /// Fetch the aggregate rating of `channel_id`, authorized with `access_token`.
    async fn fetch_shop_grade_detail(
        &self,
        channel_id: &str,
        access_token: &str,
    ) -> Result<ChannelInfo>;
}

/// Fetches the trust mark document of a shop.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrustbadgeDatasource: Send + Sync {
    /// Fetch the trust mark document of the shop `ts_id`.
    async fn fetch_trustbadge(&self, ts_id: &str) -> Result<Shop>;
}

/// Obtains an access token for the channels API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationDatasource: Send + Sync {
    /// Request a new access token.
    async fn fetch_access_token(&self) -> Result<AccessToken>;
}

/// Join `base_url` and `path` into a request URL.
fn endpoint(base_url: &str, path: &str) -> Result<url::Url> {
    url::Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))
        .map_err(crate::Error::InvalidBaseUrl)
}
