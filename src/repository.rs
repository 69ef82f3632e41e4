//! Repositories wrap one or more datasources behind a single call.
use std::sync::Arc;

use async_trait::async_trait;

use crate::datasource::{AuthenticationDatasource, ShopGradeDetailDatasource, TrustbadgeDatasource};
use crate::models::{ChannelInfo, Shop};
use crate::Result;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelInfoRepository: Send + Sync {
    /// Fetch the aggregate rating of `channel_id`, authenticating as needed.
    async fn fetch_channel_info(&self, channel_id: &str) -> Result<ChannelInfo>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrustbadgeRepository: Send + Sync {
    /// Fetch the shop described by the trust mark of `ts_id`.
    async fn fetch_trustbadge(&self, ts_id: &str) -> Result<Shop>;
}

/// Fetches a fresh access token, then the channel's aggregate rating with it.
pub struct DefaultChannelInfoRepository {
    authentication: Arc<dyn AuthenticationDatasource>,
    shop_grade_detail: Arc<dyn ShopGradeDetailDatasource>,
}

impl DefaultChannelInfoRepository {
    pub fn new(
        authentication: Arc<dyn AuthenticationDatasource>,
        shop_grade_detail: Arc<dyn ShopGradeDetailDatasource>,
    ) -> Self {
        DefaultChannelInfoRepository {
            authentication,
            shop_grade_detail,
        }
    }
}

#[async_trait]
impl ChannelInfoRepository for DefaultChannelInfoRepository {
    async fn fetch_channel_info(&self, channel_id: &str) -> Result<ChannelInfo> {
        let token = self.authentication.fetch_access_token().await?;
        self.shop_grade_detail
            .fetch_shop_grade_detail(channel_id, &token.access_token)
            .await
    }
}

/// Reads shops straight from a [`TrustbadgeDatasource`].
pub struct DefaultTrustbadgeRepository {
    trustbadge: Arc<dyn TrustbadgeDatasource>,
}

impl DefaultTrustbadgeRepository {
    pub fn new(trustbadge: Arc<dyn TrustbadgeDatasource>) -> Self {
        DefaultTrustbadgeRepository { trustbadge }
    }
}

#[async_trait]
impl TrustbadgeRepository for DefaultTrustbadgeRepository {
    async fn fetch_trustbadge(&self, ts_id: &str) -> Result<Shop> {
        self.trustbadge.fetch_trustbadge(ts_id).await
    }
}
