//! Use cases consumed by [`TrustbadgeViewModel`](crate::TrustbadgeViewModel) and
//! [`TrustbadgeClient`](crate::TrustbadgeClient).
//!
//! Use cases only delegate to repositories and assemble their results; they never retry or cache.
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{ChannelInfo, Guarantee, TrustbadgeData};
use crate::repository::{ChannelInfoRepository, TrustbadgeRepository};
use crate::{Error, Result};

/// Aggregate rating of a sales channel.
#[async_trait]
pub trait ChannelInfoDataUseCase: Send + Sync {
    async fn invoke(&self, channel_id: &str) -> Result<ChannelInfo>;
}

/// Everything the trust badge displays for a shop and its channel.
#[async_trait]
pub trait TrustbadgeDataUseCase: Send + Sync {
    async fn invoke(&self, ts_id: &str, channel_id: &str) -> Result<TrustbadgeData>;
}

/// Purchase-protection guarantee of a shop.
#[async_trait]
pub trait GuaranteeUseCase: Send + Sync {
    async fn invoke(&self, ts_id: &str, channel_id: &str) -> Result<Guarantee>;
}

pub struct GetChannelInfoDataUseCase {
    channel_info_repository: Arc<dyn ChannelInfoRepository>,
}

impl GetChannelInfoDataUseCase {
    pub fn new(channel_info_repository: Arc<dyn ChannelInfoRepository>) -> Self {
        GetChannelInfoDataUseCase {
            channel_info_repository,
        }
    }
}

#[async_trait]
impl ChannelInfoDataUseCase for GetChannelInfoDataUseCase {
    async fn invoke(&self, channel_id: &str) -> Result<ChannelInfo> {
        self.channel_info_repository
            .fetch_channel_info(channel_id)
            .await
    }
}

/// Assembles [`TrustbadgeData`] from the shop's trust mark and its channel's grade.
///
/// Both requests must succeed; there is no partially filled result.
pub struct GetTrustbadgeDataUseCase {
    trustbadge_repository: Arc<dyn TrustbadgeRepository>,
    channel_info_repository: Arc<dyn ChannelInfoRepository>,
}

impl GetTrustbadgeDataUseCase {
    pub fn new(
        trustbadge_repository: Arc<dyn TrustbadgeRepository>,
        channel_info_repository: Arc<dyn ChannelInfoRepository>,
    ) -> Self {
        GetTrustbadgeDataUseCase {
            trustbadge_repository,
            channel_info_repository,
        }
    }
}

#[async_trait]
impl TrustbadgeDataUseCase for GetTrustbadgeDataUseCase {
    async fn invoke(&self, ts_id: &str, channel_id: &str) -> Result<TrustbadgeData> {
        let shop = self.trustbadge_repository.fetch_trustbadge(ts_id).await?;
        let grade = self
            .channel_info_repository
            .fetch_channel_info(channel_id)
            .await?;
        Ok(TrustbadgeData { shop, grade })
    }
}

/// Projects the guarantee out of the shop's trust mark.
pub struct GetGuaranteeUseCase {
    trustbadge_repository: Arc<dyn TrustbadgeRepository>,
}

impl GetGuaranteeUseCase {
    pub fn new(trustbadge_repository: Arc<dyn TrustbadgeRepository>) -> Self {
        GetGuaranteeUseCase {
            trustbadge_repository,
        }
    }
}

#[async_trait]
impl GuaranteeUseCase for GetGuaranteeUseCase {
    // The guarantee belongs to the shop, so `channel_id` does not narrow the request.
    async fn invoke(&self, ts_id: &str, _channel_id: &str) -> Result<Guarantee> {
        let shop = self.trustbadge_repository.fetch_trustbadge(ts_id).await?;
        shop.guarantee.ok_or_else(|| Error::MissingGuarantee {
            ts_id: ts_id.to_owned(),
        })
    }
}
