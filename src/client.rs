use std::sync::Arc;

use tokio::runtime::Handle;

use crate::datasource::{
    HttpAuthenticationDatasource, HttpShopGradeDetailDatasource, HttpTrustbadgeDatasource,
};
use crate::models::ChannelInfo;
use crate::repository::{DefaultChannelInfoRepository, DefaultTrustbadgeRepository};
use crate::use_case::{
    ChannelInfoDataUseCase, GetChannelInfoDataUseCase, GetGuaranteeUseCase,
    GetTrustbadgeDataUseCase, GuaranteeUseCase, TrustbadgeDataUseCase,
};
use crate::{ClientConfig, Result, TrustbadgeViewModel};

/// A client for the trustbadge rating service.
///
/// The client wires datasources, repositories and use cases from a [`ClientConfig`]. All of them
/// share one HTTP connection pool.
///
/// # Examples
/// ```
/// # use trustbadge::{TrustbadgeClient, ClientConfig};
/// TrustbadgeClient::new(ClientConfig::from_credentials("client-id", "client-secret"));
/// ```
pub struct TrustbadgeClient {
    get_channel_info: Arc<dyn ChannelInfoDataUseCase>,
    get_trustbadge_data: Arc<dyn TrustbadgeDataUseCase>,
    get_guarantee: Arc<dyn GuaranteeUseCase>,
}

impl TrustbadgeClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::new();

        let authentication = Arc::new(HttpAuthenticationDatasource::new(
            http.clone(),
            config.resolved_login_url(),
            config.client_id.clone(),
            config.client_secret.clone(),
        ));
        let shop_grade_detail = Arc::new(HttpShopGradeDetailDatasource::new(
            http.clone(),
            config.resolved_channels_base_url(),
        ));
        let trustbadge = Arc::new(HttpTrustbadgeDatasource::new(
            http,
            config.resolved_trustbadge_base_url(),
        ));

        let channel_info_repository = Arc::new(DefaultChannelInfoRepository::new(
            authentication,
            shop_grade_detail,
        ));
        let trustbadge_repository = Arc::new(DefaultTrustbadgeRepository::new(trustbadge));

        TrustbadgeClient {
            get_channel_info: Arc::new(GetChannelInfoDataUseCase::new(
                channel_info_repository.clone(),
            )),
            get_trustbadge_data: Arc::new(GetTrustbadgeDataUseCase::new(
                trustbadge_repository.clone(),
                channel_info_repository,
            )),
            get_guarantee: Arc::new(GetGuaranteeUseCase::new(trustbadge_repository)),
        }
    }

    /// Fetch the aggregate rating of a sales channel.
    pub async fn fetch_channel_info(&self, channel_id: &str) -> Result<ChannelInfo> {
        self.get_channel_info.invoke(channel_id).await
    }

    /// Create a view model whose fetches run on `runtime`.
    ///
    /// ```no_run
    /// # use trustbadge::ClientConfig;
    /// # async fn example() {
    /// let client = ClientConfig::from_credentials("client-id", "client-secret").to_client();
    /// let view_model = client.view_model(tokio::runtime::Handle::current());
    /// let mut badge = view_model.subscribe_trustbadge_data();
    /// view_model.fetch_trustbadge_data("X330A2E7D449E31E467D2F53A55DDD070", "chl-xyz");
    /// badge.changed().await.unwrap();
    /// # }
    /// ```
    pub fn view_model(&self, runtime: Handle) -> TrustbadgeViewModel {
        TrustbadgeViewModel::new(
            runtime,
            self.get_trustbadge_data.clone(),
            self.get_guarantee.clone(),
        )
    }
}
