//! Domain models parsed from the rating service responses.
use serde::{Deserialize, Serialize};

use crate::Result;

/// Aggregate rating of a sales channel.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    /// Average rating, usually in `1.0..=5.0`.
    pub rating: f64,
    /// Number of reviews the rating is computed from.
    pub count: u64,
    /// Review counts per star value, when the service provides them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<RatingDistribution>,
}

impl ChannelInfo {
    /// Parse a channel aggregate-rating response body.
    pub fn from_json(body: &str) -> Result<ChannelInfo> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Number of reviews per star value.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RatingDistribution {
    #[serde(default)]
    pub one_star: u64,
    #[serde(default)]
    pub two_stars: u64,
    #[serde(default)]
    pub three_stars: u64,
    #[serde(default)]
    pub four_stars: u64,
    #[serde(default)]
    pub five_stars: u64,
}

/// Composite model displayed by the trust badge.
///
/// Built from the shop's trust mark and the aggregate rating of its channel. It is always replaced
/// as a whole.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TrustbadgeData {
    /// Shop identity and certification.
    pub shop: Shop,
    /// Aggregate rating of the shop's sales channel.
    pub grade: ChannelInfo,
}

impl TrustbadgeData {
    /// Whether the shop currently holds a valid trust mark.
    pub fn is_certified(&self) -> bool {
        self.shop.is_certified()
    }

    /// Purchase-protection terms of the shop, if it offers any.
    pub fn guarantee(&self) -> Option<&Guarantee> {
        self.shop.guarantee.as_ref()
    }
}

/// Shop as described by its trust mark document.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Trusted Shops identifier (TS-ID) of the shop.
    pub ts_id: String,
    pub url: String,
    pub name: String,
    /// Two-letter language code, e.g. `de`.
    #[serde(rename = "languageISO2", default)]
    pub language_iso2: Option<String>,
    /// Three-letter code of the shop's target market, e.g. `DEU`.
    #[serde(rename = "targetMarketISO3", default)]
    pub target_market_iso3: Option<String>,
    pub trust_mark: TrustMark,
    #[serde(default)]
    pub guarantee: Option<Guarantee>,
}

impl Shop {
    /// A shop is certified while its trust mark is valid.
    pub fn is_certified(&self) -> bool {
        self.trust_mark.status == TrustMarkStatus::Valid
    }
}

/// Certification state of a shop.
///
/// Validity bounds are kept as the timestamps the service sends.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TrustMark {
    pub status: TrustMarkStatus,
    #[serde(default)]
    pub valid_from: Option<String>,
    #[serde(default)]
    pub valid_to: Option<String>,
}

/// Status of a [`TrustMark`]. Only [`TrustMarkStatus::Valid`] counts as certified.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustMarkStatus {
    Valid,
    Invalid,
    Expired,
    /// Any status this version of the client does not know about.
    #[serde(other)]
    Unknown,
}

/// Purchase-protection terms of a shop.
///
/// Amounts and durations are kept as the service sends them (decimal strings).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Guarantee {
    /// ISO 4217 currency of the protection amount, e.g. `EUR`.
    pub main_protection_currency: String,
    /// Maximum protected amount per order.
    pub max_protection_amount: String,
    /// Protection period in days.
    pub max_protection_duration: String,
}

/// Envelope of the trust mark document served by the trustbadge CDN.
#[derive(Debug, Deserialize)]
pub(crate) struct TrustMarkEnvelope {
    response: TrustMarkResponse,
}

#[derive(Debug, Deserialize)]
struct TrustMarkResponse {
    data: TrustMarkData,
}

#[derive(Debug, Deserialize)]
struct TrustMarkData {
    shop: Shop,
}

impl TrustMarkEnvelope {
    pub(crate) fn from_json(body: &str) -> Result<Shop> {
        let envelope: TrustMarkEnvelope = serde_json::from_str(body)?;
        Ok(envelope.response.data.shop)
    }
}

/// OAuth2 client-credentials token response.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Bearer token for the channels API.
    pub access_token: String,
    /// Lifetime of the token in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}
