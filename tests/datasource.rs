mod common;

use common::{MockBackend, MockResponse, TOKEN_JSON, TRUSTMARK_JSON};
use trustbadge::datasource::{
    AuthenticationDatasource, HttpAuthenticationDatasource, HttpShopGradeDetailDatasource,
    HttpTrustbadgeDatasource, ShopGradeDetailDatasource, TrustbadgeDatasource,
};
use trustbadge::{ChannelInfo, Error, TrustMarkStatus};

const AGGREGATE_RATING_PATH: &str = "/channels/abc123/service-reviews/aggregate-rating";

fn shop_grade_detail(backend: &MockBackend) -> HttpShopGradeDetailDatasource {
    HttpShopGradeDetailDatasource::new(
        reqwest::Client::new(),
        format!("{}/channels", backend.base_url()),
    )
}

#[tokio::test]
async fn fetches_aggregate_rating_with_bearer_token() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            AGGREGATE_RATING_PATH,
            MockResponse::json(r#"{"rating":4.5,"count":120}"#),
        )
        .await;

    let info = shop_grade_detail(&backend)
        .fetch_shop_grade_detail("abc123", "tok")
        .await
        .unwrap();

    assert_eq!(
        info,
        ChannelInfo {
            rating: 4.5,
            count: 120,
            distribution: None,
        }
    );

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, AGGREGATE_RATING_PATH);
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok"));
}

#[tokio::test]
async fn server_error_is_a_failure_with_status() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(AGGREGATE_RATING_PATH, MockResponse::status(500))
        .await;

    let err = shop_grade_detail(&backend)
        .fetch_shop_grade_detail("abc123", "tok")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn malformed_body_is_a_parse_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            AGGREGATE_RATING_PATH,
            MockResponse::json(r#"{"rating":"excellent"}"#),
        )
        .await;

    let err = shop_grade_detail(&backend)
        .fetch_shop_grade_detail("abc123", "tok")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let datasource =
        HttpShopGradeDetailDatasource::new(reqwest::Client::new(), "http://127.0.0.1:1/channels");

    let err = datasource
        .fetch_shop_grade_detail("abc123", "tok")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn invalid_base_url_is_reported() {
    let datasource = HttpShopGradeDetailDatasource::new(reqwest::Client::new(), "not a url");

    assert!(matches!(
        datasource.fetch_shop_grade_detail("abc123", "tok").await,
        Err(Error::InvalidBaseUrl(_))
    ));
}

#[tokio::test]
async fn requests_access_token_with_client_credentials() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/oauth/token", MockResponse::json(TOKEN_JSON))
        .await;

    let datasource = HttpAuthenticationDatasource::new(
        reqwest::Client::new(),
        format!("{}/oauth/token", backend.base_url()),
        "client-id",
        "client-secret",
    );

    let token = datasource.fetch_access_token().await.unwrap();
    assert_eq!(token.access_token, "tok");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    let body = requests[0].body_str();
    assert!(body.contains("grant_type=client_credentials"), "{body}");
    assert!(body.contains("client_id=client-id"), "{body}");
    assert!(body.contains("client_secret=client-secret"), "{body}");
}

#[tokio::test]
async fn login_url_is_used_verbatim() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/oauth/token/", MockResponse::json(TOKEN_JSON))
        .await;

    let datasource = HttpAuthenticationDatasource::new(
        reqwest::Client::new(),
        format!("{}/oauth/token/", backend.base_url()),
        "client-id",
        "client-secret",
    );

    let token = datasource.fetch_access_token().await.unwrap();
    assert_eq!(token.access_token, "tok");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/oauth/token/");
}

#[tokio::test]
async fn invalid_login_url_is_reported() {
    let datasource = HttpAuthenticationDatasource::new(
        reqwest::Client::new(),
        "oauth/token",
        "client-id",
        "client-secret",
    );

    assert!(matches!(
        datasource.fetch_access_token().await,
        Err(Error::InvalidBaseUrl(_))
    ));
}

#[tokio::test]
async fn rejected_credentials_are_a_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/oauth/token", MockResponse::status(401))
        .await;

    let datasource = HttpAuthenticationDatasource::new(
        reqwest::Client::new(),
        format!("{}/oauth/token", backend.base_url()),
        "client-id",
        "wrong-secret",
    );

    let err = datasource.fetch_access_token().await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn fetches_trust_mark() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/shops/X330A2E7D449E31E467D2F53A55DDD070/mobiles/v1/sdks/android/trustmarks.json",
            MockResponse::json(TRUSTMARK_JSON),
        )
        .await;

    let datasource = HttpTrustbadgeDatasource::new(
        reqwest::Client::new(),
        format!("{}/shops", backend.base_url()),
    );

    let shop = datasource
        .fetch_trustbadge("X330A2E7D449E31E467D2F53A55DDD070")
        .await
        .unwrap();

    assert_eq!(shop.name, "Example Shop");
    assert_eq!(shop.trust_mark.status, TrustMarkStatus::Valid);
    assert_eq!(shop.trust_mark.valid_to, None);
    assert_eq!(
        shop.guarantee.unwrap().max_protection_amount,
        "2500.00".to_owned()
    );

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn unknown_shop_is_a_failure() {
    let backend = MockBackend::start().await;

    let datasource = HttpTrustbadgeDatasource::new(
        reqwest::Client::new(),
        format!("{}/shops", backend.base_url()),
    );

    let err = datasource.fetch_trustbadge("X404").await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}
