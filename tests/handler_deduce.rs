mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_deduce_greenhouse() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .get("/api/deduce")
        .add_query_param("url", common::GREENHOUSE_URL)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "foundOn": "corporate-site",
        "provider": "greenhouse",
        "providerTenant": "acme",
        "externalId": "123456",
        "hiringCompanyName": "acme",
        "source": "corporate-site",
        "company": "acme"
    }));
}

#[tokio::test]
async fn test_deduce_unparseable_is_empty_object() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .get("/api/deduce")
        .add_query_param("url", "not a url")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({}));
}

#[tokio::test]
async fn test_deduce_referral_alias() {
    let server = common::test_server(common::create_test_state());

    let json = server
        .get("/api/deduce")
        .add_query_param("url", "https://example.com/job?utm_source=LinkedIn")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["foundOn"], "linkedin");
    assert_eq!(json["source"], "linkedin");
    assert_eq!(json["provider"], "example");
}

#[tokio::test]
async fn test_deduce_empty_url_rejected() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .get("/api/deduce")
        .add_query_param("url", "")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_deduce_is_memoized_consistently() {
    let server = common::test_server(common::create_cached_state(8, 10));

    let first = server
        .get("/api/deduce")
        .add_query_param("url", common::WORKDAY_URL)
        .await
        .json::<serde_json::Value>();
    let second = server
        .get("/api/deduce")
        .add_query_param("url", common::WORKDAY_URL)
        .await
        .json::<serde_json::Value>();

    assert_eq!(first, second);
    assert_eq!(first["provider"], "workday");
    assert_eq!(first["providerTenant"], "azenta");
    assert_eq!(first["externalId"], "_R20250574");
}

#[tokio::test]
async fn test_batch_mixed() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/api/deduce")
        .json(&json!({
            "urls": [common::GREENHOUSE_URL, "not a url", common::SIEMENS_URL]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"], json!({ "total": 3, "recognized": 2, "empty": 1 }));

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["url"], common::GREENHOUSE_URL);
    assert_eq!(items[0]["fields"]["provider"], "greenhouse");
    assert_eq!(items[1]["fields"], json!({}));
    assert_eq!(items[2]["fields"]["provider"], "siemens");
    assert_eq!(items[2]["fields"]["hiringCompanyName"], "siemens");
}

#[tokio::test]
async fn test_batch_empty_list_rejected() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/api/deduce")
        .json(&json!({ "urls": [] }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_over_limit_rejected() {
    let server = common::test_server(common::create_cached_state(8, 2));

    let response = server
        .post("/api/deduce")
        .json(&json!({ "urls": ["https://a.io/1", "https://a.io/2", "https://a.io/3"] }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["max"], 2);
    assert_eq!(json["error"]["details"]["got"], 3);
}

#[tokio::test]
async fn test_batch_rejects_oversized_url_without_caching() {
    let state = common::create_cached_state(16, 10);
    let server = common::test_server(state.clone());

    let oversized = format!("https://example.com/{}", "a".repeat(500_000));
    let response = server
        .post("/api/deduce")
        .json(&json!({ "urls": [common::GREENHOUSE_URL, oversized] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["details"]["fields"], json!(["urls"]));

    assert_eq!(state.deduction_service.cache().len().await, 0);
}
