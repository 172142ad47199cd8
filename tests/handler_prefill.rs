mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_prefill_blank_form() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/api/prefill")
        .json(&json!({ "url": common::GREENHOUSE_URL }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], common::GREENHOUSE_URL);
    assert_eq!(json["deduced"]["provider"], "greenhouse");
    assert_eq!(
        json["form"],
        json!({
            "foundOn": "corporate-site",
            "provider": "greenhouse",
            "providerTenant": "acme",
            "externalId": "123456",
            "hiringCompanyName": "acme"
        })
    );
    assert_eq!(
        json["filled"],
        json!(["foundOn", "externalId", "hiringCompanyName", "provider", "providerTenant"])
    );
}

#[tokio::test]
async fn test_prefill_keeps_user_values_and_sanitizes() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/api/prefill")
        .json(&json!({
            "url": "  https://example.com/job?utm_source=LinkedIn?x=1#top ",
            "form": { "foundOn": "referral", "hiringCompanyName": "  " }
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com/job?utm_source=LinkedIn&x=1");
    assert_eq!(json["deduced"]["foundOn"], "linkedin");
    assert_eq!(json["form"]["foundOn"], "referral");
    assert_eq!(json["form"]["hiringCompanyName"], "example");
}

#[tokio::test]
async fn test_prefill_disable_ats() {
    let server = common::test_server(common::create_test_state());

    let json = server
        .post("/api/prefill")
        .json(&json!({ "url": common::WORKDAY_URL, "disableAts": true }))
        .await
        .json::<serde_json::Value>();

    let form = &json["form"];
    assert!(form.get("provider").is_none());
    assert!(form.get("providerTenant").is_none());
    assert!(form.get("externalId").is_none());
    assert_eq!(form["hiringCompanyName"], "azenta");
}

#[tokio::test]
async fn test_prefill_unusable_url() {
    let server = common::test_server(common::create_test_state());

    let json = server
        .post("/api/prefill")
        .json(&json!({ "url": "not a url", "form": { "title": "Engineer" } }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["deduced"], json!({}));
    assert_eq!(json["form"], json!({ "title": "Engineer" }));
    assert_eq!(json["filled"], json!([]));
}

#[tokio::test]
async fn test_prefill_missing_url_rejected() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/api/prefill")
        .json(&json!({ "url": "" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
