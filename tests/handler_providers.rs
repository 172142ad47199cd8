mod common;

#[tokio::test]
async fn test_providers_in_precedence_order() {
    let server = common::test_server(common::create_test_state());

    let response = server.get("/api/providers").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let providers = json.as_array().unwrap();
    assert_eq!(providers.len(), 33);
    assert_eq!(providers[0]["name"], "weworkremotely");
    assert_eq!(providers[0]["kind"], "board");
    assert_eq!(providers[32]["name"], "pracuj");
}

#[tokio::test]
async fn test_provider_matchers_described() {
    let server = common::test_server(common::create_test_state());

    let json = server.get("/api/providers").await.json::<serde_json::Value>();
    let providers = json.as_array().unwrap();

    let find = |name: &str| {
        providers
            .iter()
            .find(|p| p["name"] == name)
            .unwrap()
            .clone()
    };

    let workday = find("workday");
    assert_eq!(workday["kind"], "ats");
    assert_eq!(workday["domains"], serde_json::json!([r"/\.myworkdayjobs\.com$/"]));

    let smartrecruiters = find("smartrecruiters");
    assert_eq!(
        smartrecruiters["domains"],
        serde_json::json!(["=careers.smartrecruiters.com", "=jobs.smartrecruiters.com"])
    );

    let wellfound = find("wellfound");
    assert_eq!(wellfound["kind"], "board");
    assert_eq!(
        wellfound["domains"],
        serde_json::json!(["wellfound.com", "angel.co"])
    );
}
