//! Integration tests for the Nayi Raah site.
//!
//! These tests run the real router on a local listener and stub the external
//! spreadsheet endpoint with wiremock, verifying the page rendering and the
//! consultation-form forwarding end to end.

use proptest::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nayi_raah::config::Config;
use nayi_raah::content::STEPS;
use nayi_raah::filter::filter_steps;
use nayi_raah::server::{router, AppState};

// ==================== Test Helpers ====================

/// Create a test config pointing the consultation forwarder at `sheets_url`
fn create_test_config(sheets_url: &str) -> Config {
    Config {
        sheets_script_url: sheets_url.to_string(),
        port: 0,
    }
}

/// Serve the app on an ephemeral local port and return its base URL
async fn spawn_app(config: Config) -> String {
    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    format!("http://{}", addr)
}

/// The five consultation form fields plus routing params, as a browser posts them
fn consult_form_body(lang: &str) -> Vec<(&'static str, String)> {
    vec![
        ("lang", lang.to_string()),
        ("q", String::new()),
        ("name", "Asha Sharma".to_string()),
        ("age", "42".to_string()),
        ("gender", "female".to_string()),
        ("phone", "+91 98765 43210".to_string()),
        ("email", "asha@example.com".to_string()),
    ]
}

// ==================== Page Rendering Tests ====================

#[tokio::test]
async fn test_index_renders_full_checklist() {
    let base = spawn_app(create_test_config("http://127.0.0.1:1/unused")).await;

    let body = reqwest::get(format!("{}/", base))
        .await
        .expect("GET /")
        .text()
        .await
        .expect("body");

    assert_eq!(body.matches("<details class=\"step\"").count(), 10);
    assert!(body.contains("Step-by-step Checklist"));
    assert!(body.contains("Resources &amp; Helplines (Haryana)"));
    assert!(body.contains("Frequently Asked Questions"));
}

#[tokio::test]
async fn test_index_filters_and_localizes() {
    let base = spawn_app(create_test_config("http://127.0.0.1:1/unused")).await;

    let body = reqwest::get(format!("{}/?lang=hi&q=EPF", base))
        .await
        .expect("GET /?lang=hi&q=EPF")
        .text()
        .await
        .expect("body");

    // Two matching steps, shown with their Hindi titles.
    assert_eq!(body.matches("<details class=\"step\"").count(), 2);
    assert!(body.contains("महत्वपूर्ण संस्थाओं को सूचित करें"));
    assert!(body.contains("बीमा व पीएफ दावा करें"));
    assert!(body.contains("चरण-दर-चरण चेकलिस्ट"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_app(create_test_config("http://127.0.0.1:1/unused")).await;

    let response = reqwest::get(format!("{}/health", base)).await.expect("GET /health");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.expect("body"), "OK");
}

// ==================== Consultation Forwarding Tests ====================

#[tokio::test]
async fn test_consult_submission_posts_exactly_once() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = spawn_app(create_test_config(&mock_server.uri())).await;
    let client = reqwest::Client::new();

    let body = client
        .post(format!("{}/consult", base))
        .form(&consult_form_body("en"))
        .send()
        .await
        .expect("POST /consult")
        .text()
        .await
        .expect("body");

    // Success notice shown, form cleared, modal closed.
    assert!(body.contains("Thanks! We’ll reach out soon."));
    assert!(!body.contains("Asha Sharma"));
    assert!(!body.contains("id=\"consult-submit\""));

    // Exactly one JSON body with the five fields plus a non-empty ts.
    let requests = mock_server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    let json: serde_json::Value = requests[0].body_json().expect("json body");
    assert_eq!(json["name"], "Asha Sharma");
    assert_eq!(json["age"], "42");
    assert_eq!(json["gender"], "female");
    assert_eq!(json["phone"], "+91 98765 43210");
    assert_eq!(json["email"], "asha@example.com");
    let ts = json["ts"].as_str().expect("ts string");
    assert!(!ts.is_empty());
    assert!(ts.ends_with('Z'));
}

#[tokio::test]
async fn test_consult_submission_ignores_endpoint_status() {
    // The endpoint's reply is opaque; even a 500 counts as submitted.
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = spawn_app(create_test_config(&mock_server.uri())).await;
    let client = reqwest::Client::new();

    let body = client
        .post(format!("{}/consult", base))
        .form(&consult_form_body("en"))
        .send()
        .await
        .expect("POST /consult")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Thanks! We’ll reach out soon."));
}

#[tokio::test]
async fn test_consult_transport_failure_preserves_fields() {
    // Nothing listens on port 1: the forward fails at the transport level.
    let base = spawn_app(create_test_config("http://127.0.0.1:1/exec")).await;
    let client = reqwest::Client::new();

    let body = client
        .post(format!("{}/consult", base))
        .form(&consult_form_body("en"))
        .send()
        .await
        .expect("POST /consult")
        .text()
        .await
        .expect("body");

    // Generic retry notice, with everything the user typed still in place.
    assert!(body.contains("Submitted. If there’s an issue, please try again."));
    assert!(body.contains("value=\"Asha Sharma\""));
    assert!(body.contains("value=\"asha@example.com\""));
    assert!(body.contains("id=\"consult-submit\""));
}

#[tokio::test]
async fn test_consult_acknowledgment_is_localized() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let base = spawn_app(create_test_config(&mock_server.uri())).await;
    let client = reqwest::Client::new();

    let body = client
        .post(format!("{}/consult", base))
        .form(&consult_form_body("hi"))
        .send()
        .await
        .expect("POST /consult")
        .text()
        .await
        .expect("body");

    assert!(body.contains("धन्यवाद! हम शीघ्र आपसे संपर्क करेंगे।"));
}

// ==================== Filter Property Tests ====================

proptest! {
    #[test]
    fn prop_whitespace_query_returns_everything(ws in "[ \t\n]{0,8}") {
        let result = filter_steps(&STEPS, &ws);
        prop_assert_eq!(result.len(), STEPS.len());
    }

    #[test]
    fn prop_filter_is_idempotent(query in "[ -~]{0,16}") {
        let once: Vec<_> = filter_steps(&STEPS, &query).into_iter().copied().collect();
        let twice = filter_steps(&once, &query);
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn prop_returned_steps_really_match(query in "[a-zA-Z]{1,8}") {
        let lowered = query.to_lowercase();
        for step in filter_steps(&STEPS, &query) {
            let hit = step.title.en.to_lowercase().contains(&lowered)
                || step.title.hi.to_lowercase().contains(&lowered)
                || step.points.en.iter().any(|p| p.to_lowercase().contains(&lowered))
                || step.points.hi.iter().any(|p| p.to_lowercase().contains(&lowered));
            prop_assert!(hit, "step '{}' should not match '{}'", step.title.en, query);
        }
    }

    #[test]
    fn prop_order_is_preserved(query in "[a-zA-Z]{0,8}") {
        let result = filter_steps(&STEPS, &query);
        let positions: Vec<usize> = result
            .iter()
            .map(|s| STEPS.iter().position(|orig| std::ptr::eq(orig, *s)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
