use std::time::{Duration, Instant};

use cdg_api::{BillQuery, Client, ClientConfig, Error, JsonSource, Query, ResponseFormat};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&format!("{}/v3", server.uri()), "test-key").unwrap()
}

#[tokio::test]
async fn get_congress_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/congress/118"))
        .and(header("x-api-key", "test-key"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "congress": {"number": 118, "name": "118th Congress"},
            "request": {"contentType": "application/json", "format": "json"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.get("congress/118", &[]).await.unwrap();
    assert_eq!(body["congress"]["number"], 118);
    assert_eq!(body["congress"]["name"], "118th Congress");
}

#[tokio::test]
async fn get_sends_query_builder_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/bill/118/hr"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "250"))
        .and(query_param("fromDateTime", "2023-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bills": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = BillQuery::default()
        .with_congress(118)
        .with_bill_type(cdg_api::types::BillType::Hr)
        .with_offset(20)
        .with_limit(250)
        .with_from_date_time("2023-01-01T00:00:00Z".parse().unwrap());

    let client = client_for(&mock_server);
    let body = client
        .get(&query.endpoint(), &query.to_query_pairs())
        .await
        .unwrap();
    assert!(body["bills"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/congress/118"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("congress/118", &[]).await.unwrap_err();
    match err {
        Error::HttpStatus { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn get_forbidden_is_not_retryable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/bill"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": "API_KEY_INVALID", "message": "An invalid api_key was supplied."}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("bill", &[]).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn get_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/congress/118"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get("congress/118", &[]).await;
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn transport_failure_when_nothing_listens() {
    // Reserve a local port, then release it so connections are refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(
        ClientConfig::new("test-key")
            .with_root_url(&format!("http://{}/v3", addr))
            .with_api_version("")
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();
    let result = client.get("congress/118", &[]).await;
    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected transport error, got {:?}",
        result
    );
    assert!(result.unwrap_err().is_retryable());

    let summary = client.rate_limiter().tracker().summary();
    assert_eq!(summary.requests_made, 1);
    assert_eq!(summary.requests_failed, 1);
}

#[tokio::test]
async fn get_url_follows_next_link_without_duplicating_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/bill"))
        .and(query_param("offset", "250"))
        .and(query_param("limit", "250"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bills": [{"number": "1"}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let next = format!(
        "{}/v3/bill?offset=250&limit=250&format=json",
        mock_server.uri()
    );
    let body = JsonSource::get_url(&client, &next).await.unwrap();
    assert_eq!(body["bills"][0]["number"], "1");

    let received = mock_server.received_requests().await.unwrap();
    let formats = received[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "format")
        .count();
    assert_eq!(formats, 1);
}

#[tokio::test]
async fn get_url_rejects_foreign_host() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let result = client
        .get_url("https://evil.example.com/v3/bill?offset=250")
        .await;
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
    assert_eq!(client.rate_limiter().tracker().summary().requests_made, 0);
}

#[tokio::test]
async fn get_text_returns_raw_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/congress/118"))
        .and(query_param("format", "xml"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<api-root><congress/></api-root>"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .get_text("congress/118", &[], ResponseFormat::Xml)
        .await
        .unwrap();
    assert!(body.starts_with("<api-root>"));
}

#[tokio::test]
async fn tracker_counts_outcomes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/congress/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"congress": {"number": 1}})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/congress/2"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/congress/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.get("congress/1", &[]).await.unwrap();
    client.get("congress/2", &[]).await.unwrap_err();
    client.get("congress/3", &[]).await.unwrap_err();

    let summary = client.rate_limiter().tracker().summary();
    assert_eq!(summary.requests_made, 3);
    assert_eq!(summary.requests_succeeded, 1);
    assert_eq!(summary.requests_rate_limited, 1);
    assert_eq!(summary.requests_failed, 1);
}

fn paced_client(server: &MockServer, budget: u64, window: Duration) -> Client {
    Client::new(
        ClientConfig::new("test-key")
            .with_root_url(&format!("{}/v3", server.uri()))
            .with_api_version("")
            .with_rate_limit(budget, window),
    )
    .unwrap()
}

#[tokio::test]
async fn every_request_kind_shares_one_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/congress"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"congresses": []})))
        .expect(4)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/congress"))
        .and(query_param("format", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<api-root/>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = paced_client(&mock_server, 2, Duration::from_millis(300));
    let next = format!("{}/v3/congress?offset=0&format=json", mock_server.uri());

    let start = Instant::now();
    client.get("congress", &[]).await.unwrap();
    client.get_url(&next).await.unwrap();
    assert_eq!(client.rate_limiter().remaining_budget(), Some(0));
    client
        .get_text("congress", &[], ResponseFormat::Xml)
        .await
        .unwrap();
    client.get("congress", &[]).await.unwrap();
    client.get_url(&next).await.unwrap();

    // 2 + 2 + 1 across three windows.
    assert!(start.elapsed() >= Duration::from_millis(600));
    assert_eq!(client.rate_limiter().tracker().summary().requests_succeeded, 5);
}

#[tokio::test]
async fn throttled_responses_still_spend_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/bill"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/congress/118"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"congress": {"number": 118}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = paced_client(&mock_server, 3, Duration::from_secs(60));

    let err = client.get("bill", &[]).await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert!(err.is_retryable());
    assert_eq!(client.rate_limiter().remaining_budget(), Some(2));

    client.get("congress/118", &[]).await.unwrap();
    assert_eq!(client.rate_limiter().remaining_budget(), Some(1));

    let summary = client.rate_limiter().tracker().summary();
    assert_eq!(summary.requests_made, 2);
    assert_eq!(summary.requests_rate_limited, 1);
    assert_eq!(summary.requests_succeeded, 1);
    assert_eq!(summary.requests_failed, 0);
}
