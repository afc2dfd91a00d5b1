//! Integration tests for the HTTP fetcher against a local mock server

use kodegen_tools_singlefile::{FetchConfig, FetchError, HttpFetcher, ResourceFetcher};
use mockito::Matcher;

/// Fetch config with millisecond backoffs so retry tests stay fast
fn fast_config() -> FetchConfig {
    FetchConfig {
        timeout_secs: 5,
        max_attempts: 3,
        retry_backoff_ms: 1,
        max_retry_backoff_ms: 2,
        ..FetchConfig::default()
    }
}

#[tokio::test]
async fn test_fetch_text_returns_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/d3.v7.min.js")
        .with_status(200)
        .with_header("content-type", "text/javascript")
        .with_body("var d3 = {version: \"7\"};")
        .expect(1)
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&fast_config()).expect("client builds");
    let text = fetcher
        .fetch_text(&format!("{}/d3.v7.min.js", server.url()))
        .await
        .expect("200 response");

    assert_eq!(text, "var d3 = {version: \"7\"};");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_bytes_preserves_binary_body_and_sends_font_accept() {
    let body: Vec<u8> = (0..=255u8).collect();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/s/inter/a.woff2")
        .match_header("accept", Matcher::Regex("font/woff2".into()))
        .with_status(200)
        .with_body(&body)
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&fast_config()).expect("client builds");
    let bytes = fetcher
        .fetch_bytes(&format!("{}/s/inter/a.woff2", server.url()))
        .await
        .expect("200 response");

    assert_eq!(bytes, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_fails_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/missing.css")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let url = format!("{}/missing.css", server.url());
    let fetcher = HttpFetcher::new(&fast_config()).expect("client builds");
    let err = fetcher.fetch_text(&url).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), format!("GET {url} -> 404"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_200_success_status_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/empty")
        .with_status(204)
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&fast_config()).expect("client builds");
    let err = fetcher
        .fetch_bytes(&format!("{}/empty", server.url()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_server_errors_are_retried_up_to_max_attempts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/flaky.woff2")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&fast_config()).expect("client builds");
    let err = fetcher
        .fetch_bytes(&format!("{}/flaky.woff2", server.url()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_oversized_response_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/huge.js")
        .with_status(200)
        .with_body("x".repeat(64))
        .create_async()
        .await;

    let config = FetchConfig {
        max_response_bytes: 16,
        ..fast_config()
    };
    let fetcher = HttpFetcher::new(&config).expect("client builds");
    let err = fetcher
        .fetch_text(&format!("{}/huge.js", server.url()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, FetchError::TooLarge { limit: 16, .. }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_invalid_utf8_text_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/latin1.css")
        .with_status(200)
        .with_body([0x66u8, 0x6f, 0xff, 0xfe])
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&fast_config()).expect("client builds");
    let err = fetcher
        .fetch_text(&format!("{}/latin1.css", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::InvalidUtf8 { .. }));
}

#[tokio::test]
async fn test_connection_failure_reports_url() {
    let config = FetchConfig {
        max_attempts: 1,
        ..fast_config()
    };
    let fetcher = HttpFetcher::new(&config).expect("client builds");
    let url = "http://127.0.0.1:1/d3.v7.min.js";

    let err = fetcher.fetch_text(url).await.unwrap_err();

    assert!(
        matches!(err, FetchError::Transport { .. } | FetchError::Timeout { .. }),
        "unexpected error: {err}"
    );
    assert_eq!(err.url(), url);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let mut server = mockito::Server::new_async().await;
    let redirect = server
        .mock("GET", "/d3.v7.min.js")
        .with_status(302)
        .with_header("location", "/moved.js")
        .expect(1)
        .create_async()
        .await;
    let target = server
        .mock("GET", "/moved.js")
        .with_status(200)
        .with_body("moved")
        .expect(0)
        .create_async()
        .await;

    let url = format!("{}/d3.v7.min.js", server.url());
    let fetcher = HttpFetcher::new(&fast_config()).expect("client builds");
    let err = fetcher.fetch_text(&url).await.unwrap_err();

    assert_eq!(err.status(), Some(302));
    assert_eq!(err.to_string(), format!("GET {url} -> 302"));
    redirect.assert_async().await;
    target.assert_async().await;
}

#[tokio::test]
async fn test_slow_body_times_out() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/slow.woff2")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(std::time::Duration::from_secs(3));
            w.write_all(b"late")
        })
        .create_async()
        .await;

    let config = FetchConfig {
        timeout_secs: 1,
        max_attempts: 1,
        ..fast_config()
    };
    let url = format!("{}/slow.woff2", server.url());
    let fetcher = HttpFetcher::new(&config).expect("client builds");
    let err = fetcher.fetch_bytes(&url).await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }), "unexpected error: {err}");
    assert_eq!(err.url(), url);
}
