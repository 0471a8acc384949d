//! Timeout-bounded JSON GET shared by the server's provider fetcher and the client.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::QuoteError;
use crate::result::Result;
use crate::scope::Scope;

/// Issue one GET to `url` under a child of `scope` bounded by `budget`, and
/// decode a `200 OK` body as `T`.
///
/// Any other status fails with `UnexpectedStatus`. The request is aborted as
/// soon as the child scope expires or is cancelled.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    scope: &Scope,
    url: &str,
    budget: Duration,
) -> Result<T> {
    let scope = scope.child(budget);
    scope
        .run(async {
            let response = client.get(url).send().await?;
            let status = response.status();
            if status != StatusCode::OK {
                return Err(QuoteError::UnexpectedStatus(status.as_u16()));
            }
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteResponse;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    async fn get(server: &MockServer, budget: Duration) -> Result<QuoteResponse> {
        let root = Scope::root();
        let url = format!("{}/cotacao", server.uri());
        get_json(&Client::new(), &root, &url, budget).await
    }

    #[tokio::test]
    async fn decodes_ok_body() {
        let server = mock(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.43"}"#)).await;
        let response = get(&server, Duration::from_secs(2)).await.unwrap();
        assert_eq!(response.bid.as_str(), "5.43");
    }

    #[tokio::test]
    async fn non_ok_status_is_reported_with_its_code() {
        let server = mock(ResponseTemplate::new(503)).await;
        let err = get(&server, Duration::from_secs(2)).await.unwrap_err();
        assert!(matches!(err, QuoteError::UnexpectedStatus(503)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = mock(ResponseTemplate::new(200).set_body_string("<html>")).await;
        let err = get(&server, Duration::from_secs(2)).await.unwrap_err();
        assert!(matches!(err, QuoteError::Decode(_)));
    }

    #[tokio::test]
    async fn slow_peer_times_out() {
        let server = mock(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"bid":"5.43"}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .await;
        let started = std::time::Instant::now();

        let err = get(&server, Duration::from_millis(100)).await.unwrap_err();

        assert!(matches!(err, QuoteError::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
