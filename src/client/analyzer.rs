use async_trait::async_trait;
use reqwest::redirect::Policy;
use serde::Serialize;

use crate::config::Config;
use crate::core::constants::{api, messages};
use crate::core::error::{LinkFactsError, Result, transport_error};
use crate::types::{AnalysisReport, SubmissionInput};

/// JSON body of the analysis request.
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    urls: &'a [String],
}

#[async_trait]
pub trait AnalyzeProfiles {
    /// Submit one validated batch of profile URLs for analysis.
    ///
    /// Exactly one request is issued per call; nothing is retried.
    async fn analyze(&self, input: &SubmissionInput) -> Result<AnalysisReport>;
}

/// HTTP client for the remote analysis service.
#[derive(Debug)]
pub struct AnalyzerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalyzerClient {
    /// Build a client from configuration.
    ///
    /// Uses the configured timeout and user agent (defaulting to
    /// `linkfacts/<version>`), with a limited redirect policy.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint_trimmed(),
        })
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.endpoint, api::ANALYZE_PATH)
    }

    /// Extract the human-readable `detail` message from a rejected response
    /// body, falling back to a generic message when the body is not JSON or
    /// carries no `detail` string.
    fn extract_detail(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .as_ref()
            .and_then(|value| value.get("detail"))
            .and_then(|detail| detail.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| messages::ANALYSIS_FAILED.to_string())
    }
}

#[async_trait]
impl AnalyzeProfiles for AnalyzerClient {
    async fn analyze(&self, input: &SubmissionInput) -> Result<AnalysisReport> {
        let body = AnalyzeRequest {
            urls: input.urls().as_slice(),
        };

        log::debug!("POST {} with {} URLs", self.analyze_url(), input.urls().len());

        let response = self
            .client
            .post(self.analyze_url())
            .json(&body)
            .send()
            .await
            .map_err(|err| transport_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LinkFactsError::Api {
                status: status.as_u16(),
                detail: Self::extract_detail(&body),
            });
        }

        let body = response.text().await.map_err(|err| transport_error(&err))?;
        let report: AnalysisReport = serde_json::from_str(&body)?;

        log::debug!(
            "Analysis succeeded: status={}, profiles_analyzed={}",
            report.status,
            report.profiles_analyzed
        );

        Ok(report)
    }
}


#[cfg(test)]
mod integration_tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;

    fn test_input() -> SubmissionInput {
        crate::validation::validate(
            "https://www.linkedin.com/in/one",
            "https://www.linkedin.com/in/two",
            "https://www.linkedin.com/in/three",
        )
        .unwrap()
    }

    fn client_for(server: &Server) -> AnalyzerClient {
        let config = Config {
            endpoint: Some(server.url()),
            ..Config::default()
        };
        AnalyzerClient::from_config(&config).unwrap()
    }

    const SUCCESS_BODY: &str = r#"{
        "status": "success",
        "profiles_analyzed": 2,
        "results": [
            {
                "profile_url": "https://www.linkedin.com/in/one",
                "name": "One",
                "headline": "First headline",
                "funny_facts": ["Fact A", "Fact **B**"]
            },
            {
                "profile_url": "https://www.linkedin.com/in/two",
                "name": "Two",
                "headline": "Second headline",
                "funny_facts": ["Fact C"]
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_analyze__posts_urls_in_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze-profiles")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "urls": [
                    "https://www.linkedin.com/in/one",
                    "https://www.linkedin.com/in/two",
                    "https://www.linkedin.com/in/three"
                ]
            })))
            .with_status(200)
            .with_body(SUCCESS_BODY)
            .create_async()
            .await;

        let report = client_for(&server).analyze(&test_input()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].name, "One");
        assert_eq!(report.results[1].name, "Two");
    }

    #[tokio::test]
    async fn test_analyze__issues_exactly_one_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze-profiles")
            .with_status(200)
            .with_body(SUCCESS_BODY)
            .expect(1)
            .create_async()
            .await;

        client_for(&server).analyze(&test_input()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze__rejected_with_detail() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/analyze-profiles")
            .with_status(429)
            .with_body(r#"{"detail": "rate limited"}"#)
            .create_async()
            .await;

        let err = client_for(&server).analyze(&test_input()).await.unwrap_err();

        match err {
            LinkFactsError::Api { status, detail } => {
                assert_eq!(status, 429);
                assert_eq!(detail, "rate limited");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_analyze__rejected_without_detail_uses_fallback() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/analyze-profiles")
            .with_status(500)
            .with_body(r#"{"message": "boom"}"#)
            .create_async()
            .await;

        let err = client_for(&server).analyze(&test_input()).await.unwrap_err();

        match err {
            LinkFactsError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "Analysis failed");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_analyze__malformed_success_body_is_parse_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/analyze-profiles")
            .with_status(200)
            .with_body(r#"{"status": "success"}"#)
            .create_async()
            .await;

        let err = client_for(&server).analyze(&test_input()).await.unwrap_err();
        assert!(matches!(err, LinkFactsError::JsonParsing(_)));
    }

    #[tokio::test]
    async fn test_analyze__transport_failure_has_message() {
        // Nothing listens on this port, so the request never gets a response
        let config = Config {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            ..Config::default()
        };
        let client = AnalyzerClient::from_config(&config).unwrap();

        let err = client.analyze(&test_input()).await.unwrap_err();

        match err {
            LinkFactsError::Transport(msg) => assert!(!msg.trim().is_empty()),
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }
}
