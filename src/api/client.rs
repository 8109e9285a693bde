use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::model::AllocationRequest;

use super::error::ApiError;

/// Default endpoint base URL when `DISCTASK_SERVER_URL` is unset.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Environment variable overriding the endpoint base URL.
pub const SERVER_URL_ENV: &str = "DISCTASK_SERVER_URL";

/// Wire shape of the endpoint's reply.
///
/// Exactly one of the two fields is expected; an empty `error` string is
/// treated as absent, matching the endpoint's contract.
#[derive(Debug, Deserialize)]
struct AllocationReply {
    #[serde(default)]
    allocation: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the allocation endpoint.
#[derive(Debug, Clone)]
pub struct AllocationClient {
    http: Client,
    server_url: String,
}

impl AllocationClient {
    /// Creates a client for the given base URL (no trailing slash).
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }

    /// Builds a client from [`SERVER_URL_ENV`], falling back to
    /// [`DEFAULT_SERVER_URL`].
    pub fn from_env() -> Self {
        let url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::new(url)
    }

    /// Returns the configured base URL.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Submits an allocation request and returns the allocation text.
    ///
    /// The response body is parsed as JSON regardless of HTTP status: the
    /// endpoint reports business failures as `{"error": ...}` bodies with
    /// non-2xx statuses. No timeout is applied and no retry is attempted; a
    /// failed call must be re-triggered by the caller.
    pub async fn allocate(&self, request: &AllocationRequest) -> Result<String, ApiError> {
        debug!(name = %request.name, task = %request.task, "sending allocation request");

        let body = self
            .http
            .post(format!("{}/allocate", self.server_url))
            .json(request)
            .send()
            .await?
            .text()
            .await?;
        let reply: AllocationReply = serde_json::from_str(&body)?;

        if let Some(message) = reply.error.filter(|m| !m.is_empty()) {
            return Err(ApiError::Rejected(message));
        }
        match reply.allocation {
            Some(allocation) => {
                info!(name = %request.name, "allocation received");
                Ok(allocation)
            }
            None => Err(ApiError::MalformedReply),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;
    use crate::model::SubmissionDraft;

    #[derive(Clone, Default)]
    struct Recorded {
        body: Arc<Mutex<Option<Value>>>,
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn request() -> AllocationRequest {
        SubmissionDraft {
            name: "Alice",
            task: "Write report",
            deadline: "2024-12-01",
            scores: ["50", "50", "50", "50"],
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn allocate_returns_allocation_text() {
        let recorded = Recorded::default();
        let router = Router::new()
            .route(
                "/allocate",
                post(
                    |State(state): State<Recorded>, Json(body): Json<Value>| async move {
                        *state.body.lock().unwrap() = Some(body);
                        Json(json!({"allocation": "Assign to Alice as lead writer"}))
                    },
                ),
            )
            .with_state(recorded.clone());
        let url = serve(router).await;

        let allocation = AllocationClient::new(url).allocate(&request()).await.unwrap();
        assert_eq!(allocation, "Assign to Alice as lead writer");

        let body = recorded.body.lock().unwrap().take().unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Alice",
                "discScores": {"D": 50, "I": 50, "S": 50, "C": 50},
                "task": "Write report",
                "deadline": "2024-12-01",
            })
        );
    }

    #[tokio::test]
    async fn business_error_body_is_a_rejection_even_with_400_status() {
        let router = Router::new().route(
            "/allocate",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Task already allocated"})),
                )
            }),
        );
        let url = serve(router).await;

        let err = AllocationClient::new(url)
            .allocate(&request())
            .await
            .unwrap_err();
        assert_eq!(err.rejection_message(), Some("Task already allocated"));
    }

    #[tokio::test]
    async fn business_error_body_with_200_status_is_a_rejection() {
        let router = Router::new().route(
            "/allocate",
            post(|| async { Json(json!({"error": "nobody is free"})) }),
        );
        let url = serve(router).await;

        let err = AllocationClient::new(url)
            .allocate(&request())
            .await
            .unwrap_err();
        assert_eq!(err.rejection_message(), Some("nobody is free"));
    }

    #[tokio::test]
    async fn empty_error_string_does_not_mask_allocation() {
        let router = Router::new().route(
            "/allocate",
            post(|| async { Json(json!({"error": "", "allocation": "Assign to Bob"})) }),
        );
        let url = serve(router).await;

        let allocation = AllocationClient::new(url).allocate(&request()).await.unwrap();
        assert_eq!(allocation, "Assign to Bob");
    }

    #[tokio::test]
    async fn reply_with_neither_field_is_malformed() {
        let router = Router::new().route("/allocate", post(|| async { Json(json!({"ok": true})) }));
        let url = serve(router).await;

        let err = AllocationClient::new(url)
            .allocate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedReply));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let router = Router::new().route("/allocate", post(|| async { "service unavailable" }));
        let url = serve(router).await;

        let err = AllocationClient::new(url)
            .allocate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind then drop a listener so the port is known-dead.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = AllocationClient::new(format!("http://{addr}"))
            .allocate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }

    #[test]
    fn from_env_defaults_and_overrides() {
        // Serialized in one test: the variable is process-global.
        unsafe { std::env::remove_var(SERVER_URL_ENV) };
        assert_eq!(AllocationClient::from_env().server_url(), DEFAULT_SERVER_URL);

        unsafe { std::env::set_var(SERVER_URL_ENV, "http://10.0.0.7:9999") };
        assert_eq!(
            AllocationClient::from_env().server_url(),
            "http://10.0.0.7:9999"
        );
        unsafe { std::env::remove_var(SERVER_URL_ENV) };
    }
}
