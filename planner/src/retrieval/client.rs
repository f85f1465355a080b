use crate::retrieval::program::Program;
use log::debug;
use serde::de::IgnoredAny;

/// What the user sees when a plan cannot be fetched, whatever the cause.
pub const RETRIEVAL_FAILURE_MESSAGE: &str = "Failed to fetch data. Ensure backend is running.";

/// Failure to obtain a raw plan from the backend. The detail is for logs only.
#[derive(thiserror::Error, Debug)]
pub enum RetrievalFailure {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("reading response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One-shot HTTP client for `GET {base}/selected-courses/{program}`.
#[derive(Clone)]
pub struct PlanClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn plan_url(&self, program: Program) -> String {
        format!(
            "{}/selected-courses/{}",
            self.base_url.trim_end_matches('/'),
            program.code()
        )
    }

    /// Returns the response body as received, once it is known to be JSON.
    pub async fn fetch(&self, program: Program) -> Result<Vec<u8>, RetrievalFailure> {
        let url = self.plan_url(program);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| RetrievalFailure::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(RetrievalFailure::Status { url, status });
        }

        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(source) => return Err(RetrievalFailure::Body { url, source }),
        };
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|source| RetrievalFailure::Decode { url, source })?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::routes;
    use std::fs;
    use std::path::PathBuf;

    fn spawn_backend(data_dir: PathBuf) -> String {
        let (addr, server) = warp::serve(routes(data_dir)).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        format!("http://{}", addr)
    }

    #[test]
    fn plan_url_joins_base_and_program() {
        let client = PlanClient::new("http://localhost:8000/");
        assert_eq!(
            client.plan_url(Program::Ee1),
            "http://localhost:8000/selected-courses/EE1"
        );
    }

    #[tokio::test]
    async fn fetch_returns_backend_payload() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("EE1.json"),
            r#"{"1": [{"code": "MA101", "title": "Calculus", "credits": 4}]}"#,
        )
        .unwrap();
        let client = PlanClient::new(spawn_backend(dir.path().to_path_buf()));

        let body = client.fetch(Program::Ee1).await.unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(raw["1"][0]["code"], "MA101");
    }

    #[tokio::test]
    async fn missing_plan_is_a_status_failure() {
        let dir = tempfile::tempdir().unwrap();
        let client = PlanClient::new(spawn_backend(dir.path().to_path_buf()));

        let err = client.fetch(Program::Cs1).await.unwrap_err();
        match err {
            RetrievalFailure::Status { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected failure: {other}"),
        }
    }
}
