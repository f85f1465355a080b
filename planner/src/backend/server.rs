use crate::backend::store::{PlanStore, StoreError};
use anyhow::Context;
use log::{info, warn};
use serde_json::json;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use warp::{http::StatusCode, Filter, Reply};

/// Routes mirroring the plan backend: `GET /` and `GET /selected-courses/{program}`.
pub fn routes(
    data_dir: PathBuf,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let store = Arc::new(PlanStore::new(data_dir));
    let store_filter = warp::any().map(move || store.clone());

    let root_route = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"message": "Degree Planner API"})));

    let plan_route = warp::path!("selected-courses" / String)
        .and(warp::get())
        .and(store_filter)
        .map(|code: String, store: Arc<PlanStore>| match store.load(&code) {
            Ok(plan) => {
                info!("serving plan {}", code);
                warp::reply::with_header(plan, "content-type", "application/json").into_response()
            }
            Err(err @ StoreError::NotFound(_)) => {
                warn!("{}", err);
                warp::reply::with_status(
                    warp::reply::json(&json!({"detail": err.to_string()})),
                    StatusCode::NOT_FOUND,
                )
                .into_response()
            }
            Err(err) => {
                warn!("{}", err);
                warp::reply::with_status(
                    warp::reply::json(&json!({"detail": err.to_string()})),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
                .into_response()
            }
        });

    root_route
        .or(plan_route)
        .with(warp::log("planner::backend"))
}

/// Binds the backend emulator; the returned future runs until `shutdown` resolves.
pub fn serve(
    bind: SocketAddr,
    data_dir: PathBuf,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<(SocketAddr, impl Future<Output = ()>)> {
    warp::serve(routes(data_dir))
        .try_bind_with_graceful_shutdown(bind, shutdown)
        .with_context(|| format!("binding plan backend on {}", bind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn root_announces_the_api() {
        let dir = tempfile::tempdir().unwrap();
        let response = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&routes(dir.path().to_path_buf()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["message"], "Degree Planner API");
    }

    #[tokio::test]
    async fn plan_route_serves_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("EE1.json"), r#"{"2": [], "1": []}"#).unwrap();
        let response = warp::test::request()
            .method("GET")
            .path("/selected-courses/EE1")
            .reply(&routes(dir.path().to_path_buf()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body, json!({"1": [], "2": []}));
    }

    #[tokio::test]
    async fn plan_route_passes_file_bytes_through() {
        let dir = tempfile::tempdir().unwrap();
        let text = r#"{"3": [], "1": [], "3": [{"code": "B"}]}"#;
        fs::write(dir.path().join("EE1.json"), text).unwrap();
        let response = warp::test::request()
            .method("GET")
            .path("/selected-courses/EE1")
            .reply(&routes(dir.path().to_path_buf()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.body().as_ref(), text.as_bytes());
    }

    #[tokio::test]
    async fn unknown_plan_is_404_with_detail() {
        let dir = tempfile::tempdir().unwrap();
        let response = warp::test::request()
            .method("GET")
            .path("/selected-courses/CS1")
            .reply(&routes(dir.path().to_path_buf()))
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert!(body["detail"].as_str().unwrap().contains("CS1"));
    }

    #[tokio::test]
    async fn corrupt_plan_is_500() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("EE1.json"), "[[[").unwrap();
        let response = warp::test::request()
            .method("GET")
            .path("/selected-courses/EE1")
            .reply(&routes(dir.path().to_path_buf()))
            .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
