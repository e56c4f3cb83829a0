//! HTTP API for goals
//!
//! - `POST /goals` — create a goal
//! - `GET /goals` — list goals
//! - `GET /health` — liveness probe

mod error;
mod routes;

pub use error::{ApiError, ErrorBody};
pub use routes::{ApiState, CreatedGoalResponse, GoalsResponse, create_router};

use crate::config::ServerConfig;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// HTTP server wrapping the goal API router
///
/// The listener is bound in [`HttpServer::bind`] so callers learn the
/// actual address (useful with port 0) before serving.
pub struct HttpServer {
    listener: TcpListener,
    router: Router,
}

impl HttpServer {
    pub async fn bind(config: &ServerConfig, state: ApiState) -> std::io::Result<Self> {
        let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
        Ok(Self {
            listener,
            router: create_router(state, config.cors),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves
    pub async fn serve<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("HTTP server running on {}", self.local_addr()?);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use inorbit_application::{GoalStore, GoalStoreError};
    use inorbit_domain::Goal;
    use std::sync::Arc;

    struct EmptyStore;

    #[async_trait]
    impl GoalStore for EmptyStore {
        async fn insert(&self, _goal: &Goal) -> Result<(), GoalStoreError> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<Goal>, GoalStoreError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_serves_health_until_shutdown() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: false,
        };
        let server = HttpServer::bind(&config, ApiState::new(Arc::new(EmptyStore)))
            .await
            .unwrap();
        let addr = server.local_addr().unwrap();

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve(async move {
            let _ = stop_rx.await;
        }));

        let response = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "inorbit");

        stop_tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
