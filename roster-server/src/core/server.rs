//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, middleware};
use axum_server::Handle;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::{Config, Result, ServerState};
use crate::services::frontend;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::employees::router())
        .merge(crate::api::employee_list::router())
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await,
        };

        // API 路由在前，未匹配的路径一律回落到静态前端
        let app = build_app()
            .with_state(state.clone())
            .fallback_service(frontend::service(&state.static_dir()))
            // Tower HTTP 中间件
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            // HTTP 请求日志中间件
            .layer(middleware::from_fn(log_request));

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Roster server listening on http://{}", addr);

        // ctrl-c 触发优雅关闭
        let handle = Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            shutdown_handle.graceful_shutdown(Some(Duration::from_secs(10)));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        Ok(())
    }
}
