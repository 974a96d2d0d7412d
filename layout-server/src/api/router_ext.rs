//! Router extension for oneshot calls
//!
//! Provides the ability to call the Router directly without going through
//! the network stack. Integration tests drive the API this way.

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use tower::Service;

use crate::core::ServerState;

/// Result type for oneshot API calls
pub type OneshotResult = Result<Response<Body>>;

/// Extension trait for Router to support oneshot calls
///
/// # Example
///
/// ```ignore
/// let state = ServerState::initialize(&config).await?;
/// let request = Request::get("/health").body(Body::empty())?;
/// let response = build_router().oneshot(&state, request).await?;
/// ```
#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process a single request against the given state
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        // Bind state, then drive the router as a Service (it is always ready)
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
