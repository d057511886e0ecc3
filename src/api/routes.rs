//! Route table for the HTTP API

use super::{AppState, handler};
use crate::middleware;
use axum::{
    Router,
    http::Method,
    middleware::{from_fn, from_fn_with_state},
    routing::{MethodRouter, get},
};

/// A single route: method and path are kept alongside the handler so the
/// table can be logged at startup.
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

/// All endpoints served by the API
pub fn endpoints() -> Vec<Endpoint> {
    vec![Endpoint {
        method: Method::GET,
        path: "/health",
        handler: get(handler::health),
    }]
}

/// Build the router with the global middleware chain.
///
/// Outermost first: recover, logging, timeout, CORS.
pub fn build_router(state: AppState) -> Router {
    endpoints()
        .into_iter()
        .fold(Router::new(), |router, endpoint| {
            router.route(endpoint.path, endpoint.handler)
        })
        .layer(from_fn(middleware::cors))
        .layer(from_fn_with_state(
            middleware::REQUEST_TIMEOUT,
            middleware::timeout,
        ))
        .layer(from_fn(middleware::logging))
        .layer(from_fn(middleware::recover))
        .with_state(state)
}
