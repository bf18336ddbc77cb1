// crates/adapt/src/http/app.rs

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::limit::GlobalConcurrencyLimitLayer;

use crate::http::handler;
use crate::voucher::VoucherService;

#[derive(Clone)]
pub struct AppState {
    pub vouchers: Arc<VoucherService>,
}

/// Routes under `/api/vouchers`. `max_concurrency` bounds in-flight
/// requests across the whole router.
#[tracing::instrument(skip_all)]
pub fn build_app(vouchers: Arc<VoucherService>, max_concurrency: usize) -> Router {
    let state = AppState { vouchers };

    Router::new()
        .route("/api/vouchers", post(handler::store))
        .route("/api/vouchers/filter", get(handler::find_with_filter))
        .route("/api/vouchers/{id}", get(handler::find_by_id))
        .fallback(handler::not_found)
        .with_state(state)
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrency.max(1)))
}
