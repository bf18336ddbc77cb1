use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, RawQuery, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::response::ApiResponse;
use domain::voucher::StoreVoucherRequest;
use http::header::{HeaderMap, HeaderValue};
use http::StatusCode;
use tracing::debug;

use super::app::AppState;
use super::error::HttpError;
use crate::mql::parse_query_string;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const MAX_PAGE_HEADER: &str = "x-max-page";
pub const CURSOR_HEADER: &str = "x-cursor";

pub const NO_DATA_MESSAGE: &str = "No data found";

/// `GET /api/vouchers/filter?<field>.<criteria>=<values>&page=&limit=&orderBy=&sortOrder=`
#[tracing::instrument(skip_all)]
pub async fn find_with_filter(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, HttpError> {
    let request = parse_query_string(query.as_deref().unwrap_or_default())?;
    debug!(
        filters = request.filters.len(),
        page = request.page,
        limit = request.limit,
        "filter request"
    );

    let page = state.vouchers.find_by_filter(&request).await?;
    if page.vouchers.is_empty() {
        return Err(HttpError::NotFound(NO_DATA_MESSAGE.into()));
    }

    let info = page.page_info;
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(info.total_count));
    headers.insert(MAX_PAGE_HEADER, HeaderValue::from(info.max_page));
    if let Some(cursor) = info.cursor() {
        headers.insert(CURSOR_HEADER, HeaderValue::from(cursor));
    }

    let body = ApiResponse::success(
        StatusCode::OK.as_u16(),
        "Vouchers have been fetched successfully",
        page.vouchers,
    );
    Ok((StatusCode::OK, headers, Json(body)).into_response())
}

#[tracing::instrument(skip_all)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    let voucher = state
        .vouchers
        .find_by_id(&id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Voucher {id} not found")))?;

    let body = ApiResponse::success(
        StatusCode::OK.as_u16(),
        "Voucher has been fetched successfully",
        voucher,
    );
    Ok((StatusCode::OK, Json(body)).into_response())
}

#[tracing::instrument(skip_all)]
pub async fn store(
    State(state): State<AppState>,
    payload: Result<Json<StoreVoucherRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(request) = payload.map_err(|rejection| HttpError::Body(rejection.body_text()))?;
    let voucher = state.vouchers.store(request).await?;

    let body = ApiResponse::success(
        StatusCode::CREATED.as_u16(),
        "Voucher has been stored successfully",
        voucher,
    );
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

pub async fn not_found() -> HttpError {
    HttpError::NotFound("route not found".into())
}
