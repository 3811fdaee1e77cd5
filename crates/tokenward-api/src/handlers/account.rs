//! Account listing.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::dto::response::{AccountListResponse, AccountResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ApiResponse<AccountListResponse>>, ApiError> {
    let Query(params) = query?;
    let page = state
        .session_service
        .list_accounts(params.page, params.limit)
        .await?;

    Ok(Json(ApiResponse::ok(AccountListResponse {
        accounts: page.items.iter().map(AccountResponse::from).collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
    })))
}
