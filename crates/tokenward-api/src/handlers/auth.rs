//! Auth handlers: sign-up, sign-in, refresh.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use validator::Validate;

use tokenward_core::error::AppError;
use tokenward_core::types::AccountId;

use crate::dto::request::{RefreshRequest, SignInRequest, SignUpRequest};
use crate::dto::response::{AccountResponse, ApiResponse, TokenPairResponse};
use crate::error::ApiError;
use crate::extractors::ClientIp;
use crate::state::AppState;

/// POST /api/auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponse>>), ApiError> {
    let Json(req) = body?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state.session_service.sign_up(&req.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AccountResponse::from(&account))),
    ))
}

/// POST /api/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TokenPairResponse>>, ApiError> {
    let Json(req) = body?;
    let pair = state
        .session_service
        .sign_in(AccountId::from_uuid(req.account_id), &ip)
        .await?;

    Ok(Json(ApiResponse::ok(pair.into())))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    body: Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TokenPairResponse>>, ApiError> {
    let Json(req) = body?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pair = state
        .session_service
        .refresh_tokens(&req.access_token, &req.refresh_token, &ip)
        .await?;

    Ok(Json(ApiResponse::ok(pair.into())))
}
