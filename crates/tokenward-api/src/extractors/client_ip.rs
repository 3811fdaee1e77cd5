//! Client address extraction.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use tokenward_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The client address the request came from, in canonical text form.
///
/// With `server.client_ip_header` configured, the first entry of that header
/// is used and a missing or unparseable header is rejected; the socket peer
/// is not consulted. Otherwise the peer from `ConnectInfo` is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = state.config.server.client_ip_header.as_deref();
        extract_client_ip(parts, header)
            .map(ClientIp)
            .map_err(ApiError::from)
    }
}

/// Resolve the client address from `parts`.
pub fn extract_client_ip(parts: &Parts, header: Option<&str>) -> Result<String, AppError> {
    match header {
        Some(name) => {
            let value = parts
                .headers
                .get(name)
                .ok_or_else(|| AppError::validation("Client address header not present"))?
                .to_str()
                .map_err(|_| AppError::validation("Client address header is not valid text"))?;

            let first = value.split(',').next().unwrap_or_default().trim();
            first
                .parse::<IpAddr>()
                .map(|ip| ip.to_string())
                .map_err(|_| AppError::validation("Client address header is not an IP address"))
        }
        None => parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip().to_string())
            .ok_or_else(|| AppError::validation("No client address available")),
    }
}
