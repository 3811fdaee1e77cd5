//! Custom Axum extractors.

pub mod client_ip;
pub mod pagination;

pub use client_ip::ClientIp;
pub use pagination::PaginationParams;
