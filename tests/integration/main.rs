//! HTTP-level integration tests over the in-memory account store.

mod accounts_test;
mod auth_test;
mod helpers;
mod refresh_test;
