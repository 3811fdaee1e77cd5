//! # tokenward-entity
//!
//! Domain entity models for Tokenward. Every struct in this crate is a
//! storage-agnostic value; row mapping lives in `tokenward-database`.

pub mod account;
