//! # tokenward-service
//!
//! Session orchestration for Tokenward. [`SessionService`] is the only
//! component that changes account session state; it receives its store,
//! token manager, hasher, and notifier at construction.

pub mod notification;
pub mod session;

pub use notification::{
    LogNotifier, MemoryNotifier, SentMessage, WebhookNotifier, build_notifier,
};
pub use session::{SessionService, TokenPair};
