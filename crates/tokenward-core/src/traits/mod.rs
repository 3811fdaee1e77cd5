//! Collaborator traits defined in `tokenward-core` and implemented by other crates.

pub mod notifier;

pub use notifier::Notifier;
