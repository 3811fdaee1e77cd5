//! Account domain entities.

pub mod model;
pub mod session;

pub use model::Account;
pub use session::{RefreshSession, SessionState};
