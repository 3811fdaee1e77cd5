//! Sign-up, sign-in, refresh rotation, and anomaly revocation.

pub mod anomaly;
pub mod pair;
pub mod refresh;
pub mod service;

pub use pair::TokenPair;
pub use service::SessionService;
