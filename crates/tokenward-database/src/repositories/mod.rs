//! Account store implementations.

pub mod account;
pub mod memory;

pub use account::PgAccountStore;
pub use memory::MemoryAccountStore;
