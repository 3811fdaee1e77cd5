//! Refresh secret generation.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::TryRngCore;
use rand::rngs::OsRng;

use tokenward_core::error::{AppError, ErrorKind};

/// Number of random bytes in a refresh secret (256 bits).
pub const REFRESH_SECRET_BYTES: usize = 32;

/// Draws 256 bits from the operating system and returns them base64-encoded.
pub fn generate_refresh_secret() -> Result<String, AppError> {
    let mut bytes = [0u8; REFRESH_SECRET_BYTES];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        AppError::with_source(ErrorKind::Randomness, "Entropy source unavailable", e)
    })?;
    Ok(STANDARD.encode(bytes))
}
