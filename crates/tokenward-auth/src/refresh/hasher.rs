//! Argon2id hashing and verification of refresh secrets.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::error;

use tokenward_core::config::RefreshHashConfig;
use tokenward_core::error::{AppError, ErrorKind};

/// Salted, slow hashing of refresh secrets with Argon2id.
#[derive(Debug, Clone)]
pub struct RefreshHasher {
    params: Params,
}

impl RefreshHasher {
    /// Creates a hasher with the configured cost parameters.
    pub fn new(config: &RefreshHashConfig) -> Result<Self, AppError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| {
                AppError::configuration(format!("Invalid refresh hash parameters: {e}"))
            })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a refresh secret with a fresh random salt, returning a PHC string.
    pub fn hash(&self, secret: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| {
                AppError::new(ErrorKind::Internal, format!("Refresh secret hashing failed: {e}"))
            })?;

        Ok(hash.to_string())
    }

    /// Verifies a refresh secret against a stored PHC string.
    ///
    /// Returns `Ok(false)` only for a genuine mismatch; the comparison is
    /// constant-time. A stored hash that cannot be parsed or evaluated is an
    /// `Internal` error.
    pub fn verify(&self, secret: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| {
            error!(error = %e, "Stored refresh hash is malformed");
            AppError::internal(format!("Invalid refresh hash format: {e}"))
        })?;

        match self.argon2().verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Refresh secret verification failed: {e}"
            ))),
        }
    }
}
