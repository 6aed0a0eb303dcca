use std::time::Instant;

use bcrypt::Version;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::HashError;

/// Work factor used for every generated hash.
pub const HASH_COST: u32 = 10;

/// An adaptive password-hashing primitive.
///
/// Implementations are blocking and CPU-bound; use [`hash_password`] to run
/// them from async code.
pub trait PasswordHasher: Clone + Send + 'static {
    /// Hashes `password` under a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Checks `password` against an encoded `hash` produced by this primitive.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

/// bcrypt with a fixed cost, emitting `$2b$` hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Builds a hasher for `cost`. The value is not range-checked here;
    /// bcrypt rejects it when hashing.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor passed to bcrypt.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::with_cost(HASH_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        let mut salt = [0u8; 16];
        OsRng.try_fill_bytes(&mut salt)?;

        let parts = bcrypt::hash_with_salt(password, self.cost, salt)?;
        Ok(parts.format_for_version(Version::TwoB))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(bcrypt::verify(password, hash)?)
    }
}

/// Hashes `password` on the blocking pool and checks the result before
/// handing it back.
///
/// The returned hash is non-empty and verifies against `password`.
pub async fn hash_password<H: PasswordHasher>(hasher: &H, password: &str) -> Result<String, HashError> {
    let hasher = hasher.clone();
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || {
        let started = Instant::now();
        let hash = hasher.hash(&password)?;
        tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "hash computed");

        if hash.is_empty() {
            return Err(HashError::EmptyHash);
        }

        let verified = hasher.verify(&password, &hash)?;
        tracing::debug!(verified, "hash self-check");
        if !verified {
            return Err(HashError::VerificationFailed);
        }

        Ok(hash)
    })
    .await?
}
