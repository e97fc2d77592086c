//! Password Hasher
//!
//! bcrypt with a fixed cost and a fresh random salt per hash. Both
//! operations are CPU-bound and run on the blocking thread pool so they
//! never stall the async workers.

use crate::backend::error::BackendError;

/// Default bcrypt cost
pub const DEFAULT_COST: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash `plaintext` into a self-describing bcrypt digest
    pub async fn hash(&self, plaintext: &str) -> Result<String, BackendError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| BackendError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| BackendError::internal(format!("Failed to hash password: {}", e)))
    }

    /// Check `plaintext` against `digest`.
    ///
    /// Never fails: a malformed digest simply does not match.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();
        match tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::warn!("Password verification failed: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Verification task failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash("secret1").await.unwrap();

        assert_ne!(digest, "secret1");
        assert!(hasher.verify("secret1", &digest).await);
        assert!(!hasher.verify("secret2", &digest).await);
    }

    #[tokio::test]
    async fn test_salt_differs_per_call() {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash("secret1").await.unwrap();
        let second = hasher.hash("secret1").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_digest_is_false() {
        let hasher = PasswordHasher::new(4);
        assert!(!hasher.verify("secret1", "not-a-bcrypt-hash").await);
        assert!(!hasher.verify("secret1", "").await);
    }
}
