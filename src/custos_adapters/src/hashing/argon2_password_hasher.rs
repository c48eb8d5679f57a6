use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use custos_core::{Password, PasswordHasher, PasswordHasherError};

/// Argon2id-backed implementation of the hashing capability.
///
/// Hashing is CPU-bound, so both operations run on the blocking thread
/// pool with the current tracing span carried along.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, argon2::password_hash::Error> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(&mut rand_core::OsRng);
                let digest = argon2()
                    .map_err(|e| PasswordHasherError::Hash(e.to_string()))?
                    .hash_password(password.expose().as_bytes(), &salt)
                    .map_err(|e| PasswordHasherError::Hash(e.to_string()))?
                    .to_string();
                Ok(Secret::from(digest))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Hash(e.to_string()))?
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        digest: &Secret<String>,
    ) -> Result<bool, PasswordHasherError> {
        let candidate = candidate.clone();
        let digest = digest.expose_secret().clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed = PasswordHash::new(&digest)
                    .map_err(|e| PasswordHasherError::Verify(e.to_string()))?;
                let verifier =
                    argon2().map_err(|e| PasswordHasherError::Verify(e.to_string()))?;

                match verifier.verify_password(candidate.expose().as_bytes(), &parsed) {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::Verify(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::Verify(e.to_string()))?
    }
}
