use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::ApiError;

/// Hashes a password into an Argon2 PHC string with a fresh random salt.
pub(crate) fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ApiError::Internal(format!("Couldn't hash password: {}", err)))
}

/// Checks a password against a stored hash. Any mismatch, including an
/// unparseable stored hash, reads as bad credentials.
pub(crate) fn verify_password(password: &str, hash: &str) -> Result<(), ApiError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| ApiError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrips() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert_ne!(hash, "hunter2hunter2");
        verify_password("hunter2hunter2", &hash).unwrap();
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = hash_password("correct horse").unwrap();
        let err = verify_password("battery staple", &hash).unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[test]
    fn same_password_gets_distinct_salted_hashes() {
        let a = hash_password("repeated").unwrap();
        let b = hash_password("repeated").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_stored_hash_reads_as_bad_credentials() {
        let err = verify_password("anything", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }
}
