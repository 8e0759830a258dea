use argon2::{Argon2, PasswordHasher};
use password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error(transparent)]
    Hash(#[from] password_hash::Error),
}

pub fn hash_password(pw: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

pub fn verify_password(pw: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(pw.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let h = hash_password("SuperAdmin123!").unwrap();
        assert!(verify_password("SuperAdmin123!", &h).unwrap());
        assert!(!verify_password("wrong", &h).unwrap());
    }
}
