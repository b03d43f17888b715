//! Password storage schemes

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};

use crate::error::{MarketError, Result};

/// How passwords are written to storage and checked at login.
///
/// `Plaintext` stores the password as given and compares byte for byte.
/// It exists for parity with existing data only and must not be used for a
/// real deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordScheme {
    /// Produce the stored form of `password`
    pub fn seal(&self, password: &str) -> Result<String> {
        match self {
            PasswordScheme::Plaintext => Ok(password.to_string()),
            PasswordScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| MarketError::PasswordHash(e.to_string()))
            }
        }
    }

    /// Check `supplied` against a stored value
    pub fn verify(&self, supplied: &str, stored: &str) -> bool {
        match self {
            PasswordScheme::Plaintext => supplied == stored,
            PasswordScheme::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(supplied.as_bytes(), &parsed)
                    .is_ok(),
                Err(e) => {
                    tracing::warn!("Stored password is not a valid PHC string: {}", e);
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_is_exact_match() {
        let scheme = PasswordScheme::Plaintext;
        let stored = scheme.seal("pw1").unwrap();
        assert_eq!(stored, "pw1");
        assert!(scheme.verify("pw1", &stored));
        assert!(!scheme.verify("PW1", &stored));
        assert!(!scheme.verify("pw1 ", &stored));
    }

    #[test]
    fn test_argon2_round_trip() {
        let scheme = PasswordScheme::Argon2;
        let stored = scheme.seal("correct horse").unwrap();
        assert_ne!(stored, "correct horse");
        assert!(stored.starts_with("$argon2"));
        assert!(scheme.verify("correct horse", &stored));
        assert!(!scheme.verify("wrong horse", &stored));
    }

    #[test]
    fn test_argon2_salts_differ() {
        let scheme = PasswordScheme::Argon2;
        assert_ne!(scheme.seal("pw").unwrap(), scheme.seal("pw").unwrap());
    }

    #[test]
    fn test_argon2_rejects_non_phc_value() {
        assert!(!PasswordScheme::Argon2.verify("pw1", "pw1"));
    }
}
