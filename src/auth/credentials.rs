/**
 * Password Hashing
 *
 * One-way, salted password hashing with bcrypt. The plaintext is never
 * persisted or logged; only the hash reaches the store. Hashing failures
 * are internal errors, never user-facing.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(plaintext, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hashed = hash_password("11AAaa!!123").unwrap();
        assert_ne!(hashed, "11AAaa!!123");
        assert!(verify_password("11AAaa!!123", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hashed = hash_password("11AAaa!!123").unwrap();
        assert!(!verify_password("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("Password123!").unwrap();
        let second = hash_password("Password123!").unwrap();
        assert_ne!(first, second);
    }
}
