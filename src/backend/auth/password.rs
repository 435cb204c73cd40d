/**
 * Credential Store
 *
 * Password hashing and verification. Hashes are salted bcrypt with a fixed
 * cost factor; verification is constant-time via the bcrypt crate.
 */
use bcrypt::{hash, verify, BcryptError};

/// bcrypt cost factor for new hashes
pub const HASH_COST: u32 = 12;

/// Hash a plaintext password for storage.
///
/// Output differs between calls (fresh salt), but every output verifies
/// against the original password.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, HASH_COST)
}

/// Verify a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on mismatch; an error only means the stored hash
/// itself is malformed.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(password, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hashed = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = hash_password("password123").unwrap();
        assert!(!verify_password("password124", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();
        assert_ne!(first, second);
    }
}
