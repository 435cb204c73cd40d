/**
 * Ownership Checks
 *
 * A single authorization capability consulted by every handler that mutates
 * an owned resource. Only the user referenced by a requirement's `user_id`
 * may update or delete it.
 */
use uuid::Uuid;

use crate::backend::auth::sessions::AuthUser;
use crate::backend::error::ApiError;

/// Check that `actor` owns the resource owned by `owner_id`.
///
/// # Errors
/// `Forbidden` when the actor is not the owner.
pub fn ensure_owner(actor: &AuthUser, owner_id: Uuid) -> Result<(), ApiError> {
    if actor.id == owner_id {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: Uuid) -> AuthUser {
        AuthUser {
            id,
            email: "test@example.com".to_string(),
            username: "tester".to_string(),
        }
    }

    #[test]
    fn test_owner_is_allowed() {
        let id = Uuid::new_v4();
        assert!(ensure_owner(&actor(id), id).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = ensure_owner(&actor(Uuid::new_v4()), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }
}
