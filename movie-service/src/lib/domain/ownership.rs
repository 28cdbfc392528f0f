//! Ownership guard: only the identity that created a resource may mutate it.

use thiserror::Error;

use crate::domain::user::models::CurrentUser;
use crate::domain::user::models::UserId;

/// A resource with a single owning identity.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// The acting identity is not the resource's owner.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("user {actor} does not own this resource (owner {owner})")]
pub struct OwnershipError {
    pub actor: UserId,
    pub owner: UserId,
}

impl CurrentUser {
    /// True when this identity owns `resource`.
    pub fn owns<R: Owned + ?Sized>(&self, resource: &R) -> bool {
        self.id == resource.owner_id()
    }
}

/// Fail unless `actor` owns `resource`.
pub fn ensure_owner<R: Owned + ?Sized>(
    actor: &CurrentUser,
    resource: &R,
) -> Result<(), OwnershipError> {
    if actor.owns(resource) {
        Ok(())
    } else {
        Err(OwnershipError {
            actor: actor.id,
            owner: resource.owner_id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Username;

    struct Note {
        author: UserId,
    }

    impl Owned for Note {
        fn owner_id(&self) -> UserId {
            self.author
        }
    }

    fn current_user() -> CurrentUser {
        CurrentUser {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@x.com".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_passes() {
        let alice = current_user();
        let note = Note { author: alice.id };

        assert!(alice.owns(&note));
        assert_eq!(ensure_owner(&alice, &note), Ok(()));
    }

    #[test]
    fn test_other_identity_is_rejected() {
        let alice = current_user();
        let bob_id = UserId::new();
        let note = Note { author: bob_id };

        assert!(!alice.owns(&note));
        assert_eq!(
            ensure_owner(&alice, &note),
            Err(OwnershipError {
                actor: alice.id,
                owner: bob_id
            })
        );
    }
}
