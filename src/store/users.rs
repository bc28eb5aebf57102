use crate::store::document::JsonDocument;
use crate::types::{AppError, Result, User};
use std::path::PathBuf;

/// Persisted credential collection.
///
/// Usernames are unique and case-sensitive. The check-and-insert in
/// [`append`](UserStore::append) runs inside one serialized document cycle,
/// so two simultaneous registrations with the same username cannot both
/// succeed.
pub struct UserStore {
    doc: JsonDocument<User>,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    /// Looks up a user by exact username match.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.doc.read().await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    /// Appends a new user, enforcing username uniqueness atomically.
    pub async fn append(&self, user: User) -> Result<()> {
        self.doc
            .update(|users| {
                if users.iter().any(|u| u.username == user.username) {
                    return Err(AppError::Conflict(format!(
                        "Username '{}' already exists",
                        user.username
                    )));
                }
                users.push(user);
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn test_user(username: &str) -> User {
        User {
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_and_find() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UserStore::new(dir.path().join("users.json"));

        store.append(test_user("alice")).await.expect("should append");

        let found = store
            .find_by_username("alice")
            .await
            .expect("should look up");
        assert!(found.is_some(), "appended user should be found");

        let absent = store
            .find_by_username("Alice")
            .await
            .expect("should look up");
        assert!(absent.is_none(), "lookup is case-sensitive");
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UserStore::new(dir.path().join("users.json"));

        store.append(test_user("bob")).await.expect("first append");
        let result = store.append(test_user("bob")).await;

        assert!(
            matches!(result, Err(AppError::Conflict(_))),
            "duplicate username should conflict"
        );
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_registration() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(UserStore::new(dir.path().join("users.json")));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(
                async move { store.append(test_user("carol")).await },
            ));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.expect("join").is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1, "exactly one registration may win");
    }
}
