//! In-memory user record store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::user::{
    LoginRequest, RegistrationRequest, StoreFailure, UpdateRequest, User, UserId, UserProfile,
    UserRecordStore,
};

use super::password::PasswordHasher;

const NO_SUCH_USER: &str = "no such user exist";
const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Default)]
struct UserTables {
    users: HashMap<String, User>,
    /// username -> user ID
    username_index: HashMap<String, String>,
}

/// In-memory implementation of [`UserRecordStore`].
///
/// Owns password hashing so credentials never leave the store in clear.
#[derive(Debug)]
pub struct InMemoryUserRecordStore {
    tables: RwLock<UserTables>,
    hasher: Arc<dyn PasswordHasher>,
}

impl InMemoryUserRecordStore {
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            tables: RwLock::new(UserTables::default()),
            hasher,
        }
    }

    async fn lookup_for_login(&self, request: &LoginRequest) -> Result<User, StoreFailure> {
        if let Some(username) = request.username.as_deref().filter(|u| !u.is_empty()) {
            return self.find_by_username(username).await;
        }

        if let Some(id) = request.id.as_deref().filter(|i| !i.is_empty()) {
            let user_id = UserId::new(id).map_err(|_| StoreFailure::not_found(NO_SUCH_USER))?;
            return self.find_by_id(&user_id).await;
        }

        Err(StoreFailure::rejected("username or id is required"))
    }
}

#[async_trait]
impl UserRecordStore for InMemoryUserRecordStore {
    async fn find_by_id(&self, id: &UserId) -> Result<User, StoreFailure> {
        let tables = self.tables.read().await;

        tables
            .users
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| StoreFailure::not_found(NO_SUCH_USER))
    }

    async fn find_by_username(&self, username: &str) -> Result<User, StoreFailure> {
        let tables = self.tables.read().await;

        tables
            .username_index
            .get(username)
            .and_then(|id| tables.users.get(id))
            .cloned()
            .ok_or_else(|| StoreFailure::not_found(NO_SUCH_USER))
    }

    async fn check_credentials(&self, request: &LoginRequest) -> Result<User, StoreFailure> {
        let user = match self.lookup_for_login(request).await {
            Ok(user) => user,
            Err(failure) if failure.is_not_found() => {
                debug!("Login attempted for unknown user");
                return Err(StoreFailure::rejected(INVALID_CREDENTIALS));
            }
            Err(failure) => return Err(failure),
        };

        if !self.hasher.verify(&request.password, user.password_hash()) {
            warn!(user_id = %user.id(), "Password verification failed");
            return Err(StoreFailure::rejected(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    async fn create(&self, request: &RegistrationRequest) -> Result<User, StoreFailure> {
        let password_hash = self.hasher.hash(&request.password)?;
        let profile = UserProfile {
            email: request.email.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
        };
        let user = User::new(UserId::generate(), &request.username, password_hash, profile);

        let mut tables = self.tables.write().await;

        if tables.username_index.contains_key(user.username()) {
            return Err(StoreFailure::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        let id = user.id().as_str().to_string();
        tables
            .username_index
            .insert(user.username().to_string(), id.clone());
        tables.users.insert(id, user.clone());

        debug!(user_id = %user.id(), username = %user.username(), "User created");

        Ok(user)
    }

    async fn update(&self, request: &UpdateRequest) -> Result<User, StoreFailure> {
        let user_id =
            UserId::new(request.id.as_str()).map_err(|_| StoreFailure::not_found(NO_SUCH_USER))?;

        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(user_id.as_str())
            .ok_or_else(|| StoreFailure::not_found(NO_SUCH_USER))?;

        if let Some(email) = &request.email {
            user.set_email(email);
        }
        if let Some(first_name) = &request.first_name {
            user.set_first_name(first_name);
        }
        if let Some(last_name) = &request.last_name {
            user.set_last_name(last_name);
        }

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreFailureKind;
    use crate::infrastructure::user::password::Argon2Hasher;

    fn create_store() -> InMemoryUserRecordStore {
        InMemoryUserRecordStore::new(Arc::new(Argon2Hasher::new()))
    }

    fn registration(username: &str) -> RegistrationRequest {
        RegistrationRequest {
            username: username.to_string(),
            password: "Str0ng!pw".to_string(),
            email: format!("{}@example.com", username),
            first_name: None,
            last_name: None,
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            id: None,
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = create_store();

        let created = store.create(&registration("ann")).await.unwrap();

        let by_id = store.find_by_id(created.id()).await.unwrap();
        assert_eq!(by_id.username(), "ann");

        let by_name = store.find_by_username("ann").await.unwrap();
        assert_eq!(by_name.id(), created.id());
    }

    #[tokio::test]
    async fn test_password_is_hashed() {
        let store = create_store();

        let created = store.create(&registration("ann")).await.unwrap();
        assert_ne!(created.password_hash(), "Str0ng!pw");
        assert!(created.password_hash().starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = create_store();

        store.create(&registration("ann")).await.unwrap();
        let result = store.create(&registration("ann")).await;

        assert_eq!(result.unwrap_err().kind(), StoreFailureKind::Conflict);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let store = create_store();

        let by_name = store.find_by_username("ghost").await.unwrap_err();
        assert!(by_name.is_not_found());

        let by_id = store
            .find_by_id(&UserId::new("missing-id").unwrap())
            .await
            .unwrap_err();
        assert_eq!(by_id.message(), "no such user exist");
    }

    #[tokio::test]
    async fn test_check_credentials() {
        let store = create_store();
        let created = store.create(&registration("ann")).await.unwrap();

        let user = store.check_credentials(&login("ann", "Str0ng!pw")).await.unwrap();
        assert_eq!(user.id(), created.id());

        let wrong = store
            .check_credentials(&login("ann", "Wr0ng!pw"))
            .await
            .unwrap_err();
        assert_eq!(wrong.kind(), StoreFailureKind::Rejected);
        assert_eq!(wrong.message(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_check_credentials_by_id() {
        let store = create_store();
        let created = store.create(&registration("ann")).await.unwrap();

        let request = LoginRequest {
            username: None,
            id: Some(created.id().to_string()),
            password: "Str0ng!pw".to_string(),
        };

        let user = store.check_credentials(&request).await.unwrap();
        assert_eq!(user.username(), "ann");
    }

    #[tokio::test]
    async fn test_unknown_user_gets_same_message_as_wrong_password() {
        let store = create_store();

        let failure = store
            .check_credentials(&login("ghost", "Str0ng!pw"))
            .await
            .unwrap_err();

        assert_eq!(failure.kind(), StoreFailureKind::Rejected);
        assert_eq!(failure.message(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_check_credentials_without_identity() {
        let store = create_store();

        let failure = store
            .check_credentials(&LoginRequest::default())
            .await
            .unwrap_err();

        assert_eq!(failure.kind(), StoreFailureKind::Rejected);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let store = create_store();
        let created = store.create(&registration("ann")).await.unwrap();

        let updated = store
            .update(&UpdateRequest {
                id: created.id().to_string(),
                email: None,
                first_name: Some("Ann".to_string()),
                last_name: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.profile().first_name.as_deref(), Some("Ann"));
        assert_eq!(updated.email(), "ann@example.com");
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.username(), "ann");
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let store = create_store();

        let failure = store
            .update(&UpdateRequest {
                id: "missing-id".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(failure.is_not_found());
    }
}
