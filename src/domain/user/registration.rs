//! Registration and profile update validation

use std::sync::Arc;

use tracing::debug;

use super::repository::{StoreFailure, UserRecordStore};
use super::requests::{RegistrationRequest, UpdateRequest};
use super::validation::{
    validate_email, validate_name, validate_password, validate_username, UserValidationError,
    ValidationFailure,
};

/// Checks a registration request against field rules and username uniqueness
#[derive(Debug, Clone)]
pub struct RegistrationValidator {
    store: Arc<dyn UserRecordStore>,
}

impl RegistrationValidator {
    pub fn new(store: Arc<dyn UserRecordStore>) -> Self {
        Self { store }
    }

    /// Run the structural checks in field order, then the username
    /// uniqueness check, and return the collected failures.
    ///
    /// An empty list means the request is valid. A store error during the
    /// uniqueness lookup aborts validation.
    pub async fn validate(
        &self,
        request: &RegistrationRequest,
    ) -> Result<Vec<ValidationFailure>, StoreFailure> {
        let mut failures = check_registration_fields(request);

        let username_well_formed = !failures.iter().any(|f| f.field == "username");
        if username_well_formed && self.username_taken(&request.username).await? {
            failures.push(ValidationFailure::new("username", "is already taken"));
        }

        debug!(
            username = %request.username,
            failures = failures.len(),
            "Registration validated"
        );

        Ok(failures)
    }

    async fn username_taken(&self, username: &str) -> Result<bool, StoreFailure> {
        match self.store.find_by_username(username).await {
            Ok(_) => Ok(true),
            Err(failure) if failure.is_not_found() => Ok(false),
            Err(failure) => Err(failure),
        }
    }
}

/// Structural checks over a registration request
pub fn check_registration_fields(request: &RegistrationRequest) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    push_failure(&mut failures, "username", validate_username(&request.username));
    push_failure(&mut failures, "password", validate_password(&request.password));
    push_failure(&mut failures, "email", validate_email(&request.email));
    check_names(
        &mut failures,
        request.first_name.as_deref(),
        request.last_name.as_deref(),
    );

    failures
}

/// Structural checks over the fields present in a profile update
pub fn check_update_fields(request: &UpdateRequest) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if let Some(email) = request.email.as_deref() {
        push_failure(&mut failures, "email", validate_email(email));
    }
    check_names(
        &mut failures,
        request.first_name.as_deref(),
        request.last_name.as_deref(),
    );

    failures
}

fn check_names(
    failures: &mut Vec<ValidationFailure>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) {
    if let Some(name) = first_name {
        push_failure(failures, "first_name", validate_name(name));
    }
    if let Some(name) = last_name {
        push_failure(failures, "last_name", validate_name(name));
    }
}

fn push_failure(
    failures: &mut Vec<ValidationFailure>,
    field: &str,
    result: Result<(), UserValidationError>,
) {
    if let Err(e) = result {
        failures.push(ValidationFailure::from_error(field, &e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::repository::MockUserRecordStore;
    use crate::domain::user::{User, UserId, UserProfile};

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            username: "ann".to_string(),
            password: "Str0ng!pw".to_string(),
            email: "a@x.com".to_string(),
            first_name: None,
            last_name: None,
        }
    }

    fn existing_user() -> User {
        User::new(
            UserId::new("user-1").unwrap(),
            "ann",
            "hash",
            UserProfile::default(),
        )
    }

    fn validator_with(mock: MockUserRecordStore) -> RegistrationValidator {
        RegistrationValidator::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_valid_request_has_no_failures() {
        let mut mock = MockUserRecordStore::new();
        mock.expect_find_by_username()
            .times(1)
            .returning(|_| Err(StoreFailure::not_found("no such user exist")));

        let failures = validator_with(mock).validate(&valid_request()).await.unwrap();
        assert!(failures.is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_are_named() {
        let mut mock = MockUserRecordStore::new();
        mock.expect_find_by_username().never();

        let request = RegistrationRequest::default();
        let failures = validator_with(mock).validate(&request).await.unwrap();

        let fields: Vec<&str> = failures.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["username", "password", "email"]);
        assert!(failures.iter().all(|f| f.reason == "is required"));
    }

    #[tokio::test]
    async fn test_taken_username() {
        let mut mock = MockUserRecordStore::new();
        mock.expect_find_by_username()
            .returning(|_| Ok(existing_user()));

        let failures = validator_with(mock).validate(&valid_request()).await.unwrap();
        assert_eq!(
            failures,
            vec![ValidationFailure::new("username", "is already taken")]
        );
    }

    #[tokio::test]
    async fn test_store_error_aborts_validation() {
        let mut mock = MockUserRecordStore::new();
        mock.expect_find_by_username()
            .returning(|_| Err(StoreFailure::backend("connection reset")));

        let result = validator_with(mock).validate(&valid_request()).await;
        assert_eq!(result.unwrap_err().message(), "connection reset");
    }

    #[tokio::test]
    async fn test_uniqueness_checked_alongside_other_failures() {
        let mut mock = MockUserRecordStore::new();
        mock.expect_find_by_username()
            .returning(|_| Ok(existing_user()));

        let request = RegistrationRequest {
            email: "broken".to_string(),
            ..valid_request()
        };
        let failures = validator_with(mock).validate(&request).await.unwrap();

        let fields: Vec<&str> = failures.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "username"]);
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        let request = UpdateRequest {
            id: "user-1".to_string(),
            email: None,
            first_name: Some("n".repeat(101)),
            last_name: None,
        };

        let failures = check_update_fields(&request);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "first_name");
    }

    #[test]
    fn test_update_rejects_bad_email() {
        let request = UpdateRequest {
            id: "user-1".to_string(),
            email: Some("nope".to_string()),
            ..Default::default()
        };

        let failures = check_update_fields(&request);
        assert_eq!(failures[0].field, "email");
    }
}
