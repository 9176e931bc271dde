use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user record as stored and returned by the API.
///
/// Serialized with camelCase field names on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Immutable identifier, assigned at creation and never reused
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Build a new user from validated input and a freshly generated id.
    pub fn new(id: Uuid, input: CreateUser) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }
    }

    /// Apply a partial update in place.
    ///
    /// Provided fields replace current values unconditionally; absent
    /// fields are left untouched. An empty string counts as provided.
    pub fn apply_update(&mut self, input: UpdateUser) {
        if let Some(first_name) = input.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = input.email {
            self.email = email;
        }
    }
}

/// Input for creating a user. All fields are required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
}

/// Input for updating a user. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_apply_update_with_no_fields_changes_nothing() {
        let mut user = sample_user();
        let before = user.clone();

        user.apply_update(UpdateUser::default());

        assert_eq!(user, before);
    }

    #[test]
    fn test_apply_update_replaces_only_provided_fields() {
        let mut user = sample_user();

        user.apply_update(UpdateUser {
            first_name: Some("Janet".to_string()),
            last_name: None,
            email: None,
        });

        assert_eq!(user.first_name, "Janet");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.email, "jane@example.com");
    }

    #[test]
    fn test_apply_update_empty_string_counts_as_provided() {
        let mut user = sample_user();

        user.apply_update(UpdateUser {
            first_name: Some(String::new()),
            last_name: None,
            email: None,
        });

        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "Doe");
    }

    #[test]
    fn test_user_serializes_with_camel_case_fields() {
        let user = sample_user();

        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("firstName").is_some());
        assert!(value.get("lastName").is_some());
        assert!(value.get("first_name").is_none());
        assert_eq!(value["email"], "jane@example.com");
    }

    #[test]
    fn test_create_user_deserializes_camel_case_fields() {
        let input: CreateUser = serde_json::from_str(
            r#"{"firstName":"Jane","lastName":"Doe","email":"jane@example.com"}"#,
        )
        .unwrap();
        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.last_name, "Doe");

        // snake_case keys are not part of the wire contract
        let snake = serde_json::from_str::<CreateUser>(
            r#"{"first_name":"Jane","last_name":"Doe","email":"jane@example.com"}"#,
        );
        assert!(snake.is_err());
    }

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUser {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = CreateUser {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_name = CreateUser {
            first_name: String::new(),
            ..valid
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_update_user_optional_email_validated_when_present() {
        let absent = UpdateUser::default();
        assert!(absent.validate().is_ok());

        let invalid = UpdateUser {
            email: Some("nope".to_string()),
            ..UpdateUser::default()
        };
        assert!(invalid.validate().is_err());
    }
}
