//! Form validation shared by the client forms and the auth endpoints
//!
//! Validation failures stay local to the form that produced them and never
//! reach the identity provider.

use serde::{Deserialize, Serialize};

/// Message shown when the terms checkbox is left unchecked
pub const TERMS_REQUIRED_MESSAGE: &str =
    "You must agree to the Terms of Service and Privacy Policy.";

/// Per-field validation errors of a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Form validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields(FieldErrors),

    #[error("{}", TERMS_REQUIRED_MESSAGE)]
    TermsNotAccepted,
}

impl FormError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FormError::MissingFields(errors) => Some(errors),
            FormError::TermsNotAccepted => None,
        }
    }
}

/// Registration form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub agree_terms: bool,
}

/// Validated registration data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegistrationForm {
    /// Check required fields first, then the agreement checkbox.
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let mut errors = FieldErrors::default();
        if self.username.trim().is_empty() {
            errors.username = Some("Username is required.".to_string());
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required.".to_string());
        }
        if self.password.trim().is_empty() {
            errors.password = Some("Password is required.".to_string());
        }
        if !errors.is_empty() {
            return Err(FormError::MissingFields(errors));
        }

        if !self.agree_terms {
            return Err(FormError::TermsNotAccepted);
        }

        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.username.trim().to_string(),
        })
    }
}

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        let mut errors = FieldErrors::default();
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required.".to_string());
        }
        if self.password.is_empty() {
            errors.password = Some("Password is required.".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            username: "peterpaul".to_string(),
            email: "peter.paul@example.com".to_string(),
            password: "Secret123!".to_string(),
            agree_terms: true,
        }
    }

    #[test]
    fn test_valid_registration() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.name, "peterpaul");
        assert_eq!(request.email, "peter.paul@example.com");
        assert_eq!(request.password, "Secret123!");
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let form = RegistrationForm {
            username: " ".to_string(),
            email: String::new(),
            password: "Secret123!".to_string(),
            agree_terms: true,
        };

        let err = form.validate().unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.username.as_deref(), Some("Username is required."));
        assert_eq!(fields.email.as_deref(), Some("Email is required."));
        assert!(fields.password.is_none());
    }

    #[test]
    fn test_terms_checked_after_fields() {
        let mut form = filled_form();
        form.agree_terms = false;
        assert_eq!(form.validate(), Err(FormError::TermsNotAccepted));

        form.email.clear();
        assert!(matches!(form.validate(), Err(FormError::MissingFields(_))));
    }

    #[test]
    fn test_terms_error_message() {
        assert_eq!(FormError::TermsNotAccepted.to_string(), TERMS_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_login_validation() {
        let empty = LoginRequest::default();
        let err = empty.validate().unwrap_err();
        assert!(err.field_errors().unwrap().email.is_some());
        assert!(err.field_errors().unwrap().password.is_some());

        let ok = LoginRequest {
            email: "peter.paul@example.com".to_string(),
            password: "Secret123!".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_registration_form_deserializes() {
        let json = r#"{
            "username": "peterpaul",
            "email": "peter.paul@example.com",
            "password": "Secret123!",
            "agree_terms": true
        }"#;
        let form: RegistrationForm = serde_json::from_str(json).unwrap();
        assert_eq!(form, filled_form());
    }
}
