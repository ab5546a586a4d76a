use serde::Deserialize;
use validator::Validate;

use crate::validators;

/// Setup form values as submitted, admin already trimmed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetupFormDto {
    #[validate(custom(function = "validators::required"))]
    pub admin: String,

    #[validate(length(min = 1))]
    pub pass: String,

    #[validate(must_match(other = "pass"))]
    pub verify: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_setup_form() {
        let data = SetupFormDto {
            admin: "bob".to_string(),
            pass: "secret".to_string(),
            verify: "secret".to_string(),
        };
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_verify_is_not_trimmed() {
        let data = SetupFormDto {
            admin: "bob".to_string(),
            pass: "secret".to_string(),
            verify: "secret ".to_string(),
        };
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("verify"));
        assert!(!errors.field_errors().contains_key("pass"));
    }

    #[test]
    fn test_whitespace_password_is_accepted() {
        let data = SetupFormDto {
            admin: "bob".to_string(),
            pass: " ".to_string(),
            verify: " ".to_string(),
        };
        assert!(data.validate().is_ok());
    }
}
