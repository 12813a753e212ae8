//! Client-side checks applied before a form is submitted.
//!
//! The rules match the webook backend's user handler so a request that
//! passes here is only rejected server-side for business reasons.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::models::{LoginRequest, SignupRequest};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([-+.]\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$").expect("valid email regex")
});

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_SPECIALS: &str = "$@!%*#?&";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email")]
    EmptyEmail,

    #[error("Please enter your password")]
    EmptyPassword,

    #[error("Email format is invalid")]
    InvalidEmail,

    #[error("The two passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters and contain a letter, a digit and one of $@!%*#?&")]
    WeakPassword,
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Letters, digits and specials only; at least one of each; min length.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }

    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(is_special);

    if password.chars().count() < PASSWORD_MIN_LEN || !allowed || !has_letter || !has_digit || !has_special {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

/// Same order as the backend: email, then confirmation, then policy.
pub fn validate_signup(req: &SignupRequest) -> Result<(), ValidationError> {
    validate_email(&req.email)?;
    if req.password != req.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_password(&req.password)
}

pub fn validate_login(req: &LoginRequest) -> Result<(), ValidationError> {
    if req.email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if req.password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str, password: &str, confirm: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_email_formats() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.co").is_ok());
        assert_eq!(validate_email(""), Err(ValidationError::EmptyEmail));
        assert_eq!(validate_email("alice"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("alice@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("hello#123").is_ok());
        assert!(validate_password("Abcdef1$").is_ok());
        // too short
        assert_eq!(validate_password("ab#1"), Err(ValidationError::WeakPassword));
        // no special
        assert_eq!(validate_password("hello1234"), Err(ValidationError::WeakPassword));
        // no digit
        assert_eq!(validate_password("hello#world"), Err(ValidationError::WeakPassword));
        // no letter
        assert_eq!(validate_password("12345678#"), Err(ValidationError::WeakPassword));
        // character outside the allowed set
        assert_eq!(validate_password("hello #123"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password(""), Err(ValidationError::EmptyPassword));
    }

    #[test]
    fn test_signup_checks_mismatch_before_policy() {
        let req = signup("alice@example.com", "short", "other");
        assert_eq!(validate_signup(&req), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_signup_checks_email_first() {
        let req = signup("not-an-email", "hello#123", "different");
        assert_eq!(validate_signup(&req), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_valid_signup() {
        let req = signup("alice@example.com", "hello#123", "hello#123");
        assert!(validate_signup(&req).is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let ok = LoginRequest { email: "alice@example.com".into(), password: "x".into() };
        assert!(validate_login(&ok).is_ok());

        let no_email = LoginRequest { email: "  ".into(), password: "x".into() };
        assert_eq!(validate_login(&no_email), Err(ValidationError::EmptyEmail));

        let no_password = LoginRequest { email: "alice@example.com".into(), password: String::new() };
        assert_eq!(validate_login(&no_password), Err(ValidationError::EmptyPassword));
    }
}
