// Domain services (pure Rust, no framework dependencies)
pub mod validation;

pub use validation::{validate_email, validate_login, validate_password, validate_signup, ValidationError};
