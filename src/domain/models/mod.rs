// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod auth;
pub mod credentials;

pub use auth::{AuthAction, AuthOutcome};
pub use credentials::{LoginRequest, SignupRequest};
