pub mod login;
pub mod routes;
pub mod signup;

pub use login::LoginPage;
pub use signup::SignupPage;
