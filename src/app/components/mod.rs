pub mod button;
pub mod common;
pub mod text_field;

// Collaborator forms mounted by the pages
pub mod login_form;
pub mod signup_form;

pub use button::Button;
pub use common::{ErrorMessage, Notice};
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
pub use text_field::TextField;
