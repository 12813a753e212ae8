/// Text the webook backend answers on a successful signup.
pub const SIGNUP_ACCEPTED: &str = "注册成功";
/// Text the webook backend answers on a successful login.
pub const LOGIN_ACCEPTED: &str = "登录成功";

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Signup,
    Login,
}

impl AuthAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthAction::Signup => "signup",
            AuthAction::Login => "login",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthAction::Signup => "/users/signup",
            AuthAction::Login => "/users/login",
        }
    }

    fn accepted_text(&self) -> &'static str {
        match self {
            AuthAction::Signup => SIGNUP_ACCEPTED,
            AuthAction::Login => LOGIN_ACCEPTED,
        }
    }
}

/// Result of a submission as reported by the backend.
///
/// The backend replies 200 with a plain-text message for both success and
/// business-level rejection (duplicate email, wrong password), so the body
/// text decides acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub accepted: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn from_response(action: AuthAction, body: &str) -> Self {
        let message = body.trim().to_string();
        Self {
            accepted: message == action.accepted_text(),
            message,
        }
    }
}
