use dioxus::prelude::*;

use crate::app::components::{Button, ErrorMessage, TextField};
use crate::app::pages::routes::Route;
use crate::config::AppConfig;
use crate::domain::models::{AuthAction, AuthOutcome, SignupRequest};
use crate::domain::services::validate_signup;
use crate::shared::logging::log_validation_failed;
use crate::shared::services::AuthService;
use crate::shared::state::Flash;

/// Where an answered signup goes next; rejections stay on the form.
pub(crate) fn route_after(outcome: &AuthOutcome) -> Option<Route> {
    outcome.accepted.then_some(Route::Login {})
}

/// Email + password + confirmation. Moves to the login page once the
/// backend accepts the account, carrying its message along as a flash.
#[component]
pub fn SignupForm() -> Element {
    let config = use_context::<AppConfig>();
    let nav = navigator();
    let mut flash = use_context::<Flash>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if *is_submitting.read() {
            return;
        }

        let req = SignupRequest {
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        if let Err(e) = validate_signup(&req) {
            log_validation_failed(AuthAction::Signup, &e.to_string());
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        is_submitting.set(true);
        let service = AuthService::new(config.clone());
        spawn(async move {
            let result = service.signup(&req).await;
            is_submitting.set(false);
            match result {
                Ok(outcome) => match route_after(&outcome) {
                    Some(next) => {
                        flash.set(outcome.message);
                        nav.push(next);
                    }
                    None => error.set(Some(outcome.message)),
                },
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        form { class: "c-form", onsubmit,
            h2 { class: "c-form__title", "Sign up" }

            if let Some(message) = error() {
                ErrorMessage { message }
            }

            TextField {
                id: "signup-email",
                label: "Email",
                value: email(),
                input_type: "email",
                placeholder: "you@example.com",
                autocomplete: "email",
                oninput: move |value| email.set(value),
            }
            TextField {
                id: "signup-password",
                label: "Password",
                value: password(),
                input_type: "password",
                autocomplete: "new-password",
                oninput: move |value| password.set(value),
            }
            TextField {
                id: "signup-confirm-password",
                label: "Confirm password",
                value: confirm_password(),
                input_type: "password",
                autocomplete: "new-password",
                oninput: move |value| confirm_password.set(value),
            }

            Button { kind: "submit", disabled: is_submitting(),
                if is_submitting() { "Signing up..." } else { "Sign up" }
            }

            p { class: "c-form__footer",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
