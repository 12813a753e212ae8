use dioxus::prelude::*;

use crate::app::components::{Button, ErrorMessage, Notice, TextField};
use crate::app::pages::routes::Route;
use crate::config::AppConfig;
use crate::domain::models::{AuthAction, LoginRequest};
use crate::domain::services::validate_login;
use crate::shared::logging::log_validation_failed;
use crate::shared::services::AuthService;
use crate::shared::state::Flash;

/// Email + password. Shows the backend's answer; nothing is stored.
#[component]
pub fn LoginForm() -> Element {
    let config = use_context::<AppConfig>();
    let mut flash = use_context::<Flash>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    // e.g. the signup confirmation when arriving from the signup form
    let mut notice = use_signal(|| flash.take());
    let mut is_submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if *is_submitting.read() {
            return;
        }

        let req = LoginRequest {
            email: email(),
            password: password(),
        };
        notice.set(None);
        if let Err(e) = validate_login(&req) {
            log_validation_failed(AuthAction::Login, &e.to_string());
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        is_submitting.set(true);
        let service = AuthService::new(config.clone());
        spawn(async move {
            match service.login(&req).await {
                Ok(outcome) if outcome.accepted => notice.set(Some(outcome.message)),
                Ok(outcome) => error.set(Some(outcome.message)),
                Err(e) => error.set(Some(e.user_message())),
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        form { class: "c-form", onsubmit,
            h2 { class: "c-form__title", "Log in" }

            if let Some(message) = error() {
                ErrorMessage { message }
            }
            if let Some(message) = notice() {
                Notice { message }
            }

            TextField {
                id: "login-email",
                label: "Email",
                value: email(),
                input_type: "email",
                placeholder: "you@example.com",
                autocomplete: "email",
                oninput: move |value| email.set(value),
            }
            TextField {
                id: "login-password",
                label: "Password",
                value: password(),
                input_type: "password",
                autocomplete: "current-password",
                oninput: move |value| password.set(value),
            }

            Button { kind: "submit", disabled: is_submitting(),
                if is_submitting() { "Logging in..." } else { "Log in" }
            }

            p { class: "c-form__footer",
                "No account yet? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
