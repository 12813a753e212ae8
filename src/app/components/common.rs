use dioxus::prelude::*;

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Positive feedback after a submission (BEM: c-notice)
#[component]
pub fn Notice(message: String) -> Element {
    rsx! {
        div { class: "c-notice", role: "status",
            span { class: "c-notice__icon", "✅" }
            p { class: "c-notice__text", "{message}" }
        }
    }
}
