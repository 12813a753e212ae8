use dioxus::prelude::*;

use crate::app::components::SignupForm;
use crate::app::layouts::CenteredLayout;

/// View for `/` and `/signup`.
#[component]
pub fn SignupPage() -> Element {
    rsx! {
        CenteredLayout {
            SignupForm {}
        }
    }
}
