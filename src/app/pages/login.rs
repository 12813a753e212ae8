use dioxus::prelude::*;

use crate::app::components::LoginForm;
use crate::app::layouts::CenteredLayout;

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        CenteredLayout {
            LoginForm {}
        }
    }
}
