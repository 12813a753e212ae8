use dioxus::prelude::*;

/// Labelled input bound to a string value.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default)]
    placeholder: String,
    #[props(default)]
    autocomplete: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "c-field",
            label { class: "c-field__label", r#for: "{id}", "{label}" }
            input {
                class: "c-field__input",
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                autocomplete: "{autocomplete}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
