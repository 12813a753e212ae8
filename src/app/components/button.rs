use dioxus::prelude::*;

#[component]
pub fn Button(
    disabled: Option<bool>,
    /// `submit` inside forms, `button` otherwise
    #[props(default = "button".to_string())]
    kind: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let disabled = disabled.unwrap_or(false);

    rsx! {
        button {
            class: "c-button c-button--primary",
            r#type: "{kind}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
