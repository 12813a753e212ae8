use dioxus::prelude::*;

/// Inline half of the centering; `.c-centered` in layout.css carries the same rules.
pub const CENTERED_STYLE: &str =
    "display: flex; justify-content: center; align-items: center; min-height: 100vh; width: 100%;";

/// Full-viewport flex container centering its child on both axes.
#[component]
pub fn CenteredLayout(children: Element) -> Element {
    rsx! {
        div { class: "c-centered", style: CENTERED_STYLE,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening_tag(html: &str) -> &str {
        html.split_once('>').map(|(tag, _)| tag).unwrap_or(html)
    }

    #[test]
    fn test_wrapper_markup_does_not_depend_on_child() {
        let first = dioxus_ssr::render_element(rsx! {
            CenteredLayout { form { "signup" } }
        });
        let second = dioxus_ssr::render_element(rsx! {
            CenteredLayout { section { "login" } }
        });

        assert_eq!(opening_tag(&first), opening_tag(&second));
        assert!(first.starts_with("<div class=\"c-centered\""));
        assert!(first.contains(CENTERED_STYLE));
        assert!(first.contains("signup"));
        assert!(second.contains("login"));
    }
}
