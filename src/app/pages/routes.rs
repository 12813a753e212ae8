//! Router shell: maps the current path to the signup or login view.
//!
//! The path itself is owned by the router's history; nothing here stores it.

use dioxus::prelude::*;

use crate::app::pages::{LoginPage, SignupPage};
use crate::config::AppConfig;
use crate::shared::logging::{log_route_resolved, log_route_unmatched};
use crate::shared::state::Flash;

/// What a route puts on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Signup,
    Login,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Signup => "signup",
            View::Login => "login",
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    // Index and /signup share one view; the URL stays as typed
    #[route("/", SignupPage)]
    Index {},
    #[route("/signup", SignupPage)]
    Signup {},
    #[route("/login", LoginPage)]
    Login {},

    // No not-found page: anything else renders an empty tree
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}

impl Route {
    pub fn view(&self) -> Option<View> {
        match self {
            Route::Index {} | Route::Signup {} => Some(View::Signup),
            Route::Login {} => Some(View::Login),
            Route::Unmatched { .. } => None,
        }
    }

    /// Paths match case-insensitively: an unmatched path is retried in
    /// lowercase, so `/LOGIN` resolves to `Login`.
    pub fn case_folded(&self) -> Route {
        match self {
            Route::Unmatched { segments } => format!("/{}", segments.join("/"))
                .to_lowercase()
                .parse()
                .unwrap_or_else(|_| self.clone()),
            known => known.clone(),
        }
    }
}

/// View rendered for `path`, `None` when the path renders nothing.
pub fn resolve(path: &str) -> Option<View> {
    path.parse::<Route>()
        .ok()
        .and_then(|route| route.case_folded().view())
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_context_provider(AppConfig::from_build_env);
    use_context_provider(|| Flash::new(None));

    use_effect(|| {
        tracing::info!("webook-web router initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
    }
}

/// Adds no markup of its own. Reports the selected view once per
/// navigation and renders case-folded matches in place of `Unmatched`.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();

    use_effect(use_reactive((&route,), |(route,)| {
        if let Some(view) = route.case_folded().view() {
            log_route_resolved(&route.to_string(), view.as_str());
        }
    }));

    // The URL keeps the case it was typed in
    if route.view().is_none() {
        match route.case_folded().view() {
            Some(View::Signup) => return rsx! { SignupPage {} },
            Some(View::Login) => return rsx! { LoginPage {} },
            None => {}
        }
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn Unmatched(segments: Vec<String>) -> Element {
    use_effect(use_reactive((&segments,), |(segments,)| {
        log_route_unmatched(&format!("/{}", segments.join("/")));
    }));

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use dioxus::history::{History, MemoryHistory};

    use crate::config::DEFAULT_API_BASE_URL;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        path: String,
        flash: Option<String>,
    }

    fn harness(props: HarnessProps) -> Element {
        use_context_provider(|| AppConfig::new(DEFAULT_API_BASE_URL));
        use_context_provider(|| Flash::new(props.flash.clone()));
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path(props.path.clone())) as Rc<dyn History>
        });

        rsx! {
            Router::<Route> {}
        }
    }

    fn render_with_flash(path: &str, flash: Option<&str>) -> String {
        let mut dom = VirtualDom::new_with_props(
            harness,
            HarnessProps {
                path: path.to_string(),
                flash: flash.map(str::to_string),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_at(path: &str) -> String {
        render_with_flash(path, None)
    }

    #[test]
    fn test_index_and_signup_render_the_same_form() {
        let index = render_at("/");
        let signup = render_at("/signup");
        assert_eq!(index, signup);
        assert!(index.contains("Sign up</h2>"));
        assert!(!index.contains("Log in</h2>"));
    }

    #[test]
    fn test_login_renders_login_form() {
        let html = render_at("/login");
        assert!(html.contains("Log in</h2>"));
        assert!(!html.contains("Sign up</h2>"));
    }

    #[test]
    fn test_unknown_path_renders_empty_tree() {
        assert_eq!(render_at("/nonexistent"), "");
        assert_eq!(render_at("/users/profile"), "");
    }

    #[test]
    fn test_rendering_ignores_path_case() {
        assert_eq!(render_at("/LOGIN"), render_at("/login"));
        assert_eq!(render_at("/Signup"), render_at("/signup"));
    }

    #[test]
    fn test_login_page_shows_pending_flash() {
        let html = render_with_flash("/login", Some("注册成功"));
        assert!(html.contains("注册成功"));
        assert!(!render_at("/login").contains("c-notice"));
    }

    #[test]
    fn test_resolve_ignores_case() {
        assert_eq!(resolve("/LOGIN"), Some(View::Login));
        assert_eq!(resolve("/Signup"), Some(View::Signup));
        assert_eq!(resolve("/NonExistent"), None);
    }

    #[test]
    fn test_index_renders_signup() {
        assert_eq!(resolve("/"), Some(View::Signup));
    }

    #[test]
    fn test_signup_path_matches_index() {
        assert_eq!(resolve("/signup"), Some(View::Signup));
        assert_eq!(resolve("/signup"), resolve("/"));
    }

    #[test]
    fn test_login_path_renders_login() {
        assert_eq!(resolve("/login"), Some(View::Login));
    }

    #[test]
    fn test_unknown_paths_render_nothing() {
        assert_eq!(resolve("/nonexistent"), None);
        assert_eq!(resolve("/users/profile"), None);
    }

    #[test]
    fn test_unknown_path_parses_to_catch_all() {
        let route: Route = "/nonexistent".parse().unwrap();
        assert_eq!(
            route,
            Route::Unmatched { segments: vec!["nonexistent".to_string()] }
        );
    }

    #[test]
    fn test_routes_render_back_to_their_paths() {
        assert_eq!(Route::Index {}.to_string(), "/");
        assert_eq!(Route::Signup {}.to_string(), "/signup");
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
