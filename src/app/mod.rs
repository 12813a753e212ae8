pub mod components;
pub mod layouts;
pub mod pages;

// Root component with the router
pub use pages::routes::{resolve, App, Route, View};
