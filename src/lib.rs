// Public API exports (shared between WASM and native builds)
pub mod config;
pub mod domain;
pub mod shared;

pub mod app;
