pub mod errors;
pub mod logging;
pub mod services;
pub mod state;
