pub mod centered;

pub use centered::CenteredLayout;
