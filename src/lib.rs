pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod presentation;
pub mod scorer;
pub mod tables;
// cmd and reports are binary modules (declared in main.rs).

pub use error::{FitRankError, FrResult};
