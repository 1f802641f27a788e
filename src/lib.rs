pub mod config;
mod error;
pub mod service;
pub mod variables;

pub use config::{ConfigError, Platform, PlatformLoader};
pub use error::Error;
pub use service::EnvironmentService;
pub use variables::VariableSet;
