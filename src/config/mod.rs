//! Platform settings: the path variable name and list delimiter.

mod env;
mod error;
mod loader;
mod platform;

pub use error::ConfigError;
pub use loader::PlatformLoader;
pub use platform::Platform;
