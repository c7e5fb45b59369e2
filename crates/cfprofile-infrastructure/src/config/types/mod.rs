//! Configuration types

pub mod app;
pub mod logging;
pub mod platform;
pub mod profiles;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use platform::PlatformConfig;
pub use profiles::ProfilesConfig;
