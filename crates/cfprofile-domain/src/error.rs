//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for profile resolution
#[derive(Error, Debug)]
pub enum Error {
    /// More than one locally-settable backend profile was explicitly activated
    #[error(
        "Only one active profile may be set among the following: [{}]. These profiles are active: [{}]",
        .allowed.join(", "),
        .active.join(",")
    )]
    ConflictingLocalProfiles {
        /// Every profile name that may be set locally
        allowed: Vec<String>,
        /// The conflicting profiles found active
        active: Vec<String>,
    },

    /// More than one platform service binding maps to a backend profile
    #[error(
        "Only one service of the following types may be bound to this application: [{}]. These services are bound to the application: [{}]",
        .allowed.join(", "),
        .bound.join(",")
    )]
    ConflictingBindings {
        /// Every profile a binding can map to
        allowed: Vec<String>,
        /// Profiles derived from the bound services, in binding order
        bound: Vec<String>,
    },

    /// No platform binding source is available for this process
    #[error("Platform unavailable: {message}")]
    PlatformUnavailable {
        /// Why the platform could not be located
        message: String,
    },

    /// The platform binding source failed for any other reason
    #[error("Platform error: {message}")]
    Platform {
        /// Description of the platform error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a platform-unavailable error
    pub fn platform_unavailable<S: Into<String>>(message: S) -> Self {
        Self::PlatformUnavailable {
            message: message.into(),
        }
    }

    /// Create a platform error
    pub fn platform<S: Into<String>>(message: S) -> Self {
        Self::Platform {
            message: message.into(),
            source: None,
        }
    }

    /// Create a platform error with source
    pub fn platform_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Platform {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error only signals that no platform is present
    pub fn is_platform_unavailable(&self) -> bool {
        matches!(self, Self::PlatformUnavailable { .. })
    }

    /// Whether this error is one of the two profile conflicts
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ConflictingLocalProfiles { .. } | Self::ConflictingBindings { .. }
        )
    }
}
