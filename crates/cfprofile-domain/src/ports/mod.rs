//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the infrastructure layer.
//!
//! - **binding_source** - Platforms that report bound services

/// Platform service-binding source port
pub mod binding_source;

pub use binding_source::ServiceBindingSource;
