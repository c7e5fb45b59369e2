//! # Domain Layer
//!
//! Types and contracts for deciding which backend integration a process
//! activates at startup.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Binding kind to profile lookup, local profile set |
//! | [`constants`] | Profile suffixes and published property names |
//! | [`error`] | Error type and `Result` alias |
//! | [`ports`] | Platform binding source contract |
//! | [`value_objects`] | Bindings, profiles, component groups, environment |

pub mod catalog;
pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ports::ServiceBindingSource;
pub use value_objects::{
    ActiveProfileSet, ComponentGroup, Environment, ExclusionList, ProfileName, PropertySource,
    PropertySources, ServiceBinding, ServiceBindingKind,
};
