//! Domain Value Objects
//!
//! Immutable value objects describing bindings, profiles and the
//! environment view they are resolved into.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceBinding`] | A service attached by the platform |
//! | [`ServiceBindingKind`] | The backend kind a binding describes |
//! | [`ProfileName`] | A backend-selecting profile |
//! | [`ComponentGroup`] | A family of suppressible wiring |
//! | [`ExclusionList`] | Identifiers to suppress, in order |
//! | [`Environment`] | Active profiles plus layered properties |

/// Platform service bindings
pub mod binding;
/// Suppressible component groups
pub mod component_group;
/// Active profiles and property sources
pub mod environment;
/// Backend profile vocabulary
pub mod profile;

// Re-export commonly used value objects
pub use binding::{ServiceBinding, ServiceBindingKind};
pub use component_group::{ComponentGroup, ExclusionList};
pub use environment::{ActiveProfileSet, Environment, PropertySource, PropertySources};
pub use profile::ProfileName;
