//! Platform Binding Source Port
//!
//! Contract for whatever runtime platform can report the services bound to
//! this process. Implementations live in `cfprofile-infrastructure`.

use crate::error::Result;
use crate::value_objects::ServiceBinding;

/// Source of service bindings supplied by a runtime platform
///
/// A source must return [`crate::error::Error::PlatformUnavailable`] when the
/// process is not running on its platform, so callers can tell "no platform"
/// apart from a real failure.
pub trait ServiceBindingSource: Send + Sync {
    /// Short name of the platform, used in logs
    fn platform_name(&self) -> &str;

    /// Every service bound to this process, in platform order
    fn service_bindings(&self) -> Result<Vec<ServiceBinding>>;
}
