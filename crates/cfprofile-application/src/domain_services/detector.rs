//! Binding Detector
//!
//! Asks the platform, if one is configured, which services are bound to this
//! process. Running off-platform is normal and yields no bindings.

use cfprofile_domain::error::Result;
use cfprofile_domain::ports::ServiceBindingSource;
use cfprofile_domain::value_objects::ServiceBinding;
use std::sync::Arc;
use tracing::{debug, info};

/// Discovers service bindings from an optional platform source
#[derive(Clone, Default)]
pub struct BindingDetector {
    source: Option<Arc<dyn ServiceBindingSource>>,
}

impl BindingDetector {
    /// Detector backed by `source`
    pub fn new(source: Arc<dyn ServiceBindingSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Detector with no platform at all
    pub fn without_platform() -> Self {
        Self { source: None }
    }

    /// Bindings reported by the platform
    ///
    /// Returns an empty list when no source is configured or the source
    /// reports the platform as unavailable. Every other source error is
    /// returned unchanged.
    pub fn detect(&self) -> Result<Vec<ServiceBinding>> {
        let Some(source) = &self.source else {
            debug!("No platform binding source configured");
            return Ok(Vec::new());
        };

        match source.service_bindings() {
            Ok(bindings) => {
                let names: Vec<String> = bindings.iter().map(ToString::to_string).collect();
                info!(
                    platform = source.platform_name(),
                    "Found service bindings: [{}]",
                    names.join(",")
                );
                Ok(bindings)
            }
            Err(e) if e.is_platform_unavailable() => {
                debug!(platform = source.platform_name(), "{e}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for BindingDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingDetector")
            .field("source", &self.source.as_ref().map(|s| s.platform_name()))
            .finish()
    }
}
