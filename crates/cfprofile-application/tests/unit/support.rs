//! Stub binding sources shared by the unit tests

use cfprofile_domain::error::{Error, Result};
use cfprofile_domain::ports::ServiceBindingSource;
use cfprofile_domain::value_objects::{ServiceBinding, ServiceBindingKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source returning a fixed list of bindings and counting calls
pub struct FixedBindingSource {
    bindings: Vec<ServiceBinding>,
    calls: AtomicUsize,
}

impl FixedBindingSource {
    pub fn of_kinds(kinds: &[ServiceBindingKind]) -> Arc<Self> {
        Arc::new(Self {
            bindings: kinds.iter().copied().map(ServiceBinding::new).collect(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ServiceBindingSource for FixedBindingSource {
    fn platform_name(&self) -> &str {
        "fixed"
    }

    fn service_bindings(&self) -> Result<Vec<ServiceBinding>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bindings.clone())
    }
}

/// Source that is never running on its platform
pub struct AbsentPlatform;

impl ServiceBindingSource for AbsentPlatform {
    fn platform_name(&self) -> &str {
        "absent"
    }

    fn service_bindings(&self) -> Result<Vec<ServiceBinding>> {
        Err(Error::platform_unavailable("not running on a platform"))
    }
}

/// Source that fails for a reason other than platform absence
pub struct BrokenPlatform;

impl ServiceBindingSource for BrokenPlatform {
    fn platform_name(&self) -> &str {
        "broken"
    }

    fn service_bindings(&self) -> Result<Vec<ServiceBinding>> {
        Err(Error::platform("binding catalog unreadable"))
    }
}

pub fn bindings(kinds: &[ServiceBindingKind]) -> Vec<ServiceBinding> {
    kinds.iter().copied().map(ServiceBinding::new).collect()
}
