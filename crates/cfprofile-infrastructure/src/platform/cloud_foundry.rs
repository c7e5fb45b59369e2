//! Cloud Foundry binding source
//!
//! Reads the services bound to the container from `VCAP_SERVICES`. The
//! platform counts as present only when `VCAP_APPLICATION` is set.
//!
//! Each service is classified by the first kind whose signature matches
//! any of: one of its tags, a label prefix, or the scheme of its
//! `uri`/`url` credential. Nothing else in the credentials is read.

use crate::config::PlatformConfig;
use crate::constants::{
    CLOUD_FOUNDRY_PLATFORM_NAME, CREDENTIAL_URI_KEYS, VCAP_APPLICATION_VAR, VCAP_SERVICES_VAR,
};
use crate::error_ext::ErrorContext;
use cfprofile_domain::error::{Error, Result};
use cfprofile_domain::ports::ServiceBindingSource;
use cfprofile_domain::value_objects::{ServiceBinding, ServiceBindingKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;

struct KindSignature {
    kind: ServiceBindingKind,
    tags: &'static [&'static str],
    label_prefixes: &'static [&'static str],
    uri_schemes: &'static [&'static str],
}

const SIGNATURES: &[KindSignature] = &[
    KindSignature {
        kind: ServiceBindingKind::RelationalMysql,
        tags: &["mysql"],
        label_prefixes: &["cleardb", "p-mysql"],
        uri_schemes: &["mysql"],
    },
    KindSignature {
        kind: ServiceBindingKind::RelationalPostgres,
        tags: &["postgres", "postgresql"],
        label_prefixes: &["elephantsql"],
        uri_schemes: &["postgres", "postgresql"],
    },
    KindSignature {
        kind: ServiceBindingKind::RelationalOracle,
        tags: &["oracle"],
        label_prefixes: &["oracle"],
        uri_schemes: &["oracle"],
    },
    KindSignature {
        kind: ServiceBindingKind::RelationalSqlserver,
        tags: &["sqlserver"],
        label_prefixes: &["sqlserver"],
        uri_schemes: &["sqlserver"],
    },
    KindSignature {
        kind: ServiceBindingKind::DocumentStore,
        tags: &["mongodb"],
        label_prefixes: &["mongolab"],
        uri_schemes: &["mongodb"],
    },
    KindSignature {
        kind: ServiceBindingKind::CacheStore,
        tags: &["redis"],
        label_prefixes: &["rediscloud", "p-redis"],
        uri_schemes: &["redis", "rediss"],
    },
    KindSignature {
        kind: ServiceBindingKind::MessageBroker,
        tags: &["rabbitmq", "amqp"],
        label_prefixes: &["cloudamqp", "p-rabbitmq"],
        uri_schemes: &["amqp", "amqps"],
    },
];

/// One entry of `VCAP_SERVICES`
#[derive(Debug, Deserialize)]
struct VcapService {
    name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    credentials: Option<serde_json::Value>,
}

impl VcapService {
    fn uri_scheme(&self) -> Option<&str> {
        let credentials = self.credentials.as_ref()?;
        let uri = CREDENTIAL_URI_KEYS
            .iter()
            .find_map(|key| credentials.get(*key).and_then(serde_json::Value::as_str))?;
        uri.split_once(':').map(|(scheme, _)| scheme)
    }

    fn kind(&self) -> ServiceBindingKind {
        let scheme = self.uri_scheme();
        SIGNATURES
            .iter()
            .find(|sig| {
                self.tags
                    .iter()
                    .any(|tag| sig.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
                    || self
                        .label
                        .as_deref()
                        .is_some_and(|label| sig.label_prefixes.iter().any(|p| label.starts_with(p)))
                    || scheme.is_some_and(|s| sig.uri_schemes.iter().any(|u| *u == s))
            })
            .map_or(ServiceBindingKind::Generic, |sig| sig.kind)
    }
}

/// Service bindings from a Cloud Foundry container environment
#[derive(Debug, Clone, Default)]
pub struct CloudFoundryBindingSource {
    application: Option<String>,
    services: Option<String>,
}

impl CloudFoundryBindingSource {
    /// Source over already-captured `VCAP_APPLICATION` / `VCAP_SERVICES` values
    pub fn new(application: Option<String>, services: Option<String>) -> Self {
        Self {
            application,
            services,
        }
    }

    /// Capture the standard variables from the process environment
    pub fn from_env() -> Self {
        Self::new(
            env::var(VCAP_APPLICATION_VAR).ok(),
            env::var(VCAP_SERVICES_VAR).ok(),
        )
    }

    /// Capture the variables named in `config` from the process environment
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self::new(
            env::var(&config.application_var).ok(),
            env::var(&config.services_var).ok(),
        )
    }

    /// Whether the process runs inside a Cloud Foundry container
    pub fn is_present(&self) -> bool {
        self.application.is_some()
    }
}

impl ServiceBindingSource for CloudFoundryBindingSource {
    fn platform_name(&self) -> &str {
        CLOUD_FOUNDRY_PLATFORM_NAME
    }

    fn service_bindings(&self) -> Result<Vec<ServiceBinding>> {
        if !self.is_present() {
            return Err(Error::platform_unavailable(
                "application descriptor not set; not running on Cloud Foundry",
            ));
        }
        let Some(raw) = self.services.as_deref().filter(|s| !s.trim().is_empty()) else {
            return Ok(Vec::new());
        };

        let services: BTreeMap<String, Vec<VcapService>> =
            serde_json::from_str(raw).platform_context("Malformed VCAP_SERVICES")?;

        Ok(services
            .into_values()
            .flatten()
            .map(|service| ServiceBinding::new(service.kind()).with_name(service.name))
            .collect())
    }
}
