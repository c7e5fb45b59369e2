//! Platform service bindings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of backend resource a platform binding describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceBindingKind {
    RelationalPostgres,
    RelationalMysql,
    RelationalOracle,
    RelationalSqlserver,
    DocumentStore,
    CacheStore,
    MessageBroker,
    /// A bound service of a kind no backend profile covers
    Generic,
}

impl ServiceBindingKind {
    /// Kinds that select a backend profile, in classification order
    pub const RECOGNIZED: [ServiceBindingKind; 7] = [
        ServiceBindingKind::RelationalMysql,
        ServiceBindingKind::RelationalPostgres,
        ServiceBindingKind::RelationalOracle,
        ServiceBindingKind::RelationalSqlserver,
        ServiceBindingKind::DocumentStore,
        ServiceBindingKind::CacheStore,
        ServiceBindingKind::MessageBroker,
    ];

    /// Stable tag for logs and serialized output
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceBindingKind::RelationalPostgres => "relational-postgres",
            ServiceBindingKind::RelationalMysql => "relational-mysql",
            ServiceBindingKind::RelationalOracle => "relational-oracle",
            ServiceBindingKind::RelationalSqlserver => "relational-sqlserver",
            ServiceBindingKind::DocumentStore => "document-store",
            ServiceBindingKind::CacheStore => "cache-store",
            ServiceBindingKind::MessageBroker => "message-broker",
            ServiceBindingKind::Generic => "generic",
        }
    }
}

impl fmt::Display for ServiceBindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service attached to this process by the platform
///
/// Only the kind takes part in resolution; the instance name is kept for
/// log output. Credentials are never read into this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBinding {
    kind: ServiceBindingKind,
    name: String,
}

impl ServiceBinding {
    /// Create a binding named after its kind
    pub fn new(kind: ServiceBindingKind) -> Self {
        Self {
            kind,
            name: kind.as_str().to_string(),
        }
    }

    /// Set the binding's instance name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(&self) -> ServiceBindingKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ServiceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.kind)
    }
}
