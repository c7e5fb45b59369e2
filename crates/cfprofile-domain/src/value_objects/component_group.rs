//! Component groups the hosting runtime can suppress

use serde::{Deserialize, Serialize};
use std::fmt;

/// A family of automatic wiring tied to one backend kind
///
/// Each family expands to a fixed list of opaque identifiers understood by
/// the hosting runtime's module registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentGroup {
    /// Relational data-source wiring
    Relational,
    /// Document-store client, data and repository wiring
    DocumentStore,
    /// Key-value cache client and repository wiring
    CacheStore,
    /// Message-broker wiring
    MessageBroker,
}

const RELATIONAL_IDS: &[&str] = &["jdbc.datasource"];

const DOCUMENT_STORE_IDS: &[&str] = &["mongo.client", "mongo.data", "mongo.repositories"];

const CACHE_STORE_IDS: &[&str] = &["redis.client", "redis.repositories"];

const MESSAGE_BROKER_IDS: &[&str] = &["amqp.rabbit"];

impl ComponentGroup {
    /// Identifiers registered by the hosting runtime for this group
    pub fn identifiers(self) -> &'static [&'static str] {
        match self {
            ComponentGroup::Relational => RELATIONAL_IDS,
            ComponentGroup::DocumentStore => DOCUMENT_STORE_IDS,
            ComponentGroup::CacheStore => CACHE_STORE_IDS,
            ComponentGroup::MessageBroker => MESSAGE_BROKER_IDS,
        }
    }
}

impl fmt::Display for ComponentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentGroup::Relational => "relational",
            ComponentGroup::DocumentStore => "document-store",
            ComponentGroup::CacheStore => "cache-store",
            ComponentGroup::MessageBroker => "message-broker",
        };
        f.write_str(name)
    }
}

/// Ordered component-group identifiers to suppress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionList {
    identifiers: Vec<String>,
}

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the list by expanding each group in order
    pub fn from_groups(groups: &[ComponentGroup]) -> Self {
        let mut list = Self::new();
        for group in groups {
            list.exclude(*group);
        }
        list
    }

    /// Append every identifier of `group`
    pub fn exclude(&mut self, group: ComponentGroup) {
        self.identifiers
            .extend(group.identifiers().iter().map(|id| (*id).to_string()));
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Whether every identifier of `group` is in the list
    pub fn excludes(&self, group: ComponentGroup) -> bool {
        group
            .identifiers()
            .iter()
            .all(|id| self.identifiers.iter().any(|e| e == id))
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Join the identifiers with `delimiter`
    pub fn join(&self, delimiter: &str) -> String {
        self.identifiers.join(delimiter)
    }
}
