//! Environment view shared by the resolution steps
//!
//! Holds the active profile set and the layered property sources. Profiles
//! can only be added, and property sources are looked up in precedence order
//! (index 0 wins).

use crate::constants::{DEFAULT_PROFILE, PROFILE_NEGATION_PREFIX};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Insertion-ordered set of active profile names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveProfileSet {
    profiles: Vec<String>,
}

impl ActiveProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `profile`; a name already active keeps its position
    pub fn add<S: Into<String>>(&mut self, profile: S) {
        let profile = profile.into();
        if !self.contains(&profile) {
            self.profiles.push(profile);
        }
    }

    pub fn contains(&self, profile: &str) -> bool {
        self.profiles.iter().any(|p| p == profile)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveProfileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for profile in iter {
            set.add(profile);
        }
        set
    }
}

/// A named set of configuration properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    name: String,
    properties: HashMap<String, String>,
}

impl PropertySource {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Property source holding exactly one entry
    pub fn singleton<N, K, V>(name: N, key: K, value: V) -> Self
    where
        N: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(name).with_property(key, value)
    }

    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Property sources in precedence order, highest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySources {
    sources: Vec<PropertySource>,
}

impl PropertySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with highest precedence, replacing a source of the same name
    pub fn add_first(&mut self, source: PropertySource) {
        self.remove(source.name());
        self.sources.insert(0, source);
    }

    /// Insert with lowest precedence, replacing a source of the same name
    pub fn add_last(&mut self, source: PropertySource) {
        self.remove(source.name());
        self.sources.push(source);
    }

    /// Remove the source called `name`, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<PropertySource> {
        let index = self.sources.iter().position(|s| s.name() == name)?;
        Some(self.sources.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&PropertySource> {
        self.sources.iter().find(|s| s.name() == name)
    }

    /// First value for `key` across sources in precedence order
    pub fn property(&self, key: &str) -> Option<&str> {
        self.sources.iter().find_map(|s| s.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertySource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Profiles and properties of the process being initialized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    active_profiles: ActiveProfileSet,
    property_sources: PropertySources,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment with `profiles` explicitly activated
    pub fn with_active_profiles<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_profiles: profiles.into_iter().collect(),
            property_sources: PropertySources::new(),
        }
    }

    pub fn active_profiles(&self) -> &ActiveProfileSet {
        &self.active_profiles
    }

    pub fn add_active_profile<S: Into<String>>(&mut self, profile: S) {
        self.active_profiles.add(profile);
    }

    /// Whether `expression` matches the active profiles
    ///
    /// A leading `!` negates the check. With no active profile, only the
    /// default profile is accepted.
    pub fn accepts_profile(&self, expression: &str) -> bool {
        if let Some(negated) = expression.strip_prefix(PROFILE_NEGATION_PREFIX) {
            return !self.is_profile_active(negated);
        }
        self.is_profile_active(expression)
    }

    fn is_profile_active(&self, profile: &str) -> bool {
        if self.active_profiles.is_empty() {
            profile == DEFAULT_PROFILE
        } else {
            self.active_profiles.contains(profile)
        }
    }

    pub fn property_sources(&self) -> &PropertySources {
        &self.property_sources
    }

    pub fn property_sources_mut(&mut self) -> &mut PropertySources {
        &mut self.property_sources
    }

    /// Resolve `key` across property sources in precedence order
    pub fn property(&self, key: &str) -> Option<&str> {
        self.property_sources.property(key)
    }
}
