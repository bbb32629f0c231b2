//! Entity predicate library — reusable boolean tests over entities.
//!
//! A filter holds zero-or-more domains and zero-or-more device classes; an
//! empty list acts as a wildcard for that dimension. Device-class matching
//! requires the entity's attribute bag to expose `device_class`; entities
//! lacking it never match a device-class constraint.

use crate::entity::Entity;

/// Domains reserved for voice-assistant plumbing.
pub const ASSIST_DOMAINS: [&str; 4] = ["assist_satellite", "conversation", "stt", "tts"];

/// Domains that never appear on a dashboard.
pub const HIDDEN_DOMAINS: [&str; 12] = [
    "automation",
    "configurator",
    "device_tracker",
    "event",
    "geo_location",
    "notify",
    "persistent_notification",
    "script",
    "sun",
    "tag",
    "todo",
    "zone",
];

/// Whether entities of `domain` are excluded from layouts entirely.
#[must_use]
pub fn is_hidden_domain(domain: &str) -> bool {
    HIDDEN_DOMAINS.contains(&domain) || ASSIST_DOMAINS.contains(&domain)
}

/// Whether an entity is admissible to any layout at all: its domain is not
/// hidden, it carries no administrative category, and it is not flagged
/// hidden. Area scoping comes on top of this.
#[must_use]
pub fn is_displayable(entity: &Entity) -> bool {
    !is_hidden_domain(entity.domain()) && entity.category.is_none() && !entity.hidden
}

/// A reusable domain/device-class predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFilter {
    domains: Vec<String>,
    device_classes: Vec<String>,
}

impl EntityFilter {
    /// A filter matching every entity.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Add one accepted domain.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.push(domain.into());
        self
    }

    /// Add several accepted domains.
    #[must_use]
    pub fn domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Add one accepted device class.
    #[must_use]
    pub fn device_class(mut self, device_class: impl Into<String>) -> Self {
        self.device_classes.push(device_class.into());
        self
    }

    /// Add several accepted device classes.
    #[must_use]
    pub fn device_classes<I, S>(mut self, device_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.device_classes
            .extend(device_classes.into_iter().map(Into::into));
        self
    }

    /// Test an entity against this filter. No side effects.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        if !self.domains.is_empty() && !self.domains.iter().any(|d| d == entity.domain()) {
            return false;
        }
        if !self.device_classes.is_empty() {
            let Some(device_class) = entity.device_class() else {
                return false;
            };
            if !self.device_classes.iter().any(|dc| dc == device_class) {
                return false;
            }
        }
        true
    }
}
