//! Entity category — registry classification for secondary entities.

use serde::{Deserialize, Serialize};

/// Registry category marking an entity as secondary.
///
/// Categorized entities exist to configure or diagnose a device rather
/// than control it, and dashboards leave them out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_lowercase_variant_name() {
        let json = serde_json::to_string(&EntityCategory::Diagnostic).unwrap();
        assert_eq!(json, "\"diagnostic\"");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let category: EntityCategory = serde_json::from_str("\"config\"").unwrap();
        assert_eq!(category, EntityCategory::Config);
    }
}
