//! Per-call alias resolution for trait values.

use std::collections::HashMap;

use super::TraitValue;

/// Maps every loaded trait value id to its canonical identity.
///
/// Built fresh for each computation from the current trait value rows so
/// catalog edits are always observed; results are never cached across
/// calls. Resolution is total: ids without a loaded row resolve to
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct CanonicalMap {
    by_id: HashMap<String, String>,
}

impl CanonicalMap {
    pub fn from_values(values: &[TraitValue]) -> Self {
        let by_id = values
            .iter()
            .map(|value| (value.id.clone(), value.canonical_identity().to_string()))
            .collect();
        CanonicalMap { by_id }
    }

    /// Canonical identity of `trait_value_id`, collapsing at most one alias
    /// hop. O(1) per lookup.
    pub fn resolve<'a>(&'a self, trait_value_id: &'a str) -> &'a str {
        self.by_id
            .get(trait_value_id)
            .map(String::as_str)
            .unwrap_or(trait_value_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(id: &str) -> TraitValue {
        TraitValue {
            id: id.to_string(),
            set_id: "set-colors".to_string(),
            key: id.to_string(),
            label: id.to_string(),
            is_canonical: true,
            canonical_value_id: None,
            hex_code: None,
        }
    }

    fn alias(id: &str, target: &str) -> TraitValue {
        TraitValue {
            id: id.to_string(),
            set_id: "set-colors".to_string(),
            key: id.to_string(),
            label: id.to_string(),
            is_canonical: false,
            canonical_value_id: Some(target.to_string()),
            hex_code: None,
        }
    }

    #[test]
    fn alias_resolves_to_its_canonical_target() {
        let map = CanonicalMap::from_values(&[canonical("blue-green"), alias("bluegreen", "blue-green")]);
        assert_eq!(map.resolve("bluegreen"), "blue-green");
        assert_eq!(map.resolve("blue-green"), "blue-green");
    }

    #[test]
    fn resolution_is_idempotent() {
        let map = CanonicalMap::from_values(&[canonical("red"), alias("crimson", "red")]);
        for id in ["red", "crimson", "never-loaded"] {
            let once = map.resolve(id);
            assert_eq!(map.resolve(once), once);
        }
    }

    #[test]
    fn unknown_ids_resolve_to_themselves() {
        let map = CanonicalMap::from_values(&[]);
        assert!(map.is_empty());
        assert_eq!(map.resolve("tv-99"), "tv-99");
    }

    #[test]
    fn map_covers_every_loaded_row() {
        let map = CanonicalMap::from_values(&[canonical("red"), alias("crimson", "red")]);
        assert_eq!(map.len(), 2);
    }
}
