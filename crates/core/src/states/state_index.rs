//! Set-level views over a taxon's state entries.

use std::collections::HashSet;

use crate::trait_sets::CanonicalMap;

use super::{CharacterStateEntry, EqualityMode};

/// Distinct `(character id, trait identity)` pairs for one taxon's entries,
/// with the trait identity projected through `mode`.
///
/// This is the effective-identity set the ranker intersects: two taxa
/// recorded with an alias and its canonical value produce the same pair
/// under [`EqualityMode::Canonical`].
pub fn effective_pairs(
    entries: &[CharacterStateEntry],
    mode: EqualityMode,
    canonical: &CanonicalMap,
) -> HashSet<(String, String)> {
    let mut pairs = HashSet::new();
    for entry in entries {
        for value in &entry.trait_values {
            pairs.insert((
                entry.character_id.clone(),
                mode.identity(canonical, &value.id).to_string(),
            ));
        }
    }
    pairs
}

/// Every trait value id referenced by the given entries, sorted and
/// deduplicated, ready for a batched trait value fetch.
pub fn collect_trait_value_ids<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CharacterStateEntry>,
{
    let mut ids: Vec<String> = entries
        .into_iter()
        .flat_map(|entry| entry.trait_values.iter().map(|value| value.id.clone()))
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::TraitValueRef;
    use crate::trait_sets::TraitValue;

    fn entry(character_id: &str, value_ids: &[&str]) -> CharacterStateEntry {
        CharacterStateEntry {
            character_id: character_id.to_string(),
            group_id: "grp-cap".to_string(),
            trait_values: value_ids
                .iter()
                .map(|id| TraitValueRef {
                    id: id.to_string(),
                    label: id.to_string(),
                    hex_code: None,
                })
                .collect(),
        }
    }

    #[test]
    fn canonical_pairs_collapse_aliases() {
        let canonical = CanonicalMap::from_values(&[TraitValue {
            id: "bluegreen".to_string(),
            set_id: "set-colors".to_string(),
            key: "bluegreen".to_string(),
            label: "Bluegreen".to_string(),
            is_canonical: false,
            canonical_value_id: Some("blue-green".to_string()),
            hex_code: None,
        }]);
        let pairs = effective_pairs(
            &[entry("chr-cap-color", &["bluegreen", "blue-green"])],
            EqualityMode::Canonical,
            &canonical,
        );
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&("chr-cap-color".to_string(), "blue-green".to_string())));
    }

    #[test]
    fn raw_pairs_keep_aliases_apart() {
        let pairs = effective_pairs(
            &[entry("chr-cap-color", &["bluegreen", "blue-green"])],
            EqualityMode::Raw,
            &CanonicalMap::default(),
        );
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn collects_ids_across_entries_without_duplicates() {
        let ids = collect_trait_value_ids(
            [
                entry("chr-cap-color", &["red", "white"]),
                entry("chr-gill-attachment", &["free", "red"]),
            ]
            .iter(),
        );
        assert_eq!(ids, vec!["free", "red", "white"]);
    }
}
