//! Side-by-side comparison of two taxa's categorical states.

use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::characters::{CharacterMeta, CharacterRepositoryTrait};
use crate::states::{
    collect_trait_value_ids, partition_by_equality, CategoricalStateRepositoryTrait,
    CharacterStateEntry, EqualityMode, TraitValueRef,
};
use crate::taxa::{TaxonRepositoryTrait, TaxonSummary};
use crate::trait_sets::{CanonicalMap, TraitValueRepositoryTrait};
use crate::{Error, Result};

use super::{
    ComparisonCharacter, ComparisonDetail, ComparisonGroup, ComparisonServiceTrait,
    ComparisonTrait,
};

pub struct ComparisonService {
    taxon_repository: Arc<dyn TaxonRepositoryTrait>,
    state_repository: Arc<dyn CategoricalStateRepositoryTrait>,
    character_repository: Arc<dyn CharacterRepositoryTrait>,
    trait_value_repository: Arc<dyn TraitValueRepositoryTrait>,
    equality_mode: EqualityMode,
}

impl ComparisonService {
    /// Builds a comparison service that partitions trait values by raw
    /// identity, matching how states are recorded. Ranking always collapses
    /// aliases, so an alias pair can rank as similar yet diff as
    /// non-shared; use [`ComparisonService::with_equality_mode`] to change
    /// that.
    pub fn new(
        taxon_repository: Arc<dyn TaxonRepositoryTrait>,
        state_repository: Arc<dyn CategoricalStateRepositoryTrait>,
        character_repository: Arc<dyn CharacterRepositoryTrait>,
        trait_value_repository: Arc<dyn TraitValueRepositoryTrait>,
    ) -> Self {
        Self::with_equality_mode(
            taxon_repository,
            state_repository,
            character_repository,
            trait_value_repository,
            EqualityMode::Raw,
        )
    }

    pub fn with_equality_mode(
        taxon_repository: Arc<dyn TaxonRepositoryTrait>,
        state_repository: Arc<dyn CategoricalStateRepositoryTrait>,
        character_repository: Arc<dyn CharacterRepositoryTrait>,
        trait_value_repository: Arc<dyn TraitValueRepositoryTrait>,
        equality_mode: EqualityMode,
    ) -> Self {
        Self {
            taxon_repository,
            state_repository,
            character_repository,
            trait_value_repository,
            equality_mode,
        }
    }

    fn load_summary(&self, taxon_id: &str) -> Result<TaxonSummary> {
        self.taxon_repository
            .get_taxon_summary(taxon_id)?
            .ok_or_else(|| Error::NotFound(format!("Taxon '{}' not found", taxon_id)))
    }
}

impl ComparisonServiceTrait for ComparisonService {
    fn compare_taxa(&self, taxon_id_a: &str, taxon_id_b: &str) -> Result<ComparisonDetail> {
        let taxon_a = self.load_summary(taxon_id_a)?;
        let taxon_b = self.load_summary(taxon_id_b)?;

        // `get` rather than `remove`: comparing a taxon against itself is
        // allowed and reads the same entry twice.
        let states = self
            .state_repository
            .get_categorical_states(&[taxon_id_a.to_string(), taxon_id_b.to_string()])?;
        let states_a = states.get(taxon_id_a).cloned().unwrap_or_default();
        let states_b = states.get(taxon_id_b).cloned().unwrap_or_default();

        // Union of characters recorded on either side, in stable order.
        let character_ids: Vec<String> = states_a
            .iter()
            .chain(states_b.iter())
            .map(|entry| entry.character_id.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let meta_rows = self.character_repository.get_character_meta(&character_ids)?;
        let meta_by_id: HashMap<&str, &CharacterMeta> =
            meta_rows.iter().map(|meta| (meta.id.as_str(), meta)).collect();
        if meta_by_id.len() < character_ids.len() {
            let missing: Vec<&str> = character_ids
                .iter()
                .map(String::as_str)
                .filter(|id| !meta_by_id.contains_key(*id))
                .collect();
            return Err(Error::DataIntegrity(format!(
                "missing character rows for ids: {}",
                missing.join(", ")
            )));
        }

        let canonical = match self.equality_mode {
            EqualityMode::Canonical => {
                let trait_value_ids =
                    collect_trait_value_ids(states_a.iter().chain(states_b.iter()));
                let trait_values = self
                    .trait_value_repository
                    .get_trait_values_by_ids(&trait_value_ids)?;
                CanonicalMap::from_values(&trait_values)
            }
            EqualityMode::Raw => CanonicalMap::default(),
        };

        let entries_a: HashMap<&str, &CharacterStateEntry> = states_a
            .iter()
            .map(|entry| (entry.character_id.as_str(), entry))
            .collect();
        let entries_b: HashMap<&str, &CharacterStateEntry> = states_b
            .iter()
            .map(|entry| (entry.character_id.as_str(), entry))
            .collect();

        let mut groups_by_id: HashMap<String, ComparisonGroup> = HashMap::new();
        for character_id in &character_ids {
            let meta = meta_by_id[character_id.as_str()];
            let side_a = entries_a
                .get(character_id.as_str())
                .map(|entry| entry.trait_values.as_slice())
                .unwrap_or(&[]);
            let side_b = entries_b
                .get(character_id.as_str())
                .map(|entry| entry.trait_values.as_slice())
                .unwrap_or(&[]);

            let partition = partition_by_equality(side_a, side_b, self.equality_mode, &canonical);
            let character = ComparisonCharacter {
                character_id: character_id.clone(),
                label: meta.label.clone(),
                shared: annotate(partition.shared, true),
                only_a: annotate(partition.only_a, false),
                only_b: annotate(partition.only_b, false),
            };

            groups_by_id
                .entry(meta.group_id.clone())
                .or_insert_with(|| ComparisonGroup {
                    group_id: meta.group_id.clone(),
                    group_label: meta.group_label.clone(),
                    characters: Vec::new(),
                })
                .characters
                .push(character);
        }

        let mut groups: Vec<ComparisonGroup> = groups_by_id.into_values().collect();
        for group in &mut groups {
            group
                .characters
                .sort_by(|x, y| x.label.cmp(&y.label).then_with(|| x.character_id.cmp(&y.character_id)));
        }
        groups.sort_by(|x, y| {
            x.group_label
                .cmp(&y.group_label)
                .then_with(|| x.group_id.cmp(&y.group_id))
        });

        debug!(
            "Compared taxa {} and {} across {} characters",
            taxon_id_a,
            taxon_id_b,
            character_ids.len()
        );
        Ok(ComparisonDetail {
            taxon_a,
            taxon_b,
            groups,
        })
    }
}

fn annotate(values: Vec<TraitValueRef>, is_shared: bool) -> Vec<ComparisonTrait> {
    values
        .into_iter()
        .map(|value| ComparisonTrait {
            id: value.id,
            label: value.label,
            hex_code: value.hex_code,
            is_shared,
        })
        .collect()
}
