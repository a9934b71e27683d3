//! End-to-end tests wiring the core services to the real SQLite
//! repositories: migrations, fixture catalog, ranking, and comparison.

use std::sync::Arc;

use diesel::prelude::*;
use tempfile::tempdir;

use mycokey_core::comparison::{ComparisonService, ComparisonServiceTrait};
use mycokey_core::constants::DEFAULT_LOOKALIKE_LIMIT;
use mycokey_core::lookalikes::{LookalikeService, LookalikeServiceTrait};
use mycokey_core::Error;
use mycokey_storage_sqlite::characters::CharacterRepository;
use mycokey_storage_sqlite::db::{create_pool, get_connection, run_migrations, DbPool};
use mycokey_storage_sqlite::schema::{
    character_groups, characters, taxa, taxon_categorical_states, trait_sets, trait_values,
};
use mycokey_storage_sqlite::states::CategoricalStateRepository;
use mycokey_storage_sqlite::taxa::TaxonRepository;
use mycokey_storage_sqlite::trait_sets::TraitValueRepository;

struct TestWorld {
    pool: Arc<DbPool>,
    _temp_dir: tempfile::TempDir,
}

impl TestWorld {
    fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("mycokey-test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let world = TestWorld {
            pool,
            _temp_dir: temp_dir,
        };
        world.seed();
        world
    }

    fn lookalike_service(&self) -> LookalikeService {
        LookalikeService::new(
            Arc::new(TaxonRepository::new(Arc::clone(&self.pool))),
            Arc::new(CategoricalStateRepository::new(Arc::clone(&self.pool))),
            Arc::new(TraitValueRepository::new(Arc::clone(&self.pool))),
        )
    }

    fn comparison_service(&self) -> ComparisonService {
        ComparisonService::new(
            Arc::new(TaxonRepository::new(Arc::clone(&self.pool))),
            Arc::new(CategoricalStateRepository::new(Arc::clone(&self.pool))),
            Arc::new(CharacterRepository::new(Arc::clone(&self.pool))),
            Arc::new(TraitValueRepository::new(Arc::clone(&self.pool))),
        )
    }

    /// A small field-guide catalog: cap and gill characters, a color
    /// vocabulary with one alias, and five taxa in assorted statuses.
    fn seed(&self) {
        let mut conn = get_connection(&self.pool).expect("Failed to get connection");

        for (id, label, sort_order) in [("grp-cap", "Cap", 0), ("grp-gills", "Gills", 1)] {
            diesel::insert_into(character_groups::table)
                .values((
                    character_groups::id.eq(id),
                    character_groups::label.eq(label),
                    character_groups::sort_order.eq(sort_order),
                ))
                .execute(&mut conn)
                .expect("insert group");
        }

        for (id, key, label) in [
            ("set-colors", "colors", "Colors"),
            ("set-attachment", "attachment", "Gill attachment"),
        ] {
            diesel::insert_into(trait_sets::table)
                .values((
                    trait_sets::id.eq(id),
                    trait_sets::key.eq(key),
                    trait_sets::label.eq(label),
                ))
                .execute(&mut conn)
                .expect("insert trait set");
        }

        for (id, group_id, set_id, label) in [
            ("chr-cap-color", "grp-cap", "set-colors", "Cap color"),
            (
                "chr-gill-attachment",
                "grp-gills",
                "set-attachment",
                "Gill attachment",
            ),
        ] {
            diesel::insert_into(characters::table)
                .values((
                    characters::id.eq(id),
                    characters::group_id.eq(group_id),
                    characters::trait_set_id.eq(set_id),
                    characters::label.eq(label),
                    characters::kind.eq("categorical"),
                ))
                .execute(&mut conn)
                .expect("insert character");
        }

        for (id, set_id, is_canonical, canonical_value_id, hex_code) in [
            ("red", "set-colors", true, None, Some("#c0392b")),
            ("blue-green", "set-colors", true, None, Some("#0d98ba")),
            ("bluegreen", "set-colors", false, Some("blue-green"), None),
            ("free", "set-attachment", true, None, None),
            ("adnate", "set-attachment", true, None, None),
        ] {
            diesel::insert_into(trait_values::table)
                .values((
                    trait_values::id.eq(id),
                    trait_values::set_id.eq(set_id),
                    trait_values::key.eq(id),
                    trait_values::label.eq(id),
                    trait_values::is_canonical.eq(is_canonical),
                    trait_values::canonical_value_id.eq(canonical_value_id),
                    trait_values::hex_code.eq(hex_code),
                ))
                .execute(&mut conn)
                .expect("insert trait value");
        }

        let media_json =
            r#"{"thumbnailUrl":"https://img.mycokey.app/russula-nobilis.jpg","attribution":"A. Persoon"}"#;
        for (id, name, status, media) in [
            ("txn-1", "Russula emetica", "active", None),
            ("txn-2", "Russula nobilis", "active", Some(media_json)),
            ("txn-3", "Mycena pura", "active", None),
            ("txn-4", "Stropharia aeruginosa", "active", None),
            ("txn-5", "Stropharia caerulea", "active", None),
            ("txn-9", "Russula betularum", "draft", None),
        ] {
            diesel::insert_into(taxa::table)
                .values((
                    taxa::id.eq(id),
                    taxa::accepted_name.eq(name),
                    taxa::rank.eq("species"),
                    taxa::status.eq(status),
                    taxa::media.eq(media),
                ))
                .execute(&mut conn)
                .expect("insert taxon");
        }

        for (taxon_id, character_id, trait_value_id) in [
            ("txn-1", "chr-cap-color", "red"),
            ("txn-1", "chr-gill-attachment", "free"),
            ("txn-2", "chr-cap-color", "red"),
            ("txn-2", "chr-gill-attachment", "adnate"),
            // Draft taxon with full overlap; must never surface.
            ("txn-9", "chr-cap-color", "red"),
            ("txn-9", "chr-gill-attachment", "free"),
            // Alias on one taxon, canonical value on the other.
            ("txn-4", "chr-cap-color", "bluegreen"),
            ("txn-5", "chr-cap-color", "blue-green"),
        ] {
            diesel::insert_into(taxon_categorical_states::table)
                .values((
                    taxon_categorical_states::taxon_id.eq(taxon_id),
                    taxon_categorical_states::character_id.eq(character_id),
                    taxon_categorical_states::trait_value_id.eq(trait_value_id),
                ))
                .execute(&mut conn)
                .expect("insert state");
        }
    }
}

#[test]
fn ranks_lookalikes_with_metadata_over_real_storage() {
    let world = TestWorld::new();
    let results = world
        .lookalike_service()
        .rank_lookalikes("txn-1", DEFAULT_LOOKALIKE_LIMIT, 1)
        .unwrap();

    assert_eq!(results.len(), 1, "draft and non-overlapping taxa excluded");
    let candidate = &results[0];
    assert_eq!(candidate.id, "txn-2");
    assert_eq!(candidate.accepted_name, "Russula nobilis");
    assert_eq!(candidate.shared_count, 1);
    assert_eq!(candidate.target_count, 2);
    assert_eq!(candidate.other_count, 2);
    assert!((candidate.jaccard - 1.0 / 3.0).abs() < 1e-12);
    let media = candidate.media.as_ref().expect("media attached");
    assert_eq!(
        media.thumbnail_url.as_deref(),
        Some("https://img.mycokey.app/russula-nobilis.jpg")
    );
}

#[test]
fn taxon_without_states_has_no_lookalikes() {
    let world = TestWorld::new();
    let results = world
        .lookalike_service()
        .rank_lookalikes("txn-3", 10, 1)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn alias_ranks_as_match_but_diffs_as_exclusive() {
    let world = TestWorld::new();

    let results = world
        .lookalike_service()
        .rank_lookalikes("txn-4", 10, 1)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "txn-5");
    assert!((results[0].jaccard - 1.0).abs() < 1e-12);

    let detail = world
        .comparison_service()
        .compare_taxa("txn-4", "txn-5")
        .unwrap();
    let cap_color = &detail.groups[0].characters[0];
    assert!(cap_color.shared.is_empty());
    assert_eq!(cap_color.only_a[0].id, "bluegreen");
    assert_eq!(cap_color.only_b[0].id, "blue-green");
}

#[test]
fn compares_taxa_grouped_by_character_group() {
    let world = TestWorld::new();
    let detail = world
        .comparison_service()
        .compare_taxa("txn-1", "txn-2")
        .unwrap();

    assert_eq!(detail.taxon_a.accepted_name, "Russula emetica");
    assert_eq!(detail.taxon_b.accepted_name, "Russula nobilis");

    let group_labels: Vec<&str> = detail.groups.iter().map(|g| g.group_label.as_str()).collect();
    assert_eq!(group_labels, vec!["Cap", "Gills"]);

    let cap_color = &detail.groups[0].characters[0];
    assert_eq!(cap_color.shared.len(), 1);
    assert_eq!(cap_color.shared[0].id, "red");
    assert_eq!(cap_color.shared[0].hex_code.as_deref(), Some("#c0392b"));

    let gill_attachment = &detail.groups[1].characters[0];
    assert!(gill_attachment.shared.is_empty());
    assert_eq!(gill_attachment.only_a[0].id, "free");
    assert_eq!(gill_attachment.only_b[0].id, "adnate");
}

#[test]
fn comparing_against_missing_taxon_is_not_found() {
    let world = TestWorld::new();
    let err = world
        .comparison_service()
        .compare_taxa("txn-1", "txn-404")
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
