use aw_create::catalog::{
    ArchetypeKind, Catalog, CatalogError, TriggerKind, ALL_TRIGGER_KINDS,
};
use std::collections::BTreeSet;
use std::fs;

#[test]
fn catalog_module_embedded_catalog_lists_nine_archetypes_in_order() {
    let catalog = Catalog::load_embedded().expect("embedded catalog");
    let ids = catalog
        .archetypes
        .iter()
        .map(|archetype| archetype.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![
            "issue-triage",
            "code-improvement",
            "status-report",
            "upstream-monitor",
            "dependency-monitor",
            "pr-review",
            "documentation-updater",
            "content-moderation",
            "custom",
        ]
    );
    assert!(catalog
        .archetypes
        .iter()
        .all(|archetype| archetype.kind() != ArchetypeKind::Other));
}

#[test]
fn catalog_module_recommended_triggers_are_known_kinds() {
    let catalog = Catalog::load_embedded().expect("embedded catalog");
    let known = ALL_TRIGGER_KINDS.iter().copied().collect::<BTreeSet<_>>();
    for archetype in &catalog.archetypes {
        assert!(!archetype.recommended_triggers.is_empty(), "{}", archetype.id);
        for trigger in &archetype.recommended_triggers {
            assert!(known.contains(&trigger.kind));
        }
    }
    let moderation = catalog.find("content-moderation").expect("moderation");
    assert!(moderation.recommends(TriggerKind::Discussion));
    assert!(!moderation.recommends(TriggerKind::Push));
}

#[test]
fn catalog_module_loads_custom_file_and_maps_unknown_ids_to_other() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("patterns.yaml");
    fs::write(
        &path,
        r#"
archetypes:
  - id: release-notes
    label: Release Notes
    description: Draft notes for each release
    recommended_triggers:
      - type: release
    recommended_safe_outputs:
      - create-issue
    timeout_minutes: 5
"#,
    )
    .expect("write catalog");

    let catalog = Catalog::from_path(&path).expect("load catalog");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.source, path.display().to_string());
    let archetype = catalog.get(0).expect("first archetype");
    assert_eq!(archetype.kind(), ArchetypeKind::Other);
    assert_eq!(archetype.slug(), "release-notes");
    assert!(archetype.tips.is_empty());
}

#[test]
fn catalog_module_reports_missing_and_malformed_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yaml");
    let err = Catalog::from_path(&missing).expect_err("missing file");
    assert!(matches!(err, CatalogError::Read { .. }));

    let err = Catalog::from_yaml_str("archetypes: [", "inline").expect_err("bad yaml");
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid yaml in catalog inline"));

    let err = Catalog::from_yaml_str("archetypes: []", "inline").expect_err("empty");
    assert_eq!(err.to_string(), "catalog inline defines no archetypes");
}

#[test]
fn catalog_module_rejects_duplicate_ids() {
    let raw = r#"
archetypes:
  - id: custom
    label: Custom
    description: one
    recommended_triggers: []
  - id: custom
    label: Custom Again
    description: two
    recommended_triggers: []
"#;
    let err = Catalog::from_yaml_str(raw, "dup.yaml").expect_err("duplicate ids");
    assert_eq!(
        err.to_string(),
        "catalog dup.yaml defines archetype `custom` more than once"
    );
}

#[test]
fn catalog_module_rejects_labels_that_escape_output_dir() {
    for label in ["../Escape", "nested/Name", "back\\slash"] {
        let raw = format!(
            "archetypes:\n  - id: sneaky\n    label: '{label}'\n    description: d\n"
        );
        let err = Catalog::from_yaml_str(&raw, "labels.yaml").expect_err("unsafe label");
        assert!(
            matches!(err, CatalogError::UnsafeLabel { ref id, .. } if id == "sneaky"),
            "{label}"
        );
    }
}
