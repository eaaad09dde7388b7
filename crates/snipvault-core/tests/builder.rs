use jiff::{Timestamp, ToSpan};
use snipvault_core::builder::{SnippetChanges, SnippetDraft, build, build_at, update_at};
use snipvault_core::fingerprint::fingerprint;

fn draft() -> SnippetDraft {
    SnippetDraft {
        name: "Upsert".to_string(),
        description: Some("Postgres upsert".to_string()),
        code: "INSERT INTO t VALUES (1);   \n\n".to_string(),
        key_terms: vec!["sql".to_string()],
        language: Some("sql".to_string()),
    }
}

#[test]
fn build_normalizes_code_and_assigns_hash() {
    let snippet = build(draft());
    assert_eq!(snippet.code(), "INSERT INTO t VALUES (1);");
    assert_eq!(snippet.normalized_hash(), fingerprint("INSERT INTO t VALUES (1);"));
}

#[test]
fn build_stamps_identical_timestamps() {
    let now = Timestamp::from_second(1_700_000_000).unwrap();
    let snippet = build_at(draft(), now);
    assert_eq!(snippet.created_at(), now);
    assert_eq!(snippet.updated_at(), now);
}

#[test]
fn build_generates_distinct_ids() {
    let a = build(draft());
    let b = build(draft());
    assert_ne!(a.id(), b.id());
}

#[test]
fn build_drops_empty_optional_strings() {
    let snippet = build(SnippetDraft {
        description: Some("  ".to_string()),
        language: Some(String::new()),
        ..draft()
    });
    assert_eq!(snippet.description(), None);
    assert_eq!(snippet.language(), None);
}

#[test]
fn update_keeps_identity_and_creation_time() {
    let created = Timestamp::from_second(1_700_000_000).unwrap();
    let later = created + 1.hour();
    let original = build_at(draft(), created);

    let updated = update_at(
        &original,
        SnippetChanges {
            code: Some("INSERT INTO t VALUES (2);".to_string()),
            ..Default::default()
        },
        later,
    );

    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.created_at(), created);
    assert_eq!(updated.updated_at(), later);
    assert_eq!(updated.code(), "INSERT INTO t VALUES (2);");
    assert_eq!(updated.normalized_hash(), fingerprint("INSERT INTO t VALUES (2);"));
    assert_ne!(updated.normalized_hash(), original.normalized_hash());
}

#[test]
fn update_leaves_unmentioned_fields_alone() {
    let original = build(draft());
    let updated = update_at(
        &original,
        SnippetChanges {
            name: Some("Renamed".to_string()),
            ..Default::default()
        },
        original.created_at(),
    );

    assert_eq!(updated.name(), "Renamed");
    assert_eq!(updated.description(), original.description());
    assert_eq!(updated.code(), original.code());
    assert_eq!(updated.key_terms(), original.key_terms());
    assert_eq!(updated.language(), original.language());
    assert_eq!(updated.normalized_hash(), original.normalized_hash());
}

#[test]
fn update_can_clear_optional_fields() {
    let original = build(draft());
    let updated = update_at(
        &original,
        SnippetChanges {
            description: Some(None),
            language: Some(None),
            ..Default::default()
        },
        original.created_at(),
    );

    assert_eq!(updated.description(), None);
    assert_eq!(updated.language(), None);
}
