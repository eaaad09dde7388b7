use snipvault_storage::dir_store::DirStore;
use snipvault_storage::error::StorageError;
use snipvault_storage::kv::KeyValueStore;

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirStore::open(dir.path()).unwrap();
    assert!(store.get("absent").unwrap().is_none());
}

#[test]
fn set_then_get_returns_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::open(dir.path()).unwrap();

    store.set("code-snippet-playground:v1", b"[]").unwrap();
    assert_eq!(store.get("code-snippet-playground:v1").unwrap().as_deref(), Some(&b"[]"[..]));
}

#[test]
fn values_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = DirStore::open(dir.path()).unwrap();
        store.set("k", b"persisted").unwrap();
    }
    let store = DirStore::open(dir.path()).unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"persisted"[..]));
}

#[test]
fn overwrite_replaces_value_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::open(dir.path()).unwrap();

    store.set("k", b"one").unwrap();
    store.set("k", b"two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"two"[..]));

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn remove_deletes_and_tolerates_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::open(dir.path()).unwrap();

    store.set("k", b"v").unwrap();
    store.remove("k").unwrap();
    assert!(store.get("k").unwrap().is_none());
    store.remove("k").unwrap();
}

#[test]
fn keys_are_escaped_into_distinct_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirStore::open(dir.path()).unwrap();

    let colon = store.path_for("a:b").unwrap();
    let underscore = store.path_for("a_b").unwrap();
    let traversal = store.path_for("../escape").unwrap();

    assert_ne!(colon, underscore);
    assert_eq!(colon.file_name().unwrap(), "a%3Ab");
    assert_eq!(traversal.parent().unwrap(), dir.path());
}

#[test]
fn empty_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::open(dir.path()).unwrap();
    assert!(matches!(store.set("", b"v"), Err(StorageError::InvalidKey(_))));
}

#[test]
fn open_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = DirStore::open(&nested).unwrap();
    assert!(store.root().is_dir());
}
