use super::*;

// =============================================================================
// MemoryStore
// =============================================================================

#[test]
fn memory_store_absent_key_is_none() {
    let store = MemoryStore::new();
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc123");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
}

#[test]
fn memory_store_overwrite_replaces_value() {
    let store = MemoryStore::new();
    store.set(LANG_KEY, "zh");
    store.set(LANG_KEY, "en");
    assert_eq!(store.get(LANG_KEY).as_deref(), Some("en"));
}

#[test]
fn memory_store_remove_clears_key() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc123");
    store.remove(TOKEN_KEY);
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.remove(TOKEN_KEY);
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc123");
    store.set(LANG_KEY, "en");
    store.remove(TOKEN_KEY);
    assert_eq!(store.get(LANG_KEY).as_deref(), Some("en"));
}

// =============================================================================
// FileStore
// =============================================================================

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    store.set(TOKEN_KEY, "persisted-token");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("persisted-token"));
}

#[test]
fn file_store_absent_key_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn file_store_remove_clears_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    store.set(TOKEN_KEY, "persisted-token");
    store.remove(TOKEN_KEY);
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn file_store_remove_missing_key_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    store.remove(TOKEN_KEY);
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn file_store_survives_new_instance() {
    let dir = tempfile::tempdir().unwrap();
    let first = FileStore::new(dir.path().to_path_buf());
    first.set(TOKEN_KEY, "persisted-token");

    let second = FileStore::new(dir.path().to_path_buf());
    assert_eq!(second.get(TOKEN_KEY).as_deref(), Some("persisted-token"));
}

#[test]
fn file_store_missing_directory_reads_as_absent() {
    let store = FileStore::new(PathBuf::from("/nonexistent/wardshift-test"));
    assert!(store.get(TOKEN_KEY).is_none());
}
