use pie_storage::Store;
use pie_storage::error::StorageError;
use pie_storage::file::FileStore;

#[test]
fn write_then_read_uses_one_file_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    assert!(store.is_available());
    assert_eq!(store.read("pie_note_history").unwrap(), None);

    store.write("pie_note_history", "[]").unwrap();
    assert_eq!(store.read("pie_note_history").unwrap().as_deref(), Some("[]"));
    assert!(dir.path().join("pie_note_history.json").exists());
    assert!(!dir.path().join("pie_note_history.json.tmp").exists());
}

#[test]
fn creates_missing_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = FileStore::new(&nested);

    store.write("pie_usage_patterns", "{}").unwrap();
    assert!(nested.join("pie_usage_patterns.json").exists());
}

#[test]
fn remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    store.write("pie_auto_save", "{}").unwrap();
    store.remove("pie_auto_save").unwrap();
    store.remove("pie_auto_save").unwrap();
    assert_eq!(store.read("pie_auto_save").unwrap(), None);
}

#[test]
fn quota_counts_other_keys_but_not_the_one_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path()).with_max_bytes(Some(10));

    store.write("a", "12345").unwrap();
    store.write("a", "1234567890").unwrap();
    let err = store.write("b", "1").unwrap_err();
    assert!(matches!(
        err,
        StorageError::QuotaExceeded {
            needed: 11,
            limit: 10,
            ..
        }
    ));
}

#[test]
fn unwritable_location_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file, not a directory").unwrap();

    let store = FileStore::new(blocker.join("data"));
    assert!(!store.is_available());
}
