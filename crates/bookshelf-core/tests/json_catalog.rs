//! Integration tests for the catalog store over the JSON file backend.

use bookshelf_core::{CatalogError, CatalogStore, JsonFileBackend, NewRecord, Status};
use tempfile::{tempdir, TempDir};

fn temp_store() -> (TempDir, CatalogStore<JsonFileBackend>) {
    let dir = tempdir().expect("tempdir");
    let backend = JsonFileBackend::new(dir.path().join("books.json"));
    (dir, CatalogStore::new(backend))
}

#[test]
fn test_create_persists_to_disk() {
    let (dir, store) = temp_store();

    let record = store
        .create(NewRecord::new("Сказки", "Пушкин", "1990"))
        .expect("create should succeed");
    assert_eq!(record.id, 1);

    let on_disk = std::fs::read_to_string(dir.path().join("books.json")).expect("file exists");
    assert!(on_disk.contains("\"Сказки\""));
    assert!(on_disk.contains("\"AVAILABLE\""));
}

#[test]
fn test_ids_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");

    {
        let store = CatalogStore::new(JsonFileBackend::new(&path));
        store
            .create(NewRecord::new("Сказки", "Пушкин", "1990"))
            .unwrap();
        store
            .create(NewRecord::new("Ревизор", "Гоголь", "1836"))
            .unwrap();
        store.delete_by_id(2).unwrap();
    }

    // A fresh store over the same file derives the next id from the file,
    // not from an in-process counter.
    let store = CatalogStore::new(JsonFileBackend::new(&path));
    let record = store
        .create(NewRecord::new("Дубровский", "Пушкин", "1841"))
        .unwrap();
    assert_eq!(record.id, 2);
}

#[test]
fn test_round_trip_create_then_list() {
    let (_dir, store) = temp_store();
    let created = store
        .create(NewRecord::new("Сказки", "Пушкин", "1990"))
        .unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all, vec![created]);
    assert_eq!(all[0].status, Status::Available);
}

#[test]
fn test_validation_failure_leaves_file_absent() {
    let (dir, store) = temp_store();
    let err = store
        .create(NewRecord::new("", "Пушкин", "1990"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert!(!dir.path().join("books.json").exists());
}

#[test]
fn test_delete_missing_id_leaves_file_unchanged() {
    let (dir, store) = temp_store();
    store
        .create(NewRecord::new("Сказки", "Пушкин", "1990"))
        .unwrap();
    let before = std::fs::read_to_string(dir.path().join("books.json")).unwrap();

    let err = store.delete_by_id(999).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));

    let after = std::fs::read_to_string(dir.path().join("books.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_update_status_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");

    {
        let store = CatalogStore::new(JsonFileBackend::new(&path));
        store
            .create(NewRecord::new("Сказки", "Пушкин", "1990"))
            .unwrap();
        store.update_status(1, Status::CheckedOut).unwrap();
    }

    let store = CatalogStore::new(JsonFileBackend::new(&path));
    let all = store.list_all().unwrap();
    assert_eq!(all[0].status, Status::CheckedOut);
}

#[test]
fn test_missing_file_lists_empty() {
    let (_dir, store) = temp_store();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_malformed_file_surfaces_storage_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = CatalogStore::new(JsonFileBackend::new(&path));
    let err = store.list_all().unwrap_err();
    assert!(matches!(err, CatalogError::Storage(_)));
}

#[test]
fn test_find_over_file_backend() {
    let (_dir, store) = temp_store();
    store
        .create(NewRecord::new("Сказки", "Пушкин", "1990"))
        .unwrap();
    store
        .create(NewRecord::new("Ревизор", "Гоголь", "1836"))
        .unwrap();

    assert_eq!(store.find("пушкин").unwrap().len(), 1);
    assert_eq!(store.find("1836").unwrap().len(), 1);
    assert!(store.find("чехов").unwrap().is_empty());
}
