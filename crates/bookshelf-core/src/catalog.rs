//! CRUD operations over the persisted record collection.
//!
//! Every mutating operation re-reads the whole collection, mutates it,
//! and writes it back. There is no locking; the tool is single-user and
//! single-process by design, so last-writer-wins is acceptable.

use crate::error::{CatalogError, Result};
use crate::record::{NewRecord, Record, Status};
use crate::storage::CatalogBackend;

/// The catalog store: owns id assignment and all record operations.
pub struct CatalogStore<B: CatalogBackend> {
    backend: B,
}

impl<B: CatalogBackend> CatalogStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Validate `fields` and append a new record.
    ///
    /// The id is one greater than the current maximum (1 for an empty
    /// catalog), so ids survive process restarts and deletions never
    /// cause reuse of a live id. Validation runs before the catalog is
    /// touched, so a rejected record leaves the file unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` for bad field input, or
    /// `CatalogError::Storage` if the backing file cannot be read or
    /// written.
    pub fn create(&self, fields: NewRecord) -> Result<Record> {
        let valid = fields.validate()?;

        let mut records = self.backend.load()?;
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = valid.into_record(next_id);

        records.push(record.clone());
        self.backend.save(&records)?;
        Ok(record)
    }

    /// Remove the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record matches; the
    /// catalog is not rewritten in that case.
    pub fn delete_by_id(&self, id: u64) -> Result<()> {
        let mut records = self.backend.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            return Err(CatalogError::NotFound(format!("no book with id {id}")));
        }

        self.backend.save(&records)
    }

    /// Find records by a case-insensitive substring of title or author,
    /// or a substring of the year string.
    ///
    /// A blank query matches nothing. No matches is an empty vec, never
    /// an error.
    pub fn find(&self, query: &str) -> Result<Vec<Record>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        let records = self.backend.load()?;
        Ok(records
            .into_iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.author.to_lowercase().contains(&needle)
                    || r.year.contains(&needle)
            })
            .collect())
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Result<Vec<Record>> {
        self.backend.load()
    }

    /// Set the status of the record with the given id.
    ///
    /// Only the status field changes; everything else is untouched.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record matches.
    pub fn update_status(&self, id: u64, status: Status) -> Result<()> {
        let mut records = self.backend.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("no book with id {id}")))?;

        record.status = status;
        self.backend.save(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn store_with(records: Vec<Record>) -> CatalogStore<MemoryBackend> {
        CatalogStore::new(MemoryBackend::new(records))
    }

    fn seeded(id: u64, title: &str, author: &str, year: &str) -> Record {
        Record {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            status: Status::Available,
        }
    }

    #[test]
    fn test_create_assigns_id_one_on_empty_catalog() {
        let store = store_with(Vec::new());
        let record = store
            .create(NewRecord::new("Сказки", "Пушкин", "1990"))
            .unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.status, Status::Available);
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let store = store_with(vec![
            seeded(3, "Сказки", "Пушкин", "1990"),
            seeded(7, "Дубровский", "Пушкин", "1841"),
        ]);
        let record = store
            .create(NewRecord::new("Евгений Онегин", "Пушкин", "1833"))
            .unwrap();
        assert_eq!(record.id, 8);
        assert_eq!(store.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_create_invalid_leaves_catalog_unchanged() {
        let store = store_with(vec![seeded(1, "Сказки", "Пушкин", "1990")]);
        let err = store.create(NewRecord::new("ab", "Пушкин", "1990"));
        assert!(matches!(err, Err(CatalogError::Validation(_))));
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = store_with(vec![
            seeded(1, "Сказки", "Пушкин", "1990"),
            seeded(2, "Дубровский", "Пушкин", "1841"),
        ]);
        store.delete_by_id(1).unwrap();
        let remaining = store.list_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let store = store_with(vec![seeded(1, "Сказки", "Пушкин", "1990")]);
        let err = store.delete_by_id(999).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_find_matches_title_case_insensitive() {
        let store = store_with(vec![seeded(1, "Сказки", "Пушкин", "1990")]);
        let found = store.find("сказ").unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_find_matches_author_and_year_substring() {
        let store = store_with(vec![
            seeded(1, "Сказки", "Пушкин", "1990"),
            seeded(2, "Ревизор", "Гоголь", "1836"),
        ]);
        assert_eq!(store.find("гогол").unwrap().len(), 1);
        assert_eq!(store.find("19").unwrap().len(), 1);
        assert_eq!(store.find("18").unwrap().len(), 1);
    }

    #[test]
    fn test_find_blank_query_matches_nothing() {
        let store = store_with(vec![seeded(1, "Сказки", "Пушкин", "1990")]);
        assert!(store.find("").unwrap().is_empty());
        assert!(store.find("   ").unwrap().is_empty());
    }

    #[test]
    fn test_find_no_match_is_empty_not_error() {
        let store = store_with(vec![seeded(1, "Сказки", "Пушкин", "1990")]);
        assert!(store.find("nothing here").unwrap().is_empty());
        let empty = store_with(Vec::new());
        assert!(empty.find("anything").unwrap().is_empty());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let store = store_with(Vec::new());
        store
            .create(NewRecord::new("Сказки", "Пушкин", "1990"))
            .unwrap();
        store
            .create(NewRecord::new("Ревизор", "Гоголь", "1836"))
            .unwrap();
        let all = store.list_all().unwrap();
        assert_eq!(all[0].title, "Сказки");
        assert_eq!(all[1].title, "Ревизор");
    }

    #[test]
    fn test_update_status_changes_only_status() {
        let store = store_with(vec![
            seeded(1, "Сказки", "Пушкин", "1990"),
            seeded(2, "Ревизор", "Гоголь", "1836"),
        ]);
        store.update_status(1, Status::CheckedOut).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].status, Status::CheckedOut);
        assert_eq!(all[0].title, "Сказки");
        assert_eq!(all[0].year, "1990");
        assert_eq!(all[1].status, Status::Available);
    }

    #[test]
    fn test_update_status_missing_id_is_not_found() {
        let store = store_with(Vec::new());
        let err = store.update_status(42, Status::CheckedOut).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
