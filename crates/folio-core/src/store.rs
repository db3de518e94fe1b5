//! Persistent storage for contact submissions using redb.
//!
//! The contact form's collaborator is a document store with a deliberately
//! small contract: submit a flat record, get an id or an error back. This
//! keeps that contract local-first; submissions land in an ACID redb table
//! keyed by ULID, so listing newest-first is just a reverse key scan.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::contact::ContactRecord;
use crate::error::{FolioError, FolioResult};

const SUBMISSIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("submissions");

/// A contact submission as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSubmission {
    /// ULID; lexicographic order is chronological order.
    pub id: String,
    /// Unix timestamp when the submission was accepted.
    pub received_at: i64,
    /// The flat form record.
    pub fields: BTreeMap<String, String>,
}

/// Submission store backed by redb.
#[derive(Clone)]
pub struct SubmissionStore {
    db: Arc<RwLock<Database>>,
}

impl SubmissionStore {
    /// Create a store at the given path, creating the database file and
    /// its parent directory if needed.
    pub fn new(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SUBMISSIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Persist a submission, returning its new id.
    pub fn save_submission(&self, record: &ContactRecord) -> FolioResult<String> {
        let id = Ulid::new().to_string();
        let stored = StoredSubmission {
            id: id.clone(),
            received_at: Utc::now().timestamp(),
            fields: record.fields(),
        };
        let data =
            serde_json::to_vec(&stored).map_err(|e| FolioError::Serialization(e.to_string()))?;

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SUBMISSIONS_TABLE)?;
            table.insert(id.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;

        tracing::info!(submission = %id, "contact submission stored");
        Ok(id)
    }

    /// Load a single submission by id.
    ///
    /// Returns `None` if no submission with the given id exists.
    pub fn load_submission(&self, id: &str) -> FolioResult<Option<StoredSubmission>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SUBMISSIONS_TABLE)?;

        match table.get(id)? {
            Some(v) => {
                let stored: StoredSubmission = serde_json::from_slice(v.value())
                    .map_err(|e| FolioError::Serialization(e.to_string()))?;
                Ok(Some(stored))
            }
            None => Ok(None),
        }
    }

    /// All submissions, newest first.
    pub fn list_submissions(&self) -> FolioResult<Vec<StoredSubmission>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SUBMISSIONS_TABLE)?;

        let mut submissions = Vec::new();
        for entry in table.iter()?.rev() {
            let (_, value) = entry?;
            let stored: StoredSubmission = serde_json::from_slice(value.value())
                .map_err(|e| FolioError::Serialization(e.to_string()))?;
            submissions.push(stored);
        }
        Ok(submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (SubmissionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let store = SubmissionStore::new(&db_path).unwrap();
        (store, temp_dir)
    }

    fn record(name: &str) -> ContactRecord {
        ContactRecord {
            name: name.to_string(),
            email: "visitor@example.com".to_string(),
            dial_code: "+44".to_string(),
            phone: "7700900123".to_string(),
            message: "Hi!".to_string(),
        }
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let store = SubmissionStore::new(&db_path);
        assert!(store.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_save_and_load_submission() {
        let (store, _temp) = create_test_store();

        let id = store.save_submission(&record("Ada")).unwrap();
        let loaded = store.load_submission(&id).unwrap().unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.fields.get("name").unwrap(), "Ada");
        assert!(loaded.received_at > 0);
    }

    #[test]
    fn test_load_nonexistent_submission() {
        let (store, _temp) = create_test_store();
        let loaded = store.load_submission(&Ulid::new().to_string()).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_list_returns_newest_first() {
        let (store, _temp) = create_test_store();

        let first = store.save_submission(&record("First")).unwrap();
        // ULIDs only order across distinct milliseconds.
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = store.save_submission(&record("Second")).unwrap();

        let all = store.list_submissions().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second);
        assert_eq!(all[1].id, first);
    }

    #[test]
    fn test_submissions_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        let id = {
            let store = SubmissionStore::new(&db_path).unwrap();
            store.save_submission(&record("Ada")).unwrap()
        };

        let store = SubmissionStore::new(&db_path).unwrap();
        let loaded = store.load_submission(&id).unwrap();
        assert!(loaded.is_some());
    }
}
