//! Generated-password history
//!
//! Keeps the last fifteen generated passwords, newest first.

use crate::error::PassgenResult;
use crate::models::{HistoryEntry, HistoryId};
use crate::storage::Storage;

/// Maximum number of entries kept in the log
pub const HISTORY_CAPACITY: usize = 15;

/// Service for the history log
pub struct HistoryLog<'a> {
    storage: &'a Storage,
}

impl<'a> HistoryLog<'a> {
    /// Create a new history service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a generated password; empty passwords are ignored
    pub fn append(&self, password: &str) -> PassgenResult<()> {
        self.append_all([password])
    }

    /// Record several passwords in generation order and persist once
    ///
    /// The last password ends up at the front of the log. Empty passwords are
    /// ignored; if nothing is left, nothing is written.
    pub fn append_all<I, S>(&self, passwords: I) -> PassgenResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut taken = self.storage.history.ids()?;
        let mut added = 0;

        for password in passwords {
            let password = password.as_ref();
            if password.is_empty() {
                continue;
            }

            let id = HistoryId::fresh(&taken);
            taken.insert(id);
            self.storage
                .history
                .push_front(HistoryEntry::new(id, password), HISTORY_CAPACITY)?;
            added += 1;
        }

        if added == 0 {
            return Ok(());
        }

        self.storage.history.save()?;
        log::debug!(
            "recorded {} passwords, history now holds {} entries",
            added,
            self.storage.history.count()?
        );
        Ok(())
    }

    /// Entries, most recent first
    pub fn list(&self) -> PassgenResult<Vec<HistoryEntry>> {
        self.storage.history.get_all()
    }

    /// Wipe the log and its persisted state
    ///
    /// Irreversible; callers are expected to have confirmed with the user.
    pub fn clear(&self) -> PassgenResult<()> {
        self.storage.history.clear()?;
        log::info!("password history cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, HISTORY_KEY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Memory store that counts writes
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> PassgenResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> PassgenResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> PassgenResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_append_keeps_fifteen_most_recent() {
        let storage = Storage::in_memory();
        let log = HistoryLog::new(&storage);

        for i in 0..20 {
            log.append(&format!("password-{}", i)).unwrap();
        }

        let entries = log.list().unwrap();
        assert_eq!(entries.len(), 15);
        assert_eq!(entries[0].password, "password-19");
        assert_eq!(entries[14].password, "password-5");
        assert!(entries.iter().all(|e| e.password != "password-4"));
    }

    #[test]
    fn test_ids_are_unique_and_descending() {
        let storage = Storage::in_memory();
        let log = HistoryLog::new(&storage);
        for _ in 0..5 {
            log.append("same").unwrap();
        }

        let entries = log.list().unwrap();
        for pair in entries.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[test]
    fn test_empty_password_is_ignored() {
        let storage = Storage::in_memory();
        let log = HistoryLog::new(&storage);
        log.append("").unwrap();
        assert!(log.list().unwrap().is_empty());
        assert!(storage.store().get(HISTORY_KEY).unwrap().is_none());
    }

    #[test]
    fn test_persisted_and_reloaded() {
        let storage = Storage::in_memory();
        HistoryLog::new(&storage).append("abc123").unwrap();

        storage.history.load().unwrap();
        let entries = HistoryLog::new(&storage).list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].password, "abc123");
    }

    #[test]
    fn test_append_all_persists_once() {
        let store = Arc::new(CountingStore::default());
        let storage = Storage::with_store(store.clone());
        let log = HistoryLog::new(&storage);

        log.append_all(["first", "", "second", "third"]).unwrap();

        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        let passwords: Vec<_> = log.list().unwrap().into_iter().map(|e| e.password).collect();
        assert_eq!(passwords, vec!["third", "second", "first"]);

        log.append_all(Vec::<String>::new()).unwrap();
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear() {
        let storage = Storage::in_memory();
        let log = HistoryLog::new(&storage);
        log.append("abc123").unwrap();

        log.clear().unwrap();
        assert!(log.list().unwrap().is_empty());
        assert!(storage.store().get(HISTORY_KEY).unwrap().is_none());
    }
}
