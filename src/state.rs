use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::store::{CollectionStore, DetachedStore, FileStore, MemoryStore};

/// Handle owning the injected store. All service functions take `&Ledger`;
/// every mutation is a synchronous read-whole-collection, compute,
/// write-whole-collection cycle with no interleaving within this process.
pub struct Ledger {
    store: Box<dyn CollectionStore>,
    retention_days: i64,
}

impl Ledger {
    pub fn with_store(store: Box<dyn CollectionStore>) -> Self {
        Self {
            store,
            retention_days: 2,
        }
    }

    /// File-backed ledger rooted at the configured data directory.
    pub fn open(config: &LedgerConfig) -> LedgerResult<Self> {
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self {
            store: Box::new(store),
            retention_days: config.retention_days,
        })
    }

    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Ledger for contexts without persistence: reads fall back to defaults
    /// or empty collections and writes are skipped.
    pub fn detached() -> Self {
        Self::with_store(Box::new(DetachedStore))
    }

    pub fn with_retention_days(mut self, days: i64) -> Self {
        self.retention_days = days;
        self
    }

    pub fn retention_days(&self) -> i64 {
        self.retention_days
    }

    /// `None` means the key has never been written, which is distinct from an
    /// empty stored collection for bootstrap idempotence.
    pub(crate) fn read_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> LedgerResult<Option<Vec<T>>> {
        match self.store.get(key)? {
            Some(document) => serde_json::from_str(&document)
                .map(Some)
                .map_err(|source| LedgerError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub(crate) fn write_collection<T: Serialize>(
        &self,
        key: &str,
        records: &[T],
    ) -> LedgerResult<()> {
        let document =
            serde_json::to_string(records).map_err(|source| LedgerError::Encode {
                key: key.to_string(),
                source,
            })?;
        self.store.put(key, &document)
    }
}
