//! Key-value store seam for the ledger collections.
//!
//! Each collection is one whole-document JSON blob under a fixed key. The
//! trait is deliberately narrow: get a whole document, replace a whole
//! document. There is no per-record access and no query capability.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::LedgerResult;

pub const PRODUCTS_KEY: &str = "products";
pub const CUSTOMERS_KEY: &str = "customers";
pub const ORDERS_KEY: &str = "orders";

/// Whole-document key-value store. An absent key is equivalent to an empty
/// collection; implementations never return partially-written documents.
pub trait CollectionStore: Send + Sync {
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;
    fn put(&self, key: &str, document: &str) -> LedgerResult<()>;
}

/// One `<key>.json` file per collection under a root directory. Documents are
/// replaced via temp-file + rename so a reader never observes a torn write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl AsRef<Path>) -> LedgerResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl CollectionStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, document: &str) -> LedgerResult<()> {
        let path = self.document_path(key);
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory store, the substitutable fake for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    // Poisoning means another thread panicked mid-write; unrecoverable.
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let documents = self.documents.lock().expect("store mutex poisoned");
        Ok(documents.get(key).cloned())
    }

    fn put(&self, key: &str, document: &str) -> LedgerResult<()> {
        let mut documents = self.documents.lock().expect("store mutex poisoned");
        documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}

/// Store for contexts with no persistence available: every key is absent and
/// every write is skipped. Reads upstream fall back to defaults or empty.
pub struct DetachedStore;

impl CollectionStore for DetachedStore {
    fn get(&self, _key: &str) -> LedgerResult<Option<String>> {
        Ok(None)
    }

    fn put(&self, key: &str, _document: &str) -> LedgerResult<()> {
        tracing::warn!(key, "no persistence context, write skipped");
        Ok(())
    }
}
