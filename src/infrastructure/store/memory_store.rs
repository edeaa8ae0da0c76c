use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{CounterStore, Document, FieldWrite};

type Collections = HashMap<String, HashMap<String, Document>>;

/// In-memory counter store for development and hermetic tests.
///
/// Implements the same contract as the Redis backend; writes take the one
/// process-wide lock, which makes every batch trivially atomic.
#[derive(Default)]
pub struct MemoryCounterStore {
    // ---
    collections: RwLock<Collections>,
}

impl MemoryCounterStore {
    // ---
    pub fn new() -> Self {
        // ---
        Self::default()
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        // ---
        self.collections
            .read()
            .map_err(|_| anyhow!("counter store lock poisoned"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        // ---
        self.collections
            .write()
            .map_err(|_| anyhow!("counter store lock poisoned"))
    }
}

#[async_trait::async_trait]
impl CounterStore for MemoryCounterStore {
    // ---
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        // ---
        let collections = self.read_lock()?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn incr_field(&self, collection: &str, id: &str, field: &str, delta: i64) -> Result<()> {
        // ---
        let mut collections = self.write_lock()?;

        let doc = collections
            .entry(collection.to_string())
            .or_default()
            .entry(id.to_string())
            .or_default();

        let current: i64 = doc.get(field).and_then(|v| v.parse().ok()).unwrap_or(0);
        let next = current
            .checked_add(delta)
            .ok_or_else(|| anyhow!("counter overflow on {collection}:{id} field {field}"))?;

        doc.insert(field.to_string(), next.to_string());

        Ok(())
    }

    async fn set_field(&self, collection: &str, id: &str, field: &str, value: i64) -> Result<()> {
        // ---
        let mut collections = self.write_lock()?;

        // Full overwrite: the document ends up with exactly this one field.
        let doc = Document::from([(field.to_string(), value.to_string())]);
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);

        Ok(())
    }

    async fn list_ids(&self, collection: &str) -> Result<Vec<String>> {
        // ---
        let collections = self.read_lock()?;

        Ok(collections
            .get(collection)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn batch_set_fields(&self, collection: &str, writes: Vec<FieldWrite>) -> Result<()> {
        // ---
        let mut collections = self.write_lock()?;

        let docs = collections.entry(collection.to_string()).or_default();
        for write in writes {
            docs.entry(write.id)
                .or_default()
                .insert(write.field, write.value.to_string());
        }

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        // ---
        Ok(())
    }
}
