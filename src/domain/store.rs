use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// A stored document: field name to raw field value.
///
/// Counter fields are held as strings (the Redis hash model) and parsed by
/// the services that own them.
pub type Document = HashMap<String, String>;

/// One field write inside an atomic batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrite {
    // ---
    pub id: String,
    pub field: String,
    pub value: i64,
}

impl FieldWrite {
    // ---
    pub fn new(id: impl Into<String>, field: impl Into<String>, value: i64) -> Self {
        // ---
        Self {
            id: id.into(),
            field: field.into(),
            value,
        }
    }
}

/// Abstraction for counter persistence.
///
/// Documents are addressed by collection name + document id. Writes never
/// delete documents; counters only move by atomic increment or explicit
/// overwrite.
#[async_trait::async_trait]
pub trait CounterStore: Send + Sync {
    // ---
    /// Fetch a document by id. Returns `Ok(None)` if it has never been written.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Atomically add `delta` to a numeric field, creating the document with
    /// `field = delta` when it does not exist yet. Concurrent callers must
    /// not lose updates.
    async fn incr_field(&self, collection: &str, id: &str, field: &str, delta: i64) -> Result<()>;

    /// Unconditionally overwrite the document so it contains exactly
    /// `field = value`, creating it when absent. Any other fields on the
    /// document are dropped.
    async fn set_field(&self, collection: &str, id: &str, field: &str, value: i64) -> Result<()>;

    /// Enumerate the ids of every document currently in a collection.
    async fn list_ids(&self, collection: &str) -> Result<Vec<String>>;

    /// Apply all writes as one atomic unit: either every write lands or none
    /// of them do.
    async fn batch_set_fields(&self, collection: &str, writes: Vec<FieldWrite>) -> Result<()>;

    /// Backend liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<()>;
}

/// Type alias for any backend that implements CounterStore.
pub type CounterStorePtr = Arc<dyn CounterStore>;
