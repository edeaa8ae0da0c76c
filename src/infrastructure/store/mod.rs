mod memory_store;
mod redis_store;


pub use memory_store::MemoryCounterStore;
pub use redis_store::RedisCounterStore;

use crate::domain::CounterStorePtr;
use anyhow::Result;
use std::sync::Arc;

/// Creates the in-memory counter store used for development and tests.
pub fn create_memory_store() -> CounterStorePtr {
    // ---
    Arc::new(MemoryCounterStore::new())
}

/// Creates a Redis-backed counter store from a connection URL.
///
/// Fails when the URL cannot be parsed; connections are established lazily,
/// one multiplexed connection per operation.
pub fn create_redis_store(url: &str) -> Result<CounterStorePtr> {
    // ---
    let client = redis::Client::open(url)?;

    Ok(Arc::new(RedisCounterStore::new(client)))
}
