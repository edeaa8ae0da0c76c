use anyhow::{Context, Result};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::{CounterStore, Document, FieldWrite};

/// Redis-backed counter store.
///
/// Each document is a hash stored at `{collection}:{id}`. Every collection
/// also keeps an index set of its document ids under the bare collection
/// name (which can never collide with a document key, since those always
/// contain the separating colon). The index is maintained inside the same
/// MULTI/EXEC as each document write, so `list_ids` always sees a
/// point-in-time snapshot of the collection.
pub struct RedisCounterStore {
    // ---
    client: redis::Client,
}

impl RedisCounterStore {
    // ---
    pub fn new(client: redis::Client) -> Self {
        // ---
        Self { client }
    }

    /// Creates a new multiplexed async connection for one operation.
    async fn conn(&self) -> Result<MultiplexedConnection> {
        // ---
        self.client
            .get_multiplexed_async_connection()
            .await
            .context("failed to connect to Redis")
    }

    fn doc_key(collection: &str, id: &str) -> String {
        // ---
        format!("{collection}:{id}")
    }
}

#[async_trait::async_trait]
impl CounterStore for RedisCounterStore {
    // ---
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        // ---
        let mut conn = self.conn().await?;

        let fields: Document = conn.hgetall(Self::doc_key(collection, id)).await?;

        // A hash with no fields does not exist in Redis.
        if fields.is_empty() {
            Ok(None)
        } else {
            Ok(Some(fields))
        }
    }

    async fn incr_field(&self, collection: &str, id: &str, field: &str, delta: i64) -> Result<()> {
        // ---
        let mut conn = self.conn().await?;

        // HINCRBY is the increment-or-create primitive; the index insert
        // rides in the same transaction so the id is listed as soon as the
        // document exists.
        let _: () = redis::pipe()
            .atomic()
            .hincr(Self::doc_key(collection, id), field, delta)
            .ignore()
            .sadd(collection, id)
            .ignore()
            .query_async(&mut conn)
            .await?;

        Ok(())
    }

    async fn set_field(&self, collection: &str, id: &str, field: &str, value: i64) -> Result<()> {
        // ---
        let key = Self::doc_key(collection, id);
        let mut conn = self.conn().await?;

        // DEL + HSET replaces the whole document with the single field.
        let _: () = redis::pipe()
            .atomic()
            .del(&key)
            .ignore()
            .hset(&key, field, value)
            .ignore()
            .sadd(collection, id)
            .ignore()
            .query_async(&mut conn)
            .await?;

        Ok(())
    }

    async fn list_ids(&self, collection: &str) -> Result<Vec<String>> {
        // ---
        let mut conn = self.conn().await?;

        let ids: Vec<String> = conn.smembers(collection).await?;

        Ok(ids)
    }

    async fn batch_set_fields(&self, collection: &str, writes: Vec<FieldWrite>) -> Result<()> {
        // ---
        if writes.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn().await?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        for write in &writes {
            pipe.hset(Self::doc_key(collection, &write.id), &write.field, write.value)
                .ignore();
            pipe.sadd(collection, &write.id).ignore();
        }

        let _: () = pipe.query_async(&mut conn).await?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        // ---
        let mut conn = self.conn().await?;

        let _: String = conn.ping().await?;

        Ok(())
    }
}
