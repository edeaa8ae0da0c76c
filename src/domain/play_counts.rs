use super::error::StatsError;
use super::store::CounterStorePtr;

/// Collection holding the single global play-count document.
pub const PLAY_COUNTS_COLLECTION: &str = "PlayerPlayCounts";

/// Fixed id of the global play-count document.
pub const GAME_PLAY_COUNT_ID: &str = "gamePlayCount";

/// Counter field on the global play-count document.
pub const PLAY_COUNT_FIELD: &str = "playCount";

/// Increments and reads the global game play counter.
///
/// The store is the sole owner of counter state; this service holds no
/// cached copy, so concurrent requests can never observe a stale
/// in-process value.
#[derive(Clone)]
pub struct PlayCountService {
    // ---
    store: CounterStorePtr,
}

impl PlayCountService {
    // ---
    pub fn new(store: CounterStorePtr) -> Self {
        // ---
        Self { store }
    }

    /// Record exactly one game play.
    ///
    /// The first call creates the counter document; every call increments it
    /// atomically, so concurrent plays all count.
    pub async fn record_play(&self) -> Result<(), StatsError> {
        // ---
        self.store
            .incr_field(
                PLAY_COUNTS_COLLECTION,
                GAME_PLAY_COUNT_ID,
                PLAY_COUNT_FIELD,
                1,
            )
            .await?;

        Ok(())
    }

    /// Current value of the global play counter.
    ///
    /// Fails with `NotFound` before the first play has ever been recorded.
    /// A document missing the counter field reads as zero.
    pub async fn play_count(&self) -> Result<i64, StatsError> {
        // ---
        let doc = self
            .store
            .get(PLAY_COUNTS_COLLECTION, GAME_PLAY_COUNT_ID)
            .await?
            .ok_or(StatsError::NotFound("Game play count not found."))?;

        let count = doc
            .get(PLAY_COUNT_FIELD)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok(count)
    }
}
