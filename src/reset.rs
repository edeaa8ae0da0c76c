//! Daily counter reset.
//!
//! Once per day at 00:00 UTC every counter goes back to zero: the global
//! play counter is overwritten with `{playCount: 0}` and every known item
//! document has its `quantity` field set to `0` in one atomic batch. Item
//! documents survive the reset, so an item read after midnight answers `0`
//! rather than `404`.
//!
//! The job runs on an in-process Tokio task spawned at startup. Each
//! iteration sleeps until the next midnight, resets, and reschedules, so a
//! reset firing at exactly 00:00 waits a full day before the next one.

use std::time::Duration;

use chrono::{DateTime, Days, NaiveTime, Utc};

use crate::domain::{
    CounterStorePtr, FieldWrite, MetricsPtr, StatsError, GAME_PLAY_COUNT_ID,
    ITEM_QUANTITIES_COLLECTION, PLAY_COUNTS_COLLECTION, PLAY_COUNT_FIELD, QUANTITY_FIELD,
};

// ============================================================================
// Reset operation
// ============================================================================

/// Resets all game statistics to zero.
///
/// Overwrites the global play-count document with `{playCount: 0}`, then
/// zeroes the `quantity` field of every item document in one atomic batch.
/// Partial failure leaves either the play counter or the item quantities
/// untouched as a whole; the batch itself is all-or-nothing.
pub async fn reset_game_stats(store: &CounterStorePtr) -> Result<(), StatsError> {
    // ---
    store
        .set_field(PLAY_COUNTS_COLLECTION, GAME_PLAY_COUNT_ID, PLAY_COUNT_FIELD, 0)
        .await
        .map_err(StatsError::Internal)?;

    let ids = store
        .list_ids(ITEM_QUANTITIES_COLLECTION)
        .await
        .map_err(StatsError::Internal)?;

    if !ids.is_empty() {
        let writes = ids
            .into_iter()
            .map(|id| FieldWrite::new(id, QUANTITY_FIELD, 0))
            .collect();

        store
            .batch_set_fields(ITEM_QUANTITIES_COLLECTION, writes)
            .await
            .map_err(StatsError::Internal)?;
    }

    tracing::info!("Game stats reset successfully");
    Ok(())
}

// ============================================================================
// Scheduling
// ============================================================================

/// Time remaining until the next 00:00 UTC after `now`.
///
/// Always lands on the *next* midnight: called at exactly 00:00 it returns
/// a full 24 hours, which keeps the reset loop from firing twice on the
/// same boundary.
pub fn until_next_midnight_utc(now: DateTime<Utc>) -> Duration {
    // ---
    let next_midnight = (now.date_naive() + Days::new(1))
        .and_time(NaiveTime::MIN)
        .and_utc();

    // Non-negative by construction, but clock skew is not worth a panic.
    (next_midnight - now).to_std().unwrap_or_default()
}

/// Spawns the daily reset loop on the Tokio runtime.
///
/// The task sleeps until the next 00:00 UTC, resets every counter, and
/// reschedules itself. A failed reset is logged and retried at the next
/// midnight; the loop never exits on its own.
pub fn spawn_daily_reset(
    store: CounterStorePtr,
    metrics: MetricsPtr,
) -> tokio::task::JoinHandle<()> {
    // ---
    tokio::spawn(async move {
        loop {
            let wait = until_next_midnight_utc(Utc::now());
            tracing::info!("next game stats reset in {}s", wait.as_secs());
            tokio::time::sleep(wait).await;

            match reset_game_stats(&store).await {
                Ok(()) => metrics.record_stats_reset(),
                Err(err) => tracing::error!("{err}"),
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    // ---

    use super::*;
    use crate::domain::{ItemQuantityService, PlayCountService, StatsError};
    use crate::infrastructure::create_memory_store;
    use chrono::TimeZone;

    #[test]
    fn test_until_next_midnight_counts_down_within_a_day() {
        // ---
        let now = Utc.with_ymd_and_hms(2024, 5, 5, 23, 59, 30).unwrap();
        assert_eq!(until_next_midnight_utc(now), Duration::from_secs(30));
    }

    #[test]
    fn test_until_next_midnight_at_midnight_is_a_full_day() {
        // ---
        let now = Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap();
        assert_eq!(until_next_midnight_utc(now), Duration::from_secs(86_400));
    }

    #[test]
    fn test_until_next_midnight_crosses_month_boundary() {
        // ---
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        assert_eq!(
            until_next_midnight_utc(now),
            Duration::from_secs(12 * 60 * 60)
        );
    }

    #[tokio::test]
    async fn test_reset_zeroes_play_count_and_item_quantities() {
        // ---
        let store = create_memory_store();
        let plays = PlayCountService::new(store.clone());
        let items = ItemQuantityService::new(store.clone());

        for _ in 0..7 {
            plays.record_play().await.unwrap();
        }
        items.record_item_quantity("sword", Some(5)).await.unwrap();
        items.record_item_quantity("shield", Some(3)).await.unwrap();

        reset_game_stats(&store).await.unwrap();

        assert_eq!(plays.play_count().await.unwrap(), 0);
        assert_eq!(items.item_quantity("sword").await.unwrap().quantity, 0);
        assert_eq!(items.item_quantity("shield").await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_reset_leaves_unknown_items_unknown() {
        // ---
        let store = create_memory_store();
        let items = ItemQuantityService::new(store.clone());

        items.record_item_quantity("potion", Some(9)).await.unwrap();
        reset_game_stats(&store).await.unwrap();

        // Items written before the reset answer zero, items never written
        // are still a 404.
        assert_eq!(items.item_quantity("potion").await.unwrap().quantity, 0);
        assert!(matches!(
            items.item_quantity("elixir").await,
            Err(StatsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_reset_on_fresh_store_creates_the_play_counter() {
        // ---
        let store = create_memory_store();
        let plays = PlayCountService::new(store.clone());

        assert!(matches!(
            plays.play_count().await,
            Err(StatsError::NotFound(_))
        ));

        reset_game_stats(&store).await.unwrap();

        // The reset writes the document, so the counter now reads as zero
        // instead of missing.
        assert_eq!(plays.play_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_counters_accumulate_again_after_reset() {
        // ---
        let store = create_memory_store();
        let plays = PlayCountService::new(store.clone());
        let items = ItemQuantityService::new(store.clone());

        plays.record_play().await.unwrap();
        items.record_item_quantity("sword", Some(4)).await.unwrap();

        reset_game_stats(&store).await.unwrap();

        plays.record_play().await.unwrap();
        items.record_item_quantity("sword", Some(-1)).await.unwrap();

        assert_eq!(plays.play_count().await.unwrap(), 1);
        assert_eq!(items.item_quantity("sword").await.unwrap().quantity, -1);
    }
}
