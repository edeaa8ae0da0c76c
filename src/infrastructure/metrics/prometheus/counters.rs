use metrics::counter;

/// Increment the running total of recorded game plays.
pub fn increment_play_recorded() {
    counter!("game_plays_recorded_total").increment(1);
}

/// Increment the running total of item-quantity updates.
pub fn increment_item_quantity_updated() {
    counter!("item_quantity_updates_total").increment(1);
}

/// Increment the running total of completed game-stats resets.
pub fn increment_stats_reset() {
    counter!("game_stats_resets_total").increment(1);
}
