mod error;
mod item_quantities;
mod metrics;
mod play_counts;
mod store;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the counter-store contract
pub use store::{CounterStore, CounterStorePtr, Document, FieldWrite};

// Publicly expose the counter services and their persisted layout
pub use error::StatsError;
pub use item_quantities::{
    ItemQuantity, ItemQuantityService, ITEM_QUANTITIES_COLLECTION, QUANTITY_FIELD,
};
pub use play_counts::{
    PlayCountService, GAME_PLAY_COUNT_ID, PLAY_COUNTS_COLLECTION, PLAY_COUNT_FIELD,
};
