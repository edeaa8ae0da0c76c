use super::error::StatsError;
use super::store::CounterStorePtr;
use serde::Serialize;

/// Collection holding one quantity document per item id.
pub const ITEM_QUANTITIES_COLLECTION: &str = "ItemQuantities";

/// Counter field on each item-quantity document.
pub const QUANTITY_FIELD: &str = "quantity";

/// A single item's current quantity.
#[derive(Debug, Clone, Serialize)]
pub struct ItemQuantity {
    // ---
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub quantity: i64,
}

/// Increments and reads per-item quantity counters keyed by caller-supplied
/// item ids.
///
/// Item ids are free-form non-empty strings; each distinct id gets its own
/// document on first increment. Amounts may be zero or negative — no floor
/// is enforced.
#[derive(Clone)]
pub struct ItemQuantityService {
    // ---
    store: CounterStorePtr,
}

impl ItemQuantityService {
    // ---
    pub fn new(store: CounterStorePtr) -> Self {
        // ---
        Self { store }
    }

    /// Apply a quantity delta to one item.
    ///
    /// `amount` is `None` when the caller omitted it entirely; both a missing
    /// amount and an empty item id fail validation with the same message, so
    /// the two are rejected together.
    pub async fn record_item_quantity(
        &self,
        item_id: &str,
        amount: Option<i64>,
    ) -> Result<(), StatsError> {
        // ---
        let amount = match amount {
            Some(amount) if !item_id.is_empty() => amount,
            _ => return Err(StatsError::Validation("Item ID and amount are required.")),
        };

        self.store
            .incr_field(ITEM_QUANTITIES_COLLECTION, item_id, QUANTITY_FIELD, amount)
            .await?;

        Ok(())
    }

    /// Current quantity for one item.
    ///
    /// Fails with `NotFound` for ids that have never been written. A document
    /// missing the quantity field reads as zero.
    pub async fn item_quantity(&self, item_id: &str) -> Result<ItemQuantity, StatsError> {
        // ---
        if item_id.is_empty() {
            return Err(StatsError::Validation("Item ID is required."));
        }

        let doc = self
            .store
            .get(ITEM_QUANTITIES_COLLECTION, item_id)
            .await?
            .ok_or(StatsError::NotFound("Item quantity not found."))?;

        let quantity = doc
            .get(QUANTITY_FIELD)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok(ItemQuantity {
            item_id: item_id.to_string(),
            quantity,
        })
    }
}
