// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod health;
mod item_quantity;
mod metrics;
mod play_count;
mod root;
mod shared_types;

// Core handlers
pub use health::health_check;
pub use metrics::metrics_handler;
pub use root::{root_handler, say_hello};

// Play-count handlers
pub use play_count::{get_game_play_count, record_player_play_count};

// Item-quantity handlers
pub use item_quantity::{get_item_quantity, record_item_quantity};
