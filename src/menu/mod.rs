pub mod item;

pub use item::{Label, Link, MenuItem};

pub const COMPACT_WIDTH: f64 = 768.0; // below this: column layout, no keyboard nav
pub const MAX_ITEM_FRACTION: f64 = 0.18;
pub const SELECTION_SCALE: f64 = 1.5;
pub const SEGMENT_COUNT: usize = 24;
pub const SETTLE_DELAY_MS: u64 = 100;
