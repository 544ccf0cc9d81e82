pub mod curve;
pub mod geometry;
pub mod positions;
pub mod random;
pub mod safe_area;

pub use curve::{PathCommand, apply_attraction, build_smooth_path, generate_control_points};
pub use geometry::{ItemPosition, Point, ViewportSize};
pub use positions::{compact_positions, generate_positions, reflow_for_selection};
pub use random::RandomSource;
pub use safe_area::{SafeArea, compute_safe_area, item_radius};

pub const MAX_ATTEMPTS: usize = 100;
pub const GLOW_MARGIN_FACTOR: f64 = 0.5;
pub const INFLUENCE_RADIUS: f64 = 200.0;
pub const INFLUENCE_STRENGTH: f64 = 0.5;
pub const WAVE_AMPLITUDE: f64 = 0.4; // fraction of viewport width
pub const STRAND_SEED_STEP: f64 = 1.3;

// Credit badge sizing
pub const BADGE_FRACTION: f64 = 0.08;
pub const BADGE_COMPACT_FRACTION: f64 = 0.15;
pub const BADGE_MIN_SIZE: f64 = 60.0;
pub const BADGE_EDGE_OFFSET: f64 = 20.0;

/// Compact (mobile) presentation: stacked column, no keyboard navigation.
/// The threshold width itself counts as compact.
pub fn is_compact(viewport: ViewportSize, compact_width: f64) -> bool {
    viewport.width <= compact_width
}

/// Side length of the corner credit badge. Below the compact threshold it grows
/// relative to the viewport instead of using the desktop floor.
pub fn badge_size(viewport: ViewportSize, compact_width: f64) -> f64 {
    let min_side = viewport.min_side();
    if is_compact(viewport, compact_width) {
        min_side * BADGE_COMPACT_FRACTION
    } else {
        (min_side * BADGE_FRACTION).max(BADGE_MIN_SIZE)
    }
}

/// Top-left corner of the badge, anchored to the bottom-right of the viewport.
pub fn badge_origin(viewport: ViewportSize, compact_width: f64) -> Point {
    let size = badge_size(viewport, compact_width);
    Point::new(
        viewport.width - BADGE_EDGE_OFFSET - size,
        viewport.height - BADGE_EDGE_OFFSET - size,
    )
}
