use super::GLOW_MARGIN_FACTOR;
use super::geometry::{Point, ViewportSize};

/// Region of the viewport that fully contains any item at its selected size,
/// glow included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl SafeArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// The viewport is too small for the inset on at least one axis.
    pub fn is_inverted(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }
}

pub fn compute_safe_area(
    viewport: ViewportSize,
    max_item_fraction: f64,
    selection_scale: f64,
) -> SafeArea {
    let max_item_footprint = viewport.min_side() * max_item_fraction * selection_scale;
    let glow_margin = max_item_footprint * GLOW_MARGIN_FACTOR;
    let inset = max_item_footprint + glow_margin;

    SafeArea {
        left: inset,
        right: viewport.width - inset,
        top: inset,
        bottom: viewport.height - inset,
    }
}

/// Radius of an unselected item.
pub fn item_radius(viewport: ViewportSize, max_item_fraction: f64) -> f64 {
    viewport.min_side() * max_item_fraction / 2.0
}
