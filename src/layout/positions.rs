//! Item placement inside the safe area.
//!
//! Positions are the top-left corner of an item's bounding square (side `2r`),
//! so a draw inside `[left, right - 2r] x [top, bottom - 2r]` keeps the whole
//! unselected item inside the safe area.

use super::MAX_ATTEMPTS;
use super::geometry::{ItemPosition, Point, ViewportSize};
use super::random::RandomSource;
use super::safe_area::SafeArea;

/// Places `count` items without overlap, falling back to the safe-area center
/// for any item that cannot be placed within [`MAX_ATTEMPTS`] draws.
///
/// Items are processed strictly in index order, so a fixed random source gives
/// a fixed layout. An inverted safe area skips the search entirely.
pub fn generate_positions<R: RandomSource + ?Sized>(
    count: usize,
    safe_area: &SafeArea,
    item_radius: f64,
    viewport: ViewportSize,
    rng: &mut R,
) -> Vec<ItemPosition> {
    let fallback = ItemPosition::from_pixels(safe_area.center(), viewport);

    if safe_area.is_inverted() {
        log::warn!(
            "Viewport {}x{} leaves no placement region, centering {} items",
            viewport.width,
            viewport.height,
            count
        );
        return vec![fallback; count];
    }

    let min_distance = 2.0 * item_radius;
    let mut placed: Vec<Point> = Vec::with_capacity(count);

    (0..count)
        .map(|index| match find_free_spot(safe_area, min_distance, &placed, &mut *rng) {
            Some(point) => {
                placed.push(point);
                ItemPosition::from_pixels(point, viewport)
            }
            None => {
                log::debug!(
                    "No free spot for item {} after {} attempts, using safe-area center",
                    index,
                    MAX_ATTEMPTS
                );
                fallback
            }
        })
        .collect()
}

fn find_free_spot<R: RandomSource + ?Sized>(
    safe_area: &SafeArea,
    min_distance: f64,
    placed: &[Point],
    rng: &mut R,
) -> Option<Point> {
    (0..MAX_ATTEMPTS).find_map(|_| {
        let candidate = Point::new(
            rng.range(safe_area.left, safe_area.right - min_distance),
            rng.range(safe_area.top, safe_area.bottom - min_distance),
        );
        let collides = placed
            .iter()
            .any(|p| p.distance(candidate) < min_distance);

        (!collides && safe_area.contains(candidate)).then_some(candidate)
    })
}

/// Vertical column used by the compact presentation.
pub fn compact_positions(count: usize) -> Vec<ItemPosition> {
    let step = 100.0 / (count + 1) as f64;
    (0..count)
        .map(|i| ItemPosition::new(50.0, step * (i + 1) as f64))
        .collect()
}

/// Keeps the selected item inside the safe area once it grows to
/// `selection_scale`, dragging the other items along with a linear falloff.
///
/// The input is never modified; an inverted safe area or an item that already
/// fits returns the positions unchanged.
pub fn reflow_for_selection(
    positions: &[ItemPosition],
    selected: usize,
    safe_area: &SafeArea,
    item_radius: f64,
    selection_scale: f64,
    viewport: ViewportSize,
) -> Vec<ItemPosition> {
    let Some(selected_pos) = positions.get(selected) else {
        return positions.to_vec();
    };
    if safe_area.is_inverted() {
        return positions.to_vec();
    }

    let center_of = |pos: &ItemPosition| {
        let origin = pos.to_pixels(viewport);
        Point::new(origin.x + item_radius, origin.y + item_radius)
    };

    let grown = item_radius * selection_scale;
    let center = center_of(selected_pos);
    let target = Point::new(
        clamp_or_mid(center.x, safe_area.left + grown, safe_area.right - grown),
        clamp_or_mid(center.y, safe_area.top + grown, safe_area.bottom - grown),
    );
    let (dx, dy) = (target.x - center.x, target.y - center.y);

    if dx == 0.0 && dy == 0.0 {
        return positions.to_vec();
    }

    let diagonal = safe_area.diagonal().max(f64::EPSILON);
    let max_x = safe_area.right - 2.0 * item_radius;
    let max_y = safe_area.bottom - 2.0 * item_radius;

    positions
        .iter()
        .enumerate()
        .map(|(i, pos)| {
            let origin = pos.to_pixels(viewport);
            if i == selected {
                let moved = Point::new(origin.x + dx, origin.y + dy);
                return ItemPosition::from_pixels(moved, viewport);
            }

            let weight = (1.0 - center_of(pos).distance(center) / diagonal).max(0.0);
            let moved = Point::new(
                clamp_or_low(origin.x + dx * weight, safe_area.left, max_x),
                clamp_or_low(origin.y + dy * weight, safe_area.top, max_y),
            );
            ItemPosition::from_pixels(moved, viewport)
        })
        .collect()
}

fn clamp_or_mid(v: f64, low: f64, high: f64) -> f64 {
    if low > high {
        (low + high) / 2.0
    } else {
        v.clamp(low, high)
    }
}

fn clamp_or_low(v: f64, low: f64, high: f64) -> f64 {
    if low > high { low } else { v.clamp(low, high) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::random::testing::Scripted;
    use crate::layout::safe_area::{compute_safe_area, item_radius};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f64 = 1e-6;

    fn pixels(positions: &[ItemPosition], viewport: ViewportSize) -> Vec<Point> {
        positions.iter().map(|p| p.to_pixels(viewport)).collect()
    }

    fn assert_within(area: &SafeArea, p: Point) {
        assert!(
            p.x >= area.left - EPS
                && p.x <= area.right + EPS
                && p.y >= area.top - EPS
                && p.y <= area.bottom + EPS,
            "{:?} outside {:?}",
            p,
            area
        );
    }

    #[test]
    fn test_returns_one_position_per_item() {
        let viewport = ViewportSize::new(1920.0, 1080.0);
        let area = compute_safe_area(viewport, 0.18, 1.5);
        let r = item_radius(viewport, 0.18);
        let mut rng = StdRng::seed_from_u64(42);

        let positions = generate_positions(5, &area, r, viewport, &mut rng);
        assert_eq!(positions.len(), 5);
        for p in pixels(&positions, viewport) {
            assert_within(&area, p);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let viewport = ViewportSize::new(2560.0, 1440.0);
        let area = compute_safe_area(viewport, 0.1, 1.5);
        let r = item_radius(viewport, 0.1);

        let a = generate_positions(5, &area, r, viewport, &mut StdRng::seed_from_u64(9));
        let b = generate_positions(5, &area, r, viewport, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_crowded_area_falls_back_to_center() {
        // a 200px line of draws with 100px spacing fits at most three items
        let viewport = ViewportSize::new(1000.0, 1000.0);
        let area = SafeArea {
            left: 0.0,
            right: 300.0,
            top: 0.0,
            bottom: 100.0,
        };
        let mut rng = StdRng::seed_from_u64(1);

        let positions = generate_positions(10, &area, 50.0, viewport, &mut rng);
        assert_eq!(positions.len(), 10);

        let center = ItemPosition::from_pixels(area.center(), viewport);
        let fallbacks = positions.iter().filter(|p| **p == center).count();
        assert!(fallbacks >= 7, "only {} fallbacks", fallbacks);
    }

    #[test]
    fn test_later_item_rejects_colliding_draws() {
        let viewport = ViewportSize::new(1000.0, 1000.0);
        let area = SafeArea {
            left: 0.0,
            right: 500.0,
            top: 0.0,
            bottom: 500.0,
        };
        // item 0 at (0, 0); item 1 first redraws (0, 0), then lands at (200, 0)
        let mut rng = Scripted::new(vec![0.0, 0.0, 0.0, 0.0, 0.5, 0.0]);

        let positions = generate_positions(2, &area, 50.0, viewport, &mut rng);
        assert_eq!(positions[0], ItemPosition::new(0.0, 0.0));
        assert!((positions[1].x - 20.0).abs() < EPS);
        assert_eq!(positions[1].y, 0.0);
    }

    #[test]
    fn test_inverted_area_centers_everything() {
        let viewport = ViewportSize::new(320.0, 480.0);
        let area = compute_safe_area(viewport, 0.5, 2.0);
        assert!(area.is_inverted());

        let positions = generate_positions(3, &area, 80.0, viewport, &mut Scripted::new(vec![0.3]));
        assert_eq!(positions, vec![ItemPosition::new(50.0, 50.0); 3]);
    }

    #[test]
    fn test_compact_column() {
        let positions = compact_positions(4);
        assert_eq!(positions.len(), 4);
        assert!(positions.iter().all(|p| p.x == 50.0));
        assert_eq!(positions[0].y, 20.0);
        assert_eq!(positions[3].y, 80.0);
        assert!(compact_positions(0).is_empty());
    }

    #[test]
    fn test_reflow_pulls_selected_item_inside() {
        let viewport = ViewportSize::new(1000.0, 1000.0);
        let area = SafeArea {
            left: 100.0,
            right: 900.0,
            top: 100.0,
            bottom: 900.0,
        };
        let r = 50.0;
        // selected item hugs the right edge, neighbor near it, far item on the left
        let positions = vec![
            ItemPosition::new(80.0, 50.0),
            ItemPosition::new(60.0, 50.0),
            ItemPosition::new(20.0, 20.0),
        ];

        let reflowed = reflow_for_selection(&positions, 0, &area, r, 1.5, viewport);
        let selected = reflowed[0].to_pixels(viewport);
        let grown = r * 1.5;
        assert!(selected.x + r + grown <= area.right + EPS);

        let near_shift = positions[1].x - reflowed[1].x;
        let far_shift = positions[2].x - reflowed[2].x;
        assert!(near_shift > 0.0);
        assert!(near_shift > far_shift);
        assert!(far_shift > 0.0);
    }

    #[test]
    fn test_reflow_keeps_fitting_selection() {
        let viewport = ViewportSize::new(1000.0, 1000.0);
        let area = SafeArea {
            left: 100.0,
            right: 900.0,
            top: 100.0,
            bottom: 900.0,
        };
        let positions = vec![ItemPosition::new(40.0, 40.0), ItemPosition::new(70.0, 20.0)];
        let reflowed = reflow_for_selection(&positions, 0, &area, 50.0, 1.5, viewport);
        assert_eq!(reflowed, positions);

        let out_of_range = reflow_for_selection(&positions, 5, &area, 50.0, 1.5, viewport);
        assert_eq!(out_of_range, positions);
    }

    proptest! {
        #[test]
        fn prop_placements_stay_inside_and_apart(
            width in 800.0f64..4000.0,
            height in 800.0f64..3000.0,
            count in 1usize..12,
            seed in any::<u64>(),
        ) {
            let viewport = ViewportSize::new(width, height);
            let area = compute_safe_area(viewport, 0.1, 1.5);
            let r = item_radius(viewport, 0.1);
            let mut rng = StdRng::seed_from_u64(seed);

            let positions = generate_positions(count, &area, r, viewport, &mut rng);
            prop_assert_eq!(positions.len(), count);

            let center = ItemPosition::from_pixels(area.center(), viewport);
            let placed: Vec<Point> = positions
                .iter()
                .filter(|p| **p != center)
                .map(|p| p.to_pixels(viewport))
                .collect();

            for p in pixels(&positions, viewport) {
                prop_assert!(p.x >= area.left - EPS && p.x <= area.right + EPS);
                prop_assert!(p.y >= area.top - EPS && p.y <= area.bottom + EPS);
            }
            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    prop_assert!(a.distance(*b) >= 2.0 * r - EPS);
                }
            }
        }
    }
}
