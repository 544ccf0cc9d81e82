//! Decorative strand curves.
//!
//! A strand is a sine-perturbed vertical line sampled at `segment_count + 1`
//! points, bent toward one attractor and smoothed into quadratic segments.

use super::geometry::{Point, ViewportSize};
use super::{INFLUENCE_RADIUS, INFLUENCE_STRENGTH, WAVE_AMPLITUDE};
use std::f64::consts::TAU;

/// Backend-agnostic drawing command. Quadratic segments carry their control
/// handle next to the anchor they end on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    QuadTo { control: Point, to: Point },
    LineTo(Point),
}

impl PathCommand {
    pub fn end(&self) -> Point {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => p,
            Self::QuadTo { to, .. } => to,
        }
    }
}

/// Lazily samples the strand. The iterator is pure and can be cloned to replay it.
pub fn control_points(
    width: f64,
    height: f64,
    segment_count: usize,
    seed: f64,
) -> impl Iterator<Item = Point> + Clone {
    let n = segment_count.max(1);
    (0..=n).map(move |i| {
        let t = i as f64 / n as f64;
        Point::new(
            width * 0.5 + (TAU * t + seed).sin() * width * WAVE_AMPLITUDE,
            height * t,
        )
    })
}

pub fn generate_control_points(
    width: f64,
    height: f64,
    segment_count: usize,
    seed: f64,
) -> Vec<Point> {
    control_points(width, height, segment_count, seed).collect()
}

/// Fraction of the offset vector a point at `distance` is pulled by.
/// Quadratic falloff, zero at and beyond `radius`.
pub fn pull_factor(distance: f64, radius: f64, strength: f64) -> f64 {
    if distance >= radius {
        return 0.0;
    }
    let falloff = (radius - distance) / radius;
    falloff * falloff * strength
}

pub fn apply_attraction(point: Point, attractor: Point, radius: f64, strength: f64) -> Point {
    let factor = pull_factor(point.distance(attractor), radius, strength);
    if factor == 0.0 {
        point
    } else {
        point.lerp(attractor, factor)
    }
}

pub fn build_smooth_path(points: &[Point]) -> Vec<PathCommand> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let Some((&last, interior)) = rest.split_last() else {
        return vec![PathCommand::MoveTo(first)];
    };

    let mut path = Vec::with_capacity(points.len());
    path.push(PathCommand::MoveTo(first));
    path.extend(interior.iter().enumerate().map(|(i, &control)| {
        // interior[i] is points[i + 1]; its successor is points[i + 2]
        let next = points[i + 2];
        PathCommand::QuadTo {
            control,
            to: control.midpoint(next),
        }
    }));
    path.push(PathCommand::LineTo(last));
    path
}

/// Full strand spanning the viewport, bent toward `attractor`.
pub fn strand_path(
    viewport: ViewportSize,
    attractor: Point,
    segment_count: usize,
    seed: f64,
) -> Vec<PathCommand> {
    let points: Vec<Point> = control_points(viewport.width, viewport.height, segment_count, seed)
        .map(|p| apply_attraction(p, attractor, INFLUENCE_RADIUS, INFLUENCE_STRENGTH))
        .collect();
    build_smooth_path(&points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_control_points_are_pure() {
        let a = generate_control_points(1920.0, 1080.0, 24, 0.7);
        let b = generate_control_points(1920.0, 1080.0, 24, 0.7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);

        let replay: Vec<Point> = control_points(1920.0, 1080.0, 24, 0.7).collect();
        assert_eq!(a, replay);
    }

    #[test]
    fn test_control_points_span_height() {
        let points = generate_control_points(1000.0, 800.0, 10, 0.0);
        assert_eq!(points[0], Point::new(500.0, 0.0));
        assert_eq!(points[10].y, 800.0);
        assert!(points.iter().all(|p| (100.0..=900.0).contains(&p.x)));
    }

    #[test]
    fn test_zero_segments_still_yield_endpoints() {
        assert_eq!(generate_control_points(100.0, 100.0, 0, 0.0).len(), 2);
    }

    #[test]
    fn test_attraction_ignores_distant_points() {
        let attractor = Point::new(0.0, 0.0);
        let far = Point::new(INFLUENCE_RADIUS, 0.0);
        assert_eq!(
            apply_attraction(far, attractor, INFLUENCE_RADIUS, INFLUENCE_STRENGTH),
            far
        );
        let farther = Point::new(300.0, 400.0);
        assert_eq!(
            apply_attraction(farther, attractor, INFLUENCE_RADIUS, INFLUENCE_STRENGTH),
            farther
        );
    }

    #[test]
    fn test_attraction_moves_toward_attractor() {
        let attractor = Point::new(100.0, 100.0);
        let point = Point::new(200.0, 100.0);
        // falloff (200 - 100) / 200 = 0.5, squared 0.25, strength 0.5
        let moved = apply_attraction(point, attractor, 200.0, 0.5);
        assert!((moved.x - 187.5).abs() < 1e-9);
        assert_eq!(moved.y, 100.0);
    }

    #[test]
    fn test_smooth_path_uses_midpoints() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 10.0),
        ];
        let path = build_smooth_path(&points);
        assert_eq!(
            path,
            vec![
                PathCommand::MoveTo(points[0]),
                PathCommand::QuadTo {
                    control: points[1],
                    to: Point::new(15.0, 5.0),
                },
                PathCommand::QuadTo {
                    control: points[2],
                    to: Point::new(25.0, 5.0),
                },
                PathCommand::LineTo(points[3]),
            ]
        );
    }

    #[test]
    fn test_smooth_path_short_inputs() {
        assert!(build_smooth_path(&[]).is_empty());
        let single = Point::new(1.0, 2.0);
        assert_eq!(build_smooth_path(&[single]), vec![PathCommand::MoveTo(single)]);
        let pair = [Point::new(0.0, 0.0), Point::new(0.0, 5.0)];
        assert_eq!(
            build_smooth_path(&pair),
            vec![PathCommand::MoveTo(pair[0]), PathCommand::LineTo(pair[1])]
        );
    }

    #[test]
    fn test_strand_ends_at_viewport_edges() {
        let viewport = ViewportSize::new(1280.0, 720.0);
        let path = strand_path(viewport, Point::new(-1000.0, -1000.0), 16, 0.0);
        assert_eq!(path.len(), 17);
        assert_eq!(path[0], PathCommand::MoveTo(Point::new(640.0, 0.0)));
        assert_eq!(path[16].end().y, 720.0);
    }

    proptest! {
        #[test]
        fn prop_pull_falls_off_with_distance(
            d1 in 0.0f64..INFLUENCE_RADIUS,
            d2 in 0.0f64..INFLUENCE_RADIUS,
        ) {
            let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            prop_assert!(
                pull_factor(near, INFLUENCE_RADIUS, INFLUENCE_STRENGTH)
                    >= pull_factor(far, INFLUENCE_RADIUS, INFLUENCE_STRENGTH)
            );
        }

        #[test]
        fn prop_displacement_shrinks_in_outer_band(
            d1 in (INFLUENCE_RADIUS / 3.0)..INFLUENCE_RADIUS,
            d2 in (INFLUENCE_RADIUS / 3.0)..INFLUENCE_RADIUS,
        ) {
            let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            let attractor = Point::new(0.0, 0.0);
            let shift = |d: f64| {
                let p = Point::new(d, 0.0);
                apply_attraction(p, attractor, INFLUENCE_RADIUS, INFLUENCE_STRENGTH).distance(p)
            };
            prop_assert!(shift(near) >= shift(far) - 1e-9);
        }
    }
}
