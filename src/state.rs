//! The coordinator: single owner of viewport, selection and computed layout.
//!
//! Every input goes through [`MenuState`], which recomputes what it has to and
//! reports the side effects (sound, link, redraw) for the GUI to carry out.

use crate::config::{Config, LayoutConfig};
use crate::layout::curve::strand_path;
use crate::layout::{
    self, ItemPosition, PathCommand, Point, RandomSource, SafeArea, ViewportSize,
    compact_positions, compute_safe_area, generate_positions, item_radius, reflow_for_selection,
};
use crate::menu::{Label, Link, MenuItem};
use crate::selection::{AudioCue, Selection, SelectionEffect, SelectionInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavAction {
    pub redraw: bool,
    pub cue: Option<AudioCue>,
    pub open: Option<Link>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrame {
    pub label: Label,
    pub link: Link,
    pub position: ItemPosition,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeFrame {
    pub label: Label,
    pub origin: Point,
    pub size: f64,
}

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub viewport: ViewportSize,
    pub items: Vec<ItemFrame>,
    pub strands: Vec<Vec<PathCommand>>,
    pub item_radius: f64,
    pub selection_scale: f64,
    pub badge: Option<BadgeFrame>,
    pub compact: bool,
    pub settled: bool,
}

pub struct MenuState {
    items: Vec<MenuItem>,
    badge: Option<MenuItem>,
    layout: LayoutConfig,
    viewport: ViewportSize,
    safe_area: SafeArea,
    item_radius: f64,
    base_positions: Vec<ItemPosition>,
    positions: Vec<ItemPosition>,
    strands: Vec<Vec<PathCommand>>,
    selection: Selection,
    settled: bool,
    rng: Box<dyn RandomSource>,
}

impl MenuState {
    pub fn new(
        items: Vec<MenuItem>,
        badge: Option<MenuItem>,
        layout: LayoutConfig,
        viewport: ViewportSize,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let selection = Selection::new(items.len());
        let mut state = Self {
            items,
            badge,
            layout,
            viewport,
            safe_area: SafeArea::default(),
            item_radius: 0.0,
            base_positions: Vec::new(),
            positions: Vec::new(),
            strands: Vec::new(),
            selection,
            settled: false,
            rng,
        };
        state.recalculate();
        state
    }

    /// Fresh random layout per session.
    pub fn from_config(config: &Config, viewport: ViewportSize) -> Self {
        Self::new(
            config.items.clone(),
            config.badge.clone(),
            config.layout.clone(),
            viewport,
            Box::new(rand::rng()),
        )
    }

    pub fn selected(&self) -> usize {
        self.selection.index()
    }

    pub fn is_compact(&self) -> bool {
        layout::is_compact(self.viewport, self.layout.compact_width)
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Returns whether anything changed.
    pub fn resize(&mut self, viewport: ViewportSize) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.recalculate();
        true
    }

    /// Ends the entry transition; items move from the center to their slots.
    pub fn settle(&mut self) -> bool {
        !std::mem::replace(&mut self.settled, true)
    }

    pub fn handle(&mut self, input: SelectionInput) -> NavAction {
        let enabled = !self.is_compact();
        let mut action = NavAction::default();

        for effect in self.selection.handle(input, enabled) {
            match effect {
                SelectionEffect::Cue(cue) => action.cue = Some(cue),
                SelectionEffect::Reflow => {
                    self.reflow();
                    action.redraw = true;
                }
                SelectionEffect::Open(index) => {
                    action.open = self.items.get(index).map(|item| item.link.clone());
                }
            }
        }
        action
    }

    /// Link under `point`, if any. The selected item is tested first since it is
    /// drawn on top.
    pub fn link_at(&self, point: Point) -> Option<Link> {
        if let Some(badge) = self.badge_frame()
            && (badge.origin.x..=badge.origin.x + badge.size).contains(&point.x)
            && (badge.origin.y..=badge.origin.y + badge.size).contains(&point.y)
        {
            return self.badge.as_ref().map(|b| b.link.clone());
        }

        let positions = self.display_positions();
        let selected = self.selection.index();
        let hit = |i: usize| {
            let scale = if i == selected {
                self.layout.selection_scale
            } else {
                1.0
            };
            positions
                .get(i)
                .map(|pos| self.center_of(*pos).distance(point) <= self.item_radius * scale)
                .unwrap_or(false)
        };

        std::iter::once(selected)
            .chain((0..self.items.len()).filter(|&i| i != selected))
            .find(|&i| hit(i))
            .and_then(|i| self.items.get(i))
            .map(|item| item.link.clone())
    }

    pub fn frame(&self) -> Frame {
        let items = self
            .items
            .iter()
            .zip(self.display_positions())
            .enumerate()
            .map(|(i, (item, position))| ItemFrame {
                label: item.label.clone(),
                link: item.link.clone(),
                position,
                selected: self.selection.is_selected(i),
            })
            .collect();

        Frame {
            viewport: self.viewport,
            items,
            strands: self.strands.clone(),
            item_radius: self.item_radius,
            selection_scale: self.layout.selection_scale,
            badge: self.badge_frame(),
            compact: self.is_compact(),
            settled: self.settled,
        }
    }

    fn badge_frame(&self) -> Option<BadgeFrame> {
        self.badge.as_ref().map(|badge| BadgeFrame {
            label: badge.label.clone(),
            origin: layout::badge_origin(self.viewport, self.layout.compact_width),
            size: layout::badge_size(self.viewport, self.layout.compact_width),
        })
    }

    /// Before settling every item sits in the middle of the viewport.
    fn display_positions(&self) -> Vec<ItemPosition> {
        if self.settled {
            self.positions.clone()
        } else {
            vec![self.origin_from_center(self.viewport.center()); self.items.len()]
        }
    }

    fn center_of(&self, position: ItemPosition) -> Point {
        let origin = position.to_pixels(self.viewport);
        Point::new(origin.x + self.item_radius, origin.y + self.item_radius)
    }

    fn origin_from_center(&self, center: Point) -> ItemPosition {
        ItemPosition::from_pixels(
            Point::new(center.x - self.item_radius, center.y - self.item_radius),
            self.viewport,
        )
    }

    fn recalculate(&mut self) {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            log::debug!("Ignoring empty viewport {:?}", self.viewport);
            return;
        }

        self.item_radius = item_radius(self.viewport, self.layout.max_item_fraction);
        self.safe_area = compute_safe_area(
            self.viewport,
            self.layout.max_item_fraction,
            self.layout.selection_scale,
        );

        self.base_positions = if self.is_compact() {
            compact_positions(self.items.len())
                .into_iter()
                .map(|center| self.origin_from_center(center.to_pixels(self.viewport)))
                .collect()
        } else {
            generate_positions(
                self.items.len(),
                &self.safe_area,
                self.item_radius,
                self.viewport,
                self.rng.as_mut(),
            )
        };
        self.reflow();
    }

    fn reflow(&mut self) {
        self.positions = if self.layout.reflow_on_select && !self.is_compact() {
            reflow_for_selection(
                &self.base_positions,
                self.selection.index(),
                &self.safe_area,
                self.item_radius,
                self.layout.selection_scale,
                self.viewport,
            )
        } else {
            self.base_positions.clone()
        };
        self.rebuild_strands();
    }

    fn rebuild_strands(&mut self) {
        self.strands = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, pos)| {
                strand_path(
                    self.viewport,
                    self.center_of(*pos),
                    self.layout.segment_count,
                    i as f64 * layout::STRAND_SEED_STEP,
                )
            })
            .collect();
    }
}
