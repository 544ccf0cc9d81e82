use crate::gui::theme::ThemeColors;
use crate::layout::{PathCommand, Point};
use crate::state::{BadgeFrame, Frame, ItemFrame};
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

const STRAND_WIDTH: f64 = 1.0;
const RING_WIDTH: f64 = 2.0;
const LABEL_SIZE: f64 = 0.24; // font size relative to the item radius
const IDLE_TEXT_ALPHA: f64 = 0.8;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct ItemRenderer<'a> {
    item: &'a ItemFrame,
    center: Point,
    radius: f64,
}

impl<'a> ItemRenderer<'a> {
    fn new(item: &'a ItemFrame, frame: &Frame) -> Self {
        let origin = item.position.to_pixels(frame.viewport);
        let scale = if item.selected {
            frame.selection_scale
        } else {
            1.0
        };
        Self {
            item,
            center: Point::new(origin.x + frame.item_radius, origin.y + frame.item_radius),
            radius: frame.item_radius * scale,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_bubble(cr, colors)?;
        let mut text = colors.text;
        if !self.item.selected {
            text.alpha = IDLE_TEXT_ALPHA;
        }
        draw_label(
            cr,
            &self.item.label.to_lowercase(),
            self.center,
            self.radius * LABEL_SIZE,
            text,
        )
    }

    fn draw_bubble(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let fill = if self.item.selected {
            colors.selected
        } else {
            colors.item
        };
        cr.new_path();
        cr.arc(self.center.x, self.center.y, self.radius, 0.0, 2.0 * PI);
        set_color(cr, fill);
        cr.fill_preserve()?;
        set_color(cr, colors.ring);
        cr.set_line_width(RING_WIDTH);
        cr.stroke()
    }
}

fn draw_label(
    cr: &Context,
    text: &str,
    center: Point,
    size: f64,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    set_color(cr, color);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(size);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            center.x - ext.width() / 2.0 - ext.x_bearing(),
            center.y + ext.height() / 2.0,
        );
        cr.show_text(text)?;
    }
    Ok(())
}

/// Control points of the cubic equivalent to a quadratic segment.
fn cubic_controls(from: Point, control: Point, to: Point) -> (Point, Point) {
    (
        from.lerp(control, 2.0 / 3.0),
        to.lerp(control, 2.0 / 3.0),
    )
}

fn trace_path(cr: &Context, path: &[PathCommand]) {
    let mut current = Point::default();
    for command in path {
        match *command {
            PathCommand::MoveTo(p) => cr.move_to(p.x, p.y),
            PathCommand::LineTo(p) => cr.line_to(p.x, p.y),
            PathCommand::QuadTo { control, to } => {
                let (c1, c2) = cubic_controls(current, control, to);
                cr.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
            }
        }
        current = command.end();
    }
}

fn draw_badge(cr: &Context, badge: &BadgeFrame, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let radius = badge.size / 2.0;
    let center = Point::new(badge.origin.x + radius, badge.origin.y + radius);

    cr.new_path();
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    set_color(cr, colors.item);
    cr.fill_preserve()?;
    set_color(cr, colors.ring);
    cr.set_line_width(RING_WIDTH);
    cr.stroke()?;

    let mut text = colors.text;
    text.alpha = IDLE_TEXT_ALPHA;
    draw_label(cr, &badge.label.to_lowercase(), center, badge.size * 0.18, text)
}

pub fn draw(cr: &Context, frame: &Frame, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_color(cr, colors.background);
    cr.paint()?;

    set_color(cr, colors.strand);
    cr.set_line_width(STRAND_WIDTH);
    for strand in &frame.strands {
        cr.new_path();
        trace_path(cr, strand);
        cr.stroke()?;
    }

    // selected item last so it overlaps its neighbors
    let (selected, idle): (Vec<&ItemFrame>, Vec<&ItemFrame>) =
        frame.items.iter().partition(|item| item.selected);
    for item in idle.into_iter().chain(selected) {
        ItemRenderer::new(item, frame).draw(cr, colors)?;
    }

    if let Some(badge) = &frame.badge {
        draw_badge(cr, badge, colors)?;
    }
    Ok(())
}
