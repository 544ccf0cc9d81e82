use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub strand: Srgba<f64>,
    pub item: Srgba<f64>,
    pub selected: Srgba<f64>,
    pub ring: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            background: Self::lookup_color(
                context,
                "strands_background",
                Srgba::new(0.0, 0.03, 0.0, 1.0),
                None,
            ),
            strand: Self::lookup_color(
                context,
                "strands_accent",
                Srgba::new(0.0, 1.0, 0.0, 0.2),
                Some(0.2),
            ),
            item: Self::lookup_color(
                context,
                "strands_accent",
                Srgba::new(0.0, 1.0, 0.0, 0.2),
                Some(0.2),
            ),
            selected: Self::lookup_color(
                context,
                "strands_accent",
                Srgba::new(0.0, 1.0, 0.0, 0.45),
                Some(0.45),
            ),
            ring: Self::lookup_color(
                context,
                "strands_accent",
                Srgba::new(0.0, 1.0, 0.0, 0.8),
                None,
            ),
            text: Self::lookup_color(
                context,
                "strands_text",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color strands_background #000800;
@define-color strands_accent rgba(0, 255, 0, 0.8);
@define-color strands_text #ffffff;

.strands-window, .strands-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
