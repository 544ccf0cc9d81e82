use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, Layer, LayerShell};

/// Full-screen overlay surface on layer-shell compositors.
pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("strands"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::Exclusive);
}

pub fn init_window(window: &gtk::ApplicationWindow, overlay: bool) {
    if overlay && gtk4_layer_shell::is_supported() {
        init_layer_shell(window);
    } else {
        if overlay {
            log::warn!("Layer shell unavailable, falling back to a fullscreen window");
        }
        window.fullscreen();
    }
}
