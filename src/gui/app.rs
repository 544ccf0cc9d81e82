use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::audio::CuePlayer;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::{view, window};
use crate::layout::{Point, ViewportSize};
use crate::menu::{Link, SETTLE_DELAY_MS};
use crate::selection::SelectionInput;
use crate::state::{MenuState, NavAction};
use crate::sys::launch;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const INITIAL_VIEWPORT: ViewportSize = ViewportSize {
    width: 1280.0,
    height: 720.0,
};

pub struct AppModel {
    pub state: Rc<RefCell<MenuState>>,
    pub visible: bool,
    pub cues: CuePlayer,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    EditConfig,
    Nav(SelectionInput),
    Resize(ViewportSize),
    Click(Point),
    Settled,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::EditConfig => AppMsg::EditConfig,
            AppEvent::Nav(input) => AppMsg::Nav(input),
        }
    }
}

/// Arrow keys browse, Enter activates.
pub fn nav_input(key: gdk::Key) -> Option<SelectionInput> {
    match key {
        gdk::Key::Left | gdk::Key::Up => Some(SelectionInput::MoveLeft),
        gdk::Key::Right | gdk::Key::Down => Some(SelectionInput::MoveRight),
        gdk::Key::Return | gdk::Key::KP_Enter => Some(SelectionInput::Activate),
        _ => None,
    }
}

fn edit_config() {
    match config::write_default_config() {
        Ok(path) => {
            if let Err(e) = launch::open_path(&path) {
                log::error!("Failed to open '{}': {}", path.display(), e);
            }
        }
        Err(e) => log::error!("Failed to write default config: {}", e),
    }
}

fn open(link: &Link) {
    if let Err(e) = launch::open_link(link) {
        log::error!("Failed to open '{}': {}", link, e);
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Strands"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "strands-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, modifiers| {
                    if key == gdk::Key::Escape {
                        sender.input(AppMsg::Hide);
                        return glib::Propagation::Stop;
                    }
                    if key == gdk::Key::comma
                        && modifiers.contains(gdk::ModifierType::CONTROL_MASK)
                    {
                        sender.input(AppMsg::EditConfig);
                        return glib::Propagation::Stop;
                    }
                    match nav_input(key) {
                        Some(input) => {
                            sender.input(AppMsg::Nav(input));
                            glib::Propagation::Stop
                        }
                        None => glib::Propagation::Proceed,
                    }
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "strands-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(ViewportSize::new(width as f64, height as f64)));
                },

                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Click(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_window(&root, config.window.overlay);

        let state = Rc::new(RefCell::new(MenuState::from_config(&config, INITIAL_VIEWPORT)));

        let model = AppModel {
            state: state.clone(),
            visible: true,
            cues: CuePlayer::from_config(&config.sounds),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let frame = state_draw.borrow().frame();
                if let Err(e) = view::draw(cr, &frame, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        let sender_settle = sender.clone();
        glib::timeout_add_local_once(Duration::from_millis(SETTLE_DELAY_MS), move || {
            sender_settle.input(AppMsg::Settled);
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.visible = true;
                self.drawing_area.queue_draw();
            }
            AppMsg::Hide => {
                self.visible = false;
            }
            AppMsg::EditConfig => {
                edit_config();
                self.visible = false;
            }
            AppMsg::Nav(input) => {
                if !self.visible {
                    return;
                }
                let action = self.state.borrow_mut().handle(input);
                self.apply(action);
            }
            AppMsg::Resize(viewport) => {
                if self.state.borrow_mut().resize(viewport) {
                    log::debug!("Relayout for {}x{}", viewport.width, viewport.height);
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Click(point) => {
                if !self.visible {
                    return;
                }
                let link = self.state.borrow().link_at(point);
                if let Some(link) = link {
                    open(&link);
                }
            }
            AppMsg::Settled => {
                if self.state.borrow_mut().settle() {
                    self.drawing_area.queue_draw();
                }
            }
        }
    }
}

impl AppModel {
    fn apply(&self, action: NavAction) {
        if let Some(cue) = action.cue {
            self.cues.play(cue);
        }
        if let Some(link) = &action.open {
            open(link);
        }
        if action.redraw {
            self.drawing_area.queue_draw();
        }
    }
}
