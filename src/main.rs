use relm4::prelude::*;
use strands::config;
use strands::gui::app::AppModel;
use strands::sys::runtime;

fn main() {
    env_logger::init();

    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config.socket_path.clone());

    let app = RelmApp::new("org.strands.menu");

    app.run::<AppModel>((config, rx));
}
