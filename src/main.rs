use tally::TallyApp;
use tally::ui_constants::window;
use tally_ui::Settings;

fn main() {
    let settings = Settings {
        window_title: Some("Tally Counter".to_string()),
        window_size: window::DEFAULT_SIZE,
        min_window_size: Some(window::MIN_SIZE),
        resizable: true,
        log_level: log::LevelFilter::Info,
    };

    if let Err(e) = tally_ui::run::<TallyApp>(settings) {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
