// Reservation Book Application
// Main entry point

use anyhow::{anyhow, Result};
use reservation_book::services::settings::SettingsService;
use reservation_book::ui_egui::{load_settings_or_default, ReservationApp};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Reservation Book");

    let settings_service = match SettingsService::from_project_dirs() {
        Ok(service) => Some(service),
        Err(err) => {
            log::warn!("{}", err);
            None
        }
    };
    let settings = load_settings_or_default(settings_service.as_ref());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Reservation Book")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reservation Book",
        native_options,
        Box::new(move |cc| Ok(Box::new(ReservationApp::new(cc, settings, settings_service)))),
    )
    .map_err(|err| anyhow!("Failed to run application: {}", err))
}
