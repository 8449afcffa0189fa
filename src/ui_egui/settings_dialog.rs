use crate::models::settings::{IdPolicy, Settings, ThemeMode};
use crate::services::settings::SettingsService;
use crate::utils::date::format_date;
use chrono::Local;
use egui::{Color32, RichText};

#[derive(Debug, Default)]
pub struct SettingsDialogResponse {
    pub saved: bool,
    pub error: Option<String>,
}

/// Render the settings dialog.
///
/// `settings` is the working copy edited in place; it is written through
/// `service` when the user presses Save.
pub fn render_settings_dialog(
    ctx: &egui::Context,
    settings: &mut Settings,
    service: Option<&SettingsService>,
    show_dialog: &mut bool,
) -> SettingsDialogResponse {
    let mut response = SettingsDialogResponse::default();
    let mut dialog_open = *show_dialog;

    egui::Window::new("Settings")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading("Appearance");
            ui.horizontal(|ui| {
                ui.label("Theme:");
                ui.radio_value(&mut settings.theme, ThemeMode::Light, "Light");
                ui.radio_value(&mut settings.theme, ThemeMode::Dark, "Dark");
            });

            ui.horizontal(|ui| {
                ui.label("Date format:");
                ui.text_edit_singleline(&mut settings.date_format);
            });
            let preview = format_date(Local::now().date_naive(), &settings.date_format);
            ui.label(RichText::new(format!("Preview: {}", preview)).weak());

            ui.add_space(8.0);
            ui.heading("Reservations");
            ui.checkbox(&mut settings.confirm_delete, "Ask before deleting");

            ui.label("Reservation numbers:");
            ui.radio_value(&mut settings.id_policy, IdPolicy::Sequential, "Always increasing");
            ui.radio_value(
                &mut settings.id_policy,
                IdPolicy::CountPlusOne,
                "Count of reservations + 1",
            );

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    match service {
                        Some(service) => match service.update(settings) {
                            Ok(()) => {
                                response.saved = true;
                                *show_dialog = false;
                            }
                            Err(err) => {
                                log::error!("Failed to save settings: {}", err);
                                response.error = Some(err.to_string());
                            }
                        },
                        None => {
                            response.error =
                                Some("No configuration directory available".to_string());
                        }
                    }
                }
                if ui.button("Close").clicked() {
                    *show_dialog = false;
                }
            });

            if let Some(path) = service.map(|s| s.path()) {
                ui.label(
                    RichText::new(format!("Stored in {}", path.display()))
                        .small()
                        .color(Color32::GRAY),
                );
            }
        });

    if !dialog_open {
        *show_dialog = false;
    }

    response
}
