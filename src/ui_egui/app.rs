mod confirm;
mod lifecycle;
mod toast;

use self::confirm::{ConfirmAction, ConfirmDialogState, ConfirmResult};
use self::toast::ToastManager;
use crate::models::reservation::ReservationId;
use crate::models::settings::Settings;
use crate::services::book::{BookEvent, BookOutcome, ReservationBook};
use crate::services::settings::SettingsService;
use crate::ui_egui::date_picker::DatePickerState;
use crate::ui_egui::form_dialog::render_reservation_form;
use crate::ui_egui::reservation_list::render_reservation_list;
use crate::ui_egui::settings_dialog::render_settings_dialog;
use crate::ui_egui::theme::ReservationTheme;
use egui::RichText;

pub use self::lifecycle::load_settings_or_default;

pub struct ReservationApp {
    /// Reservations and the new-reservation form
    book: ReservationBook,
    settings: Settings,
    settings_service: Option<SettingsService>,
    /// Working copy edited by the settings window
    settings_draft: Option<Settings>,
    show_settings_dialog: bool,
    active_theme: ReservationTheme,
    pending_theme_apply: bool,
    date_picker: DatePickerState,
    toast_manager: ToastManager,
    confirm_dialog: ConfirmDialogState,
}

impl eframe::App for ReservationApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl ReservationApp {
    /// Route one UI event through the book and report the outcome
    fn dispatch(&mut self, event: BookEvent) {
        let outcome = self.book.handle(event);
        if outcome == BookOutcome::FormClosed {
            self.date_picker.close();
        }
        self.toast_manager.notify(&outcome);
    }

    fn request_delete(&mut self, id: ReservationId) {
        if !self.book.view().list_interactive() {
            log::debug!("Ignoring delete of {} while the form is open", id);
            return;
        }
        if !self.settings.confirm_delete {
            self.dispatch(BookEvent::Delete(id));
            return;
        }

        let client_name = self
            .book
            .store()
            .get(id)
            .map(|r| r.display_name().to_string())
            .unwrap_or_default();
        self.confirm_dialog.request(ConfirmAction::DeleteReservation {
            reservation_id: id,
            client_name,
        });
    }

    fn handle_confirm_dialog(&mut self, ctx: &egui::Context) {
        if let ConfirmResult::Confirmed(action) = self.confirm_dialog.render(ctx) {
            match action {
                ConfirmAction::DeleteReservation { reservation_id, .. } => {
                    self.dispatch(BookEvent::Delete(reservation_id));
                }
            }
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.confirm_dialog.is_open() || self.show_settings_dialog {
            return;
        }

        let (new_pressed, escape_pressed) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if new_pressed {
            self.dispatch(BookEvent::OpenForm);
        }
        if escape_pressed && self.book.form().is_open() {
            self.dispatch(BookEvent::Cancel);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("reservation_top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let add = egui::Button::new(
                    RichText::new("➕ New reservation")
                        .strong()
                        .color(self.active_theme.text_on_accent),
                )
                .fill(self.active_theme.accent)
                .rounding(10.0);
                let enabled = self.book.view().list_interactive();
                if ui.add_enabled(enabled, add).on_hover_text("Ctrl+N").clicked() {
                    self.dispatch(BookEvent::OpenForm);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Settings").clicked() {
                        self.settings_draft = Some(self.settings.clone());
                        self.show_settings_dialog = true;
                    }
                    ui.label(
                        RichText::new(format!("{} reservations", self.book.store().len()))
                            .color(self.active_theme.text_secondary),
                    );
                });
            });
            ui.add_space(6.0);
        });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let delete_request = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let view = self.book.view();
                ui.add_enabled_ui(view.list_interactive(), |ui| {
                    render_reservation_list(
                        ui,
                        view.reservations,
                        &self.active_theme,
                        &self.settings.date_format,
                    )
                })
                .inner
            })
            .inner;

        if let Some(id) = delete_request {
            self.request_delete(id);
        }
    }

    fn render_form(&mut self, ctx: &egui::Context) {
        if !self.book.form().is_open() {
            return;
        }

        let today = self.book.form().today();
        let result = render_reservation_form(
            ctx,
            self.book.form().draft(),
            &mut self.date_picker,
            &self.active_theme,
            today,
        );
        for event in result.events {
            self.dispatch(event);
        }
    }

    fn render_settings(&mut self, ctx: &egui::Context) {
        if !self.show_settings_dialog {
            return;
        }
        let Some(draft) = self.settings_draft.as_mut() else {
            self.show_settings_dialog = false;
            return;
        };

        let response = render_settings_dialog(
            ctx,
            draft,
            self.settings_service.as_ref(),
            &mut self.show_settings_dialog,
        );

        if let Some(error) = response.error {
            self.toast_manager.settings_failed(error);
        }
        if response.saved {
            self.settings = draft.clone();
            self.apply_settings();
            self.toast_manager.settings_saved();
        }
        if !self.show_settings_dialog {
            self.settings_draft = None;
        }
    }

    fn apply_settings(&mut self) {
        self.book.set_id_policy(self.settings.id_policy);
        self.active_theme = ReservationTheme::for_mode(self.settings.theme);
        self.pending_theme_apply = true;
    }
}
