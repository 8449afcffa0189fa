//! Confirmation dialog for deleting a reservation.

use egui::{Context, RichText};

use crate::models::reservation::ReservationId;

/// Actions that need a confirmation before running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteReservation {
        reservation_id: ReservationId,
        client_name: String,
    },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteReservation { .. } => "Delete Reservation",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteReservation {
                reservation_id,
                client_name,
            } => format!(
                "Delete reservation #{} for \"{}\"?\n\nThis action cannot be undone.",
                reservation_id, client_name
            ),
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteReservation { .. } => "Delete",
        }
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed(ConfirmAction),
    Cancelled,
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Render the dialog; a confirmed or cancelled dialog closes itself
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(260.0);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.label(action.message());
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm_button = egui::Button::new(
                        RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(180, 60, 60));

                    if ui.add(confirm_button).clicked() {
                        confirmed = true;
                    }

                    ui.add_space(10.0);

                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            cancelled = true;
        }

        if confirmed {
            match self.pending_action.take() {
                Some(action) => ConfirmResult::Confirmed(action),
                None => ConfirmResult::Pending,
            }
        } else if cancelled {
            self.pending_action = None;
            ConfirmResult::Cancelled
        } else {
            ConfirmResult::Pending
        }
    }
}
