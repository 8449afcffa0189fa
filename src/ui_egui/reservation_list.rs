//! Scrolling list of reservation cards with a delete button each.

use egui::{RichText, Stroke};

use super::theme::ReservationTheme;
use crate::models::reservation::{Reservation, ReservationId};
use crate::utils::date::format_date;

/// Render all reservations. Returns the id whose delete button was clicked.
pub fn render_reservation_list(
    ui: &mut egui::Ui,
    reservations: &[Reservation],
    theme: &ReservationTheme,
    date_format: &str,
) -> Option<ReservationId> {
    if reservations.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No reservations yet").color(theme.text_secondary));
        });
        return None;
    }

    let mut delete_request = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for reservation in reservations {
                if render_card(ui, reservation, theme, date_format) {
                    delete_request = Some(reservation.id());
                }
                ui.add_space(10.0);
            }
        });

    delete_request
}

fn render_card(
    ui: &mut egui::Ui,
    reservation: &Reservation,
    theme: &ReservationTheme,
    date_format: &str,
) -> bool {
    let text = theme.card_text();
    let mut delete_clicked = false;

    egui::Frame::none()
        .fill(theme.card_background)
        .stroke(Stroke::new(1.0, theme.card_border))
        .rounding(10.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.push_id(reservation.id().get(), |ui| {
                ui.label(RichText::new(format!("#{}", reservation.id())).size(18.0).strong().color(text));
                ui.label(RichText::new(reservation.display_name()).size(18.0).strong().color(text));
                ui.label(RichText::new(reservation.party_size_label()).size(16.0).color(text));
                ui.label(
                    RichText::new(format!(
                        "Reservation date: {}",
                        format_date(reservation.date(), date_format)
                    ))
                    .size(16.0)
                    .color(text),
                );

                let delete = egui::Button::new(
                    RichText::new("Delete").strong().color(theme.text_on_accent),
                )
                .fill(theme.danger)
                .rounding(8.0);
                if ui.add(delete).clicked() {
                    delete_clicked = true;
                }
            });
        });

    delete_clicked
}
