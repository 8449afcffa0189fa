//! "New reservation" modal window.
//!
//! Renders the draft as controlled fields and reports edits back as
//! [`BookEvent`]s instead of mutating the draft directly.

use chrono::NaiveDate;
use egui::{Color32, RichText};

use super::date_picker::{render_inline_date_picker, DatePickerState};
use super::theme::ReservationTheme;
use crate::models::draft::Draft;
use crate::services::book::BookEvent;

const FORM_LABEL_WIDTH: f32 = 110.0;

#[derive(Debug, Default)]
pub struct FormDialogResult {
    pub events: Vec<BookEvent>,
}

impl FormDialogResult {
    fn push(&mut self, event: BookEvent) {
        self.events.push(event);
    }
}

pub fn render_reservation_form(
    ctx: &egui::Context,
    draft: &Draft,
    picker: &mut DatePickerState,
    theme: &ReservationTheme,
    today: NaiveDate,
) -> FormDialogResult {
    let mut result = FormDialogResult::default();
    let mut dialog_open = true;

    egui::Window::new("New Reservation")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            render_text_fields(ui, draft, &mut result);
            ui.add_space(6.0);
            render_date_field(ui, draft, picker, theme, today, &mut result);
            ui.add_space(6.0);
            render_missing_fields_hint(ui, draft);
            ui.separator();
            render_action_buttons(ui, theme, &mut result);
        });

    if !dialog_open {
        result.push(BookEvent::Cancel);
    }

    if result
        .events
        .iter()
        .any(|e| matches!(e, BookEvent::Commit | BookEvent::Cancel))
    {
        picker.close();
    }

    result
}

fn render_text_fields(ui: &mut egui::Ui, draft: &Draft, result: &mut FormDialogResult) {
    labeled_row(ui, "Client name:", |ui| {
        let mut name = draft.name().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut name)
                .hint_text("Client name")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            result.push(BookEvent::NameChanged(name));
        }
    });

    labeled_row(ui, "Party size:", |ui| {
        let mut party_size = draft.party_size().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut party_size)
                .hint_text("Number of people")
                .desired_width(80.0),
        );
        if response.changed() {
            result.push(BookEvent::PartySizeChanged(party_size));
        }
    });
}

fn render_date_field(
    ui: &mut egui::Ui,
    draft: &Draft,
    picker: &mut DatePickerState,
    theme: &ReservationTheme,
    today: NaiveDate,
    result: &mut FormDialogResult,
) {
    labeled_row(ui, "Date:", |ui| {
        let button = egui::Button::new(
            RichText::new(format!("📅 {}", draft.date().format("%B %d, %Y")))
                .color(theme.text_on_accent),
        )
        .fill(theme.accent_soft);

        if ui.add(button).on_hover_text("Select reservation date").clicked() {
            if picker.is_open {
                picker.close();
            } else {
                picker.open(draft.date());
            }
        }
    });

    if !picker.is_open {
        return;
    }

    let mut viewing = picker.viewing_date.unwrap_or(draft.date());
    ui.indent("reservation_date_picker", |ui| {
        let action = render_inline_date_picker(ui, draft.date(), &mut viewing, today);
        if let Some(selection) = action.into_selection() {
            result.push(BookEvent::DateSelected(selection));
            picker.close();
        } else {
            picker.viewing_date = Some(viewing);
        }
    });
}

fn render_missing_fields_hint(ui: &mut egui::Ui, draft: &Draft) {
    if draft.has_missing_fields() {
        ui.label(
            RichText::new("Name or party size is empty")
                .color(Color32::from_rgb(200, 140, 0))
                .italics(),
        );
    }
}

fn render_action_buttons(ui: &mut egui::Ui, theme: &ReservationTheme, result: &mut FormDialogResult) {
    ui.horizontal(|ui| {
        let add = egui::Button::new(RichText::new("Add reservation").color(theme.text_on_accent))
            .fill(theme.accent);
        if ui.add(add).clicked() {
            result.push(BookEvent::Commit);
        }

        let cancel = egui::Button::new(RichText::new("Cancel").color(theme.text_on_accent))
            .fill(theme.danger);
        if ui.add(cancel).clicked() {
            result.push(BookEvent::Cancel);
        }
    });
}

fn labeled_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_sized([FORM_LABEL_WIDTH, 20.0], egui::Label::new(label));
        add_contents(ui);
    });
}
