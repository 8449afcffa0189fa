//! Inline calendar date picker for the reservation form.
//!
//! Plays the part of the platform date dialog: it opens on the draft's date
//! and either returns a chosen day or is closed without a choice.

use chrono::{Datelike, Duration, NaiveDate};

use crate::utils::date::shift_month;

/// Result from the inline date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerAction {
    /// No action taken
    None,
    /// User selected a date
    Selected(NaiveDate),
    /// User wants to close the picker without selecting
    Close,
}

impl DatePickerAction {
    /// Map to the form's date input.
    ///
    /// `None` when nothing happened this frame, `Some(None)` for a dismissal,
    /// `Some(Some(date))` for a choice.
    pub fn into_selection(self) -> Option<Option<NaiveDate>> {
        match self {
            DatePickerAction::None => None,
            DatePickerAction::Selected(date) => Some(Some(date)),
            DatePickerAction::Close => Some(None),
        }
    }
}

/// Open/closed state plus the month being browsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatePickerState {
    pub is_open: bool,
    /// The month currently being viewed in the picker (may differ from selected date)
    pub viewing_date: Option<NaiveDate>,
}

impl DatePickerState {
    pub fn open(&mut self, current_date: NaiveDate) {
        self.is_open = true;
        self.viewing_date = Some(current_date);
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.viewing_date = None;
    }
}

/// First cell of the 6x7 grid: the Sunday on or before the 1st of the month
pub fn grid_start(viewing_date: NaiveDate) -> NaiveDate {
    let first_of_month =
        NaiveDate::from_ymd_opt(viewing_date.year(), viewing_date.month(), 1).unwrap_or(viewing_date);
    let start_weekday = first_of_month.weekday().num_days_from_sunday() as i64;
    first_of_month - Duration::days(start_weekday)
}

/// Render an inline calendar-style date picker
///
/// # Arguments
/// * `ui` - The egui UI context
/// * `current_date` - The draft's date, highlighted as selected
/// * `viewing_date` - The month/year currently being viewed
/// * `today` - Today's date for highlighting
///
/// Returns the action to take (None, Selected date, or Close)
pub fn render_inline_date_picker(
    ui: &mut egui::Ui,
    current_date: NaiveDate,
    viewing_date: &mut NaiveDate,
    today: NaiveDate,
) -> DatePickerAction {
    let mut action = DatePickerAction::None;

    ui.vertical(|ui| {
        ui.set_max_width(220.0);

        // Month/Year header with navigation
        ui.horizontal(|ui| {
            if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
                *viewing_date = shift_month(*viewing_date, -12);
            }
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                *viewing_date = shift_month(*viewing_date, -1);
            }

            let header = format!("{}", viewing_date.format("%b %Y"));
            ui.add_space(4.0);
            if ui.selectable_label(false, &header).on_hover_text("Go to today").clicked() {
                *viewing_date = today;
            }
            ui.add_space(4.0);

            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                *viewing_date = shift_month(*viewing_date, 1);
            }
            if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
                *viewing_date = shift_month(*viewing_date, 12);
            }
        });

        ui.separator();

        let day_names = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

        egui::Grid::new("reservation_date_picker_grid")
            .num_columns(7)
            .spacing([2.0, 2.0])
            .min_col_width(22.0)
            .show(ui, |ui| {
                for name in &day_names {
                    ui.label(egui::RichText::new(*name).small().strong());
                }
                ui.end_row();

                let mut current = grid_start(*viewing_date);
                for _week in 0..6 {
                    for _day in 0..7 {
                        let is_current_month = current.month() == viewing_date.month();
                        let day_str = format!("{}", current.day());

                        let text = if current == today {
                            egui::RichText::new(&day_str)
                                .strong()
                                .color(egui::Color32::from_rgb(50, 150, 50))
                        } else if !is_current_month {
                            egui::RichText::new(&day_str).weak()
                        } else {
                            egui::RichText::new(&day_str)
                        };

                        if ui.selectable_label(current == current_date, text).clicked() {
                            action = DatePickerAction::Selected(current);
                        }

                        current += Duration::days(1);
                    }
                    ui.end_row();

                    // Stop if we've gone past this month
                    if current.month() != viewing_date.month() && current.day() > 7 {
                        break;
                    }
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Today").clicked() {
                action = DatePickerAction::Selected(today);
            }
            if ui.button("Close").clicked() {
                action = DatePickerAction::Close;
            }
        });
    });

    action
}
