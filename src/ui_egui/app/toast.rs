//! Feedback toasts for reservation and settings changes.
//!
//! Each [`BookOutcome`] that changes the list maps to one toast kind. At most
//! [`MAX_VISIBLE_TOASTS`] are shown at once; a new toast pushes out the
//! oldest one so a burst of deletes does not cover the list.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

use crate::models::reservation::Reservation;
use crate::services::book::BookOutcome;

pub const MAX_VISIBLE_TOASTS: usize = 3;

const FADE_OUT: Duration = Duration::from_millis(500);

/// What a toast is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    ReservationAdded,
    /// Committed with an empty name or party size
    IncompleteReservation,
    ReservationRemoved,
    SettingsSaved,
    SettingsFailed,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::ReservationAdded | ToastKind::SettingsSaved => "✓",
            ToastKind::IncompleteReservation => "⚠",
            ToastKind::ReservationRemoved => "🗑",
            ToastKind::SettingsFailed => "✗",
        }
    }

    /// How long the toast stays up, fade included.
    ///
    /// Problems stay longer than confirmations.
    pub fn duration(self) -> Duration {
        match self {
            ToastKind::ReservationAdded | ToastKind::ReservationRemoved | ToastKind::SettingsSaved => {
                Duration::from_secs(3)
            }
            ToastKind::IncompleteReservation => Duration::from_secs(5),
            ToastKind::SettingsFailed => Duration::from_secs(6),
        }
    }

    pub fn background_color(self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastKind::ReservationAdded | ToastKind::SettingsSaved, true) => Color32::from_rgb(30, 70, 40),
            (ToastKind::ReservationAdded | ToastKind::SettingsSaved, false) => Color32::from_rgb(220, 255, 220),
            (ToastKind::IncompleteReservation, true) => Color32::from_rgb(80, 60, 20),
            (ToastKind::IncompleteReservation, false) => Color32::from_rgb(255, 245, 200),
            (ToastKind::ReservationRemoved, true) => Color32::from_rgb(30, 50, 80),
            (ToastKind::ReservationRemoved, false) => Color32::from_rgb(220, 235, 255),
            (ToastKind::SettingsFailed, true) => Color32::from_rgb(80, 30, 30),
            (ToastKind::SettingsFailed, false) => Color32::from_rgb(255, 220, 220),
        }
    }

    pub fn text_color(self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastKind::ReservationAdded | ToastKind::SettingsSaved, true) => Color32::from_rgb(100, 220, 120),
            (ToastKind::ReservationAdded | ToastKind::SettingsSaved, false) => Color32::from_rgb(30, 120, 50),
            (ToastKind::IncompleteReservation, true) => Color32::from_rgb(255, 200, 80),
            (ToastKind::IncompleteReservation, false) => Color32::from_rgb(150, 100, 0),
            (ToastKind::ReservationRemoved, true) => Color32::from_rgb(100, 180, 255),
            (ToastKind::ReservationRemoved, false) => Color32::from_rgb(30, 80, 150),
            (ToastKind::SettingsFailed, true) => Color32::from_rgb(255, 120, 120),
            (ToastKind::SettingsFailed, false) => Color32::from_rgb(180, 40, 40),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    fn added(reservation: &Reservation) -> Self {
        if reservation.has_missing_fields() {
            Self::new(
                ToastKind::IncompleteReservation,
                format!("Reservation #{} added with empty fields", reservation.id()),
            )
        } else {
            Self::new(
                ToastKind::ReservationAdded,
                format!(
                    "#{} {}, {}",
                    reservation.id(),
                    reservation.name(),
                    reservation.party_size_label()
                ),
            )
        }
    }

    /// Toast reporting `outcome`, if it changed the reservation list
    pub fn for_outcome(outcome: &BookOutcome) -> Option<Self> {
        match outcome {
            BookOutcome::Added(reservation) => Some(Self::added(reservation)),
            BookOutcome::Removed(reservation) => Some(Self::new(
                ToastKind::ReservationRemoved,
                format!("Removed #{} {}", reservation.id(), reservation.display_name()),
            )),
            BookOutcome::Unchanged
            | BookOutcome::DraftUpdated
            | BookOutcome::FormOpened
            | BookOutcome::FormClosed => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity, dropping to zero over the last half second
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(FADE_OUT);

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            let remaining = (self.duration - elapsed).as_secs_f32() / FADE_OUT.as_secs_f32();
            remaining.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Bounded stack of active toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() + 1 - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        self.toasts.push(toast);
    }

    /// Show the toast for `outcome`; outcomes that leave the list alone show nothing
    pub fn notify(&mut self, outcome: &BookOutcome) {
        if let Some(toast) = Toast::for_outcome(outcome) {
            self.push(toast);
        }
    }

    pub fn settings_saved(&mut self) {
        self.push(Toast::new(ToastKind::SettingsSaved, "Settings saved"));
    }

    pub fn settings_failed(&mut self, error: impl std::fmt::Display) {
        self.push(Toast::new(
            ToastKind::SettingsFailed,
            format!("Settings not saved: {}", error),
        ));
    }

    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Draw active toasts bottom-right, newest at the bottom
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.cleanup();

        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while toasts fade
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 280.0;
        let toast_height = 40.0;
        let margin = 10.0;
        let spacing = 5.0;

        for (slot, toast) in self.toasts.iter().rev().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (slot as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(("reservation_toast", slot)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    let bg = toast.kind.background_color(is_dark_theme).gamma_multiply(0.9 * opacity);
                    let fg = toast.kind.text_color(is_dark_theme).gamma_multiply(opacity);

                    egui::Frame::none()
                        .fill(bg)
                        .rounding(8.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.kind.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg));
                            });
                        });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reservation::ReservationId;
    use chrono::NaiveDate;

    fn reservation(name: &str, party_size: &str) -> Reservation {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        Reservation::new(ReservationId::new(5), name, party_size, date)
    }

    #[test]
    fn test_added_outcome_reports_name_and_size() {
        let outcome = BookOutcome::Added(reservation("Ana", "4"));
        let toast = Toast::for_outcome(&outcome).unwrap();
        assert_eq!(toast.kind, ToastKind::ReservationAdded);
        assert_eq!(toast.message, "#5 Ana, 4 people");
    }

    #[test]
    fn test_incomplete_reservation_gets_warning_kind() {
        let outcome = BookOutcome::Added(reservation("  ", "2"));
        let toast = Toast::for_outcome(&outcome).unwrap();
        assert_eq!(toast.kind, ToastKind::IncompleteReservation);
        assert!(toast.duration > ToastKind::ReservationAdded.duration());
    }

    #[test]
    fn test_removed_outcome_uses_display_name() {
        let outcome = BookOutcome::Removed(reservation("", "2"));
        let toast = Toast::for_outcome(&outcome).unwrap();
        assert_eq!(toast.kind, ToastKind::ReservationRemoved);
        assert_eq!(toast.message, "Removed #5 (no name)");
    }

    #[test]
    fn test_form_outcomes_show_nothing() {
        for outcome in [
            BookOutcome::Unchanged,
            BookOutcome::DraftUpdated,
            BookOutcome::FormOpened,
            BookOutcome::FormClosed,
        ] {
            assert!(Toast::for_outcome(&outcome).is_none());
        }
    }

    #[test]
    fn test_stack_drops_oldest_past_limit() {
        let mut manager = ToastManager::new();
        for i in 0..MAX_VISIBLE_TOASTS + 2 {
            manager.push(Toast::new(ToastKind::ReservationRemoved, format!("t{}", i)));
        }
        assert_eq!(manager.toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.toasts[0].message, "t2");
        assert_eq!(manager.toasts[MAX_VISIBLE_TOASTS - 1].message, "t4");
    }

    #[test]
    fn test_settings_failure_outlasts_success() {
        let mut manager = ToastManager::new();
        manager.settings_saved();
        manager.settings_failed("disk full");
        assert_eq!(manager.toasts[1].message, "Settings not saved: disk full");
        assert!(manager.toasts[1].duration > manager.toasts[0].duration);
    }

    #[test]
    fn test_expired_toast_is_cleaned_up() {
        let mut manager = ToastManager::new();
        let mut stale = Toast::new(ToastKind::ReservationAdded, "old");
        stale.duration = Duration::ZERO;
        manager.push(stale);
        manager.notify(&BookOutcome::Removed(reservation("Ana", "2")));
        manager.cleanup();
        assert_eq!(manager.toasts.len(), 1);
        assert_eq!(manager.toasts[0].kind, ToastKind::ReservationRemoved);
    }

    #[test]
    fn test_new_toast_is_opaque() {
        let toast = Toast::new(ToastKind::SettingsSaved, "Settings saved");
        assert!(!toast.is_expired());
        assert_eq!(toast.opacity(), 1.0);
    }
}
