//! Colour palettes for the reservation window.
//!
//! Two fixed palettes, light and dark, selected by [`ThemeMode`].

use egui::Color32;

use crate::models::settings::ThemeMode;

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background of a reservation card in the list
    pub card_background: Color32,

    /// Border of a reservation card
    pub card_border: Color32,

    /// Fill of the "Add reservation" button
    pub accent: Color32,

    /// Fill of the date picker toggle button
    pub accent_soft: Color32,

    /// Fill of delete buttons
    pub danger: Color32,

    /// Primary text color (names, headings)
    pub text_primary: Color32,

    /// Secondary text color (party size, dates)
    pub text_secondary: Color32,

    /// Text drawn on accent and danger buttons
    pub text_on_accent: Color32,
}

impl ReservationTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(220, 220, 220),
            accent: Color32::from_rgb(240, 128, 128),
            accent_soft: Color32::from_rgb(248, 173, 157),
            danger: Color32::from_rgb(200, 80, 80),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            text_on_accent: Color32::WHITE,
        }
    }

    /// Create the Dark theme (navy background)
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(0, 18, 34),
            card_background: Color32::from_rgb(240, 240, 240),
            card_border: Color32::from_rgb(60, 70, 90),
            accent: Color32::from_rgb(240, 128, 128),
            accent_soft: Color32::from_rgb(248, 173, 157),
            danger: Color32::from_rgb(240, 128, 128),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            text_on_accent: Color32::WHITE,
        }
    }

    /// Text color for content drawn on a card
    pub fn card_text(&self) -> Color32 {
        // Cards stay light in both palettes
        Color32::from_rgb(30, 30, 30)
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
