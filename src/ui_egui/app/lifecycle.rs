use super::confirm::ConfirmDialogState;
use super::toast::ToastManager;
use super::ReservationApp;
use crate::models::settings::Settings;
use crate::services::book::ReservationBook;
use crate::services::settings::SettingsService;
use crate::ui_egui::date_picker::DatePickerState;
use crate::ui_egui::theme::ReservationTheme;

impl ReservationApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        log::info!(
            "Starting with theme={:?}, id_policy={:?}",
            settings.theme,
            settings.id_policy
        );

        let active_theme = ReservationTheme::for_mode(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            book: ReservationBook::new(settings.id_policy),
            settings,
            settings_service,
            settings_draft: None,
            show_settings_dialog: false,
            active_theme,
            pending_theme_apply: false,
            date_picker: DatePickerState::default(),
            toast_manager: ToastManager::new(),
            confirm_dialog: ConfirmDialogState::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pending_theme_apply {
            self.active_theme.apply_to_context(ctx);
            self.pending_theme_apply = false;
        }

        self.handle_keyboard_shortcuts(ctx);

        self.render_top_bar(ctx);
        self.render_main_panel(ctx);
        self.render_form(ctx);
        self.render_settings(ctx);
        self.handle_confirm_dialog(ctx);

        self.toast_manager.render(ctx, self.active_theme.is_dark);
    }
}

/// Load settings, falling back to defaults when the file is unreadable
pub fn load_settings_or_default(service: Option<&SettingsService>) -> Settings {
    let Some(service) = service else {
        log::warn!("No configuration directory; using default settings");
        return Settings::default();
    };

    match service.get() {
        Ok(settings) => {
            log::info!("Loaded settings from {}", service.path().display());
            settings
        }
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {}", err);
            Settings::default()
        }
    }
}
