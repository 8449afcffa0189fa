mod app;
pub mod date_picker;
mod form_dialog;
mod reservation_list;
mod settings_dialog;
pub mod theme;

pub use app::{load_settings_or_default, ReservationApp};
