// Module exports for models

pub mod draft;
pub mod reservation;
pub mod settings;
