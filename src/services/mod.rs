// Service module exports

pub mod book;
pub mod form;
pub mod reservation;
pub mod settings;
