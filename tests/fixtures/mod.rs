// Test fixtures - reusable test data
// Provides consistent dates and stores across the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use reservation_book::models::settings::IdPolicy;
use reservation_book::services::book::ReservationBook;
use reservation_book::services::form::FormController;
use reservation_book::utils::date::FixedClock;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Date the fixed clock reports as "today"
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    /// Returns Feb 14, 2025 (Valentine's Day)
    pub fn valentine_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Form controller whose resets always land on [`dates::today`]
pub fn fixed_form() -> FormController {
    FormController::with_clock(Box::new(FixedClock(dates::today())))
}

/// Reservation book with a fixed clock
pub fn fixed_book(policy: IdPolicy) -> ReservationBook {
    ReservationBook::with_clock(policy, Box::new(FixedClock(dates::today())))
}
