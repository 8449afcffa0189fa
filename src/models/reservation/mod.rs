// Reservation module
// Committed reservation records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a reservation, unique among the records currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReservationId(u64);

impl ReservationId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Blank name (after trimming) or empty party size.
///
/// Shared by drafts and committed records; an empty field never blocks a commit.
pub(crate) fn fields_missing(name: &str, party_size: &str) -> bool {
    name.trim().is_empty() || party_size.is_empty()
}

/// A committed reservation.
///
/// Fields are read-only once built; there is no way to edit a reservation,
/// only to remove it from the store and add a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    name: String,
    party_size: String,
    date: NaiveDate,
}

impl Reservation {
    /// Create a reservation record
    ///
    /// No validation is applied. `party_size` is stored as given; callers
    /// going through the form controller always pass a digit-only string.
    ///
    /// # Examples
    /// ```
    /// use reservation_book::models::reservation::{Reservation, ReservationId};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let reservation = Reservation::new(ReservationId::new(1), "Ana", "4", date);
    /// assert_eq!(reservation.party_size_count(), Some(4));
    /// ```
    pub fn new(
        id: ReservationId,
        name: impl Into<String>,
        party_size: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            party_size: party_size.into(),
            date,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Party size as entered (digits only, possibly empty)
    pub fn party_size(&self) -> &str {
        &self.party_size
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Numeric party size, if the stored text is a non-empty number that fits
    pub fn party_size_count(&self) -> Option<u32> {
        self.party_size.parse().ok()
    }

    /// Human readable party size ("1 person", "4 people")
    pub fn party_size_label(&self) -> String {
        match self.party_size_count() {
            Some(1) => "1 person".to_string(),
            Some(count) => format!("{} people", count),
            None if self.party_size.is_empty() => "Party size not given".to_string(),
            None => format!("{} people", self.party_size),
        }
    }

    /// True when the reservation was committed with an empty name or party size
    pub fn has_missing_fields(&self) -> bool {
        fields_missing(&self.name, &self.party_size)
    }

    /// Display name for lists and dialogs; blank names get a placeholder
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "(no name)"
        } else {
            &self.name
        }
    }
}
