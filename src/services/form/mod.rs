//! Controller for the "new reservation" form.
//!
//! Owns the draft and the visibility of the form window, and turns a
//! committed draft into a [`Reservation`] appended to a [`ReservationStore`].

use chrono::NaiveDate;

use crate::models::draft::Draft;
use crate::models::reservation::Reservation;
use crate::services::reservation::ReservationStore;
use crate::utils::date::{Clock, SystemClock};

/// Whether the form window is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVisibility {
    #[default]
    Closed,
    Open,
}

pub struct FormController {
    draft: Draft,
    visibility: FormVisibility,
    clock: Box<dyn Clock>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            draft: Draft::new(clock.today()),
            visibility: FormVisibility::Closed,
            clock,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == FormVisibility::Open
    }

    /// Current date according to the injected clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.draft.set_name(text);
    }

    pub fn set_party_size(&mut self, text: &str) {
        self.draft.set_party_size(text);
        log::debug!("Party size input filtered to '{}'", self.draft.party_size());
    }

    /// `None` means the picker was dismissed; the draft date is kept.
    pub fn set_reservation_date(&mut self, date: Option<NaiveDate>) {
        self.draft.set_date(date);
    }

    pub fn open_form(&mut self) {
        self.visibility = FormVisibility::Open;
    }

    /// Close the form and throw away the draft.
    pub fn cancel(&mut self) {
        self.reset_draft();
        self.visibility = FormVisibility::Closed;
    }

    /// Turn the draft into a reservation, append it to `store` and close.
    ///
    /// Empty name or party size are accepted as-is.
    pub fn commit(&mut self, store: &mut ReservationStore) -> Reservation {
        let record = Reservation::new(
            store.next_id(),
            self.draft.name(),
            self.draft.party_size(),
            self.draft.date(),
        );
        if self.draft.has_missing_fields() {
            log::warn!("Committing reservation {} with empty fields", record.id());
        }
        store.add(record.clone());
        self.reset_draft();
        self.visibility = FormVisibility::Closed;
        record
    }

    fn reset_draft(&mut self) {
        self.draft = Draft::new(self.clock.today());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reservation::ReservationId;
    use crate::utils::date::FixedClock;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    fn controller() -> FormController {
        FormController::with_clock(Box::new(FixedClock(today())))
    }

    #[test]
    fn test_today_comes_from_clock() {
        let form = controller();
        assert_eq!(form.today(), today());
    }

    #[test]
    fn test_initial_state_closed_with_default_draft() {
        let form = controller();
        assert_eq!(form.visibility(), FormVisibility::Closed);
        assert_eq!(form.draft(), &Draft::new(today()));
    }

    #[test]
    fn test_commit_appends_and_resets() {
        let mut store = ReservationStore::new();
        let mut form = controller();
        form.open_form();
        form.set_name("Ana");
        form.set_party_size("4x2");
        let picked = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        form.set_reservation_date(Some(picked));

        let record = form.commit(&mut store);

        assert_eq!(record.id(), ReservationId::new(1));
        assert_eq!(record.name(), "Ana");
        assert_eq!(record.party_size(), "42");
        assert_eq!(record.date(), picked);
        assert_eq!(store.list(), &[record]);
        assert_eq!(form.draft(), &Draft::new(today()));
        assert_eq!(form.visibility(), FormVisibility::Closed);
    }

    #[test]
    fn test_commit_accepts_empty_draft() {
        let mut store = ReservationStore::new();
        let mut form = controller();
        form.open_form();
        let record = form.commit(&mut store);
        assert_eq!(record.name(), "");
        assert_eq!(record.party_size(), "");
        assert_eq!(record.date(), today());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cancel_discards_draft_without_adding() {
        let mut store = ReservationStore::new();
        let mut form = controller();
        form.open_form();
        form.set_name("Luis");
        form.set_party_size("3");
        form.cancel();

        assert!(store.is_empty());
        assert_eq!(form.draft(), &Draft::new(today()));
        assert!(!form.is_open());

        // store was not touched by cancel
        form.commit(&mut store);
        assert_eq!(store.list()[0].name(), "");
    }

    #[test]
    fn test_dismissed_date_keeps_draft_date() {
        let mut form = controller();
        form.set_reservation_date(None);
        assert_eq!(form.draft().date(), today());
    }

    #[test]
    fn test_open_twice_stays_open() {
        let mut form = controller();
        form.open_form();
        form.open_form();
        assert_eq!(form.visibility(), FormVisibility::Open);
    }
}
