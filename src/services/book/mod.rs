//! Reservation book: the application state owned by the UI.
//!
//! Bundles the store and the form controller and routes UI callbacks,
//! expressed as [`BookEvent`]s, to them.

use chrono::NaiveDate;

use crate::models::draft::Draft;
use crate::models::reservation::{Reservation, ReservationId};
use crate::models::settings::IdPolicy;
use crate::services::form::{FormController, FormVisibility};
use crate::services::reservation::ReservationStore;
use crate::utils::date::Clock;

/// Input coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    NameChanged(String),
    PartySizeChanged(String),
    /// Result of the date picker; `None` when it was dismissed
    DateSelected(Option<NaiveDate>),
    OpenForm,
    Commit,
    Cancel,
    Delete(ReservationId),
}

/// What an event did to the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    Unchanged,
    DraftUpdated,
    FormOpened,
    FormClosed,
    Added(Reservation),
    Removed(Reservation),
}

/// Read-only snapshot handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct BookView<'a> {
    pub draft: &'a Draft,
    pub visibility: FormVisibility,
    pub reservations: &'a [Reservation],
}

impl BookView<'_> {
    /// Whether the list and the "New reservation" button take input.
    ///
    /// The form is modal; everything behind it is inert while it is open.
    pub fn list_interactive(&self) -> bool {
        self.visibility == FormVisibility::Closed
    }
}

#[derive(Default)]
pub struct ReservationBook {
    store: ReservationStore,
    form: FormController,
}

impl ReservationBook {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            store: ReservationStore::with_policy(policy),
            form: FormController::new(),
        }
    }

    pub fn with_clock(policy: IdPolicy, clock: Box<dyn Clock>) -> Self {
        Self {
            store: ReservationStore::with_policy(policy),
            form: FormController::with_clock(clock),
        }
    }

    pub fn store(&self) -> &ReservationStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn set_id_policy(&mut self, policy: IdPolicy) {
        self.store.set_policy(policy);
    }

    pub fn view(&self) -> BookView<'_> {
        BookView {
            draft: self.form.draft(),
            visibility: self.form.visibility(),
            reservations: self.store.list(),
        }
    }

    /// Apply one UI event.
    pub fn handle(&mut self, event: BookEvent) -> BookOutcome {
        match event {
            BookEvent::NameChanged(text) => {
                if text == self.form.draft().name() {
                    return BookOutcome::Unchanged;
                }
                self.form.set_name(text);
                BookOutcome::DraftUpdated
            }
            BookEvent::PartySizeChanged(text) => {
                let before = self.form.draft().party_size().to_string();
                self.form.set_party_size(&text);
                if self.form.draft().party_size() == before {
                    BookOutcome::Unchanged
                } else {
                    BookOutcome::DraftUpdated
                }
            }
            BookEvent::DateSelected(date) => {
                let before = self.form.draft().date();
                self.form.set_reservation_date(date);
                if self.form.draft().date() == before {
                    BookOutcome::Unchanged
                } else {
                    BookOutcome::DraftUpdated
                }
            }
            BookEvent::OpenForm => {
                if self.form.is_open() {
                    return BookOutcome::Unchanged;
                }
                self.form.open_form();
                BookOutcome::FormOpened
            }
            BookEvent::Commit => BookOutcome::Added(self.form.commit(&mut self.store)),
            BookEvent::Cancel => {
                self.form.cancel();
                BookOutcome::FormClosed
            }
            BookEvent::Delete(id) => match self.store.remove(id) {
                Some(removed) => BookOutcome::Removed(removed),
                None => {
                    log::debug!("Delete ignored, no reservation with id {}", id);
                    BookOutcome::Unchanged
                }
            },
        }
    }
}
