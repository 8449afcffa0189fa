// Draft module
// In-progress reservation form state

use chrono::NaiveDate;

use crate::models::reservation::fields_missing;

/// Keep only ASCII digits from `text`.
///
/// Applied to every party-size edit so the stored value is either empty or
/// made up solely of `0-9`.
pub fn filter_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Working state of the "new reservation" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    name: String,
    party_size: String,
    date: NaiveDate,
}

impl Draft {
    /// Default draft: empty name, empty party size, date set to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            party_size: String::new(),
            date: today,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn party_size(&self) -> &str {
        &self.party_size
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    /// Store `text` with every non-digit character removed
    pub fn set_party_size(&mut self, text: &str) {
        self.party_size = filter_digits(text);
    }

    /// Replace the date; `None` (a dismissed picker) keeps the current one
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        if let Some(date) = date {
            self.date = date;
        }
    }

    /// True when the name or the party size is still empty
    pub fn has_missing_fields(&self) -> bool {
        fields_missing(&self.name, &self.party_size)
    }
}
