// Unit tests for the reservation draft and party size input filtering
// Parameterized over typical keyboard input

use chrono::NaiveDate;
use reservation_book::models::draft::{filter_digits, Draft};
use reservation_book::models::reservation::{Reservation, ReservationId};
use test_case::test_case;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    #[test_case("4x2", "42" ; "letters between digits")]
    #[test_case("12", "12" ; "plain digits")]
    #[test_case("", "" ; "empty input")]
    #[test_case("  8 ", "8" ; "surrounding spaces")]
    #[test_case("-3", "3" ; "minus sign")]
    #[test_case("2.5", "25" ; "decimal point")]
    #[test_case("seven", "" ; "spelled out number")]
    #[test_case("١٢", "" ; "non ascii digits")]
    fn test_party_size_filter(input: &str, expected: &str) {
        assert_eq!(filter_digits(input), expected);

        let mut draft = Draft::new(today());
        draft.set_party_size(input);
        assert_eq!(draft.party_size(), expected);
    }

    #[test_case("1", "1 person" ; "single guest")]
    #[test_case("2", "2 people" ; "two guests")]
    #[test_case("007", "7 people" ; "leading zeros")]
    #[test_case("", "Party size not given" ; "empty")]
    fn test_party_size_label(party_size: &str, expected: &str) {
        let reservation = Reservation::new(ReservationId::new(1), "Ana", party_size, today());
        assert_eq!(reservation.party_size_label(), expected);
    }

    #[test]
    fn test_date_retained_on_dismissal() {
        let mut draft = Draft::new(today());
        draft.set_date(None);
        assert_eq!(draft.date(), today());
    }
}
