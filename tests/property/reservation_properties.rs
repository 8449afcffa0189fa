// Property-based tests for the reservation store and party size filter

use chrono::NaiveDate;
use proptest::prelude::*;
use reservation_book::models::draft::filter_digits;
use reservation_book::models::reservation::{Reservation, ReservationId};
use reservation_book::models::settings::IdPolicy;
use reservation_book::services::reservation::ReservationStore;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), (0u64..12).prop_map(Op::Remove)]
}

fn policy_strategy() -> impl Strategy<Value = IdPolicy> {
    prop_oneof![Just(IdPolicy::Sequential), Just(IdPolicy::CountPlusOne)]
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn add_one(store: &mut ReservationStore) -> ReservationId {
    let id = store.next_id();
    store.add(Reservation::new(id, "guest", "2", date()));
    id
}

proptest! {
    /// Property: length equals adds minus removes that actually hit a record
    #[test]
    fn prop_len_tracks_effective_operations(
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut store = ReservationStore::with_policy(policy);
        let mut adds = 0usize;
        let mut effective_removes = 0usize;

        for op in ops {
            match op {
                Op::Add => {
                    add_one(&mut store);
                    adds += 1;
                }
                Op::Remove(id) => {
                    if store.remove(ReservationId::new(id)).is_some() {
                        effective_removes += 1;
                    }
                }
            }
        }

        prop_assert_eq!(store.len(), adds - effective_removes);
    }

    /// Property: removing the same id twice equals removing it once
    #[test]
    fn prop_remove_is_idempotent(
        adds in 0usize..10,
        target in 0u64..12,
    ) {
        let mut once = ReservationStore::new();
        let mut twice = ReservationStore::new();
        for _ in 0..adds {
            add_one(&mut once);
            add_one(&mut twice);
        }

        once.remove(ReservationId::new(target));
        twice.remove(ReservationId::new(target));
        twice.remove(ReservationId::new(target));

        prop_assert_eq!(once.list(), twice.list());
    }

    /// Property: held ids are always pairwise distinct, for either policy
    #[test]
    fn prop_held_ids_unique(
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut store = ReservationStore::with_policy(policy);
        for op in ops {
            match op {
                Op::Add => { add_one(&mut store); }
                Op::Remove(id) => { store.remove(ReservationId::new(id)); }
            }
            let held: HashSet<_> = store.list().iter().map(|r| r.id()).collect();
            prop_assert_eq!(held.len(), store.len());
        }
    }

    /// Property: the sequential policy never hands out an id twice
    #[test]
    fn prop_sequential_ids_never_reused(
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut store = ReservationStore::with_policy(IdPolicy::Sequential);
        let mut issued = HashSet::new();
        for op in ops {
            match op {
                Op::Add => {
                    let id = add_one(&mut store);
                    prop_assert!(issued.insert(id), "id {} issued twice", id);
                }
                Op::Remove(id) => { store.remove(ReservationId::new(id)); }
            }
        }
    }

    /// Property: filtered party size contains only ASCII digits
    #[test]
    fn prop_filter_keeps_only_digits(input in ".*") {
        let filtered = filter_digits(&input);
        prop_assert!(filtered.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(
            filtered.len(),
            input.chars().filter(|c| c.is_ascii_digit()).count()
        );
    }

    /// Property: filtering twice gives the same result as filtering once
    #[test]
    fn prop_filter_is_idempotent(input in ".*") {
        let once = filter_digits(&input);
        prop_assert_eq!(filter_digits(&once), once.clone());
    }

    /// Property: all-digit input passes through unchanged
    #[test]
    fn prop_digit_strings_unchanged(input in "[0-9]{0,12}") {
        prop_assert_eq!(filter_digits(&input), input);
    }
}
