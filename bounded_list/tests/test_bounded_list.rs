// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering,
          io,
          sync::{Arc, Mutex}};

use pretty_assertions::assert_eq;
use r3bl_bounded_list::{BoundedList, BoundedListError, DEFAULT_MAX_SIZE};
use test_case::test_case;
use tracing_subscriber::fmt::MakeWriter;

fn contents<T: Clone>(list: &BoundedList<T>) -> Vec<T> {
    (0..list.size())
        .map(|index| list.at(index).unwrap().clone())
        .collect()
}

fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut acc = vec![];
    for (index, head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, *head);
            acc.push(tail);
        }
    }
    acc
}

#[test_case(2)]
#[test_case(4)]
#[test_case(DEFAULT_MAX_SIZE)]
#[test_case(64)]
fn test_push_back_keeps_insertion_order(max_size: usize) {
    let mut list = BoundedList::with_max_size(max_size).unwrap();
    let count = max_size - 1;
    for (pushed, value) in (0..count).map(|it| it * 10).enumerate() {
        list.push_back(value).unwrap();
        assert_eq!(list.size(), pushed + 1);
    }
    for index in 0..count {
        assert_eq!(list.at(index), Ok(&(index * 10)));
    }
    assert!(list.full());
}

#[test]
fn test_push_back_then_pop_back_is_a_round_trip() {
    let mut list = BoundedList::with_max_size(5).unwrap();
    list.push_back('a').unwrap();
    list.push_back('b').unwrap();
    let before = contents(&list);

    list.push_back('z').unwrap();
    assert_eq!(list.pop_back(), Ok('z'));
    assert_eq!(contents(&list), before);
}

#[test]
fn test_push_front_then_pop_front_is_a_round_trip() {
    let mut list = BoundedList::with_max_size(5).unwrap();
    list.push_back('a').unwrap();
    list.push_back('b').unwrap();
    let before = contents(&list);

    list.push_front('z').unwrap();
    assert_eq!(list.pop_front(), Ok('z'));
    assert_eq!(contents(&list), before);
}

#[test]
fn test_insert_sorted_orders_every_permutation() {
    let values = [3, 1, 4, 1, 5];
    let mut expected = values.to_vec();
    expected.sort_unstable();

    for permutation in permutations(&values) {
        let mut list = BoundedList::with_max_size(values.len() + 1).unwrap();
        for it in &permutation {
            list.insert_sorted(*it).unwrap();
        }
        let actual = contents(&list);
        assert!(
            actual.windows(2).all(|pair| pair[0] <= pair[1]),
            "{permutation:?} produced {actual:?}"
        );
        assert_eq!(actual, expected);
    }
}

/// Compares by `rank` only, so items with the same rank are equal but can still be told
/// apart by `tag`.
#[derive(Clone, Debug)]
struct Card {
    rank: u8,
    tag: char,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool { self.rank == other.rank }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.rank.partial_cmp(&other.rank)
    }
}

#[test]
fn test_insert_sorted_goes_after_equal_items() {
    let mut list = BoundedList::with_max_size(6).unwrap();
    list.insert_sorted(Card { rank: 2, tag: 'a' }).unwrap();
    list.insert_sorted(Card { rank: 1, tag: 'b' }).unwrap();
    list.insert_sorted(Card { rank: 2, tag: 'c' }).unwrap();
    list.insert_sorted(Card { rank: 3, tag: 'd' }).unwrap();
    list.insert_sorted(Card { rank: 2, tag: 'e' }).unwrap();

    let tags: String = contents(&list).iter().map(|it| it.tag).collect();
    assert_eq!(tags, "baced");
}

#[test]
fn test_every_insertion_into_a_full_list_fails_without_mutation() {
    let mut list = BoundedList::with_max_size(4).unwrap();
    while !list.full() {
        list.push_back(list.size()).unwrap();
    }
    let before = contents(&list);
    let expected = Err(BoundedListError::CapacityExceeded { max_size: 4 });

    assert_eq!(list.push_back(9), expected);
    assert_eq!(list.push_front(9), expected);
    assert_eq!(list.insert(9, 0), expected);
    assert_eq!(list.insert_sorted(9), expected);
    assert_eq!(contents(&list), before);
}

#[test]
fn test_remove_absent_value_changes_nothing() {
    let mut list = BoundedList::with_max_size(5).unwrap();
    list.push_back(1).unwrap();
    list.push_back(2).unwrap();

    assert_eq!(list.remove(&7), Ok(None));
    assert_eq!(list.size(), 2);
    assert_eq!(contents(&list), vec![1, 2]);
}

#[test]
fn test_scenario_capacity_four() {
    let mut list = BoundedList::with_max_size(4).unwrap();
    list.push_back(1).unwrap();
    list.push_back(2).unwrap();
    list.push_back(3).unwrap();
    assert_eq!(list.size(), 3);
    assert!(list.full());

    assert_eq!(
        list.push_back(4),
        Err(BoundedListError::CapacityExceeded { max_size: 4 })
    );
    assert_eq!(list.size(), 3);

    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.size(), 2);
    assert_eq!(contents(&list), vec![2, 3]);
}

#[test]
fn test_scenario_sorted_inserts() {
    let mut list = BoundedList::with_max_size(5).unwrap();
    list.insert_sorted(5).unwrap();
    list.insert_sorted(3).unwrap();
    list.insert_sorted(4).unwrap();
    assert_eq!(contents(&list), vec![3, 4, 5]);
}

#[test]
fn test_scenario_empty_list() {
    let mut list: BoundedList<i32> = BoundedList::with_max_size(3).unwrap();
    assert_eq!(list.pop_back(), Err(BoundedListError::EmptyList));
    assert_eq!(list.find(&7), Err(BoundedListError::EmptyList));
    assert_eq!(list.contains(&7), Err(BoundedListError::EmptyList));
}

#[test]
fn test_errors_propagate_into_miette_result() {
    fn drain_one_too_many() -> miette::Result<i32> {
        let mut list = BoundedList::with_max_size(3)?;
        list.push_back(1)?;
        let first = list.pop_front()?;
        let second = list.pop_front()?;
        Ok(first + second)
    }

    let report = drain_one_too_many().unwrap_err();
    assert_eq!(
        report.downcast_ref::<BoundedListError>(),
        Some(&BoundedListError::EmptyList)
    );
}

#[test]
fn test_shared_behind_a_mutex() {
    let list = Arc::new(Mutex::new(BoundedList::new()));

    std::thread::scope(|scope| {
        for thread_id in 0..4 {
            let list = Arc::clone(&list);
            scope.spawn(move || {
                for it in 0..2 {
                    list.lock().unwrap().push_back(thread_id * 10 + it).unwrap();
                }
            });
        }
    });

    let list = list.lock().unwrap();
    assert_eq!(list.size(), 8);
    assert!(!list.full());
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn output(&self) -> String { String::from_utf8_lossy(&self.0.lock().unwrap()).into() }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer { self.clone() }
}

#[test]
fn test_rejected_operations_are_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut list = BoundedList::with_max_size(2).unwrap();
        list.push_back(1).unwrap();
        assert!(list.push_back(2).is_err());
        assert!(list.pop(5).is_err());
    });

    let output = logs.output();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("list is full"), "{output}");
    assert!(output.contains("push_back"), "{output}");
    assert!(output.contains("invalid position"), "{output}");
    assert!(output.contains("TRACE"), "{output}");
}
