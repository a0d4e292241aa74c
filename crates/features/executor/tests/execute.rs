use anum_domain::config::ScanConfig;
use anum_domain::{Filter, PropertyName, PropertySet, Query};
use anum_executor::{Execution, Executor};
use proptest::prelude::*;

fn collect(execution: Execution) -> Vec<u64> {
    match execution {
        Execution::Range(scan) => scan.map(|c| c.value).collect(),
        Execution::Search(scan) => scan.map(|c| c.value).collect(),
        other => panic!("expected a scan, got {other:?}"),
    }
}

#[test]
fn single_classifies_once() {
    let Execution::Single(classified) = Executor::default().execute(Query::Single(22)) else {
        panic!("expected a single result");
    };
    assert_eq!(classified.value, 22);
    assert!(classified.properties.holds(PropertyName::Spy));
}

#[test]
fn exit_passes_through() {
    assert!(matches!(Executor::default().execute(Query::Exit), Execution::Exit));
}

#[test]
fn range_yields_consecutive_values() {
    let values = collect(Executor::default().execute(Query::Range { start: 5, count: 3 }));
    assert_eq!(values, [5, 6, 7]);
}

#[test]
fn search_yields_first_matches() {
    let filter = Filter::new(PropertySet::EVEN, PropertySet::empty());
    let values = collect(Executor::default().execute(Query::Search { start: 1, count: 5, filter }));
    assert_eq!(values, [2, 4, 6, 8, 10]);
}

#[test]
fn search_honours_exclusions() {
    let filter = Filter::new(PropertySet::BUZZ, PropertySet::ODD);
    let values = collect(Executor::default().execute(Query::Search { start: 1, count: 3, filter }));
    assert_eq!(values, [14, 28, 42]);
}

#[test]
fn search_is_lazy() {
    let filter = Filter::new(PropertySet::SUNNY, PropertySet::empty());
    let mut scan = Executor::default().search(1, u64::MAX, filter);
    assert_eq!(scan.next().map(|c| c.value), Some(3));
    assert_eq!(scan.examined(), 3);
}

#[test]
fn scan_limit_comes_from_config() {
    let executor = Executor::from(&ScanConfig { limit: Some(50) });
    assert_eq!(executor.limit(), Some(50));

    let filter = Filter::new(PropertySet::SQUARE | PropertySet::SUNNY, PropertySet::empty());
    let mut scan = executor.search(1, 1, filter);
    assert_eq!(scan.next(), None);
    assert!(scan.truncated());
}

proptest! {
    #[test]
    fn every_search_result_matches_its_filter(start in 0..10_000u64, count in 1..10u64, index in 0..12usize) {
        let name = PropertyName::ALL[index];
        let filter = Filter::new(name.flag(), PropertySet::empty());
        let results: Vec<_> = Executor::default().search(start, count, filter).collect();

        prop_assert_eq!(results.len() as u64, count);
        prop_assert!(results.windows(2).all(|w| w[0].value < w[1].value));
        prop_assert!(results.iter().all(|c| c.value >= start && c.properties.holds(name)));
    }

    #[test]
    fn range_length_matches_count(start in 0..1_000_000u64, count in 0..200u64) {
        let values = collect(Executor::default().execute(Query::Range { start, count }));
        prop_assert_eq!(values.len() as u64, count);
        prop_assert!(values.iter().enumerate().all(|(i, v)| *v == start + i as u64));
    }
}
