use anum::domain::PropertyName;
use anum::executor::{Execution, Executor};
use anum::request::ErrorKind;

#[test]
fn single_request_reports_all_properties() {
    let Ok(Execution::Single(classified)) = anum::handle("1729") else {
        panic!("expected a single result");
    };
    assert!(classified.properties.holds(PropertyName::Buzz));
    assert!(!classified.properties.holds(PropertyName::Spy));
}

#[test]
fn zero_ends_the_session() {
    assert!(matches!(anum::handle("0"), Ok(Execution::Exit)));
}

#[test]
fn search_through_the_facade() {
    let Ok(Execution::Search(scan)) = anum::handle("1 5 even") else {
        panic!("expected a search");
    };
    assert_eq!(scan.map(|c| c.value).collect::<Vec<_>>(), [2, 4, 6, 8, 10]);
}

#[test]
fn limited_executor_truncates() {
    let executor = Executor::new(Some(50));
    let Ok(Execution::Search(mut scan)) = anum::handle_with(&executor, "1 1 gapful") else {
        panic!("expected a search");
    };
    assert_eq!(scan.next(), None);
    assert!(scan.truncated());
}

#[test]
fn errors_surface_with_their_kind() {
    let err = anum::handle("1 2 odd -odd").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MutuallyExclusive);
}
