use nestmap::{Filtered, Key, NestedMap, Value, filter, filter_entries};

use crate::helpers::{filter_fixture, key_strings};

fn starts_with_t1(key: &Key) -> bool {
    key.as_text().is_some_and(|k| k.starts_with("t1"))
}

#[test]
fn test_filter_without_predicate_returns_input() {
    let map = filter_fixture();
    let result = filter(&map, None, Value::Null, None);
    assert_eq!(result, Filtered::Map(map));
}

#[test]
fn test_filter_empty_input_returns_default() {
    let result = filter(&NestedMap::new(), None, "default_value", None);
    assert!(result.is_default());
    assert_eq!(result.into_value(), "default_value");

    // The predicate does not matter for empty input
    let result = filter(&NestedMap::new(), Some(&starts_with_t1), "default_value", None);
    assert_eq!(result, Filtered::Default(Value::from("default_value")));
}

#[test]
fn test_filter_with_matches() {
    let result = filter(&filter_fixture(), Some(&starts_with_t1), "default_value", None);
    let expected: NestedMap = [("t11", "v11"), ("t12", "v12"), ("t13", "v13"), ("t14", "v14")]
        .into_iter()
        .collect();
    assert_eq!(result.map(), Some(&expected));
    assert_eq!(
        key_strings(&result.into_map().unwrap()),
        vec!["t11", "t12", "t13", "t14"]
    );
}

#[test]
fn test_filter_with_limit() {
    let result = filter(&filter_fixture(), Some(&starts_with_t1), "default_value", Some(2));
    let expected: NestedMap = [("t11", "v11"), ("t12", "v12")].into_iter().collect();
    assert_eq!(result, Filtered::Map(expected));
}

#[test]
fn test_filter_zero_limit_means_unlimited() {
    let result = filter(&filter_fixture(), Some(&starts_with_t1), Value::Null, Some(0));
    assert_eq!(result.map().map(NestedMap::len), Some(4));
}

#[test]
fn test_filter_no_matches_is_empty_map_not_default() {
    let never = |_: &Key| false;
    let result = filter(&filter_fixture(), Some(&never), "default_value", None);
    assert_eq!(result, Filtered::Map(NestedMap::new()));
}

#[test]
fn test_filter_predicate_sees_coerced_keys() {
    let map: NestedMap = [("1", "a"), ("x", "b"), ("2", "c")].into_iter().collect();
    let numeric = |key: &Key| key.is_int();
    let result = filter(&map, Some(&numeric), Value::Null, None);
    assert_eq!(key_strings(result.map().unwrap()), vec!["1", "2"]);
}

#[test]
fn test_filter_stops_calling_predicate_at_limit() {
    let calls = std::cell::Cell::new(0);
    let counting = |key: &Key| {
        calls.set(calls.get() + 1);
        starts_with_t1(key)
    };
    filter(&filter_fixture(), Some(&counting), Value::Null, Some(2));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_filter_entries_by_value() {
    let map = NestedMap::new().with("a", 1).with("b", 20).with("c", 3).with("d", 40);
    let result = filter_entries(
        &map,
        |_, value| value.as_int().is_some_and(|n| n > 10),
        Value::Null,
        None,
    );
    assert_eq!(key_strings(result.map().unwrap()), vec!["b", "d"]);

    let limited = filter_entries(&map, |_, _| true, Value::Null, Some(3));
    assert_eq!(limited.map().map(NestedMap::len), Some(3));

    let empty = filter_entries(&NestedMap::new(), |_, _| true, 7, None);
    assert_eq!(empty.into_value(), 7);
}
