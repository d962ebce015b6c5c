use nestmap::{Key, NestedMap, Value, get};

#[test]
fn test_from_json_preserves_order_and_coerces_keys() {
    let map = NestedMap::from_json_str(r#"{"b": 1, "a": {"2": "two", "x": null}, "c": [1, 2.5]}"#)
        .unwrap();

    let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);

    let inner = map.get_map("a").unwrap();
    assert_eq!(inner.lookup(2), Some(&Value::from("two")));
    assert!(inner.keys().next().is_some_and(Key::is_int));
    assert_eq!(inner.lookup("x"), Some(&Value::Null));

    assert_eq!(
        map.lookup("c"),
        Some(&Value::List(vec![Value::Int(1), Value::Float(2.5)]))
    );
}

#[test]
fn test_to_json_string() {
    let map = NestedMap::new()
        .with("name", "Alice")
        .with(7, true)
        .with_map("inner", NestedMap::new().with("n", Value::Null));
    assert_eq!(
        map.to_json_string().unwrap(),
        r#"{"name":"Alice","7":true,"inner":{"n":null}}"#
    );
}

#[test]
fn test_json_round_trip_keeps_dot_access() {
    let json = r#"{"db":{"primary":{"host":"localhost","port":5432}}}"#;
    let map = NestedMap::from_json_str(json).unwrap();
    assert_eq!(get(&map, "db.primary.port", Value::Null, true), 5432);
    assert_eq!(map.to_json_string().unwrap(), json);
}

#[test]
fn test_json_integers_past_i64_range() {
    let json = r#"{"18446744073709551615": 18446744073709551615}"#;
    let map = NestedMap::from_json_str(json).unwrap();
    let (key, value) = map.iter().next().unwrap();
    assert_eq!(key, &Key::Text("18446744073709551615".to_string()));
    assert_eq!(value, &Value::Float(18446744073709551615u64 as f64));

    // Within range stays integral
    let json = r#"{"9223372036854775807": 9223372036854775807}"#;
    let map = NestedMap::from_json_str(json).unwrap();
    assert_eq!(map.lookup(i64::MAX), Some(&Value::Int(i64::MAX)));
}

#[test]
fn test_non_object_root_is_type_error() {
    let err = NestedMap::from_json_str("[1, 2]").unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "map");

    let err = NestedMap::from_json_str("{not json").unwrap_err();
    assert!(err.is_json_error());
}

#[test]
fn test_value_from_serde_json() {
    let json = serde_json::json!({"a": [1, "x", false], "b": {"c": 1.5}});
    let value = Value::from(json);
    let map = value.as_map().unwrap();
    assert_eq!(
        map.lookup("a"),
        Some(&Value::List(vec![
            Value::Int(1),
            Value::from("x"),
            Value::Bool(false)
        ]))
    );
    assert_eq!(get(map, "b.c", Value::Null, true), Value::Float(1.5));
}
