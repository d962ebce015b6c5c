use nestmap::{MergeMode, NestedMap, Value, merge, merge_in_place};

use crate::helpers::key_strings;

fn helper1() -> NestedMap {
    NestedMap::new().with("h11", "v11").with("h12", "v12")
}

fn helper2() -> NestedMap {
    NestedMap::new().with("h21", "v21").with("h22", "v22")
}

fn fixtures() -> (NestedMap, NestedMap) {
    let array1 = NestedMap::new()
        .with("t11", "v11")
        .with("t12", "v12")
        .with_map("t3", helper1());
    let array2 = NestedMap::new()
        .with("t21", "v21")
        .with("t22", "v22")
        .with_map("t3", helper2());
    (array1, array2)
}

#[test]
fn test_merge_shallow() {
    let (array1, array2) = fixtures();
    let result = merge(&array1, &array2, false);

    assert_eq!(result.lookup("t11"), Some(&Value::from("v11")));
    assert_eq!(result.lookup("t12"), Some(&Value::from("v12")));
    assert_eq!(result.lookup("t21"), Some(&Value::from("v21")));
    assert_eq!(result.lookup("t22"), Some(&Value::from("v22")));
    assert_ne!(result.get_map("t3"), Some(&helper1()));
    assert_eq!(result.get_map("t3"), Some(&helper2()));
}

#[test]
fn test_merge_deep() {
    let (array1, array2) = fixtures();
    let result = merge(&array1, &array2, MergeMode::Deep);

    assert_eq!(result.lookup("t11"), Some(&Value::from("v11")));
    assert_eq!(result.lookup("t22"), Some(&Value::from("v22")));

    let t3 = result.get_map("t3").unwrap();
    assert_eq!(t3.lookup("h11"), Some(&Value::from("v11")));
    assert_eq!(t3.lookup("h12"), Some(&Value::from("v12")));
    assert_eq!(t3.lookup("h21"), Some(&Value::from("v21")));
    assert_eq!(t3.lookup("h22"), Some(&Value::from("v22")));
    assert_eq!(key_strings(t3), vec!["h11", "h12", "h21", "h22"]);
}

#[test]
fn test_merge_right_bias_on_scalars() {
    let left = NestedMap::new().with("x", 1).with("only_left", true);
    let right = NestedMap::new().with("x", 2);
    for mode in [MergeMode::Shallow, MergeMode::Deep] {
        let result = merge(&left, &right, mode);
        assert_eq!(result.lookup("x"), Some(&Value::Int(2)));
        assert_eq!(result.lookup("only_left"), Some(&Value::Bool(true)));
    }
}

#[test]
fn test_merge_deep_recurses_several_levels() {
    let left = NestedMap::new().with_map(
        "a",
        NestedMap::new().with_map("b", NestedMap::new().with("keep", 1).with("over", 1)),
    );
    let right = NestedMap::new().with_map(
        "a",
        NestedMap::new().with_map("b", NestedMap::new().with("over", 2).with("add", 3)),
    );
    let result = merge(&left, &right, true);
    let b = result.get_map("a").and_then(|a| a.get_map("b")).unwrap();
    assert_eq!(b, &NestedMap::new().with("keep", 1).with("over", 2).with("add", 3));
}

#[test]
fn test_merge_deep_map_replaced_by_scalar_and_back() {
    let left = NestedMap::new().with_map("x", NestedMap::new().with("a", 1));
    let right = NestedMap::new().with("x", "scalar");
    let result = merge(&left, &right, true);
    assert_eq!(result.lookup("x"), Some(&Value::from("scalar")));

    let result = merge(&right, &left, true);
    assert_eq!(result.get_map("x"), Some(&NestedMap::new().with("a", 1)));
}

#[test]
fn test_merge_order_and_integer_keys() {
    let left = NestedMap::new().with(0, "a").with("k", "left");
    let right = NestedMap::new().with(0, "b").with(5, "c");
    let result = merge(&left, &right, false);
    // Integer keys are overwritten, not appended
    assert_eq!(key_strings(&result), vec!["0", "k", "5"]);
    assert_eq!(result.lookup(0), Some(&Value::from("b")));
}

#[test]
fn test_merge_does_not_mutate_inputs() {
    let (array1, array2) = fixtures();
    let before = (array1.clone(), array2.clone());
    let _ = merge(&array1, &array2, true);
    assert_eq!((array1, array2), before);
}

#[test]
fn test_merge_in_place() {
    let mut target = NestedMap::new().with_map("x", NestedMap::new().with("a", 1));
    merge_in_place(
        &mut target,
        &NestedMap::new().with_map("x", NestedMap::new().with("b", 2)),
        MergeMode::Deep,
    );
    assert_eq!(
        target.get_map("x"),
        Some(&NestedMap::new().with("a", 1).with("b", 2))
    );
}
