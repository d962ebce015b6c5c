use nestmap::NestedMap;

/// The fixture used by the get and exists tests: two nested maps and a
/// top-level key that itself contains a dot.
pub fn dotted_fixture() -> NestedMap {
    NestedMap::new()
        .with_map(
            "arr1",
            NestedMap::new()
                .with("arr1-1", "val1-1")
                .with("arr1-2", "val1-2"),
        )
        .with_map(
            "arr2",
            NestedMap::new()
                .with("arr2-1", "val2-1")
                .with("arr2-2", "val2-2"),
        )
        .with("arr3.arr3-1", "val3-1")
}

/// Six flat entries, four of them with keys starting with `t1`.
pub fn filter_fixture() -> NestedMap {
    [
        ("t11", "v11"),
        ("t12", "v12"),
        ("t13", "v13"),
        ("t14", "v14"),
        ("t21", "v21"),
        ("t22", "v22"),
    ]
    .into_iter()
    .collect()
}

/// Three records with integer fields `t1`, `t2`, `t3`.
pub fn numeric_records() -> Vec<NestedMap> {
    [(1, 2, 3), (11, 22, 33), (111, 222, 333)]
        .into_iter()
        .map(|(a, b, c)| NestedMap::new().with("t1", a).with("t2", b).with("t3", c))
        .collect()
}

/// Collects the keys of a map as strings, in order.
pub fn key_strings(map: &NestedMap) -> Vec<String> {
    map.keys().map(ToString::to_string).collect()
}
