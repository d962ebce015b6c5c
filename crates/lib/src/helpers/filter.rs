//! Filtering with a default fallback.

use crate::map::{Key, NestedMap, Value};

/// The outcome of [`filter`]: either the filtered map or the default.
#[derive(Debug, Clone, PartialEq)]
pub enum Filtered {
    /// The (possibly empty) filtered map
    Map(NestedMap),
    /// The input map was empty, so the default was returned
    Default(Value),
}

impl Filtered {
    /// Returns the filtered map, or `None` if the default was returned
    pub fn map(&self) -> Option<&NestedMap> {
        match self {
            Filtered::Map(map) => Some(map),
            Filtered::Default(_) => None,
        }
    }

    /// Unwraps the filtered map, or `None` if the default was returned
    pub fn into_map(self) -> Option<NestedMap> {
        match self {
            Filtered::Map(map) => Some(map),
            Filtered::Default(_) => None,
        }
    }

    /// Returns true if the input was empty and the default was returned
    pub fn is_default(&self) -> bool {
        matches!(self, Filtered::Default(_))
    }

    /// Collapses both outcomes into a single value
    pub fn into_value(self) -> Value {
        match self {
            Filtered::Map(map) => Value::Map(map),
            Filtered::Default(value) => value,
        }
    }
}

/// Keeps entries matching `accept` in order, stopping once `limit` entries are kept.
fn retain<F>(map: &NestedMap, limit: Option<usize>, mut accept: F) -> NestedMap
where
    F: FnMut(&Key, &Value) -> bool,
{
    // A zero limit means no limit
    let limit = limit.filter(|&n| n > 0).unwrap_or(usize::MAX);
    let mut result = NestedMap::new();
    for (key, value) in map.iter() {
        if result.len() >= limit {
            break;
        }
        if accept(key, value) {
            result.insert(key, value.clone());
        }
    }
    result
}

/// Filters `map` by key.
///
/// - An empty `map` yields [`Filtered::Default`] whatever the predicate.
/// - Without a predicate the map is returned unchanged.
/// - Otherwise the entries whose key satisfies the predicate are kept in
///   order, at most `limit` of them. No match yields an empty map, not the
///   default. A `limit` of zero means no limit.
///
/// ```
/// # use nestmap::{Key, NestedMap, Value, filter};
/// let map: NestedMap = [("t11", "v11"), ("t12", "v12"), ("t21", "v21")].into_iter().collect();
///
/// let starts_with_t1 = |key: &Key| key.to_string().starts_with("t1");
/// let result = filter(&map, Some(&starts_with_t1), Value::Null, Some(1));
/// assert_eq!(result.map().map(|m| m.len()), Some(1));
///
/// let result = filter(&NestedMap::new(), Some(&starts_with_t1), "default_value", None);
/// assert_eq!(result.into_value(), "default_value");
/// ```
pub fn filter(
    map: &NestedMap,
    predicate: Option<&dyn Fn(&Key) -> bool>,
    default: impl Into<Value>,
    limit: Option<usize>,
) -> Filtered {
    if map.is_empty() {
        return Filtered::Default(default.into());
    }
    match predicate {
        None => Filtered::Map(map.clone()),
        Some(predicate) => Filtered::Map(retain(map, limit, |key, _| predicate(key))),
    }
}

/// Filters `map` on both key and value, with the same empty-input and limit rules as [`filter`].
pub fn filter_entries<F>(
    map: &NestedMap,
    predicate: F,
    default: impl Into<Value>,
    limit: Option<usize>,
) -> Filtered
where
    F: FnMut(&Key, &Value) -> bool,
{
    if map.is_empty() {
        return Filtered::Default(default.into());
    }
    Filtered::Map(retain(map, limit, predicate))
}
