//! Dot-path access: get, set, exists and remove.
//!
//! Every function takes a [`PathMode`] (or a `bool`, `true` meaning
//! [`PathMode::Dotted`]). In literal mode the key is a single top-level
//! key even when it contains dots. In dotted mode a text key containing
//! `.` is split into a [`DotPath`] and resolved level by level.
//!
//! Descent takes priority over literal dotted keys. The one exception is
//! when the first segment of the path does not exist at all: then a
//! top-level key spelled exactly like the whole path is used, so a map
//! holding `"arr3.arr3-1"` directly still answers a dotted lookup of
//! `"arr3.arr3-1"`.

use crate::map::{DotPath, Key, MapError, NestedMap, PathMode, Value};

/// Resolves `key` against `map`, applying the literal fallback described in the module docs.
fn resolve<'a>(map: &'a NestedMap, key: &Key, path: &DotPath) -> Result<&'a Value, MapError> {
    match map.lookup_path(path) {
        Ok(value) => Ok(value),
        Err(err) if !path.is_single() && !map.contains_key(path.head()) => {
            match map.lookup(key) {
                Some(value) => {
                    tracing::trace!(key = %key, "Dot path head missing, using literal key");
                    Ok(value)
                }
                None => Err(err),
            }
        }
        Err(err) => Err(err),
    }
}

/// Gets a borrowed value by key or dot path.
///
/// Returns `None` when any segment is missing or an intermediate value is
/// not a map.
pub fn lookup(
    map: &NestedMap,
    key: impl Into<Key>,
    mode: impl Into<PathMode>,
) -> Option<&Value> {
    let key = key.into();
    let path = DotPath::resolve(&key, mode.into());
    resolve(map, &key, &path).ok()
}

/// Gets a value by key or dot path, or `default` when it does not resolve.
///
/// ```
/// # use nestmap::{NestedMap, get};
/// let map = NestedMap::new().with_map("arr1", NestedMap::new().with("arr1-1", "val1-1"));
///
/// assert_eq!(get(&map, "arr1.arr1-1", "not_exists", true), "val1-1");
/// assert_eq!(get(&map, "arr1.arr1-1", "not_exists", false), "not_exists");
/// assert_eq!(get(&map, "arr1.arr1-1.deeper", "not_exists", true), "not_exists");
/// ```
pub fn get(
    map: &NestedMap,
    key: impl Into<Key>,
    default: impl Into<Value>,
    mode: impl Into<PathMode>,
) -> Value {
    match lookup(map, key, mode) {
        Some(value) => value.clone(),
        None => {
            tracing::trace!("Key did not resolve, returning default");
            default.into()
        }
    }
}

/// Like [`get`], but without a key the whole map is returned.
///
/// ```
/// # use nestmap::{NestedMap, Value, get_or_all};
/// let map = NestedMap::new().with("test1", "test");
/// assert_eq!(get_or_all(&map, None, Value::Null, false), map);
/// assert_eq!(get_or_all(&map, Some("test1".into()), Value::Null, false), "test");
/// ```
pub fn get_or_all(
    map: &NestedMap,
    key: Option<Key>,
    default: impl Into<Value>,
    mode: impl Into<PathMode>,
) -> Value {
    match key {
        Some(key) => get(map, key, default, mode),
        None => Value::Map(map.clone()),
    }
}

/// Gets a value by key or dot path, reporting why it did not resolve.
///
/// # Errors
/// - [`MapError::KeyNotFound`] naming the first missing prefix of the path
/// - [`MapError::NotAMap`] when descent reaches a value that is not a map
pub fn try_get(
    map: &NestedMap,
    key: impl Into<Key>,
    mode: impl Into<PathMode>,
) -> Result<&Value, MapError> {
    let key = key.into();
    let path = DotPath::resolve(&key, mode.into());
    resolve(map, &key, &path)
}

/// Returns true when the key or full dot path is present.
///
/// A key holding [`Value::Null`] is present.
pub fn exists(map: &NestedMap, key: impl Into<Key>, mode: impl Into<PathMode>) -> bool {
    lookup(map, key, mode).is_some()
}

/// Sets a value in place, returning the value previously stored there.
///
/// In dotted mode, missing intermediate maps are created and intermediate
/// values that are not maps are replaced by empty maps.
pub fn set_in_place(
    map: &mut NestedMap,
    key: impl Into<Key>,
    value: impl Into<Value>,
    mode: impl Into<PathMode>,
) -> Option<Value> {
    let path = DotPath::resolve(&key.into(), mode.into());
    // Cannot fail when non-map intermediates are replaced
    map.insert_path(&path, value, true).unwrap_or_default()
}

/// Returns a copy of `map` with `value` set at the key or dot path.
///
/// ```
/// # use nestmap::{NestedMap, set};
/// let map = set(&NestedMap::new(), "t1.t2.t3", "deep", true);
/// assert_eq!(map.get_map("t1").and_then(|t1| t1.get_map("t2")).map(|t2| t2.len()), Some(1));
///
/// let map = set(&map, "t2.t3", "flat", false);
/// assert!(map.contains_key("t2.t3"));
/// ```
pub fn set(
    map: &NestedMap,
    key: impl Into<Key>,
    value: impl Into<Value>,
    mode: impl Into<PathMode>,
) -> NestedMap {
    let mut result = map.clone();
    set_in_place(&mut result, key, value, mode);
    result
}

/// Strict variant of [`set`].
///
/// # Errors
/// - [`MapError::InvalidPath`] for an empty key
/// - [`MapError::NotAMap`] when an intermediate value exists and is not a map;
///   nothing is overwritten in that case
pub fn try_set(
    map: &NestedMap,
    key: impl Into<Key>,
    value: impl Into<Value>,
    mode: impl Into<PathMode>,
) -> Result<NestedMap, MapError> {
    let key = key.into();
    if key.as_text().is_some_and(str::is_empty) {
        return Err(MapError::InvalidPath {
            path: "empty key (not allowed for setting values)".to_string(),
        });
    }

    let path = DotPath::resolve(&key, mode.into());
    let mut result = map.clone();
    result.insert_path(&path, value, false)?;
    Ok(result)
}

/// Removes the entry at the key or dot path, returning it if it was present.
///
/// Nothing is created when the path does not resolve.
pub fn remove_in_place(
    map: &mut NestedMap,
    key: impl Into<Key>,
    mode: impl Into<PathMode>,
) -> Option<Value> {
    let key = key.into();
    let path = DotPath::resolve(&key, mode.into());
    if !path.is_single() && !map.contains_key(path.head()) {
        return map.remove(&key);
    }
    map.remove_path(&path)
}

/// Returns a copy of `map` without the entry at the key or dot path, and the removed value.
pub fn remove(
    map: &NestedMap,
    key: impl Into<Key>,
    mode: impl Into<PathMode>,
) -> (NestedMap, Option<Value>) {
    let mut result = map.clone();
    let removed = remove_in_place(&mut result, key, mode);
    (result, removed)
}
