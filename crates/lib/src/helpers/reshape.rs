//! Reshaping record lists into indexed or grouped maps.
//!
//! Each function takes an ordered sequence of records (maps sharing a
//! schema) and the name of the field whose value becomes the new key.
//! Field names are plain keys; dots are not interpreted.
//!
//! The default functions skip records whose key field is missing or
//! cannot be a key (null, list, map) and log the skip at debug level. The
//! `try_*` variants stop at the first such record instead.

use crate::map::{Key, MapError, NestedMap, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    Lenient,
    Strict,
}

/// Reads the key field of the record at `position`.
fn record_key(entry: &NestedMap, field: &Key, position: usize) -> Result<Key, MapError> {
    let value = entry.lookup(field).ok_or_else(|| MapError::InvalidKey {
        position,
        reason: format!("missing field '{field}'"),
    })?;
    value.to_key().ok_or_else(|| MapError::InvalidKey {
        position,
        reason: format!("field '{field}' holds a {} value", value.type_name()),
    })
}

/// Reads the value field of the record at `position`.
fn record_value<'a>(
    entry: &'a NestedMap,
    field: &Key,
    position: usize,
) -> Result<&'a Value, MapError> {
    entry.lookup(field).ok_or_else(|| MapError::KeyNotFound {
        key: format!("{field} (entry {position})"),
    })
}

/// Feeds each record with a usable key to `accept`, applying `policy` to the rest.
fn for_each_keyed<'a, I, F>(
    entries: I,
    key_field: &Key,
    policy: Policy,
    mut accept: F,
) -> Result<(), MapError>
where
    I: IntoIterator<Item = &'a NestedMap>,
    F: FnMut(usize, Key, &'a NestedMap) -> Result<(), MapError>,
{
    for (position, entry) in entries.into_iter().enumerate() {
        let result = record_key(entry, key_field, position)
            .and_then(|key| accept(position, key, entry));
        match result {
            Ok(()) => {}
            Err(err) if policy == Policy::Strict => return Err(err),
            Err(err) => tracing::debug!(position, %err, "Skipping record"),
        }
    }
    Ok(())
}

fn key_index<'a, I>(entries: I, key_field: Key, policy: Policy) -> Result<NestedMap, MapError>
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    let mut result = NestedMap::new();
    for_each_keyed(entries, &key_field, policy, |_, key, entry| {
        result.insert(key, entry.clone());
        Ok(())
    })?;
    Ok(result)
}

fn key_value<'a, I>(
    entries: I,
    key_field: Key,
    value_field: Key,
    policy: Policy,
) -> Result<NestedMap, MapError>
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    let mut result = NestedMap::new();
    for_each_keyed(entries, &key_field, policy, |position, key, entry| {
        let value = match record_value(entry, &value_field, position) {
            Ok(value) => value.clone(),
            Err(err) if policy == Policy::Strict => return Err(err),
            Err(_) => Value::Null,
        };
        result.insert(key, value);
        Ok(())
    })?;
    Ok(result)
}

fn key_value_group<'a, I>(
    entries: I,
    key_field: Key,
    value_field: Key,
    policy: Policy,
) -> Result<NestedMap, MapError>
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    let mut result = NestedMap::new();
    for_each_keyed(entries, &key_field, policy, |position, key, entry| {
        let value = record_value(entry, &value_field, position)?.clone();
        match result.lookup_mut(&key) {
            Some(Value::List(group)) => group.push(value),
            _ => {
                result.insert(key, Value::List(vec![value]));
            }
        }
        Ok(())
    })?;
    Ok(result)
}

/// Indexes records by the value of `key_field`; each key maps to the whole record.
///
/// On duplicate keys the last record wins, keeping the position of the
/// first occurrence.
///
/// ```
/// # use nestmap::{NestedMap, to_key_index};
/// let rows = vec![
///     NestedMap::new().with("id", 1).with("name", "a"),
///     NestedMap::new().with("id", 11).with("name", "b"),
/// ];
/// let index = to_key_index(&rows, "id");
/// assert_eq!(index.get_map(11), Some(&rows[1]));
/// ```
pub fn to_key_index<'a, I>(entries: I, key_field: impl Into<Key>) -> NestedMap
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    key_index(entries, key_field.into(), Policy::Lenient).unwrap_or_default()
}

/// Strict variant of [`to_key_index`].
///
/// # Errors
/// [`MapError::InvalidKey`] for the first record whose key field is missing or unusable.
pub fn try_to_key_index<'a, I>(entries: I, key_field: impl Into<Key>) -> Result<NestedMap, MapError>
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    key_index(entries, key_field.into(), Policy::Strict)
}

/// Maps the value of `key_field` to the value of `value_field` for each record.
///
/// On duplicate keys the last record wins. A record without `value_field`
/// contributes `Null`.
pub fn to_key_value<'a, I>(
    entries: I,
    key_field: impl Into<Key>,
    value_field: impl Into<Key>,
) -> NestedMap
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    key_value(entries, key_field.into(), value_field.into(), Policy::Lenient).unwrap_or_default()
}

/// Strict variant of [`to_key_value`].
///
/// # Errors
/// - [`MapError::InvalidKey`] for a missing or unusable key field
/// - [`MapError::KeyNotFound`] for a missing value field
pub fn try_to_key_value<'a, I>(
    entries: I,
    key_field: impl Into<Key>,
    value_field: impl Into<Key>,
) -> Result<NestedMap, MapError>
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    key_value(entries, key_field.into(), value_field.into(), Policy::Strict)
}

/// Groups the values of `value_field` by the value of `key_field`.
///
/// Each key maps to a [`Value::List`] of values in input order; keys appear
/// in order of first occurrence. Records without `value_field` are skipped.
///
/// ```
/// # use nestmap::{NestedMap, Value, to_key_value_group};
/// let rows = vec![
///     NestedMap::new().with("k", "v1").with("n", 1),
///     NestedMap::new().with("k", "v1").with("n", 2),
///     NestedMap::new().with("k", "v3").with("n", 3),
/// ];
/// let groups = to_key_value_group(&rows, "k", "n");
/// assert_eq!(groups.lookup("v1"), Some(&Value::from(vec![1, 2])));
/// assert_eq!(groups.lookup("v3"), Some(&Value::from(vec![3])));
/// ```
pub fn to_key_value_group<'a, I>(
    entries: I,
    key_field: impl Into<Key>,
    value_field: impl Into<Key>,
) -> NestedMap
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    key_value_group(entries, key_field.into(), value_field.into(), Policy::Lenient)
        .unwrap_or_default()
}

/// Strict variant of [`to_key_value_group`].
///
/// # Errors
/// - [`MapError::InvalidKey`] for a missing or unusable key field
/// - [`MapError::KeyNotFound`] for a missing value field
pub fn try_to_key_value_group<'a, I>(
    entries: I,
    key_field: impl Into<Key>,
    value_field: impl Into<Key>,
) -> Result<NestedMap, MapError>
where
    I: IntoIterator<Item = &'a NestedMap>,
{
    key_value_group(entries, key_field.into(), value_field.into(), Policy::Strict)
}
