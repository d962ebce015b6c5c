//! The nested map container.
//!
//! [`NestedMap`] is an insertion-ordered mapping from [`Key`] to
//! [`Value`]. Values may themselves be maps, so a single `NestedMap` can
//! describe an arbitrarily deep tree addressed with [`DotPath`]s.
//!
//! Overwriting an existing key keeps the key's original position, and
//! removing a key preserves the order of the remaining entries. Equality
//! compares contents only; iteration order is not part of `==`.
//!
//! # Usage
//!
//! ```
//! use nestmap::{DotPath, NestedMap, Value};
//!
//! let map = NestedMap::new()
//!     .with("name", "Alice")
//!     .with_map("profile", NestedMap::new().with("age", 30));
//!
//! assert_eq!(map.lookup("name"), Some(&Value::from("Alice")));
//! let age = map.lookup_path(&DotPath::parse("profile.age")).unwrap();
//! assert_eq!(*age, 30);
//! ```

use std::fmt;

use indexmap::IndexMap;

pub mod errors;
pub mod key;
pub mod path;
mod serde_impl;
pub mod value;

pub use errors::MapError;
pub use key::Key;
pub use path::{DotPath, PathMode};
pub use value::Value;

/// An insertion-ordered map of [`Key`] to [`Value`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedMap {
    entries: IndexMap<Key, Value>,
}

impl NestedMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a top-level value. Dots in `key` are not interpreted.
    pub fn lookup(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable top-level value
    pub fn lookup_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Returns true if `key` is present at the top level, even when it holds `Null`
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Gets a nested map stored directly under `key`
    pub fn get_map(&self, key: impl Into<Key>) -> Option<&NestedMap> {
        self.lookup(key)?.as_map()
    }

    /// Sets a top-level value, returning the previous one.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a top-level entry, preserving the order of the rest
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Resolves a path, descending through nested maps.
    ///
    /// # Errors
    /// - [`MapError::KeyNotFound`] naming the first missing prefix
    /// - [`MapError::NotAMap`] when an intermediate value is not a map
    pub fn lookup_path(&self, path: &DotPath) -> Result<&Value, MapError> {
        let (parents, last) = path.split_last();
        let mut current = self;

        for (depth, segment) in parents.iter().enumerate() {
            let value = current
                .entries
                .get(segment)
                .ok_or_else(|| MapError::KeyNotFound {
                    key: path.prefix_string(depth + 1),
                })?;
            current = value.as_map().ok_or_else(|| MapError::NotAMap {
                path: path.prefix_string(depth + 1),
                actual: value.type_name().to_string(),
            })?;
        }

        current
            .entries
            .get(last)
            .ok_or_else(|| MapError::KeyNotFound {
                key: path.to_string(),
            })
    }

    /// Sets a value at `path`, creating intermediate maps as needed.
    ///
    /// With `replace_scalars`, an intermediate value that is not a map is
    /// replaced by an empty map. Without it, that case is an error.
    ///
    /// Returns the value previously stored at the final segment.
    pub fn insert_path(
        &mut self,
        path: &DotPath,
        value: impl Into<Value>,
        replace_scalars: bool,
    ) -> Result<Option<Value>, MapError> {
        let (parents, last) = path.split_last();
        let mut current = self;

        for (depth, segment) in parents.iter().enumerate() {
            let slot = current
                .entries
                .entry(segment.clone())
                .or_insert_with(|| Value::Map(NestedMap::new()));
            if !slot.is_map() {
                if !replace_scalars {
                    return Err(MapError::NotAMap {
                        path: path.prefix_string(depth + 1),
                        actual: slot.type_name().to_string(),
                    });
                }
                tracing::debug!(
                    path = %path.prefix_string(depth + 1),
                    replaced = slot.type_name(),
                    "Replacing non-map value with an empty map"
                );
                *slot = Value::Map(NestedMap::new());
            }
            current = match slot {
                Value::Map(map) => map,
                _ => unreachable!(),
            };
        }

        Ok(current.entries.insert(last.clone(), value.into()))
    }

    /// Removes the value at `path`, returning it if it was present.
    ///
    /// Nothing is created or replaced when the path does not resolve.
    pub fn remove_path(&mut self, path: &DotPath) -> Option<Value> {
        let (parents, last) = path.split_last();
        let mut current = self;
        for segment in parents {
            current = current.entries.get_mut(segment)?.as_map_mut()?;
        }
        current.entries.shift_remove(last)
    }

    /// Returns an iterator over all entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over all keys in order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over all values in order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over all values in order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// Builder pattern methods
impl NestedMap {
    /// Builder method to set a top-level value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder method to set a nested map
    pub fn with_map(self, key: impl Into<Key>, value: NestedMap) -> Self {
        self.with(key, Value::Map(value))
    }

    /// Builder method to set a list
    pub fn with_list<T: Into<Value>>(self, key: impl Into<Key>, values: Vec<T>) -> Self {
        self.with(key, Value::from(values))
    }
}

impl fmt::Display for NestedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for NestedMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = NestedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for NestedMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for NestedMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a NestedMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
