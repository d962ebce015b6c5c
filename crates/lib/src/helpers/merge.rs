//! Shallow and deep right-biased merging.
//!
//! Keys of the left map keep their order; keys only present on the right
//! are appended in the right map's order. Integer keys are ordinary keys:
//! they are overwritten like text keys, never renumbered or appended.

use crate::map::{NestedMap, Value};

/// How far [`merge`] descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Top-level union; the right value replaces the left one
    #[default]
    Shallow,
    /// Nested maps present on both sides are merged recursively
    Deep,
}

impl From<bool> for MergeMode {
    fn from(deep: bool) -> Self {
        if deep {
            MergeMode::Deep
        } else {
            MergeMode::Shallow
        }
    }
}

/// Merges `other` into `target`, right-biased.
pub fn merge_in_place(target: &mut NestedMap, other: &NestedMap, mode: impl Into<MergeMode>) {
    let deep = mode.into() == MergeMode::Deep;
    for (key, other_value) in other.iter() {
        if deep
            && let (Some(Value::Map(target_map)), Value::Map(other_map)) =
                (target.lookup_mut(key), other_value)
        {
            merge_in_place(target_map, other_map, MergeMode::Deep);
            continue;
        }
        target.insert(key, other_value.clone());
    }
}

/// Returns the right-biased union of `left` and `right`. Neither input is modified.
///
/// ```
/// # use nestmap::{NestedMap, merge};
/// let left = NestedMap::new().with_map("x", NestedMap::new().with("a", 1));
/// let right = NestedMap::new().with_map("x", NestedMap::new().with("b", 2));
///
/// let shallow = merge(&left, &right, false);
/// assert_eq!(shallow.get_map("x").map(|x| x.len()), Some(1));
///
/// let deep = merge(&left, &right, true);
/// assert_eq!(deep.get_map("x"), Some(&NestedMap::new().with("a", 1).with("b", 2)));
/// ```
pub fn merge(left: &NestedMap, right: &NestedMap, mode: impl Into<MergeMode>) -> NestedMap {
    let mut result = left.clone();
    merge_in_place(&mut result, right, mode);
    result
}
