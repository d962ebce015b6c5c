//! Stateless helper operations over [`NestedMap`](crate::NestedMap).
//!
//! Each submodule covers one family of operations. Everything is
//! re-exported here and at the crate root.

pub mod access;
pub mod filter;
pub mod merge;
pub mod reshape;

pub use access::{
    exists, get, get_or_all, lookup, remove, remove_in_place, set, set_in_place, try_get, try_set,
};
pub use filter::{Filtered, filter, filter_entries};
pub use merge::{MergeMode, merge, merge_in_place};
pub use reshape::{
    to_key_index, to_key_value, to_key_value_group, try_to_key_index, try_to_key_value,
    try_to_key_value_group,
};
