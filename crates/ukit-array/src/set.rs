//! Equality-based set operations over slices
//!
//! `intersection` and `union` collapse duplicates; `difference` keeps every
//! surviving element of its first argument, duplicates included.

use itertools::Itertools;
use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first occurrence of each distinct value, in input order.
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    items.iter().unique().cloned().collect()
}

/// Check whether `value` equals any element of `items`.
pub fn contains<T: PartialEq>(value: &T, items: &[T]) -> bool {
    items.iter().any(|item| item == value)
}

/// Check whether the two slices share at least one element.
pub fn intersects<T>(left: &[T], right: &[T]) -> bool
where
    T: Eq + Hash,
{
    let lookup: HashSet<&T> = left.iter().collect();
    right.iter().any(|item| lookup.contains(item))
}

/// Distinct elements present in both slices.
///
/// Result order is not guaranteed; currently it follows `right`.
pub fn intersection<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let lookup: HashSet<&T> = left.iter().collect();
    right
        .iter()
        .filter(|item| lookup.contains(item))
        .unique()
        .cloned()
        .collect()
}

/// Distinct elements present in either slice.
///
/// Result order is not guaranteed; currently `left` then `right`.
pub fn union<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    left.iter().chain(right).unique().cloned().collect()
}

/// Elements of `left` that do not appear in `right`, in `left` order.
///
/// Duplicates in `left` are kept.
pub fn difference<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let excluded: HashSet<&T> = right.iter().collect();
    left.iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}
