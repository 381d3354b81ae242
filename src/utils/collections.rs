//! Sequence shuffling and ordered-map helpers.
//!
//! Maps are `IndexMap<String, V>`; key order is part of every result.

use std::cmp::Ordering;

use indexmap::IndexMap;
use rand::Rng;
use strum_macros::{Display, EnumString};

/// Key ordering for [`sort_object_by_key`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// `"asc"`
    #[default]
    Asc,
    /// `"desc"`
    Desc,
}

/// Returns a shuffled copy of `items` (Fisher–Yates, thread-local RNG).
///
/// The input slice is left untouched.
pub fn shuffle_array<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_array_with(items, &mut rand::rng())
}

/// [`shuffle_array`] with a caller-supplied random source.
pub fn shuffle_array_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Shallow merge of two maps; values from `second` win.
///
/// Keys keep the position of their first appearance: keys of `first` in their
/// order, then keys only present in `second`.
pub fn merge_objects<V: Clone>(
    first: &IndexMap<String, V>,
    second: &IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = first.clone();
    for (key, value) in second {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Returns `map` with its keys reordered; values are unchanged.
///
/// Keys are compared with [`locale_compare`].
pub fn sort_object_by_key<V: Clone>(
    map: &IndexMap<String, V>,
    order: SortOrder,
) -> IndexMap<String, V> {
    let mut entries: Vec<(&String, &V)> = map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Asc => locale_compare(a, b),
        SortOrder::Desc => locale_compare(b, a),
    });
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Picks the requested keys, in request order.
///
/// A requested key missing from `map` is still present in the result, with
/// value `None`.
pub fn filter_object_by_key<V, K>(map: &IndexMap<String, V>, keys: &[K]) -> IndexMap<String, Option<V>>
where
    V: Clone,
    K: AsRef<str>,
{
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            (key.to_string(), map.get(key).cloned())
        })
        .collect()
}

/// Human-oriented string ordering.
///
/// Letters compare case-insensitively first; when two strings differ only in
/// case, lowercase sorts before uppercase at the first differing character.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| case_rank(x).cmp(&case_rank(y)))
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

fn case_rank(c: char) -> u8 {
    if c.is_lowercase() {
        0
    } else if c.is_uppercase() {
        1
    } else {
        2
    }
}
