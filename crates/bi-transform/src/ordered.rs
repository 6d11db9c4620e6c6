//! Insertion-ordered collections.
//!
//! Surrogate keys and output row order depend on the order in which values
//! are first seen, so these helpers never go through a hash map's iteration
//! order.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A set that iterates in first-insertion order.
#[derive(Debug, Clone)]
pub struct FirstSeen<T> {
    order: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for FirstSeen<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T> FirstSeen<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value; returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.order.push(value);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }
}

impl<T> FromIterator<T> for FirstSeen<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T> IntoIterator for FirstSeen<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

/// Partitions rows into groups by key.
///
/// Groups come out in the order their first row appeared; rows inside a
/// group keep their input order.
pub fn group_first_seen<T, K, F>(rows: Vec<T>, mut key_of: F) -> Vec<Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();
    for row in rows {
        let key = key_of(&row);
        match positions.get(&key) {
            Some(&pos) => groups[pos].push(row),
            None => {
                positions.insert(key, groups.len());
                groups.push(vec![row]);
            }
        }
    }
    groups
}
