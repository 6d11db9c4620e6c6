//! Dimension tables with surrogate keys.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::enums::DimensionKind;

/// One dimension row: natural key, surrogate key, optional enrichment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionRow<K> {
    pub key: K,
    pub id: i64,
    pub attribute: Option<String>,
}

/// A dimension table mapping natural keys to 1-based surrogate keys.
///
/// Keys are assigned in the order the natural keys are supplied, so the
/// caller controls surrogate-key stability by controlling that order.
#[derive(Debug, Clone)]
pub struct DimensionTable<K> {
    kind: DimensionKind,
    rows: Vec<DimensionRow<K>>,
    index: HashMap<K, i64>,
}

impl<K> DimensionTable<K>
where
    K: Clone + Eq + Hash,
{
    /// Builds a table from distinct natural keys, numbering them from 1.
    ///
    /// A repeated key keeps its first surrogate key; later repeats are ignored.
    pub fn from_keys<I, F>(kind: DimensionKind, keys: I, mut enrich: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: FnMut(&K) -> Option<String>,
    {
        let mut rows = Vec::new();
        let mut index = HashMap::new();
        for key in keys {
            if index.contains_key(&key) {
                continue;
            }
            let id = rows.len() as i64 + 1;
            let attribute = enrich(&key);
            index.insert(key.clone(), id);
            rows.push(DimensionRow { key, id, attribute });
        }
        Self { kind, rows, index }
    }

    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    /// Surrogate key for a natural key.
    pub fn id_of(&self, key: &K) -> Option<i64> {
        self.index.get(key).copied()
    }

    pub fn rows(&self) -> &[DimensionRow<K>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
