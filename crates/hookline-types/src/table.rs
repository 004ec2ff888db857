//! Insertion-ordered `key -> sequence` table.
//!
//! Both the listener registry and the hook engine store their callbacks in
//! a [`KeyedList`]. Keys iterate in the order they were first inserted, and
//! each key's sequence keeps its own insertion order (except for
//! [`KeyedList::prepend`], which inserts at index 0).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// What happens to a key whose sequence becomes empty through removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Drop the key, so it no longer shows up in [`KeyedList::keys`].
    Prune,
    /// Keep the key with an empty sequence until it is explicitly removed.
    Retain,
}

/// An ordered mapping from keys to sequences of items.
#[derive(Clone, Debug)]
pub struct KeyedList<K, T> {
    entries: HashMap<K, Vec<T>>,
    order: Vec<K>,
    policy: EmptyPolicy,
}

impl<K: Eq + Hash + Clone, T> KeyedList<K, T> {
    /// Create an empty table with the given empty-sequence policy.
    pub fn new(policy: EmptyPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            policy,
        }
    }

    /// The empty-sequence policy this table was created with.
    pub fn policy(&self) -> EmptyPolicy {
        self.policy
    }

    fn slot(&mut self, key: K) -> &mut Vec<T> {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.entry(key).or_default()
    }

    fn forget<Q>(&mut self, key: &Q) -> Option<Vec<T>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k.borrow() != key);
        }
        removed
    }

    /// Append `item` to `key`'s sequence. Returns the new sequence length.
    pub fn push(&mut self, key: K, item: T) -> usize {
        let items = self.slot(key);
        items.push(item);
        items.len()
    }

    /// Insert `item` at index 0 of `key`'s sequence. Returns the new length.
    pub fn prepend(&mut self, key: K, item: T) -> usize {
        let items = self.slot(key);
        items.insert(0, item);
        items.len()
    }

    /// Remove the first item of `key`'s sequence matching `pred`.
    pub fn remove_first<Q, F>(&mut self, key: &Q, pred: F) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: FnMut(&T) -> bool,
    {
        let items = self.entries.get_mut(key)?;
        let index = items.iter().position(pred)?;
        let removed = items.remove(index);
        if items.is_empty() && self.policy == EmptyPolicy::Prune {
            self.forget(key);
        }
        Some(removed)
    }

    /// The sequence for `key`, if the key is present.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns `true` if `key` is present (possibly with an empty sequence).
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Number of items stored under `key`.
    pub fn len_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).map_or(0, Vec::len)
    }

    /// Number of items across all keys.
    pub fn total_len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Number of keys.
    pub fn key_count(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no keys are present.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// `(key, sequence)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).map(|items| (k, items.as_slice())))
    }

    /// Remove `key` and its whole sequence.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<Vec<T>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.forget(key)
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Cut every sequence down to its first `max` items.
    ///
    /// Returns the number of items dropped. Under [`EmptyPolicy::Prune`], a
    /// key truncated to zero items is removed.
    pub fn truncate_all(&mut self, max: usize) -> usize {
        let mut dropped = 0;
        for items in self.entries.values_mut() {
            if items.len() > max {
                dropped += items.len() - max;
                items.truncate(max);
            }
        }
        if self.policy == EmptyPolicy::Prune {
            let emptied: Vec<K> = self
                .order
                .iter()
                .filter(|k| self.entries.get(*k).is_some_and(Vec::is_empty))
                .cloned()
                .collect();
            for key in emptied {
                self.forget(&key);
            }
        }
        dropped
    }
}

impl<K: Eq + Hash + Clone, T: Clone> KeyedList<K, T> {
    /// A copy of `key`'s sequence, empty if absent.
    pub fn snapshot<Q>(&self, key: &Q) -> Vec<T>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    /// Every item, concatenated in key order.
    pub fn flatten(&self) -> Vec<T> {
        self.iter().flat_map(|(_, items)| items.iter().cloned()).collect()
    }
}

impl<K: Eq + Hash + Clone, T> KeyedList<K, T> {
    /// A new table with the same keys, order, and policy, each item mapped
    /// through `f`. Keys with empty sequences are carried over.
    pub fn map<U, F>(&self, mut f: F) -> KeyedList<K, U>
    where
        F: FnMut(&T) -> U,
    {
        let entries = self
            .entries
            .iter()
            .map(|(k, items)| (k.clone(), items.iter().map(&mut f).collect()))
            .collect();
        KeyedList {
            entries,
            order: self.order.clone(),
            policy: self.policy,
        }
    }
}

impl<K: Eq + Hash + Clone, T> Default for KeyedList<K, T> {
    fn default() -> Self {
        Self::new(EmptyPolicy::Prune)
    }
}
