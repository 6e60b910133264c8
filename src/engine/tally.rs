use std::hash::Hash;

use hashbrown::HashMap;

/// Counter that remembers the order keys were first seen in.
#[derive(Debug, Clone)]
pub struct FirstSeenTally<K> {
    entries: Vec<(K, usize)>,
    slot: HashMap<K, usize>,
}

impl<K> Default for FirstSeenTally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slot: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> FirstSeenTally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self, key: &K) {
        if let Some(&idx) = self.slot.get(key) {
            self.entries[idx].1 += 1;
            return;
        }
        self.slot.insert(key.clone(), self.entries.len());
        self.entries.push((key.clone(), 1));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by count descending; equal counts keep first-seen order.
    pub fn into_ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_seen_order() {
        let mut t = FirstSeenTally::new();
        for k in ["b", "a", "c", "a", "c", "d"] {
            t.bump(&k);
        }
        assert_eq!(t.len(), 4);
        assert_eq!(t.into_ranked(), vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }
}
