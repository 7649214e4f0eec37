use std::collections::{BTreeMap, VecDeque};

/// Ordered multimap used as a priority queue: lowest key first, FIFO among
/// values sharing a key.
#[derive(Debug, Clone)]
pub struct BTreeKeyValues<K, V>
where
    K: Ord,
{
    btree: BTreeMap<K, VecDeque<V>>,
}

impl<K, V> Default for BTreeKeyValues<K, V>
where
    K: Ord,
{
    fn default() -> BTreeKeyValues<K, V> {
        BTreeKeyValues {
            btree: BTreeMap::new(),
        }
    }
}

impl<K, V> BTreeKeyValues<K, V>
where
    K: Ord + Copy,
{
    pub fn push_back(&mut self, key: K, value: V) {
        self.btree.entry(key).or_default().push_back(value);
    }

    /// Removes the oldest value among those with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let mut entry = self.btree.first_entry()?;
        let key = *entry.key();
        let ret = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        ret.map(|value| (key, value))
    }

    pub fn first_key(&self) -> Option<K> {
        self.btree.first_key_value().map(|(key, _)| *key)
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.btree.values().map(VecDeque::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.btree.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::btree_key_values::BTreeKeyValues;

    #[test]
    fn test_lowest_key_first_then_insertion_order() {
        let mut queue = BTreeKeyValues::default();
        queue.push_back(2, 'c');
        queue.push_back(1, 'a');
        queue.push_back(2, 'd');
        queue.push_back(1, 'b');
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.first_key(), Some(1));

        let drained = std::iter::from_fn(|| queue.pop_first()).collect::<Vec<_>>();
        assert_eq!(drained, vec![(1, 'a'), (1, 'b'), (2, 'c'), (2, 'd')]);
        assert!(queue.is_empty());
        assert_eq!(queue.pop_first(), None);
    }
}
