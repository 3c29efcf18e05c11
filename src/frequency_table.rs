use std::collections::BTreeMap;

/// Occurrence counts keyed by item name.
///
/// Keys are compared byte-for-byte, so `Apples` and `apples` are distinct
/// items. Iteration is lexicographic by key, which keeps the backup file and
/// every listing reproducible across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, item: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.counts.get_mut(item) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(item.to_string(), count);
            }
        }
    }

    /// Count for `item`, or 0 when it was never observed. Never inserts.
    pub fn frequency_of(&self, item: &str) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
