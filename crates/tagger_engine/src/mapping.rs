use std::collections::BTreeMap;

/// Word -> occurrence count produced by one extraction pass.
///
/// Every stored count is at least 1. Iteration is ascending by word, which
/// keeps display and saved output stable between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyMapping {
    counts: BTreeMap<String, u64>,
}

impl FrequencyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Count one more occurrence of `word`, starting at 1.
    pub fn increment(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub(crate) fn insert(&mut self, word: String, count: u64) {
        self.counts.insert(word, count);
    }
}

/// Collects `(word, count)` pairs, adding up repeated words and skipping zero counts.
impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyMapping {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (word, count) in iter {
            if count == 0 {
                continue;
            }
            *mapping.counts.entry(word.into()).or_insert(0) += count;
        }
        mapping
    }
}
