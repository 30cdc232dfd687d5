//! Ordered, role-keyed lookup table.
//!
//! Insertion order is significant: when several keys are contained in a
//! free-text role, the first one in table order wins.

/// Ordered association list keyed by canonical role name.
#[derive(Debug, Clone)]
pub struct RoleTable<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for RoleTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> RoleTable<T> {
    /// Keys are trimmed; input is trimmed before matching, so padded keys
    /// would otherwise never resolve.
    pub fn new(entries: Vec<(String, T)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.trim().to_string(), value))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Case-sensitive lookup by canonical key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Resolves free-text input to a table entry.
    ///
    /// 1. a key equal to the trimmed input, ignoring case
    /// 2. otherwise the first key (in table order) contained in the input, ignoring case
    ///
    /// An exact match always wins, even when a shorter key is also contained.
    pub fn resolve(&self, input: &str) -> Option<(&str, &T)> {
        self.resolve_exact(input)
            .or_else(|| self.resolve_contained(input))
    }

    /// Case-insensitive exact lookup on the trimmed input.
    pub fn resolve_exact(&self, input: &str) -> Option<(&str, &T)> {
        let needle = input.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == needle)
            .map(|(key, value)| (key.as_str(), value))
    }

    fn resolve_contained(&self, input: &str) -> Option<(&str, &T)> {
        let haystack = input.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| haystack.contains(&key.to_lowercase()))
            .map(|(key, value)| (key.as_str(), value))
    }
}
