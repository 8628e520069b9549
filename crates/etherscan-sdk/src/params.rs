//! Ordered query parameters

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered set of query parameters.
///
/// Keys are unique: inserting an existing key replaces its value in place, so the
/// position of the first insertion is kept. Values are stored as strings exactly as
/// they will go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Remove a parameter, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(pos).1)
    }

    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Insert every pair of `other`, replacing values of keys already present
    pub fn extend(&mut self, other: Params) {
        for (k, v) in other.0 {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Params {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_extend_overrides() {
        let mut base = Params::new().with("sort", "asc").with("page", 1);
        base.extend(Params::new().with("sort", "desc").with("offset", 10));
        assert_eq!(base.get("sort"), Some("desc"));
        assert_eq!(base.get("offset"), Some("10"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_contains_key() {
        let mut params = Params::new().with("txhash", "0xabc");
        assert!(params.contains_key("txhash"));
        assert!(!params.contains_key("address"));
        params.remove("txhash");
        assert!(!params.contains_key("txhash"));
    }

    #[test]
    fn test_remove() {
        let mut params = Params::new().with("a", 1);
        assert_eq!(params.remove("a").as_deref(), Some("1"));
        assert!(params.is_empty());
        assert_eq!(params.remove("a"), None);
    }

    #[test]
    fn test_serialize_as_map() {
        let params = Params::new().with("module", "account").with("action", "balance");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"module":"account","action":"balance"}"#);
    }

    #[test]
    fn test_from_iter() {
        let params: Params = vec![("startblock", 0u64), ("endblock", 99_999_999)]
            .into_iter()
            .collect();
        assert_eq!(params.get("endblock"), Some("99999999"));
    }
}
