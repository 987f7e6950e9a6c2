use std::hash::Hash;

/// A wrapper around an implementation of a HashMap.
///
/// Repeated analyses of the same input must produce identical reports, so we
/// replace std::collections::HashMap with indexmap::IndexMap, whose iteration
/// order is insertion order. This is an implementation detail, so we wrap it in
/// a newtype, allowing us to replace it later without breaking callers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Map<K: Eq + Hash, V>(indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>);

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(indexmap::IndexMap::default())
    }
}

impl<K: Eq + Hash, V> std::ops::Deref for Map<K, V> {
    type Target = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Eq + Hash, V> std::ops::DerefMut for Map<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Eq + Hash, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(indexmap::IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let map = ["zebra", "apple", "mango"]
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key.to_owned(), i))
            .collect::<Map<String, usize>>();

        let keys = map.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let map = std::iter::once(("a".to_owned(), 1)).collect::<Map<String, u32>>();
        match serde_json::to_value(&map) {
            Ok(serde_json::Value::Object(value)) => assert_eq!(value.len(), 1),
            Ok(_) => panic!("map serialized incorrectly"),
            Err(_) => panic!("could not serialize map"),
        }
    }
}
