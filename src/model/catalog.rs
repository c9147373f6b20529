use ahash::AHashMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// An item that is stored in a `Catalog` under its own id.
pub trait Keyed {
    fn key(&self) -> &str;
    fn assign_key(&mut self, key: String);
}

/// A read-only collection keyed by id that remembers declaration order.
///
/// In JSON a catalog is an object of `id -> item`. Items may omit their own id;
/// the object key is then used. Iteration follows document order, which the
/// outcome aggregator relies on for stable tie-breaking.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    index: AHashMap<String, usize>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: AHashMap::new(),
        }
    }
}

impl<T: Keyed> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item; an item with the same id is replaced in place.
    pub fn insert(&mut self, item: T) -> Option<T> {
        match self.index.get(item.key()) {
            Some(&position) => Some(std::mem::replace(&mut self.items[position], item)),
            None => {
                self.index.insert(item.key().to_string(), self.items.len());
                self.items.push(item);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&position| &self.items[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Keyed> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for item in iter {
            catalog.insert(item);
        }
        catalog
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Keyed + Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for item in &self.items {
            map.serialize_entry(item.key(), item)?;
        }
        map.end()
    }
}

struct CatalogVisitor<T>(PhantomData<T>);

impl<'de, T: Keyed + Deserialize<'de>> Visitor<'de> for CatalogVisitor<T> {
    type Value = Catalog<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping ids to entries")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut catalog = Catalog::new();
        while let Some((key, mut item)) = access.next_entry::<String, T>()? {
            if item.key().is_empty() {
                item.assign_key(key);
            } else if item.key() != key {
                return Err(de::Error::custom(format!(
                    "entry '{}' declares a different id '{}'",
                    key,
                    item.key()
                )));
            }
            catalog.insert(item);
        }
        Ok(catalog)
    }
}

impl<'de, T: Keyed + Deserialize<'de>> Deserialize<'de> for Catalog<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor(PhantomData))
    }
}
