use serde::{Deserialize, Serialize, Serializer};

use crate::models::wish::Wish;

/// Displayed wishes, most recent first. Ids are unique within the list.
///
/// On the wire this is a plain JSON array. Duplicates read back from a file
/// are dropped the same way [`From<Vec<Wish>>`] drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Wish>")]
pub struct WishList(Vec<Wish>);

impl Serialize for WishList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl WishList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Wish] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Wish> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Wish> {
        self.0.get(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|w| w.id == id)
    }

    /// Insert at the head, dropping any older entry with the same id.
    pub fn prepend(&mut self, wish: Wish) {
        self.remove(&wish.id);
        self.0.insert(0, wish);
    }

    pub fn remove(&mut self, id: &str) -> Option<Wish> {
        let pos = self.0.iter().position(|w| w.id == id)?;
        Some(self.0.remove(pos))
    }

    /// Drop `old_id` and put `wish` at the head.
    pub fn replace(&mut self, old_id: &str, wish: Wish) {
        self.remove(old_id);
        self.prepend(wish);
    }

    pub fn into_vec(self) -> Vec<Wish> {
        self.0
    }
}

impl From<Vec<Wish>> for WishList {
    fn from(wishes: Vec<Wish>) -> Self {
        let mut list = Vec::with_capacity(wishes.len());
        for wish in wishes {
            if !list.iter().any(|w: &Wish| w.id == wish.id) {
                list.push(wish);
            }
        }
        Self(list)
    }
}

impl<'a> IntoIterator for &'a WishList {
    type Item = &'a Wish;
    type IntoIter = std::slice::Iter<'a, Wish>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
