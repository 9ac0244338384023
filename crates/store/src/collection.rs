//! Tolerant decoding for the store's list endpoints.
//!
//! Historically the store has answered list requests with a bare JSON array,
//! `{"items": [...]}` or `{"data": [...]}` depending on the endpoint's age.
//! [`Collection`] absorbs all three shapes at the boundary so the rest of
//! the system only ever sees `Vec<T>`.

use serde::{Deserialize, Deserializer};

/// A list response from the remote store, whatever its wire shape.
#[derive(Debug, Clone)]
pub struct Collection<T>(pub Vec<T>);

impl<T> Collection<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionRepr<T> {
    Bare(Vec<T>),
    Items { items: Vec<T> },
    Data { data: Vec<T> },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CollectionRepr::deserialize(deserializer)?;
        let items = match repr {
            CollectionRepr::Bare(v) | CollectionRepr::Items { items: v } | CollectionRepr::Data { data: v } => v,
        };
        Ok(Collection(items))
    }
}
