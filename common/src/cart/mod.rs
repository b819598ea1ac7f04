//! Cart store
//!
//! Items are deduplicated by a key synthesized from mold, plastic, color,
//! weight and foil. Every mutation is written through to storage before the
//! change listener runs.

mod storage;

pub use storage::{CartStorage, MemoryStorage};
#[cfg(not(feature = "wasm"))]
pub use storage::JsonFileStorage;

use crate::error::Result;
use crate::types::{format_number, DiscRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// localStorage key of the cart blob
pub const CART_STORAGE_KEY: &str = "otbHelperCart";

/// `Wraith-Star-Blue-174-None`
pub fn cart_key(disc: &DiscRecord) -> String {
    fn part(value: Option<&str>) -> &str {
        value.unwrap_or("None")
    }
    let weight = disc
        .weight
        .map(format_number)
        .unwrap_or_else(|| "None".to_string());
    format!(
        "{}-{}-{}-{}-{}",
        part(disc.mold.as_deref()),
        part(disc.plastic_type.as_deref()),
        part(disc.plastic_color.as_deref()),
        weight,
        part(disc.stamp_foil.as_deref()),
    )
}

/// A disc in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    #[serde(flatten)]
    pub disc: DiscRecord,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(disc: DiscRecord, added_at: DateTime<Utc>) -> Self {
        Self {
            id: cart_key(&disc),
            disc,
            added_at,
        }
    }

    /// `Blue • 174g`
    pub fn detail_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(color) = self.disc.plastic_color.as_deref() {
            parts.push(color.to_string());
        }
        if let Some(weight) = self.disc.weight {
            parts.push(format!("{}g", format_number(weight)));
        }
        parts.join(" • ")
    }

    pub fn price_label(&self) -> String {
        match self.disc.price.as_deref() {
            Some(p) => format!("${}", p.trim_start_matches('$')),
            None => "N/A".to_string(),
        }
    }
}

/// Result of `CartStore::add`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

type Listener = Box<dyn Fn(&[CartItem])>;

/// Persisted cart
pub struct CartStore<S: CartStorage> {
    storage: S,
    items: Vec<CartItem>,
    listener: Option<Listener>,
}

impl<S: CartStorage> CartStore<S> {
    /// Reads the stored blob. Unreadable or corrupt data yields an empty cart.
    pub fn load(storage: S) -> Self {
        let items = match storage.read() {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<CartItem>>(&blob) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("Error loading cart, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Cart storage unreadable, starting empty: {}", e);
                Vec::new()
            }
        };
        tracing::debug!(count = items.len(), "cart loaded");

        Self {
            storage,
            items,
            listener: None,
        }
    }

    /// Called with the full item list after every mutation
    pub fn set_listener(&mut self, listener: impl Fn(&[CartItem]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|item| item.id == key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add(&mut self, disc: &DiscRecord) -> Result<AddOutcome> {
        self.add_at(disc, Utc::now())
    }

    pub fn add_at(&mut self, disc: &DiscRecord, added_at: DateTime<Utc>) -> Result<AddOutcome> {
        let item = CartItem::new(disc.clone(), added_at);
        if self.contains(&item.id) {
            tracing::debug!(key = %item.id, "duplicate cart add");
            return Ok(AddOutcome::Duplicate);
        }
        let key = item.id.clone();
        self.items.push(item);
        if let Err(e) = self.commit() {
            self.items.pop();
            return Err(e);
        }
        tracing::info!(key = %key, "added to cart");
        Ok(AddOutcome::Added)
    }

    /// Returns whether anything was removed; unknown keys are not an error
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        let previous = self.items.clone();
        self.items.retain(|item| item.id != key);
        let removed = self.items.len() != previous.len();
        if let Err(e) = self.commit() {
            self.items = previous;
            return Err(e);
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.items);
        if let Err(e) = self.commit() {
            self.items = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Serializes the full list to storage
    pub fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.items)?;
        self.storage.write(&blob)
    }

    fn commit(&mut self) -> Result<()> {
        self.persist()?;
        if let Some(listener) = &self.listener {
            listener(&self.items);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;
    use std::rc::Rc;

    fn wraith() -> DiscRecord {
        DiscRecord {
            mold: Some("Wraith".into()),
            plastic_type: Some("Star".into()),
            plastic_color: Some("Blue".into()),
            weight: Some(174.0),
            price: Some("18.00".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_cart_key() {
        assert_eq!(cart_key(&wraith()), "Wraith-Star-Blue-174-None");
        assert_eq!(cart_key(&DiscRecord::default()), "None-None-None-None-None");

        let mut half = wraith();
        half.weight = Some(173.5);
        half.stamp_foil = Some("Gold".into());
        assert_eq!(cart_key(&half), "Wraith-Star-Blue-173.5-Gold");
    }

    #[test]
    fn test_add_duplicate() {
        let mut cart = CartStore::load(MemoryStorage::new());
        assert_eq!(cart.add(&wraith()).unwrap(), AddOutcome::Added);
        assert_eq!(cart.add(&wraith()).unwrap(), AddOutcome::Duplicate);
        assert_eq!(cart.len(), 1);
        assert!(cart.contains("Wraith-Star-Blue-174-None"));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add(&wraith()).unwrap();
        assert!(!cart.remove("nope").unwrap());
        assert_eq!(cart.len(), 1);
        assert!(cart.remove("Wraith-Star-Blue-174-None").unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_writes_through_and_reloads() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add(&wraith()).unwrap();

        let blob = cart.storage().blob().unwrap().to_string();
        assert!(blob.contains("\"addedAt\""));
        assert!(blob.contains("\"id\":\"Wraith-Star-Blue-174-None\""));
        assert!(blob.contains("\"mold\":\"Wraith\""));

        let reloaded = CartStore::load(MemoryStorage::with_blob(blob));
        assert_eq!(reloaded.items(), cart.items());
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let cart = CartStore::load(MemoryStorage::with_blob("{not json"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add(&wraith()).unwrap();
        cart.clear().unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.storage().blob(), Some("[]"));
    }

    #[test]
    fn test_listener_runs_after_mutation() {
        let seen = Rc::new(Cell::new(usize::MAX));
        let mut cart = CartStore::load(MemoryStorage::new());
        let seen_in = seen.clone();
        cart.set_listener(move |items| seen_in.set(items.len()));

        cart.add(&wraith()).unwrap();
        assert_eq!(seen.get(), 1);

        seen.set(usize::MAX);
        cart.add(&wraith()).unwrap();
        assert_eq!(seen.get(), usize::MAX);

        cart.clear().unwrap();
        assert_eq!(seen.get(), 0);
    }

    struct RejectingStorage;

    impl CartStorage for RejectingStorage {
        fn read(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&mut self, _blob: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_failed_write_leaves_cart_unchanged() {
        let mut cart = CartStore::load(RejectingStorage);
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        cart.set_listener(move |_| seen.set(seen.get() + 1));

        assert!(cart.add(&wraith()).is_err());
        assert!(cart.is_empty());
        // A retry is attempted again, not reported as a duplicate
        assert!(cart.add(&wraith()).is_err());
        assert!(cart.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_item_lines() {
        let item = CartItem::new(wraith(), Utc::now());
        assert_eq!(item.detail_line(), "Blue • 174g");
        assert_eq!(item.price_label(), "$18.00");
    }
}
