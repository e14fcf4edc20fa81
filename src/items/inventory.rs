//! The guild stockpile.
//!
//! Counts are signed: bookkeeping is allowed to dip a slot below zero in
//! the middle of a compound mutation, and callers settle it back to >= 0
//! before the mutation completes. Guarded actions (`sell_items`) check
//! before subtracting so a well-behaved caller never observes a negative.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: HashMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` (may be negative) to the slot and returns the new count.
    /// A slot that lands exactly on zero is removed.
    pub fn add(&mut self, item_id: &str, delta: i64) -> i64 {
        let count = self.counts.entry(item_id.to_string()).or_insert(0);
        *count += delta;
        let now = *count;
        if now == 0 {
            self.counts.remove(item_id);
        }
        now
    }

    pub fn count(&self, item_id: &str) -> i64 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    pub fn has_at_least(&self, item_id: &str, want: i64) -> bool {
        self.count(item_id) >= want
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct item kinds in stock.
    pub fn kinds(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_subtract_equals_direct_add() {
        let mut a = Inventory::new();
        a.add("oak_log", 5);
        a.add("oak_log", -3);

        let mut b = Inventory::new();
        b.add("oak_log", 2);

        assert_eq!(a.count("oak_log"), 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_absent_item_counts_zero() {
        let inv = Inventory::new();
        assert_eq!(inv.count("pearl"), 0);
        assert!(!inv.has_at_least("pearl", 1));
        assert!(inv.has_at_least("pearl", 0));
    }

    #[test]
    fn test_negative_intermediate_is_representable() {
        let mut inv = Inventory::new();
        inv.add("iron_ingot", -2);
        assert_eq!(inv.count("iron_ingot"), -2);
        inv.add("iron_ingot", 5);
        assert_eq!(inv.count("iron_ingot"), 3);
    }

    #[test]
    fn test_zero_slots_are_dropped() {
        let mut inv = Inventory::new();
        inv.add("oak_log", 4);
        inv.add("oak_log", -4);
        assert!(inv.is_empty());
        assert_eq!(inv.kinds(), 0);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut inv = Inventory::new();
        inv.add("oak_log", 7);
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json, serde_json::json!({ "oak_log": 7 }));
    }
}
