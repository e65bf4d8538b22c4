//! Basket types and the structural plausibility check.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;

/// One line of a basket: an item and how many of it to buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketEntry {
    /// The item to buy.
    pub item: Item,
    /// How many to buy. This is the solver's reported value rounded to an
    /// integer and may be non-positive until the basket passes
    /// [`Basket::is_plausible`].
    pub count: i64,
}

/// A recommended multiset of items.
///
/// Counts are aggregated per item: no item id appears in more than one
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    /// Basket lines in model variable order.
    pub entries: Vec<BasketEntry>,
}

impl Basket {
    /// Total flea purchase cost of the basket.
    pub fn total_flea_cost(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.count * e.item.flea_price.unwrap_or(0) as i64)
            .sum()
    }

    /// Total base value of the basket.
    pub fn total_base_value(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.count * e.item.base_price as i64)
            .sum()
    }

    /// Total number of items across all entries.
    pub fn total_count(&self) -> i64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Ids of every item in the basket.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.item.id.as_str())
    }

    /// Structural sanity check: every count must be strictly positive.
    ///
    /// Solvers occasionally report near-zero negative values for excluded
    /// variables; such baskets are discarded rather than surfaced. This
    /// check is structural only and does not re-verify the value floor or
    /// count ceiling.
    pub fn is_plausible(&self) -> bool {
        self.entries.iter().all(|e| e.count > 0)
    }
}
