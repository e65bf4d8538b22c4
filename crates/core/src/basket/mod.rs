//! Baskets: extraction from solver output and plausibility validation.

mod extract;
mod types;

pub use extract::{extract_basket, ItemIndex};
pub use types::{Basket, BasketEntry};
