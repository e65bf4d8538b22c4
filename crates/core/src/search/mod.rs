//! Approximate name matching with highlight ranges for catalog UIs.

mod matcher;
mod ranges;

pub use matcher::{rank, NameMatch};
pub use ranges::{merge_intervals, pair_boundaries};
