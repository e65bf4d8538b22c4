//! Solution extraction: solver output back into domain terms.

use std::collections::HashMap;

use tracing::warn;

use crate::catalog::Item;
use crate::solver::{BasketModel, SolverSolution};

use super::{Basket, BasketEntry};

/// By-id lookup over an item universe.
///
/// Extraction always resolves items through this index using the id each
/// model variable carries, so the universe handed to extraction may be a
/// superset of the one the model was built over (the diversification loop
/// solves over a reduced universe but extracts against the full one).
pub struct ItemIndex<'a> {
    by_id: HashMap<&'a str, &'a Item>,
}

impl<'a> ItemIndex<'a> {
    /// Build an index over a universe.
    pub fn from_items(items: &'a [Item]) -> Self {
        Self {
            by_id: items.iter().map(|item| (item.id.as_str(), item)).collect(),
        }
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&'a Item> {
        self.by_id.get(id).copied()
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Reconstruct a basket from a solved variable assignment.
///
/// Every variable with a non-zero value becomes one basket entry, resolved
/// by item identity. Values are rounded to integer counts; fractional
/// solver noise therefore lands on 0 or a negative count and is caught by
/// the plausibility check rather than silently surfacing.
///
/// A variable whose item id is missing from the index points at a caller
/// bug (extraction universe does not cover the model's); it is skipped
/// with a warning instead of fabricating an entry.
pub fn extract_basket(
    model: &BasketModel,
    index: &ItemIndex<'_>,
    solution: &SolverSolution,
) -> Basket {
    let mut entries = Vec::new();

    for variable in &model.variables {
        let value = solution.values.get(&variable.name).copied().unwrap_or(0.0);
        if value == 0.0 {
            continue;
        }

        let Some(item) = index.get(&variable.item_id) else {
            warn!(
                item_id = %variable.item_id,
                variable = %variable.name,
                "solved variable refers to an item outside the extraction universe"
            );
            continue;
        };

        entries.push(BasketEntry {
            item: item.clone(),
            count: value.round() as i64,
        });
    }

    Basket { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::solver::BasketModel;

    fn make_item(id: &str, flea_price: u64, base_price: u64) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            normalized_name: id.to_string(),
            icon_link: None,
            categories: vec![],
            base_price,
            flea_price: Some(flea_price),
        }
    }

    fn solution_of(values: &[(&str, f64)]) -> SolverSolution {
        SolverSolution {
            objective: None,
            values: values
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        }
    }

    #[test]
    fn test_extracts_nonzero_variables() {
        let universe = vec![
            make_item("a", 10, 100),
            make_item("b", 20, 300),
            make_item("c", 5, 50),
        ];
        let index = ItemIndex::from_items(&universe);
        let model = BasketModel::build(&universe, 300, 2);

        let basket = extract_basket(&model, &index, &solution_of(&[("x2", 1.0), ("x3", 2.0)]));

        assert_eq!(basket.entries.len(), 2);
        assert_eq!(basket.entries[0].item.id, "b");
        assert_eq!(basket.entries[0].count, 1);
        assert_eq!(basket.entries[1].item.id, "c");
        assert_eq!(basket.entries[1].count, 2);
    }

    #[test]
    fn test_extraction_is_identity_keyed() {
        // Model built over a reduced universe (item "a" excluded), extraction
        // against the full universe. Variable x1 is "b" in the reduced model;
        // position-keyed extraction would wrongly yield "a".
        let full = vec![
            make_item("a", 10, 100),
            make_item("b", 20, 300),
            make_item("c", 5, 50),
        ];
        let reduced: Vec<Item> = full[1..].to_vec();

        let index = ItemIndex::from_items(&full);
        let model = BasketModel::build(&reduced, 300, 2);

        let basket = extract_basket(&model, &index, &solution_of(&[("x1", 1.0)]));

        assert_eq!(basket.entries.len(), 1);
        assert_eq!(basket.entries[0].item.id, "b");
    }

    #[test]
    fn test_skips_variables_outside_the_index() {
        let universe = vec![make_item("a", 10, 100)];
        let other = vec![make_item("z", 1, 1)];

        let index = ItemIndex::from_items(&other);
        let model = BasketModel::build(&universe, 100, 1);

        let basket = extract_basket(&model, &index, &solution_of(&[("x1", 1.0)]));
        assert!(basket.entries.is_empty());
    }

    #[test]
    fn test_negative_values_survive_extraction_for_validation() {
        let universe = vec![make_item("a", 10, 100)];
        let index = ItemIndex::from_items(&universe);
        let model = BasketModel::build(&universe, 100, 1);

        let basket = extract_basket(&model, &index, &solution_of(&[("x1", -1.0)]));

        assert_eq!(basket.entries[0].count, -1);
        assert!(!basket.is_plausible());
    }

    #[test]
    fn test_fractional_noise_rounds_to_implausible_count() {
        let universe = vec![make_item("a", 10, 100)];
        let index = ItemIndex::from_items(&universe);
        let model = BasketModel::build(&universe, 100, 1);

        let basket = extract_basket(&model, &index, &solution_of(&[("x1", 1e-9)]));

        assert_eq!(basket.entries[0].count, 0);
        assert!(!basket.is_plausible());
    }

    #[test]
    fn test_missing_variables_default_to_zero() {
        let universe = vec![make_item("a", 10, 100), make_item("b", 20, 300)];
        let index = ItemIndex::from_items(&universe);
        let model = BasketModel::build(&universe, 300, 2);

        let basket = extract_basket(&model, &index, &solution_of(&[("x2", 1.0)]));
        assert_eq!(basket.entries.len(), 1);
        assert_eq!(basket.entries[0].item.id, "b");
    }
}
