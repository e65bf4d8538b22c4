//! Basket selection model builder.
//!
//! Translates a candidate item universe plus scalar constraints into an
//! integer program:
//!
//! - objective: minimize total flea purchase cost,
//! - value floor: total base value of chosen items must reach the minimum,
//! - count ceiling: total number of chosen items is capped,
//! - bounds: each count is an integer in `[0, ceiling]`.

use std::fmt::Write;

use crate::catalog::Item;

/// One decision variable of the basket model.
///
/// The variable carries the id of the item it stands for; all downstream
/// attribution goes through that id, never through the variable's position
/// in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVariable {
    /// Variable name in the LP file (`x1`, `x2`, ...).
    pub name: String,
    /// Id of the item this variable counts.
    pub item_id: String,
    /// Objective coefficient: flea purchase cost per unit.
    pub flea_price: u64,
    /// Value-floor coefficient: base value per unit.
    pub base_value: u64,
}

/// An integer-program description of one basket selection problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketModel {
    /// Decision variables, one per candidate item, in universe order.
    pub variables: Vec<ModelVariable>,
    /// Minimum required sum of base values across the basket.
    pub value_floor: u64,
    /// Maximum total number of items in the basket.
    pub count_ceiling: u32,
}

impl BasketModel {
    /// Build the model over a candidate universe.
    ///
    /// Candidates are expected to be pre-filtered (positive flea price and
    /// base value); an empty universe builds an empty model, which the
    /// solver will report as infeasible for any positive value floor.
    pub fn build(items: &[Item], value_floor: u64, count_ceiling: u32) -> Self {
        let variables = items
            .iter()
            .enumerate()
            .map(|(i, item)| ModelVariable {
                name: format!("x{}", i + 1),
                item_id: item.id.clone(),
                flea_price: item.flea_price.unwrap_or(0),
                base_value: item.base_price,
            })
            .collect();

        Self {
            variables,
            value_floor,
            count_ceiling,
        }
    }

    /// Render the model as CPLEX LP format text.
    pub fn to_cplex_lp(&self) -> String {
        let mut lp = String::new();

        // minimize the total purchase cost of the chosen items
        lp.push_str("Minimize\n obj: ");
        let objective = self
            .variables
            .iter()
            .map(|v| format!("{} {}", v.flea_price, v.name))
            .collect::<Vec<_>>()
            .join(" + ");
        lp.push_str(&objective);
        lp.push_str("\n\n");

        // total base value of the chosen items must reach the floor
        lp.push_str("Subject To\n value_floor: ");
        let floor = self
            .variables
            .iter()
            .map(|v| format!("{} {}", v.base_value, v.name))
            .collect::<Vec<_>>()
            .join(" + ");
        lp.push_str(&floor);
        let _ = writeln!(lp, " >= {}\n", self.value_floor);

        // cap the number of chosen items
        lp.push_str(" item_count: ");
        let count = self
            .variables
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ");
        lp.push_str(&count);
        let _ = writeln!(lp, " <= {}\n", self.count_ceiling);

        // no single item may exceed the overall count ceiling
        lp.push_str("Bounds\n");
        for v in &self.variables {
            let _ = writeln!(lp, " 0 <= {} <= {}", v.name, self.count_ceiling);
        }
        lp.push('\n');

        // counts are integers
        lp.push_str("General\n");
        for v in &self.variables {
            let _ = writeln!(lp, " {}", v.name);
        }
        lp.push_str("\nEnd\n");

        lp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

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

    #[test]
    fn test_build_assigns_identity_keyed_variables() {
        let items = vec![make_item("red", 10, 100), make_item("blue", 20, 300)];
        let model = BasketModel::build(&items, 300, 2);

        assert_eq!(model.variables.len(), 2);
        assert_eq!(model.variables[0].name, "x1");
        assert_eq!(model.variables[0].item_id, "red");
        assert_eq!(model.variables[1].name, "x2");
        assert_eq!(model.variables[1].item_id, "blue");
    }

    #[test]
    fn test_build_is_deterministic() {
        let items = vec![make_item("a", 10, 100), make_item("b", 20, 300)];
        let first = BasketModel::build(&items, 300, 2);
        let second = BasketModel::build(&items, 300, 2);

        assert_eq!(first, second);
        assert_eq!(first.to_cplex_lp(), second.to_cplex_lp());
    }

    #[test]
    fn test_lp_render() {
        let items = vec![make_item("a", 10, 100), make_item("b", 20, 300)];
        let model = BasketModel::build(&items, 300, 2);

        let expected = "\
Minimize
 obj: 10 x1 + 20 x2

Subject To
 value_floor: 100 x1 + 300 x2 >= 300

 item_count: x1 + x2 <= 2

Bounds
 0 <= x1 <= 2
 0 <= x2 <= 2

General
 x1
 x2

End
";
        assert_eq!(model.to_cplex_lp(), expected);
    }

    #[test]
    fn test_empty_universe_builds_empty_model() {
        let model = BasketModel::build(&[], 300, 2);
        assert!(model.variables.is_empty());
    }
}
