//! Pre-filter narrowing the raw catalog to solver candidates.

use crate::config::FilterConfig;

use super::Item;

/// Filter the catalog down to items the solver may consider.
///
/// Keeps items that:
/// - have a positive base price and a positive flea price,
/// - fall inside the configured base price band,
/// - are worth more than they cost (base price strictly above flea price),
/// - carry none of the excluded categories,
/// - are not posters or advertisements (decorative items with inflated
///   base prices that cannot be turned in).
///
/// The result upholds the invariant the model builder relies on: every
/// candidate has a positive flea price and a positive base value.
pub fn filter_for_solver(items: &[Item], config: &FilterConfig) -> Vec<Item> {
    let max_base_price = config.max_base_price.unwrap_or(u64::MAX);

    items
        .iter()
        .filter(|item| {
            let flea_price = item.flea_price.unwrap_or(0);
            item.base_price > 0
                && flea_price > 0
                && item.base_price >= config.min_base_price
                && item.base_price <= max_base_price
                && item.base_price > flea_price
                && !item
                    .categories
                    .iter()
                    .any(|c| config.excluded_categories.contains(c))
                && !item.normalized_name.contains("-poster")
                && !item.normalized_name.contains("-advertisement")
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCategory;

    fn make_item(id: &str, base_price: u64, flea_price: Option<u64>) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            normalized_name: id.to_string(),
            icon_link: None,
            categories: vec![ItemCategory::Barter],
            base_price,
            flea_price,
        }
    }

    fn default_config() -> FilterConfig {
        FilterConfig {
            min_base_price: 30_000,
            max_base_price: None,
            excluded_categories: vec![
                ItemCategory::Preset,
                ItemCategory::Armor,
                ItemCategory::Rig,
            ],
        }
    }

    #[test]
    fn test_keeps_profitable_priced_items() {
        let items = vec![make_item("a", 50_000, Some(20_000))];
        let kept = filter_for_solver(&items, &default_config());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_drops_unpriced_items() {
        let items = vec![
            make_item("a", 50_000, None),
            make_item("b", 50_000, Some(0)),
        ];
        assert!(filter_for_solver(&items, &default_config()).is_empty());
    }

    #[test]
    fn test_drops_items_below_min_base_price() {
        let items = vec![make_item("a", 10_000, Some(2_000))];
        assert!(filter_for_solver(&items, &default_config()).is_empty());
    }

    #[test]
    fn test_drops_items_above_max_base_price() {
        let mut config = default_config();
        config.max_base_price = Some(100_000);
        let items = vec![
            make_item("a", 90_000, Some(40_000)),
            make_item("b", 150_000, Some(40_000)),
        ];
        let kept = filter_for_solver(&items, &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }

    #[test]
    fn test_drops_unprofitable_items() {
        // Flea price at or above base price means no value gain
        let items = vec![
            make_item("a", 50_000, Some(50_000)),
            make_item("b", 50_000, Some(60_000)),
        ];
        assert!(filter_for_solver(&items, &default_config()).is_empty());
    }

    #[test]
    fn test_drops_excluded_categories() {
        let mut armor = make_item("a", 50_000, Some(20_000));
        armor.categories = vec![ItemCategory::Armor, ItemCategory::Wearable];
        assert!(filter_for_solver(&[armor], &default_config()).is_empty());
    }

    #[test]
    fn test_drops_posters_and_advertisements() {
        let mut poster = make_item("a", 50_000, Some(20_000));
        poster.normalized_name = "battered-antique-poster".to_string();
        let mut ad = make_item("b", 50_000, Some(20_000));
        ad.normalized_name = "soda-advertisement".to_string();
        assert!(filter_for_solver(&[poster, ad], &default_config()).is_empty());
    }
}
