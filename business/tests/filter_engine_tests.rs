//! Behaviour of the filter engine over small hand-written catalogs.

use catalog_business::{Catalog, FilterAction, FilterState, ProductId, UserFilter, UserId, filter_products};
use ustr::Ustr;

fn single_product_catalog() -> Catalog {
    Catalog::from_json(
        r#"[{ "id": 1, "name": "Max", "sex": "m" }]"#,
        r#"[{ "id": 1, "title": "Drinks", "icon": "🍺", "ownerId": 1 }]"#,
        r#"[{ "id": 1, "name": "Milk", "categoryId": 1 }]"#,
    )
    .expect("catalog should join")
}

fn two_owner_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            { "id": 1, "name": "Roma", "sex": "m" },
            { "id": 2, "name": "Anna", "sex": "f" },
            { "id": 3, "name": "Nobody", "sex": "f" }
        ]"#,
        r#"[
            { "id": 1, "title": "Drinks", "icon": "🍺", "ownerId": 1 },
            { "id": 2, "title": "Fruits", "icon": "🍏", "ownerId": 2 }
        ]"#,
        r#"[
            { "id": 10, "name": "Juice", "categoryId": 1 },
            { "id": 11, "name": "Apple", "categoryId": 2 },
            { "id": 12, "name": "Pineapple", "categoryId": 2 },
            { "id": 13, "name": "Apple cider", "categoryId": 1 }
        ]"#,
    )
    .expect("catalog should join")
}

fn ids(catalog: &Catalog, filter: &FilterState) -> Vec<u32> {
    filter_products(catalog.products(), filter)
        .iter()
        .map(|product| product.id.0)
        .collect()
}

mod search_tests {
    use super::*;

    #[test]
    fn test_search_matches_substring() {
        let catalog = single_product_catalog();
        let mut filter = FilterState::new();

        filter.set_search("mil");
        assert_eq!(ids(&catalog, &filter), vec![1]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let catalog = single_product_catalog();
        let mut filter = FilterState::new();

        filter.set_search("xyz");
        assert!(ids(&catalog, &filter).is_empty());
    }

    #[test]
    fn test_search_for_unique_substring_yields_singleton() {
        let catalog = two_owner_catalog();
        let mut filter = FilterState::new();

        filter.set_search("NEA");
        let visible = filter_products(catalog.products(), &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, ProductId(12));
    }

    #[test]
    fn test_empty_search_matches_all() {
        let catalog = two_owner_catalog();
        let mut filter = FilterState::new();

        filter.set_search("apple");
        filter.clear_search();
        assert_eq!(ids(&catalog, &filter), vec![10, 11, 12, 13]);
    }
}

mod owner_tests {
    use super::*;

    #[test]
    fn test_all_owners_by_default() {
        let catalog = two_owner_catalog();
        assert_eq!(ids(&catalog, &FilterState::default()), vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_owner_filter_keeps_source_order() {
        let catalog = two_owner_catalog();
        let mut filter = FilterState::new();

        filter.apply(FilterAction::SelectUser(UserFilter::User(UserId(1))));
        assert_eq!(ids(&catalog, &filter), vec![10, 13]);
    }

    #[test]
    fn test_owner_without_categories_yields_empty() {
        let catalog = two_owner_catalog();
        let mut filter = FilterState::new();

        filter.apply(FilterAction::SelectUser(UserFilter::User(UserId(3))));
        assert!(ids(&catalog, &filter).is_empty());
    }
}

mod category_tests {
    use super::*;

    #[test]
    fn test_selected_category_restricts_result() {
        let catalog = two_owner_catalog();
        let mut filter = FilterState::new();

        filter.apply(FilterAction::ToggleCategory(Ustr::from("Fruits")));
        assert_eq!(ids(&catalog, &filter), vec![11, 12]);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let catalog = two_owner_catalog();
        let mut filter = FilterState::new();
        filter.set_search("apple");
        let before = ids(&catalog, &filter);

        filter.apply(FilterAction::ToggleCategory(Ustr::from("Drinks")));
        assert_eq!(ids(&catalog, &filter), vec![13]);
        filter.apply(FilterAction::ToggleCategory(Ustr::from("Drinks")));

        assert_eq!(ids(&catalog, &filter), before);
    }

    #[test]
    fn test_all_predicates_combine() {
        let catalog = two_owner_catalog();
        let mut filter = FilterState::new();

        filter.apply(FilterAction::SetSearch("apple".to_owned()));
        filter.apply(FilterAction::SelectUser(UserFilter::User(UserId(2))));
        filter.apply(FilterAction::ToggleCategory(Ustr::from("Drinks")));
        assert!(ids(&catalog, &filter).is_empty());

        filter.apply(FilterAction::Reset);
        assert_eq!(ids(&catalog, &filter), vec![10, 11, 12, 13]);
    }
}
