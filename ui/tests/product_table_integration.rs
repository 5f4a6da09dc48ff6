//! Integration tests for the filters panel and the product table.
//!
//! Buttons are clicked through the accessibility tree; the search text is
//! driven through the filter state directly.

use catalog_business::{UserFilter, UserId};
use catalog_ui::widgets::EMPTY_STATE_MESSAGE;
use kittest::Queryable;
use ustr::Ustr;

use crate::common::TestCtx;

mod common;

const ALL_PRODUCTS: [&str; 8] = [
    "Milk", "Bread", "Eggs", "Jacket", "Sugar", "Sausage", "Sweater", "Apple",
];

fn visible_products(ctx: &TestCtx<'_>) -> Vec<&'static str> {
    ALL_PRODUCTS
        .into_iter()
        .filter(|name| ctx.harness().query_by_label(name).is_some())
        .collect()
}

#[test]
fn test_heading_and_filters_displayed() {
    let ctx = TestCtx::new_app();
    let harness = ctx.harness();

    assert!(
        harness.query_by_label("Product Categories").is_some(),
        "Heading should be displayed"
    );
    assert!(
        harness.query_by_label("Reset all filters").is_some(),
        "Reset button should be displayed"
    );
    assert!(
        harness.query_by_label("John").is_some(),
        "Owner tab should be displayed"
    );
    assert!(
        harness.query_by_label("Electronics").is_some(),
        "Category button should be displayed"
    );
}

#[test]
fn test_default_filters_show_every_product() {
    let ctx = TestCtx::new_app();

    assert_eq!(visible_products(&ctx), ALL_PRODUCTS.to_vec());
    assert!(
        ctx.harness().query_by_label(EMPTY_STATE_MESSAGE).is_none(),
        "Empty state should be hidden while products match"
    );
    assert!(
        ctx.harness().query_by_label("🍺 - Drinks").is_some(),
        "Category column should show icon and title"
    );
}

#[test]
fn test_owner_without_products_shows_empty_state() {
    let mut ctx = TestCtx::new_app();

    ctx.harness_mut().get_by_label("John").click();
    ctx.settle();

    assert!(ctx.filter().is_user_selected(UserFilter::User(UserId(4))));
    assert!(
        ctx.harness().query_by_label(EMPTY_STATE_MESSAGE).is_some(),
        "Empty state should be shown for an owner without products"
    );
    assert!(visible_products(&ctx).is_empty());
}

#[test]
fn test_category_toggle_filters_and_restores() {
    let mut ctx = TestCtx::new_app();

    ctx.harness_mut().get_by_label("Drinks").click();
    ctx.settle();

    assert!(ctx.filter().is_category_selected(&Ustr::from("Drinks")));
    assert_eq!(visible_products(&ctx), vec!["Milk"]);

    ctx.harness_mut().get_by_label("Drinks").click();
    ctx.settle();

    assert!(ctx.filter().all_categories_selected());
    assert_eq!(visible_products(&ctx), ALL_PRODUCTS.to_vec());
}

#[test]
fn test_search_narrows_to_single_product() {
    let mut ctx = TestCtx::new_app();

    ctx.update_filter(|filter| filter.set_search("mil"));

    assert_eq!(visible_products(&ctx), vec!["Milk"]);
}

#[test]
fn test_clear_button_only_while_searching() {
    let mut ctx = TestCtx::new_app();
    assert!(
        ctx.harness().query_by_label("✖").is_none(),
        "Clear button should be hidden without search text"
    );

    ctx.update_filter(|filter| filter.set_search("xyz"));
    assert!(ctx.harness().query_by_label(EMPTY_STATE_MESSAGE).is_some());

    ctx.harness_mut().get_by_label("✖").click();
    ctx.settle();

    assert_eq!(ctx.filter().search(), "");
    assert_eq!(visible_products(&ctx), ALL_PRODUCTS.to_vec());
}

#[test]
fn test_reset_all_filters() {
    let mut ctx = TestCtx::new_app();

    ctx.update_filter(|filter| {
        filter.set_search("s");
        filter.select_user(UserFilter::User(UserId(3)));
        filter.toggle_category(Ustr::from("Clothes"));
    });
    assert_eq!(visible_products(&ctx), vec!["Sweater"]);

    ctx.harness_mut().get_by_label("Reset all filters").click();
    ctx.settle();

    assert!(ctx.filter().is_default());
    assert_eq!(visible_products(&ctx), ALL_PRODUCTS.to_vec());
}
