//! Filter selections and the predicate that turns the catalog into the
//! visible product list.
//!
//! UI code never mutates [`FilterState`] field by field: widgets return a
//! [`FilterAction`] and the panel applies it through `StateCtx::update`, so
//! the visible list is recomputed exactly once per interaction.

use std::any::Any;
use std::collections::BTreeSet;

use catalog_states::State;
use log::debug;
use ustr::Ustr;

use crate::model::{EnrichedProduct, UserId};

/// Owner tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    User(UserId),
}

impl UserFilter {
    pub fn accepts(self, owner: UserId) -> bool {
        match self {
            Self::All => true,
            Self::User(id) => id == owner,
        }
    }
}

/// A single user interaction with the filters panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SelectUser(UserFilter),
    SetSearch(String),
    ClearSearch,
    ToggleCategory(Ustr),
    SelectAllCategories,
    Reset,
}

/// Current filter selections. The default value shows every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    user: UserFilter,
    // empty means every category
    categories: BTreeSet<Ustr>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn user(&self) -> UserFilter {
        self.user
    }

    pub fn selected_categories(&self) -> &BTreeSet<Ustr> {
        &self.categories
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn select_user(&mut self, user: UserFilter) {
        self.user = user;
    }

    /// Adds the title to the selection, or removes it when already selected.
    pub fn toggle_category(&mut self, title: Ustr) {
        if !self.categories.remove(&title) {
            self.categories.insert(title);
        }
    }

    pub fn select_all_categories(&mut self) {
        self.categories.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, action: FilterAction) {
        debug!("Applying filter action {action:?}");
        match action {
            FilterAction::SelectUser(user) => self.select_user(user),
            FilterAction::SetSearch(text) => self.set_search(text),
            FilterAction::ClearSearch => self.clear_search(),
            FilterAction::ToggleCategory(title) => self.toggle_category(title),
            FilterAction::SelectAllCategories => self.select_all_categories(),
            FilterAction::Reset => self.reset(),
        }
    }

    pub fn is_user_selected(&self, user: UserFilter) -> bool {
        self.user == user
    }

    pub fn is_category_selected(&self, title: &Ustr) -> bool {
        self.categories.contains(title)
    }

    pub fn all_categories_selected(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.user == UserFilter::All && self.categories.is_empty()
    }

    /// Whether `product` passes every active filter.
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.matches_query(product, &self.search.to_lowercase())
    }

    fn matches_query(&self, product: &EnrichedProduct, query: &str) -> bool {
        product.name.to_lowercase().contains(query)
            && self.user.accepts(product.user.id)
            && (self.categories.is_empty() || self.categories.contains(&product.category.title))
    }

    /// Positions in `products` of the matching entries, in source order.
    pub fn matching_indices(&self, products: &[EnrichedProduct]) -> Vec<usize> {
        let query = self.search.to_lowercase();
        products
            .iter()
            .enumerate()
            .filter(|(_, product)| self.matches_query(product, &query))
            .map(|(index, _)| index)
            .collect()
    }
}

impl State for FilterState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The ordered subsequence of `products` passing `filter`.
pub fn filter_products<'a>(
    products: &'a [EnrichedProduct],
    filter: &FilterState,
) -> Vec<&'a EnrichedProduct> {
    let query = filter.search.to_lowercase();
    products
        .iter()
        .filter(|product| filter.matches_query(product, &query))
        .collect()
}
