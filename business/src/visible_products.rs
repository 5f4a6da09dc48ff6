use std::any::{Any, TypeId};

use catalog_states::{Compute, ComputeDeps, Dep, State, StateError};
use log::debug;

use crate::model::EnrichedProduct;
use crate::{Catalog, FilterState};

/// Products currently shown in the table, recomputed whenever the
/// [`FilterState`] or the [`Catalog`] changes.
#[derive(Debug, Default)]
pub struct VisibleProducts {
    indices: Vec<usize>,
}

impl VisibleProducts {
    /// Resolves the visible entries against the catalog they were computed from.
    pub fn products<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = &'a EnrichedProduct> + 'a {
        self.indices
            .iter()
            .filter_map(|index| catalog.products().get(*index))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// The empty-state condition.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl State for VisibleProducts {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for VisibleProducts {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<Catalog>(), TypeId::of::<FilterState>()],
            vec![],
        )
    }

    fn compute(&mut self, deps: Dep<'_>) -> Result<(), StateError> {
        let catalog = deps.state::<Catalog>()?;
        let filter = deps.state::<FilterState>()?;

        self.indices = filter.matching_indices(catalog.products());
        debug!(
            "Visible products: {} of {}",
            self.indices.len(),
            catalog.products().len()
        );
        Ok(())
    }
}
