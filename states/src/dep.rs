use std::{any::TypeId, collections::BTreeMap};

use crate::{Compute, State, StateError, ctx::ComputeSlot};

/// Read-only view of the context handed to [`Compute::compute`].
///
/// The compute being run is taken out of the context for the duration of the
/// call, so it never shows up in its own `Dep`.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, ComputeSlot>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, ComputeSlot>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn state<T: State>(&self) -> Result<&'a T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| StateError::state_not_found::<T>("compute dependency"))
    }

    pub fn compute<T: Compute>(&self) -> Result<&'a T, StateError> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
            .ok_or_else(|| StateError::compute_not_found::<T>("compute dependency"))
    }
}
