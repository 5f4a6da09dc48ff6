use std::any::TypeId;

use crate::{Dep, State, StateError};

/// `(states, computes)` a compute reads from.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A value derived from other states and computes.
///
/// The context calls [`Compute::compute`] whenever one of the declared
/// dependencies changed since the last run, and once after registration.
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps;

    fn compute(&mut self, deps: Dep<'_>) -> Result<(), StateError>;
}
