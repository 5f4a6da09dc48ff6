use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use log::{debug, error, trace};

use crate::{Compute, Dep, Graph, State, StateError, StateSyncStatus, TopologyError};

pub(crate) struct ComputeSlot {
    pub(crate) name: &'static str,
    pub(crate) compute: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

/// Owns every registered state and compute of the application.
///
/// States are plain values changed through [`StateCtx::update`]. Computes
/// declare what they read; changing a state marks every compute that
/// (transitively) reads it as dirty, and [`StateCtx::sync_computes`] reruns
/// the dirty ones in dependency order.
#[derive(Default)]
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, ComputeSlot>,

    graph: Graph<TypeId>,
    // topological order of the computes, rebuilt after registration
    order: Option<Vec<TypeId>>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let computes: Vec<(&str, StateSyncStatus)> = self
            .computes
            .values()
            .map(|slot| (slot.name, slot.status))
            .collect();
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &computes)
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        if self.states.insert(id, Box::new(state)).is_some() {
            debug!("Replaced state {}", type_name::<T>());
            self.mark_dependents_dirty(id);
        }
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (states, computes) = compute.deps();
        for dep in states.into_iter().chain(computes) {
            self.graph.route_to(dep, id, ());
        }

        self.computes.insert(
            id,
            ComputeSlot {
                name: type_name::<T>(),
                compute: Box::new(compute),
                status: StateSyncStatus::BeforeInit,
            },
        );
        self.order = None;
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| StateError::state_not_found::<T>("StateCtx::state"))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access to a state; every compute reading it becomes dirty.
    ///
    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_dependents_dirty(id);
        self.states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", StateError::state_not_found::<T>("StateCtx::state_mut")))
    }

    /// Mutates a state in place and marks its dependents dirty.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Last computed value of `T`, if it is registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
    }

    pub fn is_dirty<T: Compute>(&self) -> bool {
        self.computes
            .get(&TypeId::of::<T>())
            .is_some_and(|slot| slot.status.needs_compute())
    }

    /// Checks the dependency graph and caches the compute order.
    pub fn verify_deps(&mut self) -> Result<(), TopologyError<TypeId>> {
        let sorted = self.graph.topology_sort()?;
        let mut order: Vec<TypeId> = sorted
            .into_iter()
            .filter(|id| self.computes.contains_key(id))
            .collect();
        // computes without any dependency never show up on a route
        for id in self.computes.keys() {
            if !order.contains(id) {
                order.push(*id);
            }
        }
        self.order = Some(order);
        Ok(())
    }

    /// Reruns every dirty compute, dependencies first.
    pub fn sync_computes(&mut self) {
        if self.order.is_none()
            && let Err(err) = self.verify_deps()
        {
            error!("Compute dependencies are invalid: {err}");
            return;
        }
        let order = self.order.clone().unwrap_or_default();

        for id in order {
            let needs_compute = self
                .computes
                .get(&id)
                .is_some_and(|slot| slot.status.needs_compute());
            if !needs_compute {
                continue;
            }
            let Some(mut slot) = self.computes.remove(&id) else {
                continue;
            };

            trace!("Computing {}", slot.name);
            let result = slot
                .compute
                .compute(Dep::new(&self.states, &self.computes));
            if let Err(err) = result {
                error!("Compute {} failed: {err}", slot.name);
            }
            slot.status = StateSyncStatus::Clean;
            self.computes.insert(id, slot);
        }
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        let dependents: Vec<TypeId> = self.graph.connected(id).copied().collect();
        for dependent in dependents {
            if let Some(slot) = self.computes.get_mut(&dependent) {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }
}
