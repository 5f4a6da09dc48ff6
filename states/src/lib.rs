//! Synchronous state context: plain states, derived computes and the
//! dependency graph that decides which computes rerun after a change.

mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod state;
mod state_sync_status;

pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::StateError;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::State;
pub use state_sync_status::StateSyncStatus;
