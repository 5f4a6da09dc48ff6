use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its concrete type.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
