use thiserror::Error;

/// Returned when a [`Nullable`](crate::Nullable) is read while it holds no value.
///
/// Carries the name of the contained type so the message points at the slot
/// that was accessed before construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value of type `{type_name}` was accessed before it was constructed")]
pub struct NullAccessError {
    type_name: &'static str,
}

impl NullAccessError {
    pub(crate) fn of<T>() -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Name of the type whose slot was empty.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
