//! Containers for values whose construction and destruction happen under
//! explicit control.
//!
//! **Nullable**
//!
//! [`Nullable<T, D>`] owns zero or one `T` in an inline slot. It can be
//! created empty even when `T` has no sensible default, filled later through
//! [`Nullable::construct`], and reports [`NullAccessError`] when read while
//! empty. Every value that leaves the slot by replacement or by the container
//! being dropped is first handed to a [`Deleter`].
//!
//! **LazyConstructable**
//!
//! [`LazyConstructable<T, D>`] default-constructs its value on first access.
//!
//! **LazyConstructableWithInitializer**
//!
//! [`LazyConstructableWithInitializer<T, A, D, F>`] calls an initializer on
//! first access to obtain an argument list `A`, then builds `T` from it.
//!
//! None of the containers are meant for concurrent mutation; every mutating
//! operation takes `&mut self`.

mod error;
mod lazy;
mod nullable;
mod raw_cell;
mod traits;
mod utils;

#[cfg(test)]
mod tests;

pub use error::NullAccessError;
pub use lazy::{
    DefaultLazyConstructableWithInitializer, LazyConstructable, LazyConstructableWithInitializer,
};
pub use nullable::Nullable;
pub use traits::{DefaultDeleter, Deleter};
