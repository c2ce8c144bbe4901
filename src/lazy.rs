use std::fmt;
use std::marker::PhantomData;

use crate::nullable::Nullable;
use crate::traits::{DefaultDeleter, Deleter};
use crate::utils::{trace, type_name};

/// LazyConstructable: a slot whose value is default-constructed on first use.
///
/// The storage is reserved up front; `T::default()` runs on the first call to
/// [`get`](Self::get) and the same instance is returned from then on.
pub struct LazyConstructable<T, D: Deleter<T> = DefaultDeleter> {
    content: Nullable<T, D>,
}

impl<T, D: Deleter<T> + Default> LazyConstructable<T, D> {
    pub fn new() -> Self {
        Self::with_deleter(D::default())
    }
}

impl<T, D: Deleter<T>> LazyConstructable<T, D> {
    pub const fn with_deleter(deleter: D) -> Self {
        Self {
            content: Nullable::with_deleter(deleter),
        }
    }

    /// Get the value, default-constructing it on the first call.
    pub fn get(&mut self) -> &mut T
    where
        T: Default,
    {
        self.content.get_or_construct_with(|| {
            trace!("first access, default-constructing {}", type_name::<T>());
            T::default()
        })
    }

    /// Check if the value has been constructed yet.
    pub fn is_constructed(&self) -> bool {
        self.content.has_value()
    }

    /// Take the value out, if it was ever constructed.
    pub fn into_inner(self) -> Option<T> {
        self.content.into_inner()
    }
}

impl<T, D: Deleter<T> + Default> Default for LazyConstructable<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, D: Deleter<T>> fmt::Debug for LazyConstructable<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyConstructable")
            .field("content", &self.content)
            .finish()
    }
}

/// LazyConstructableWithInitializer: a slot built on first use from an argument list.
///
/// On the first call to [`get`](Self::get) the initializer is invoked to
/// produce the arguments `A` (typically a tuple), and `T` is built from them
/// through `T: From<A>`. Every later call returns the same instance without
/// touching the initializer again.
///
/// The initializer may be stateful. If it fails (panics, or returns `Err` when
/// used through [`try_get`](Self::try_get)) the slot stays empty and the next
/// access retries.
///
/// # Examples
///
/// ```
/// use value_cell::DefaultLazyConstructableWithInitializer;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl From<(i32, i32)> for Point {
///     fn from((x, y): (i32, i32)) -> Self {
///         Point { x, y }
///     }
/// }
///
/// let mut point = DefaultLazyConstructableWithInitializer::<Point, (i32, i32), _>::new(|| (3, 4));
///
/// let p = point.get();
/// assert_eq!((p.x, p.y), (3, 4));
/// ```
pub struct LazyConstructableWithInitializer<T, A, D = DefaultDeleter, F = fn() -> A>
where
    D: Deleter<T>,
{
    content: Nullable<T, D>,
    init: F,
    _args: PhantomData<fn() -> A>,
}

/// [`LazyConstructableWithInitializer`] using the [`DefaultDeleter`].
pub type DefaultLazyConstructableWithInitializer<T, A, F = fn() -> A> =
    LazyConstructableWithInitializer<T, A, DefaultDeleter, F>;

impl<T, A, D, F> LazyConstructableWithInitializer<T, A, D, F>
where
    D: Deleter<T> + Default,
{
    /// Create an empty slot that will be built from the output of `init`.
    pub fn new(init: F) -> Self {
        Self::with_deleter(init, D::default())
    }
}

impl<T, A, D, F> LazyConstructableWithInitializer<T, A, D, F>
where
    D: Deleter<T>,
{
    pub const fn with_deleter(init: F, deleter: D) -> Self {
        Self {
            content: Nullable::with_deleter(deleter),
            init,
            _args: PhantomData,
        }
    }

    /// Check if the value has been constructed yet.
    pub fn is_constructed(&self) -> bool {
        self.content.has_value()
    }

    /// Take the value out, if it was ever constructed.
    pub fn into_inner(self) -> Option<T> {
        self.content.into_inner()
    }
}

impl<T, A, D, F> LazyConstructableWithInitializer<T, A, D, F>
where
    D: Deleter<T>,
    F: FnMut() -> A,
    T: From<A>,
{
    /// Get the value, building it from the initializer's arguments on the first call.
    pub fn get(&mut self) -> &mut T {
        let init = &mut self.init;
        self.content.get_or_construct_with(|| {
            trace!("first access, initializing {}", type_name::<T>());
            T::from(init())
        })
    }
}

impl<T, Args, E, D, F> LazyConstructableWithInitializer<T, Result<Args, E>, D, F>
where
    D: Deleter<T>,
    F: FnMut() -> Result<Args, E>,
    T: From<Args>,
{
    /// Get the value, building it on the first call from an initializer that may fail.
    ///
    /// An initializer error is returned unchanged; the slot stays empty and
    /// the next call invokes the initializer again.
    pub fn try_get(&mut self) -> Result<&mut T, E> {
        let init = &mut self.init;
        self.content.get_or_try_construct_with(|| {
            trace!("first access, initializing {}", type_name::<T>());
            init().map(T::from)
        })
    }
}

impl<T, A, D, F> fmt::Debug for LazyConstructableWithInitializer<T, A, D, F>
where
    T: fmt::Debug,
    D: Deleter<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyConstructableWithInitializer")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}
