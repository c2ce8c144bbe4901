use std::fmt;
use std::mem::ManuallyDrop;
use std::ptr;

use crate::error::NullAccessError;
use crate::raw_cell::RawCell;
use crate::traits::{DefaultDeleter, Deleter};
use crate::utils::{trace, type_name};

/// Nullable: a slot that owns zero or one `T`, constructed and destroyed on demand.
///
/// The slot lives inline (no allocation) and `T` needs no default value: the
/// container starts empty and is filled through [`construct`](Self::construct)
/// or one of its variants. Whenever a held value is replaced or the container
/// is dropped, the value is first handed to the deleter `D`.
///
/// # Examples
///
/// ```
/// use value_cell::Nullable;
///
/// let mut slot: Nullable<String> = Nullable::new();
/// assert!(slot.get().is_err());
///
/// slot.construct(String::from("ready"));
/// assert_eq!(slot.get().unwrap(), "ready");
/// ```
pub struct Nullable<T, D: Deleter<T> = DefaultDeleter> {
    has_value: bool,
    storage: RawCell<T>,
    deleter: D,
}

impl<T, D: Deleter<T> + Default> Nullable<T, D> {
    /// Create an empty Nullable with a default deleter.
    pub fn new() -> Self {
        Self::with_deleter(D::default())
    }
}

impl<T, D: Deleter<T>> Nullable<T, D> {
    /// Create an empty Nullable that will hand its values to `deleter`.
    pub const fn with_deleter(deleter: D) -> Self {
        Self {
            has_value: false,
            storage: RawCell::uninit(),
            deleter,
        }
    }

    /// Store `value`, first handing any current value to the deleter.
    pub fn construct(&mut self, value: T) -> &mut T {
        self.construct_with(|| value)
    }

    /// Build a value with `init` and store it.
    ///
    /// The current value, if any, is handed to the deleter before `init` runs.
    /// If `init` panics the Nullable is left empty.
    pub fn construct_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.destroy();
        let value = init();
        self.emplace(value)
    }

    /// Store a `T` built from an argument list, e.g. a tuple of constructor arguments.
    pub fn construct_from<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.construct_with(|| T::from(args))
    }

    /// Return the held value, constructing it with `init` first if the Nullable is empty.
    pub fn get_or_construct_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.has_value {
            return self.emplace(init());
        }
        // SAFETY: We have checked that the slot is occupied.
        unsafe { self.storage.assume_mut() }
    }

    /// Like [`get_or_construct_with`](Self::get_or_construct_with), for a fallible `init`.
    ///
    /// An error from `init` is returned unchanged and the Nullable stays empty.
    pub fn get_or_try_construct_with<E, F>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if !self.has_value {
            return match init() {
                Ok(value) => Ok(self.emplace(value)),
                Err(e) => {
                    trace!("initializer for {} failed, slot stays empty", type_name::<T>());
                    Err(e)
                }
            };
        }
        // SAFETY: We have checked that the slot is occupied.
        Ok(unsafe { self.storage.assume_mut() })
    }

    /// Check if the Nullable holds a value.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// Get a reference to the held value.
    /// Returns an error if nothing has been constructed.
    pub fn get(&self) -> Result<&T, NullAccessError> {
        if !self.has_value {
            return Err(NullAccessError::of::<T>());
        }
        // SAFETY: We have checked that the slot is occupied.
        Ok(unsafe { self.storage.assume_ref() })
    }

    /// Get a mutable reference to the held value.
    /// Returns an error if nothing has been constructed.
    pub fn get_mut(&mut self) -> Result<&mut T, NullAccessError> {
        if !self.has_value {
            return Err(NullAccessError::of::<T>());
        }
        // SAFETY: We have checked that the slot is occupied.
        Ok(unsafe { self.storage.assume_mut() })
    }

    /// Get a reference to the held value without checking that there is one.
    ///
    /// # Safety
    ///
    /// The Nullable must hold a value, see [`has_value`](Self::has_value).
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.has_value, "get_unchecked on an empty Nullable");
        // SAFETY: Upheld by the caller.
        unsafe { self.storage.assume_ref() }
    }

    /// Get a mutable reference to the held value without checking that there is one.
    ///
    /// # Safety
    ///
    /// The Nullable must hold a value, see [`has_value`](Self::has_value).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value, "get_unchecked_mut on an empty Nullable");
        // SAFETY: Upheld by the caller.
        unsafe { self.storage.assume_mut() }
    }

    pub fn deleter(&self) -> &D {
        &self.deleter
    }

    pub fn deleter_mut(&mut self) -> &mut D {
        &mut self.deleter
    }

    /// Take the held value out of the Nullable.
    ///
    /// The value changes owner rather than being destroyed, so the deleter is
    /// not invoked.
    pub fn into_inner(self) -> Option<T> {
        let mut this = ManuallyDrop::new(self);
        let value = if this.has_value {
            this.has_value = false;
            // SAFETY: The slot was occupied and the flag is cleared.
            Some(unsafe { this.storage.read() })
        } else {
            None
        };
        // SAFETY: `this` is not touched again, so the deleter is dropped exactly once.
        unsafe { ptr::drop_in_place(&mut this.deleter) };
        value
    }

    /// Write into a vacant slot.
    fn emplace(&mut self, value: T) -> &mut T {
        debug_assert!(!self.has_value);
        trace!("constructed {}", type_name::<T>());
        self.has_value = true;
        // SAFETY: Callers only emplace into a vacant slot.
        unsafe { self.storage.write(value) }
    }

    /// Hand the held value, if any, to the deleter. The slot is vacant afterward.
    fn destroy(&mut self) {
        if !self.has_value {
            return;
        }
        // Cleared first so a panicking deleter cannot cause a second deletion.
        self.has_value = false;
        // SAFETY: The slot was occupied.
        let value = unsafe { self.storage.read() };
        trace!("handing {} to its deleter", type_name::<T>());
        self.deleter.delete(value);
    }
}

impl<T, D: Deleter<T>> Drop for Nullable<T, D> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T, D: Deleter<T> + Default> Default for Nullable<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D: Deleter<T> + Default> From<T> for Nullable<T, D> {
    fn from(value: T) -> Self {
        let mut nullable = Self::new();
        nullable.construct(value);
        nullable
    }
}

impl<T, D: Deleter<T>> From<&Nullable<T, D>> for bool {
    fn from(nullable: &Nullable<T, D>) -> bool {
        nullable.has_value()
    }
}

impl<T: Clone, D: Deleter<T> + Clone> Clone for Nullable<T, D> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_deleter(self.deleter.clone());
        if let Ok(value) = self.get() {
            cloned.construct(value.clone());
        }
        cloned
    }

    /// Hands the current value to the current deleter before copying `source` in.
    fn clone_from(&mut self, source: &Self) {
        self.destroy();
        self.deleter.clone_from(&source.deleter);
        if let Ok(value) = source.get() {
            self.emplace(value.clone());
        }
    }
}

impl<T: fmt::Debug, D: Deleter<T>> fmt::Debug for Nullable<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Ok(value) => f.debug_tuple("Nullable").field(value).finish(),
            Err(_) => f.write_str("Nullable(<empty>)"),
        }
    }
}

impl<T: PartialEq, D: Deleter<T>> PartialEq for Nullable<T, D> {
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq, D: Deleter<T>> Eq for Nullable<T, D> {}
