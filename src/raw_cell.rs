use std::mem::MaybeUninit;

/// RawCell is the storage slot behind every container in this crate: a region
/// with exactly the size and alignment of `T`, living inline in its owner.
///
/// RawCell is, by nature, unsafe; it does not know whether it currently holds
/// a value. The owner keeps that flag and upholds the contract of each method.
///
/// # PERFORMANCE
/// - MaybeUninit: zero-cost uninitialized memory; no heap allocation, no tag.
#[repr(transparent)]
pub(crate) struct RawCell<T> {
    value: MaybeUninit<T>,
}

impl<T> RawCell<T> {
    /// Create a vacant RawCell.
    pub(crate) const fn uninit() -> Self {
        Self {
            value: MaybeUninit::uninit(),
        }
    }

    /// Move `value` into the cell and return a reference to it.
    /// SAFETY: The cell must be vacant, otherwise the previous value is leaked.
    #[inline]
    pub(crate) unsafe fn write(&mut self, value: T) -> &mut T {
        self.value.write(value)
    }

    /// SAFETY: The cell must hold a live value.
    #[inline]
    pub(crate) unsafe fn assume_ref(&self) -> &T {
        // SAFETY: Upheld by the caller.
        unsafe { self.value.assume_init_ref() }
    }

    /// SAFETY: The cell must hold a live value.
    #[inline]
    pub(crate) unsafe fn assume_mut(&mut self) -> &mut T {
        // SAFETY: Upheld by the caller.
        unsafe { self.value.assume_init_mut() }
    }

    /// Move the value out, leaving the cell vacant.
    /// SAFETY: The cell must hold a live value, and the caller must treat the
    /// cell as vacant afterward.
    #[inline]
    pub(crate) unsafe fn read(&mut self) -> T {
        // SAFETY: Upheld by the caller.
        unsafe { self.value.assume_init_read() }
    }
}
