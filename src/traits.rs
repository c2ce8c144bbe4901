/// # Deleter
///
/// A policy object invoked on a contained value right before its slot is
/// reused or its container is torn down.
///
/// The value is handed over by ownership: once `delete` is called the
/// container no longer tracks it, and whatever the deleter does with it
/// (dropping, recycling, deliberately leaking) is final.
///
/// Deleters are stored by value inside the container. A stateless deleter is
/// a zero-sized type and adds nothing to the container's size.
///
/// Any `FnMut(T)` closure or function pointer is a deleter.
pub trait Deleter<T> {
    /// Takes over a value that is leaving its container.
    fn delete(&mut self, value: T);
}

/// The deleter used when none is specified: drops the value and does nothing else.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultDeleter;

impl<T> Deleter<T> for DefaultDeleter {
    #[inline]
    fn delete(&mut self, value: T) {
        drop(value);
    }
}

impl<T, F> Deleter<T> for F
where
    F: FnMut(T),
{
    #[inline]
    fn delete(&mut self, value: T) {
        (*self)(value)
    }
}
