// Miscellaneous utilities shared by the containers.

/// Trace-level logging that compiles away when the `log` feature is off.
#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::log::trace!($($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}
pub(crate) use trace;

/// Type name for log lines.
pub(crate) fn type_name<T: ?Sized>() -> &'static str {
    core::any::type_name::<T>()
}
