//! Internal logging macro.
//!
//! `trace_event!(level, ...)` forwards to the matching `tracing` macro when the
//! `tracing` feature is enabled and expands to nothing otherwise, so call sites
//! never need their own `#[cfg]`.
//!
//! ```ignore
//! trace_event!(debug, vertices = n, "clique search started");
//! ```

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use trace_event;
