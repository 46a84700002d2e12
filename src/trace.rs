//! Tracing shims that compile away without the `tracing` feature.
//!
//! `trace_scope!` opens an info-level span and returns its entered guard in
//! one step, so call sites bind a single `let _span = ...;` with no
//! conditional compilation. `trace_event!` records an info-level event with
//! named counters. Both expand to nothing when the feature is off.

#[cfg(feature = "tracing")]
macro_rules! trace_scope {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?).entered()
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_scope {
    ($name:expr $(, $($field:tt)*)?) => {
        ()
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {{
        // Evaluate the counters so disabled builds see the same side effects.
        let _ = ($($value),+);
    }};
}

pub(crate) use trace_event;
pub(crate) use trace_scope;
