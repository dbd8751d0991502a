//! Stack growth guard for deep recursion.
//!
//! The parser descends once per nested expression and the evaluator once per
//! nested node or function call, so inputs like `((((...))))` or a recursive
//! APL function can exhaust the native stack long before the interpreter's own
//! call-depth limit triggers. Wrapping those entry points in
//! [`ensure_sufficient_stack`] moves the work onto a freshly allocated
//! segment when the remaining stack runs low.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
