//! Stack growth for descriptor recursion.
//!
//! Descriptor trees may nest arbitrarily deep, and both `conforms` and
//! `describe` recurse once per level. Every recursive step goes through
//! [`ensure_sufficient_stack`], which extends the native stack on demand.
//! WASM manages its own stack, so there it is a plain call.

/// Remaining stack below which a new segment is allocated (64KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
