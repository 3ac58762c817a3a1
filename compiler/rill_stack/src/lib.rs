//! Stack growth for the Rill tree walker.
//!
//! Suites nest inside `for` bodies and `if` branches, and function calls
//! re-enter the suite executor, so the native stack depth follows the depth
//! of the script. Every recursive entry point of the evaluator runs through
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! letting a deeply recursive script abort the host process.
//!
//! On `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn exec_suite(&mut self, suite: SuiteId) -> ExecResult {
///     ensure_sufficient_stack(|| self.exec_suite_inner(suite))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
