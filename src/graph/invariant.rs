//! Debug-only structural assertion helpers.
//!
//! Graph and tree mutators call these after every change; release builds
//! compile them away.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Structural invariant violated: {}", message);
}
