//! The scope-id generator for logic variables.
//!
//! A [variable](../term/struct.Variable.html) is identified by its name
//! *and* its scope. Variables written into knowledge-base clauses carry
//! no scope at all; every clause invocation stamps them with a fresh
//! scope id, so that a clause which is active at several depths of the
//! search never shares variables between invocations.
//!
//! Scope 0 is reserved for the query itself
//! (see [QUERY_SCOPE](../scope/constant.QUERY_SCOPE.html)).

use std::sync::atomic::{AtomicU64, Ordering};

/// The scope assigned to variables of a top-level query.
pub const QUERY_SCOPE: u64 = 0;

// Ids produced by next_scope_id() start at 1; 0 belongs to the query.
static SCOPE_ID: AtomicU64 = AtomicU64::new(0);

/// Allocates a fresh, nonzero scope id.
///
/// Ids are produced by a 64-bit counter and never repeat within a
/// process, which is more than enough to guarantee that two clause
/// invocations inside one query cannot collide.
///
/// # Return
/// * scope id
/// # Usage
/// ```
/// use entail::*;
///
/// let a = next_scope_id();
/// let b = next_scope_id();
/// assert_ne!(a, b);
/// ```
#[inline]
pub fn next_scope_id() -> u64 {
    SCOPE_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Resets the scope-id counter to zero.
///
/// Only useful in tests which assert on formatted scope ids.
/// Such tests must be serialized, because the counter is global.
pub fn reset_scope_ids() {
    SCOPE_ID.store(0, Ordering::SeqCst);
}

#[cfg(test)]
mod test {

    use serial_test::serial;
    use super::*;

    #[test]
    #[serial]
    fn test_next_scope_id() {
        reset_scope_ids();
        assert_eq!(1, next_scope_id());
        assert_eq!(2, next_scope_id());
        assert_ne!(QUERY_SCOPE, next_scope_id());
    }

} // test
