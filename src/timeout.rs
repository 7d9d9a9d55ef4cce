//! The query watchdog: a timer which stops a runaway search.
//!
//! Arming the watchdog starts a one-shot timer on a helper thread.
//! When it fires, it trips a global stop flag which the resolver
//! checks at every clause boundary
//! (see [count_clauses()](../knowledge_base/fn.count_clauses.html));
//! the search then backs out with no further solutions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thread_timer::ThreadTimer;

static STOP_QUERY: AtomicBool = AtomicBool::new(false);

/// Arms the watchdog with a timeout in milliseconds.
///
/// # Arguments
/// * `milliseconds`
/// # Return
/// * `timer` - ThreadTimer
/// # Usage
/// ```
/// use entail::*;
///
/// let timer = start_query_timer(300);
/// cancel_timer(timer);
/// ```
pub fn start_query_timer(milliseconds: u64) -> ThreadTimer {
    STOP_QUERY.store(false, Ordering::SeqCst);
    let timer = ThreadTimer::new();
    timer.start(Duration::from_millis(milliseconds),
                move || { stop_query(); }).unwrap();
    timer
} // start_query_timer()

/// Cancels the watchdog timer. Ignores any issues.
///
/// # Argument
/// * `timer` - ThreadTimer
pub fn cancel_timer(timer: ThreadTimer) {
    match timer.cancel() {
        Ok(_) => {},
        Err(_) => {},
    }
} // cancel_timer()

/// Clears the stop flag. Called at the start of every query.
pub fn begin_query() {
    STOP_QUERY.store(false, Ordering::SeqCst);
}

/// Trips the stop flag, which ends the search for solutions.
pub fn stop_query() {
    STOP_QUERY.store(true, Ordering::SeqCst);
}

/// Reads the stop flag. True means the query timed out (or was
/// stopped by the host).
pub fn query_stopped() -> bool {
    STOP_QUERY.load(Ordering::SeqCst)
}

#[cfg(test)]
mod test {

    use super::*;
    use std::thread;
    use std::time::Duration;
    use serial_test::serial;

    // The function sleeps for 40 milliseconds, but the
    // timer times out after 30 milliseconds.
    #[test]
    #[serial]
    fn test_query_timer() {
        let timer = start_query_timer(30);
        assert_eq!(false, query_stopped(), "Stop flag should be clear.");
        let delay = Duration::from_millis(40);
        thread::sleep(delay);
        cancel_timer(timer);
        assert_eq!(true, query_stopped(), "Stop flag should be set.");
        begin_query();
    } // test_query_timer()

} // test
