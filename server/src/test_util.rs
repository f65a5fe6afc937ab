//! test utilities. Provides log macros for unit tests.

/// Writes a debug! message to the test logger
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "test", $($arg)+)
    };
}

/// Writes an info! message to the test logger
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "test", $($arg)+)
    };
}

#[allow(unused_imports)]
pub(crate) use {ut_debug, ut_info};
