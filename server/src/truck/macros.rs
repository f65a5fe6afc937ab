//! log macro's for truck logging

/// Writes a debug! message to the app::truck logger
#[macro_export]
macro_rules! truck_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::truck", $($arg)+)
    };
}

/// Writes an info! message to the app::truck logger
#[macro_export]
macro_rules! truck_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::truck", $($arg)+)
    };
}

/// Writes an warn! message to the app::truck logger
#[macro_export]
macro_rules! truck_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::truck", $($arg)+)
    };
}

/// Writes an error! message to the app::truck logger
#[macro_export]
macro_rules! truck_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::truck", $($arg)+)
    };
}
