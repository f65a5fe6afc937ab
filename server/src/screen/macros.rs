//! log macro's for screen logging

/// Writes a debug! message to the app::screen logger
#[macro_export]
macro_rules! screen_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::screen", $($arg)+)
    };
}

/// Writes an info! message to the app::screen logger
#[macro_export]
macro_rules! screen_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::screen", $($arg)+)
    };
}

/// Writes an warn! message to the app::screen logger
#[macro_export]
macro_rules! screen_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::screen", $($arg)+)
    };
}

/// Writes an error! message to the app::screen logger
#[macro_export]
macro_rules! screen_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::screen", $($arg)+)
    };
}
