//! log macro's for scene logging

/// Writes a debug! message to the app::scene logger
#[macro_export]
macro_rules! scene_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::scene", $($arg)+)
    };
}

/// Writes an info! message to the app::scene logger
#[macro_export]
macro_rules! scene_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::scene", $($arg)+)
    };
}

/// Writes an warn! message to the app::scene logger
#[macro_export]
macro_rules! scene_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::scene", $($arg)+)
    };
}

/// Writes an error! message to the app::scene logger
#[macro_export]
macro_rules! scene_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::scene", $($arg)+)
    };
}
