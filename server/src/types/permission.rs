//! Definition for the [`PermissionState`] type, implemented by an enum.

/// Where the screen stands with regard to location permission.
///
/// `Denied` is terminal for a session: nothing moves the state out of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// No answer from the provider yet.
    #[default]
    Unknown,

    /// The user refused, or the location could not be obtained.
    /// Holds the message displayed in place of the map.
    Denied(String),

    /// The provider granted access.
    Granted,
}

impl PermissionState {
    /// The message to display, if the state is terminal.
    pub fn denial_message(&self) -> Option<&str> {
        match self {
            PermissionState::Denied(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, PermissionState::Denied(_))
    }
}
