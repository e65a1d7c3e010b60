//! Error handling for the fetch boundary.
//!
//! Every failure is caught where the view awaits its data source and turned
//! into user-facing text; nothing propagates past the component and nothing
//! is fatal to the host.

/// What went wrong while fetching stickers.
///
/// A response body that fails to decode as the record envelope is reported as
/// [`FetchError::Transport`]; the view does not distinguish the two cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a usable response: connection refused,
    /// abort, name resolution failure, or an undecodable body. Carries
    /// detail when the transport offered any.
    Transport(Option<String>),
    /// The service answered with a non-success HTTP status.
    Status(u16),
}

impl FetchError {
    /// The message surfaced to the user, always prefixed the same way so the
    /// error banner stays recognizable regardless of cause.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport(None) => "Error fetching stickers".to_string(),
            FetchError::Transport(Some(detail)) => format!("Error fetching stickers: {}", detail),
            FetchError::Status(status) => format!("Error fetching stickers: {}", status),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(Some(err.to_string()))
    }
}
