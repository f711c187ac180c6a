pub const VOTED_COOKIE: &str = "voted";
pub const VOTED_VALUE: &str = "true";
pub const VOTED_MAX_AGE_DAYS: i64 = 365;

/// Whether a browser has already voted, as told by its `voted` cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoterState {
    Unvoted,
    Voted,
}

impl VoterState {
    /// Only the exact sentinel counts as a cast vote; any other value is ignored.
    pub fn from_marker(value: Option<&str>) -> Self {
        match value {
            Some(VOTED_VALUE) => VoterState::Voted,
            _ => VoterState::Unvoted,
        }
    }

    pub fn has_voted(self) -> bool {
        self == VoterState::Voted
    }
}
