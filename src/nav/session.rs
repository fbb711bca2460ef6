//! Per-user navigation state

/// Navigation state for a single user.
///
/// `history` holds previously visited node ids, most recent last, and only
/// ever records forward moves; a back-navigation pops without re-pushing.
/// Round-tripping forward-then-back therefore never grows the stack, and
/// always lands on the immediately preceding screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Absent only before the first interaction (or after entering a
    /// misconfigured flow).
    pub current: Option<String>,
    pub history: Vec<String>,
}
