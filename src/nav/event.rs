//! Events that drive the navigation state machine

/// Where a selected option points.
///
/// `Back` is an explicit variant rather than a reserved node id, so a real
/// node named like the sentinel can never hijack back-navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectTarget {
    /// One step back through the history stack.
    Back,
    /// Forward to a named node.
    Node(String),
}

/// An inbound user action, already stripped of transport detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Conversation start or restart; resets the session.
    Enter,
    /// The user pressed an option button.
    Select(SelectTarget),
    /// Free text unrelated to any option; re-display the current screen.
    Resume,
}
