//! Pure navigation transition function

use super::event::{NavEvent, SelectTarget};
use super::session::Session;
use crate::flow::FlowGraph;

/// What the caller should render after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// A node that was present in the graph at transition time.
    Node(String),
    /// The fixed "branch unavailable" message.
    Unavailable,
}

/// Result of a navigation transition: the session to commit plus the
/// screen to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub session: Session,
    pub screen: Screen,
}

/// Pure transition function.
///
/// Total and I/O-free: given the same inputs it always produces the same
/// outputs, and every event resolves to a screen, broken links included.
/// The caller commits `session` before doing any delivery.
pub fn transition(graph: &FlowGraph, session: &Session, event: NavEvent) -> TransitionResult {
    match event {
        NavEvent::Enter => enter(graph),
        NavEvent::Select(SelectTarget::Back) => go_back(graph, session),
        NavEvent::Select(SelectTarget::Node(target)) => go_forward(graph, session, target),
        NavEvent::Resume => resume(graph, session),
    }
}

fn enter(graph: &FlowGraph) -> TransitionResult {
    let start = graph.start_node();
    if graph.get(start).is_some() {
        TransitionResult {
            session: Session {
                current: Some(start.to_string()),
                // The root screen is never pushed.
                history: Vec::new(),
            },
            screen: Screen::Node(start.to_string()),
        }
    } else {
        // Misconfigured flow: fresh session with no cursor.
        TransitionResult {
            session: Session::default(),
            screen: Screen::Unavailable,
        }
    }
}

fn go_back(graph: &FlowGraph, session: &Session) -> TransitionResult {
    let mut next = session.clone();
    let Some(popped) = next.history.pop() else {
        // Nothing to go back to; session stays untouched.
        return TransitionResult {
            session: session.clone(),
            screen: Screen::Unavailable,
        };
    };
    if graph.get(&popped).is_some() {
        // True backward move: the stack strictly shrinks, no re-push.
        next.current = Some(popped.clone());
        TransitionResult {
            session: next,
            screen: Screen::Node(popped),
        }
    } else {
        // Broken link behind us: the entry is consumed, the cursor stays
        // on the node the user was leaving.
        TransitionResult {
            session: next,
            screen: Screen::Unavailable,
        }
    }
}

fn go_forward(graph: &FlowGraph, session: &Session, target: String) -> TransitionResult {
    if graph.get(&target).is_none() {
        // No push, no pointer update.
        return TransitionResult {
            session: session.clone(),
            screen: Screen::Unavailable,
        };
    }
    let mut next = session.clone();
    if let Some(prev) = next.current.replace(target.clone()) {
        next.history.push(prev);
    }
    TransitionResult {
        session: next,
        screen: Screen::Node(target),
    }
}

fn resume(graph: &FlowGraph, session: &Session) -> TransitionResult {
    let id = session.current.as_deref().unwrap_or_else(|| graph.start_node());
    if graph.get(id).is_some() {
        let mut next = session.clone();
        // A no-op except when falling back to the start node.
        next.current = Some(id.to_string());
        TransitionResult {
            session: next,
            screen: Screen::Node(id.to_string()),
        }
    } else {
        TransitionResult {
            session: session.clone(),
            screen: Screen::Unavailable,
        }
    }
}
