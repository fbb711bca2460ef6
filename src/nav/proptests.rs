//! Property-based tests for the navigation state machine
//!
//! These verify the invariants that keep a user from ever reaching an
//! unrecoverable state, across arbitrary forward walks.

use super::event::{NavEvent, SelectTarget};
use super::session::Session;
use super::transition::{transition, Screen};
use crate::flow::{FlowGraph, Node, NodeOption};
use proptest::prelude::*;

const NODE_IDS: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

/// A fully connected graph so every forward step in a generated walk lands
/// on an existing node.
fn complete_graph() -> FlowGraph {
    let nodes = NODE_IDS
        .iter()
        .map(|id| Node {
            id: (*id).to_string(),
            text: format!("screen {id}"),
            options: NODE_IDS
                .iter()
                .map(|target| NodeOption::Goto {
                    label: (*target).to_string(),
                    target: (*target).to_string(),
                })
                .collect(),
        })
        .collect();
    FlowGraph::new("alpha", nodes).expect("valid graph")
}

fn arb_node_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(NODE_IDS[0].to_string()),
        Just(NODE_IDS[1].to_string()),
        Just(NODE_IDS[2].to_string()),
        Just(NODE_IDS[3].to_string()),
    ]
}

/// Enter, then apply a forward walk over existing nodes.
fn walk_session(graph: &FlowGraph, walk: &[String]) -> Session {
    let mut session = transition(graph, &Session::default(), NavEvent::Enter).session;
    for target in walk {
        session = transition(
            graph,
            &session,
            NavEvent::Select(SelectTarget::Node(target.clone())),
        )
        .session;
    }
    session
}

proptest! {
    // P1: resume is idempotent and never touches history.
    #[test]
    fn resume_is_idempotent(walk in proptest::collection::vec(arb_node_id(), 0..8)) {
        let graph = complete_graph();
        let session = walk_session(&graph, &walk);

        let first = transition(&graph, &session, NavEvent::Resume);
        let second = transition(&graph, &first.session, NavEvent::Resume);

        prop_assert_eq!(&first.screen, &second.screen);
        prop_assert_eq!(&first.session, &second.session);
        prop_assert_eq!(&first.session.history, &session.history);
    }

    // P2: N forward selects followed by N backs land on the start node
    // with an empty stack, retracing the walk one step at a time.
    #[test]
    fn forward_walk_fully_unwinds(walk in proptest::collection::vec(arb_node_id(), 1..8)) {
        let graph = complete_graph();
        let mut session = transition(&graph, &Session::default(), NavEvent::Enter).session;

        let mut visited = vec![graph.start_node().to_string()];
        for target in &walk {
            session = transition(
                &graph,
                &session,
                NavEvent::Select(SelectTarget::Node(target.clone())),
            )
            .session;
            visited.push(target.clone());
        }
        prop_assert_eq!(session.history.len(), walk.len());

        for expected in visited.iter().rev().skip(1) {
            let result = transition(&graph, &session, NavEvent::Select(SelectTarget::Back));
            prop_assert_eq!(&result.screen, &Screen::Node(expected.clone()));
            session = result.session;
        }

        prop_assert_eq!(session.current.as_deref(), Some(graph.start_node()));
        prop_assert!(session.history.is_empty());
    }

    // P3: a select on a missing target is a strict no-op on the session.
    #[test]
    fn broken_forward_target_is_a_no_op(walk in proptest::collection::vec(arb_node_id(), 0..8)) {
        let graph = complete_graph();
        let session = walk_session(&graph, &walk);

        let result = transition(
            &graph,
            &session,
            NavEvent::Select(SelectTarget::Node("missing".to_string())),
        );

        prop_assert_eq!(result.screen, Screen::Unavailable);
        prop_assert_eq!(result.session, session);
    }

    // History only records forward moves; it can never exceed the number
    // of forward selects applied since the last enter.
    #[test]
    fn history_is_bounded_by_forward_moves(
        walk in proptest::collection::vec((arb_node_id(), any::<bool>()), 0..12)
    ) {
        let graph = complete_graph();
        let mut session = transition(&graph, &Session::default(), NavEvent::Enter).session;
        let mut forwards = 0usize;

        for (target, go_back) in walk {
            let event = if go_back {
                NavEvent::Select(SelectTarget::Back)
            } else {
                forwards += 1;
                NavEvent::Select(SelectTarget::Node(target))
            };
            session = transition(&graph, &session, event).session;
            prop_assert!(session.history.len() <= forwards);
        }
    }
}

// P4 has no generated input; it lives here with the other lettered
// properties.
#[test]
fn back_on_fresh_session_keeps_start_cursor() {
    let graph = complete_graph();
    let entered = transition(&graph, &Session::default(), NavEvent::Enter);
    let result = transition(
        &graph,
        &entered.session,
        NavEvent::Select(SelectTarget::Back),
    );
    assert_eq!(result.screen, Screen::Unavailable);
    assert_eq!(result.session.current.as_deref(), Some(graph.start_node()));
    assert!(result.session.history.is_empty());
}
