use tracing::{debug, trace};

use crate::core::Board;
use crate::state_graph::models::{Edge, PopulateResult, Solvability, StateGraph};

pub fn populate_node(graph: &mut StateGraph, from_id: usize, from_board: &Board) {
    for direction in from_board.legal_moves().directions() {
        let mut next = from_board.clone();
        let before = next.history().entries().len();
        next.attempt_move(direction);
        if next.history().entries().len() == before {
            // locked after a win
            continue;
        }
        let pushed = next.history().entries().last().is_some_and(|e| e.pushed.is_some());

        let (to_id, is_new) = graph.upsert_state(&next);
        if is_new {
            graph.record_parent(to_id, from_id, direction);
        }
        graph.add_edge(Edge {
            from: from_id,
            to: to_id,
            direction,
            pushed,
        });
    }
}

pub fn populate_step(graph: &mut StateGraph) -> PopulateResult {
    let Some((node_id, board)) = graph.next_unvisited() else {
        return PopulateResult::AllVisited;
    };
    trace!(node_id, "populating node");
    populate_node(graph, node_id, &board);
    PopulateResult::Populated
}

/// Breadth-first exploration of every state reachable from `board`, stopping
/// once `node_limit` nodes are known.
pub fn explore(board: &Board, node_limit: Option<usize>) -> StateGraph {
    let mut graph = StateGraph::new(board);
    while node_limit.is_none_or(|limit| graph.node_count() < limit) {
        if populate_step(&mut graph) == PopulateResult::AllVisited {
            break;
        }
    }
    debug!(nodes = graph.node_count(), edges = graph.edges.len(), complete = graph.is_complete(), "exploration finished");
    graph
}

/// Searches for the shortest winning move sequence from the current state.
pub fn solvability(board: &Board, node_limit: Option<usize>) -> Solvability {
    let mut graph = StateGraph::new(board);
    loop {
        if let Some(&won_id) = graph.won.iter().min() {
            let path = graph.path_to(won_id).unwrap_or_default();
            return Solvability::Solvable(path);
        }
        if node_limit.is_some_and(|limit| graph.node_count() >= limit) {
            return Solvability::Unknown;
        }
        if populate_step(&mut graph) == PopulateResult::AllVisited {
            return Solvability::Unsolvable;
        }
    }
}
