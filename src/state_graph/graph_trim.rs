use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::state_graph::StateGraph;

/// How many of a graph's items a trim dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removed {
    pub removed: usize,
    pub total: usize,
}

impl Removed {
    fn between(before: usize, after: usize) -> Removed {
        Removed { removed: before - after, total: before }
    }

    pub fn percentage(&self) -> f64 {
        match self.total {
            0 => 0.0,
            total => self.removed as f64 * 100.0 / total as f64,
        }
    }
}

impl fmt::Display for Removed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} ({:.1}%)", self.removed, self.total, self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimStats {
    pub nodes: Removed,
    pub edges: Removed,
}

/// Ids of every node from which some winning node can be reached.
pub fn winnable_nodes(graph: &StateGraph) -> HashSet<usize> {
    let mut predecessors: HashMap<usize, Vec<usize>> = HashMap::new();
    for edge in &graph.edges {
        predecessors.entry(edge.to).or_default().push(edge.from);
    }

    let mut reached: HashSet<usize> = graph.won.iter().copied().collect();
    let mut pending: Vec<usize> = reached.iter().copied().collect();
    while let Some(id) = pending.pop() {
        for &from in predecessors.get(&id).into_iter().flatten() {
            if reached.insert(from) {
                pending.push(from);
            }
        }
    }
    reached
}

/// Drops every node that cannot reach a win. Only meaningful on a fully explored graph.
pub fn trim_unwinnable(graph: &mut StateGraph) -> TrimStats {
    let keep = winnable_nodes(graph);
    let (nodes_before, edges_before) = (graph.nodes.len(), graph.edges.len());

    graph.nodes.retain(|_, id| keep.contains(id));
    graph.edges.retain(|edge| keep.contains(&edge.from) && keep.contains(&edge.to));

    TrimStats {
        nodes: Removed::between(nodes_before, graph.nodes.len()),
        edges: Removed::between(edges_before, graph.edges.len()),
    }
}
