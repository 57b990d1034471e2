use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{Board, Direction, Vec2};

/// Identity of a board state for exploration. Boxes are interchangeable, so their
/// positions are kept sorted.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct StateKey {
    pub player: Vec2,
    pub boxes: Vec<Vec2>,
}

#[derive(Clone, Debug)]
pub struct StateGraph {
    // map from state to node id
    pub nodes: bimap::BiMap<StateKey, usize>,
    pub edges: HashSet<Edge>,
    pub won: HashSet<usize>,
    pub goals: Vec<Vec2>,
    pub(crate) unvisited: VecDeque<usize>,
    pub(crate) frontier: HashMap<usize, Board>,
    pub(crate) parents: HashMap<usize, (usize, Direction)>,
    pub(crate) next_id: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub pushed: bool,
}

#[derive(Eq, PartialEq, Debug)]
pub enum PopulateResult {
    AllVisited,
    Populated,
}

#[derive(Eq, PartialEq, Debug)]
pub enum Solvability {
    Solvable(Vec<Direction>),
    Unsolvable,
    /// Exploration hit the node limit before finding a win.
    Unknown,
}
