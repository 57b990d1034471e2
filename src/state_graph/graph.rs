use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{Board, Direction};
use crate::state_graph::models::{Edge, StateGraph, StateKey};

impl StateKey {
    pub fn from_board(board: &Board) -> Self {
        let mut boxes: Vec<_> = board.box_positions().collect();
        boxes.sort_unstable();
        StateKey {
            player: board.player_position(),
            boxes,
        }
    }
}

impl StateGraph {
    pub fn new(root: &Board) -> Self {
        let mut graph = StateGraph {
            nodes: bimap::BiMap::new(),
            edges: HashSet::new(),
            won: HashSet::new(),
            goals: root.grid().goals().to_vec(),
            unvisited: VecDeque::new(),
            frontier: HashMap::new(),
            parents: HashMap::new(),
            next_id: 0,
        };
        graph.upsert_state(root);
        graph
    }

    /// Returns the node id for `board`'s state and whether it was newly added.
    pub fn upsert_state(&mut self, board: &Board) -> (usize, bool) {
        let key = StateKey::from_board(board);
        if let Some(&id) = self.nodes.get_by_left(&key) {
            return (id, false);
        }

        let id = self.next_id;
        self.next_id += 1;
        // id is fresh and the key was just checked, so neither side can collide
        let _ = self.nodes.insert_no_overwrite(key, id);
        if board.is_won() {
            self.won.insert(id);
        }
        self.frontier.insert(id, board.clone());
        self.unvisited.push_back(id);
        (id, true)
    }

    pub fn get_state(&self, id: usize) -> Option<&StateKey> {
        self.nodes.get_by_right(&id)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge);
    }

    pub(crate) fn record_parent(&mut self, child: usize, parent: usize, direction: Direction) {
        self.parents.entry(child).or_insert((parent, direction));
    }

    pub fn next_unvisited(&mut self) -> Option<(usize, Board)> {
        while let Some(id) = self.unvisited.pop_front() {
            if let Some(board) = self.frontier.remove(&id) {
                return Some((id, board));
            }
        }
        None
    }

    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Moves leading from the root (node 0) to `id`, following first discovery.
    pub fn path_to(&self, id: usize) -> Option<Vec<Direction>> {
        self.get_state(id)?;
        let mut path = Vec::new();
        let mut current = id;
        while let Some(&(parent, direction)) = self.parents.get(&current) {
            path.push(direction);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    pub fn count_on_goals(&self, key: &StateKey) -> usize {
        self.goals.iter().filter(|goal| key.boxes.binary_search(goal).is_ok()).count()
    }
}

pub fn get_graph_info(graph: &StateGraph) -> String {
    format!(
        "Graph has {} nodes, {} edges, {} winning nodes, {} unvisited.",
        graph.nodes.len(),
        graph.edges.len(),
        graph.won.len(),
        graph.unvisited.len()
    )
}
