mod graph;
mod graph_trim;
mod json_export;
mod models;
mod populate;

pub use graph::get_graph_info;
pub use graph_trim::{trim_unwinnable, winnable_nodes, Removed, TrimStats};
pub use json_export::{get_json_data, JsonData, JsonEdge, JsonNode};
pub use models::{Edge, PopulateResult, Solvability, StateGraph, StateKey};
pub use populate::{explore, populate_node, populate_step, solvability};
