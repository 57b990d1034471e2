use serde::{Deserialize, Serialize};

use crate::state_graph::StateGraph;

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonData {
    pub nodes: Vec<JsonNode>,
    pub links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonNode {
    pub id: usize,
    pub on_targets: usize,
    pub won: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonEdge {
    pub source: usize,
    pub target: usize,
    pub pushed: bool,
}

pub fn get_json_data(graph: &StateGraph) -> Result<String, serde_json::Error> {
    let mut nodes: Vec<JsonNode> = graph.nodes.iter().map(|(state, &id)| {
        JsonNode {
            id,
            on_targets: graph.count_on_goals(state),
            won: graph.won.contains(&id),
        }
    }).collect();
    nodes.sort_by_key(|node| node.id);

    let mut links: Vec<JsonEdge> = graph.edges.iter().map(|edge| {
        JsonEdge {
            source: edge.from,
            target: edge.to,
            pushed: edge.pushed,
        }
    })
    .collect();
    links.sort_by_key(|link| (link.source, link.target));

    serde_json::to_string_pretty(&JsonData { nodes, links })
}
