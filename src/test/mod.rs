mod test_console;
mod test_moves;
mod test_state_graph;
