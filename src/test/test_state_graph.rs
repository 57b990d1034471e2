#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::state_graph::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn explore_corridor_finds_every_state(){
        let game = GameTestState::new("#@$.x#");
        let graph = explore(&game.board, None);

        assert!(graph.is_complete());
        assert_eq!(6, graph.node_count());
        assert_eq!(8, graph.edges.len());
        assert_eq!(3, graph.won.len());
        assert_eq!(2, graph.edges.iter().filter(|e| e.pushed).count());
        assert_eq!(
            Some(&StateKey { player: Vec2::new(1, 0), boxes: vec![Vec2::new(2, 0)] }),
            graph.get_state(0)
        );
    }

    #[test]
    fn solvability_returns_shortest_solution(){
        let game = GameTestState::new(r#"
######
#@...#
#.$.x#
######
"#);
        let Solvability::Solvable(path) = solvability(&game.board, None) else {
            panic!("level should be solvable");
        };
        assert_eq!(vec![Down, Right, Right], path);

        let mut board = game.board.clone();
        for direction in path {
            board.attempt_move(direction);
        }
        assert!(board.is_won());
    }

    #[test]
    fn solvability_gives_up_at_node_limit(){
        let game = GameTestState::new("#@$.x#");
        assert_eq!(Solvability::Unknown, solvability(&game.board, Some(1)));
    }

    #[test]
    fn explore_stops_at_node_limit(){
        let game = GameTestState::new("#@$.x#");
        let graph = explore(&game.board, Some(2));

        assert_eq!(2, graph.node_count());
        assert!(!graph.is_complete());
    }

    #[test]
    fn explore_does_not_modify_source_board(){
        let game = GameTestState::new("#@$.x#");
        explore(&game.board, None);
        game.assert_matches("#@$.x#");
        assert!(game.board.history().is_empty());
    }

    #[test]
    fn trim_removes_states_that_cannot_win(){
        let game = GameTestState::new("#@$x.#");
        let mut graph = explore(&game.board, None);
        assert_eq!(6, graph.node_count());

        let stats = trim_unwinnable(&mut graph);

        assert_eq!(Removed { removed: 3, total: 6 }, stats.nodes);
        assert_eq!(5, stats.edges.removed);
        assert_eq!(3, graph.node_count());
        assert!((stats.nodes.percentage() - 50.0).abs() < 1e-9);
        assert_eq!("3 of 6 (50.0%)", stats.nodes.to_string());
    }

    #[test]
    fn locked_rules_make_won_states_terminal(){
        let game = GameTestState::with_rules("#@$x.#", RulesConfig::locked_after_win());
        let graph = explore(&game.board, None);

        // the single push wins and nothing leaves a won state
        assert_eq!(2, graph.node_count());
        assert_eq!(1, graph.edges.len());
        assert_eq!(1, graph.won.len());
    }

    #[test]
    fn json_export_lists_nodes_and_links(){
        let game = GameTestState::new("#@$.x#");
        let graph = explore(&game.board, None);

        let json = get_json_data(&graph).unwrap();
        let data: JsonData = serde_json::from_str(&json).unwrap();

        assert_eq!(6, data.nodes.len());
        assert_eq!(8, data.links.len());
        assert_eq!(3, data.nodes.iter().filter(|n| n.won).count());
        assert_eq!(3, data.nodes.iter().filter(|n| n.on_targets == 1).count());
        assert_eq!(0, data.nodes[0].id);
    }

    #[test]
    fn graph_info_summarises_counts(){
        let game = GameTestState::new("#@$.x#");
        let graph = explore(&game.board, None);
        assert_eq!(
            "Graph has 6 nodes, 8 edges, 3 winning nodes, 0 unvisited.",
            get_graph_info(&graph)
        );
    }
}
