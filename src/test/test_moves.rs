#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::state_graph::StateKey;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right(){
        let level = r#"
#@.x#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
#.@x#
"#;
        game.assert_matches(expected_level);
        assert_eq!(BoardStatus::InPlay, game.board.status());
    }

    #[test]
    fn level_without_goals_is_won_by_first_move(){
        let mut game = GameTestState::new("#@$..#");
        assert_eq!(BoardStatus::Ready, game.board.status());

        assert_eq!(BoardStatus::Won, game.assert_move(Right));
        game.assert_matches("#.@$.#");
        assert_eq!(BoardStatus::Ready, game.board.undo());
    }

    #[test]
    fn when_push_pushes(){
        let level = r#"
#@$.#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
#.@$#
"#;
        game.assert_matches(expected_level);
        assert_eq!(1, game.board.history().len());
        assert_eq!(Some(BoxId(0)), game.board.history().entries()[0].pushed);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks(){
        let level = r#"
#@$$.#
"#;
        let mut game = GameTestState::new(level);
        assert!(!game.board.legal_moves().contains(Right));
        game.try_move(Right);

        let expected_level = r#"
#@$$.#
"#;
        game.assert_matches(expected_level);
        assert!(game.board.history().is_empty());
        assert_eq!(BoardStatus::Ready, game.board.status());
    }

    #[test]
    fn when_walking_into_wall_nothing_changes(){
        let mut game = GameTestState::new("#@#");
        assert!(game.board.legal_moves().is_empty());
        for dir in Direction::ALL {
            game.try_move(dir);
        }
        game.assert_matches("#@#");
        assert!(game.board.history().is_empty());
    }

    #[test]
    fn when_player_walks_over_goal_goal_is_kept(){
        let mut game = GameTestState::new("#@x.#");
        game.assert_move(Right);
        game.assert_matches("#.+.#");
        assert!(!game.board.is_won());

        game.assert_move(Right);
        game.assert_matches("#.x@#");
    }

    #[test]
    fn legal_moves_name_the_box_that_would_move(){
        let game = GameTestState::new("#.$@#");
        let moves = game.board.legal_moves();

        assert_eq!(Some(LegalMove::Push(BoxId(0))), moves.get(Left));
        assert_eq!(None, moves.get(Right));
        assert_eq!(None, moves.get(Up));
        assert_eq!(None, moves.get(Down));
    }

    #[test]
    fn player_legality_follows_refreshed_box_legality(){
        let mut game = GameTestState::new("#@$..#");
        game.assert_move(Right);
        assert_eq!(Some(LegalMove::Push(BoxId(0))), game.board.legal_moves().get(Right));

        game.assert_move(Right);
        game.assert_matches("#..@$#");
        assert_eq!(None, game.board.legal_moves().get(Right));
        assert_eq!(Some(LegalMove::Step), game.board.legal_moves().get(Left));
        assert!(!game.board.box_legal_moves(BoxId(0)).unwrap().contains(Right));
    }

    #[test]
    fn box_blocked_by_box_sideways_is_not_pushable(){
        let level = r#"
#####
#.$.#
#.$.#
#.@.#
#####
"#;
        let mut game = GameTestState::new(level);
        assert!(!game.board.legal_moves().contains(Up));
        game.try_move(Up);
        game.assert_matches(level);
    }

    #[test]
    fn when_player_moves_back_game_is_equal(){
        let level = r#"
#@.$#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.board.current_positions();
        game.assert_move(Right);
        game.assert_move(Left);
        let new_state = game.board.current_positions();

        game.assert_matches(level);
        assert_eq!(original_state, new_state);
        assert_eq!(2, game.board.history().len());
    }

    #[test]
    fn when_blocks_swap_game_remains_equal(){
        let level = r#"
#....#
#@$..#
#.$..#
#....#
"#;
        let mut game = GameTestState::new(level);
        let original_key = StateKey::from_board(&game.board);
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#....#
#.$..#
#.$@.#
#....#
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);
        game.assert_invariants();

        game.assert_matches(level);
        assert_eq!(original_key, StateKey::from_board(&game.board));
    }

    #[test]
    fn win_requires_every_goal_covered(){
        let level = r#"
#######
#@$.x.#
#..$x.#
#######
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(BoardStatus::InPlay, game.assert_move(Right));
        assert_eq!(BoardStatus::InPlay, game.assert_move(Right));
        game.assert_matches(r#"
#######
#..@*.#
#..$x.#
#######
"#);
        assert_eq!(1, game.board.count_boxes_on_goals());
        assert!(!game.board.is_won());

        game.assert_moves(&[Left, Down]);
        assert_eq!(BoardStatus::Won, game.assert_move(Right));
        game.assert_matches(r#"
#######
#...*.#
#..@*.#
#######
"#);
        assert_eq!(2, game.board.count_boxes_on_goals());
    }

    #[test]
    fn extra_boxes_off_goal_do_not_block_win(){
        let level = r#"
######
#@$x.#
#.$..#
######
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(BoardStatus::Won, game.assert_move(Right));
        assert!(game.board.is_won());
    }
}
