#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::console_interface::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn commands_parse_to_actions(){
        assert_eq!(ConsoleInput::UserAction(UserAction::Move(Direction::Up)), parse_command("u"));
        assert_eq!(ConsoleInput::UserAction(UserAction::Move(Direction::Down)), parse_command("d"));
        assert_eq!(ConsoleInput::UserAction(UserAction::Move(Direction::Left)), parse_command(" L \n"));
        assert_eq!(ConsoleInput::UserAction(UserAction::Move(Direction::Left)), parse_command("left"));
        assert_eq!(ConsoleInput::Unknown, parse_command("w"));
        assert_eq!(ConsoleInput::Unknown, parse_command("s"));
        assert_eq!(ConsoleInput::UserAction(UserAction::Move(Direction::Right)), parse_command("right"));
        assert_eq!(ConsoleInput::UserAction(UserAction::Undo), parse_command("z"));
        assert_eq!(ConsoleInput::UserAction(UserAction::Restart), parse_command("reset"));
        assert_eq!(ConsoleInput::Quit, parse_command("0"));
        assert_eq!(ConsoleInput::Help, parse_command("?"));
        assert_eq!(ConsoleInput::Unknown, parse_command("jump"));
    }

    #[test]
    fn render_marks_entities_on_goals(){
        let game = GameTestState::new(r#"
#####
#+$.#
#.*x#
#####
"#);
        assert_eq!("#####\n#+$.#\n#.*x#\n#####\n", render_board_to_string(&game.board));
        assert_eq!(render_board_to_string(&game.board), game.board.to_string());
    }

    #[test]
    fn session_ends_on_win(){
        let mut game = GameTestState::new("#@$.x#");
        let mut output = Vec::new();

        let outcome = run_session(&mut game.board, Cursor::new("r\nbogus\nz\nr\nr\nr\n"), &mut output).unwrap();

        assert_eq!(SessionOutcome::Won { moves: 2 }, outcome);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Unknown command \"bogus\""));
        assert!(text.contains("You win!"));
        assert!(text.contains("won | moves: 2 | on goals: 1/1"));
    }

    #[test]
    fn session_quits_and_runs_out_of_input(){
        let mut game = GameTestState::new("#@$.x#");
        let mut output = Vec::new();
        assert_eq!(SessionOutcome::Quit, run_session(&mut game.board, Cursor::new("r\nq\nr\n"), &mut output).unwrap());
        game.assert_matches("#.@$x#");

        let mut output = Vec::new();
        assert_eq!(SessionOutcome::EndOfInput, run_session(&mut game.board, Cursor::new("l\n"), &mut output).unwrap());
        game.assert_matches("#@.$x#");
    }
}
