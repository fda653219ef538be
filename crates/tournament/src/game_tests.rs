use super::*;
use chess_core::{parse_uci_move, Move};
use scripted::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test players with scripted behaviour.
mod scripted {
    use super::*;

    /// Always answers with the same (usually illegal) move.
    pub struct Stubborn(pub Move);

    impl Player for Stubborn {
        fn take_turn(&mut self, _board: &Board) -> Turn {
            Turn::Move(self.0.clone())
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    /// Claims a draw on every turn.
    pub struct Claimer;

    impl Player for Claimer {
        fn take_turn(&mut self, _board: &Board) -> Turn {
            Turn::ClaimDraw
        }

        fn name(&self) -> &str {
            "Claimer"
        }
    }

    /// Plays the first legal move, counting resets.
    #[derive(Default)]
    pub struct FirstMove {
        pub resets: Arc<AtomicUsize>,
    }

    impl Player for FirstMove {
        fn take_turn(&mut self, board: &Board) -> Turn {
            Turn::Move(board.legal_moves()[0].clone())
        }

        fn name(&self) -> &str {
            "First Move"
        }

        fn reset(&mut self) {
            self.resets.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Replays a fixed list of moves in long algebraic form.
    pub struct Scripted(pub Vec<&'static str>);

    impl Player for Scripted {
        fn take_turn(&mut self, board: &Board) -> Turn {
            let text = self.0.remove(0);
            Turn::Move(parse_uci_move(board, text).unwrap())
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    pub struct Crasher;

    impl Player for Crasher {
        fn take_turn(&mut self, _board: &Board) -> Turn {
            panic!("strategy bug");
        }

        fn name(&self) -> &str {
            "Crasher"
        }
    }
}

/// A move that is only legal for Black in the start position.
fn black_move() -> Move {
    let board =
        Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1").unwrap();
    parse_uci_move(&board, "e7e5").unwrap()
}

#[test]
fn illegal_move_loses_and_is_not_applied() {
    let mut game = Game::new(
        Box::new(Stubborn(black_move())),
        Box::new(FirstMove::default()),
    );

    assert_eq!(game.play(), GameResult::BlackWins);
    assert_eq!(game.termination(), Some(Termination::RulesInfraction));
    assert!(game.board().moves().is_empty());
    assert_eq!(game.board().fen(), Board::startpos().fen());
}

#[test]
fn black_illegal_move_hands_white_the_win() {
    let white_move = parse_uci_move(&Board::startpos(), "e2e4").unwrap();
    let mut game = Game::new(
        Box::new(FirstMove::default()),
        Box::new(Stubborn(white_move)),
    );

    assert_eq!(game.play(), GameResult::WhiteWins);
    assert_eq!(game.board().moves().len(), 1);
}

#[test]
fn invalid_draw_claim_loses() {
    let mut game = Game::new(Box::new(Claimer), Box::new(FirstMove::default()));

    assert_eq!(game.play(), GameResult::BlackWins);
    assert_eq!(game.record().header("Termination"), Some("rules infraction"));
}

#[test]
fn valid_draw_claim_is_a_draw() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 60").unwrap();
    let mut game = Game::from_board(Box::new(Claimer), Box::new(FirstMove::default()), board);

    assert_eq!(game.play(), GameResult::Draw);
    assert_eq!(game.termination(), Some(Termination::Normal));
}

#[test]
fn checkmate_result_comes_from_the_board() {
    let mut game = Game::new(
        Box::new(Scripted(vec!["f2f3", "g2g4"])),
        Box::new(Scripted(vec!["e7e5", "d8h4"])),
    );

    assert_eq!(game.play(), GameResult::BlackWins);
    assert_eq!(game.termination(), Some(Termination::Normal));
    assert_eq!(game.board().moves().len(), 4);
    assert_eq!(game.record().moves().len(), 4);

    let pgn = game.export();
    assert!(pgn.contains("[White \"Scripted\"]"));
    assert!(pgn.contains("[Result \"0-1\"]"));
    assert!(pgn.contains("2. g4 Qh4# 0-1"));
}

#[test]
fn panicking_player_forfeits() {
    let mut game = Game::new(Box::new(FirstMove::default()), Box::new(Crasher));

    assert_eq!(game.play(), GameResult::WhiteWins);
    assert_eq!(game.termination(), Some(Termination::RulesInfraction));
}

#[test]
fn players_are_reset_once_per_game() {
    let white = FirstMove::default();
    let black = FirstMove::default();
    let (white_resets, black_resets) = (white.resets.clone(), black.resets.clone());

    let mut game = Game::new(Box::new(white), Box::new(black));
    let result = game.play();
    // The second call is a no-op on a finished game
    assert_eq!(game.play(), result);

    assert_eq!(white_resets.load(Ordering::SeqCst), 1);
    assert_eq!(black_resets.load(Ordering::SeqCst), 1);
}

#[test]
fn a_full_game_reaches_a_decided_result() {
    let mut game = Game::new(Box::new(FirstMove::default()), Box::new(FirstMove::default()));
    let result = game.play();

    assert!(result.is_decided());
    assert_eq!(game.termination(), Some(Termination::Normal));
    assert_eq!(result, game.board().result());
}

#[test]
fn panic_messages_are_recovered() {
    let literal = std::panic::catch_unwind(|| panic!("strategy bug")).unwrap_err();
    let formatted = std::panic::catch_unwind(|| panic!("bad move {}", 7)).unwrap_err();
    let opaque = std::panic::catch_unwind(|| std::panic::panic_any(42_u8)).unwrap_err();

    assert_eq!(panic_message(&*literal), "strategy bug");
    assert_eq!(panic_message(&*formatted), "bad move 7");
    assert_eq!(panic_message(&*opaque), "unknown panic");
}
