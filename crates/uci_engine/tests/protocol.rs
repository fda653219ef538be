//! Full GUI conversations against the built-in players

use chess_core::{parse_uci_move, Board};
use uci_engine::Session;

fn converse(script: &str) -> Vec<String> {
    let mut session = Session::default();
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn handshake_then_game() {
    let out = converse(
        "uci\n\
         setoption name Personality value Field Marshal\n\
         isready\n\
         ucinewgame\n\
         position startpos moves e2e4\n\
         go wtime 60000 btime 60000\n\
         quit\n",
    );

    assert_eq!(out[3], "uciok");
    assert_eq!(out[4], "readyok");
    assert_eq!(out.len(), 6);

    let mut board = Board::startpos();
    board.push_uci("e2e4").unwrap();
    let reply = out[5].strip_prefix("bestmove ").unwrap();
    assert!(parse_uci_move(&board, reply).is_ok());
}

#[test]
fn every_player_answers_with_a_legal_move() {
    for name in ["Randy Random", "The Rhino", "Field Marshal"] {
        let moves = "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6";
        let out = converse(&format!(
            "setoption name Personality value {name}\nposition startpos moves {moves}\ngo\n"
        ));

        let mut board = Board::startpos();
        for m in moves.split(' ') {
            board.push_uci(m).unwrap();
        }
        assert_eq!(out.len(), 1, "{name}");
        let reply = out[0].strip_prefix("bestmove ").unwrap();
        assert!(parse_uci_move(&board, reply).is_ok(), "{name} played {reply}");
    }
}

#[test]
fn infinite_search_returns_the_same_move_once() {
    let out = converse(
        "setoption name Personality value The Rhino\n\
         position startpos moves\n\
         go\n\
         go infinite\n\
         stop\n\
         stop\n",
    );

    // The Rhino is deterministic, so both searches agree
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], out[1]);
}
