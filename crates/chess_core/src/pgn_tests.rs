use super::*;

fn board_after(moves: &[&str]) -> Board {
    let mut board = Board::startpos();
    for m in moves {
        board.push_uci(m).unwrap();
    }
    board
}

#[test]
fn headers_follow_the_seven_tag_roster() {
    let pgn = GameRecord::from_board(&Board::startpos()).to_pgn();
    let tags: Vec<&str> = pgn
        .lines()
        .take_while(|l| l.starts_with('['))
        .map(|l| l[1..].split(' ').next().unwrap())
        .collect();

    assert_eq!(
        tags,
        vec!["Event", "Site", "Date", "Round", "White", "Black", "Result"]
    );
    assert!(pgn.ends_with("\n\n*\n"));
}

#[test]
fn movetext_uses_san_with_move_numbers() {
    let record = GameRecord::from_board(&board_after(&["e2e4", "e7e5", "g1f3"]));
    assert_eq!(record.moves().len(), 3);
    assert!(record.to_pgn().contains("1. e4 e5 2. Nf3 *"));
}

#[test]
fn mate_gets_suffix_and_result() {
    let board = board_after(&["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]);
    let mut record = GameRecord::from_board(&board);
    record.set_result(board.result());

    let pgn = record.to_pgn();
    assert!(pgn.contains("[Result \"1-0\"]"));
    assert!(pgn.contains("4. Qxf7# 1-0"));
}

#[test]
fn custom_start_position_adds_fen_headers() {
    let mut board =
        Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    board.push_uci("e7e5").unwrap();

    let record = GameRecord::from_board(&board);
    let pgn = record.to_pgn();
    assert_eq!(record.header("SetUp"), Some("1"));
    assert!(record.header("FEN").is_some());
    assert!(pgn.contains("1... e5 *"));
}

#[test]
fn set_header_replaces_and_escapes() {
    let mut record = GameRecord::from_board(&Board::startpos());
    record.set_header("White", "The \"Rhino\"");
    record.set_header("White", "Randy Random");
    record.set_header("Annotator", "a\\b");

    let pgn = record.to_pgn();
    assert!(pgn.contains("[White \"Randy Random\"]"));
    assert!(!pgn.contains("Rhino"));
    assert!(pgn.contains("[Annotator \"a\\\\b\"]"));
}

#[test]
fn long_movetext_wraps_at_eighty_columns() {
    let mut board = Board::startpos();
    for _ in 0..6 {
        for m in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            board.push_uci(m).unwrap();
        }
    }
    let pgn = GameRecord::from_board(&board).to_pgn();

    let movetext: Vec<&str> = pgn.lines().skip_while(|l| !l.is_empty()).skip(1).collect();
    assert!(movetext.len() > 1);
    assert!(movetext.iter().all(|l| l.len() <= 80));
}
