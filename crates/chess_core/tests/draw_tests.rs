//! Tests for draw detection in chess
//!
//! This module tests all draw conditions:
//! - Stalemate
//! - Fifty-move rule (claimable)
//! - Threefold repetition (claimable)
//! - Insufficient material

use chess_core::{Board, GameResult};

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king in corner, white queen stalemates
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(board.legal_moves().is_empty(), "Stalemate position should have no legal moves");
    assert!(!board.is_check(), "Stalemate means king is not in check");
    assert!(board.is_stalemate());
    assert_eq!(board.result(), GameResult::Draw);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let board = Board::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(board.is_stalemate());
    assert!(board.is_game_over());
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 60").unwrap();

    assert!(
        board.can_claim_fifty_moves(),
        "Position with halfmove clock 100 allows a claim"
    );
    assert!(!board.is_game_over(), "Fifty-move draws must be claimed");
}

#[test]
fn test_fifty_move_rule_claimable_one_move_early() {
    // A non-pawn, non-capture move takes the clock to 100
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 99 60").unwrap();

    assert!(board.can_claim_fifty_moves());
}

#[test]
fn test_fifty_move_rule_at_98_halfmoves() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 98 60").unwrap();

    assert!(!board.can_claim_fifty_moves());
    assert!(!board.can_claim_draw());
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut board = Board::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").unwrap();
    board.push_uci("e2e3").unwrap();

    assert_eq!(board.halfmoves(), 0, "Halfmove clock should be 0 after pawn move");
    assert!(!board.can_claim_fifty_moves());
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();

    assert!(board.is_insufficient_material(), "King vs King is insufficient material");
    assert!(board.is_game_over());
    assert_eq!(board.result(), GameResult::Draw);
}

#[test]
fn test_insufficient_material_king_bishop_vs_king() {
    let board = Board::from_fen("8/8/8/4k3/8/4KB2/8/8 w - - 0 1").unwrap();

    assert!(board.is_insufficient_material());
}

#[test]
fn test_insufficient_material_king_knight_vs_king() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/6N1 w - - 0 1").unwrap();

    assert!(board.is_insufficient_material());
}

#[test]
fn test_insufficient_material_same_color_bishops() {
    // Bishops on c1 and f8 are both dark-squared
    let board = Board::from_fen("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1").unwrap();

    assert!(board.is_insufficient_material());
}

#[test]
fn test_sufficient_material_opposite_color_bishops() {
    // c1 is dark, c8 is light: mate is possible
    let board = Board::from_fen("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1").unwrap();

    assert!(!board.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_pawn() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1").unwrap();

    assert!(!board.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_rook() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1").unwrap();

    assert!(!board.is_insufficient_material());
}

// =============================================================================
// Threefold Repetition Tests
// =============================================================================

#[test]
fn test_threefold_repetition_by_move_sequence() {
    let mut board = Board::startpos();
    let shuffle = ["b1c3", "b8c6", "c3b1", "c6b8"];

    for m in shuffle.iter().chain(shuffle.iter()) {
        assert!(!board.is_game_over());
        board.push_uci(m).unwrap();
    }

    assert_eq!(board.repetitions(), 3, "Start position seen three times");
    assert!(board.can_claim_draw());
    assert!(!board.is_game_over(), "Threefold repetition must be claimed");
}

#[test]
fn test_no_claim_in_fresh_position() {
    let board = Board::startpos();

    assert!(!board.can_claim_threefold_repetition());
    assert!(!board.can_claim_draw());
}

// =============================================================================
// Integration Tests - Not Checkmate Scenarios
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate position
    let board =
        Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();

    assert!(board.legal_moves().is_empty());
    assert!(board.is_check(), "Checkmate means king IS in check");
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert_eq!(board.result(), GameResult::WhiteWins);
}

#[test]
fn test_check_is_not_checkmate() {
    let board =
        Board::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2").unwrap();

    assert!(!board.legal_moves().is_empty());
    assert!(board.is_check(), "Black king should be in check");
    assert!(!board.is_checkmate());
}
