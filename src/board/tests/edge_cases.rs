//! Edge case tests for unusual but well-formed positions.

use crate::board::{Color, Move, Piece, Position, PositionBuilder, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_empty_board_has_no_moves() {
    let position = Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 1");
    assert!(position.generate_moves().is_empty());
}

#[test]
fn test_only_opponent_pieces() {
    let position = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/8/8 w - - 0 1");
    assert!(position.generate_moves().is_empty());
}

#[test]
fn test_no_kings_still_generates() {
    let position = Position::from_fen("8/8/8/8/8/8/PPPPPPPP/RNBQ1BNR w - - 0 1");
    assert_eq!(position.generate_moves().len(), 8 + 4 + 1);
}

#[test]
fn test_king_left_in_check_is_not_filtered() {
    // The pinned rook may still move off the e-file.
    let position = Position::from_fen("4r3/8/8/8/8/8/4R3/4K3 w - - 0 1");
    let rook_moves = position.moves_from(sq("e2"));
    assert!(rook_moves.contains(Move::quiet(sq("e2"), sq("a2"))));
    assert!(rook_moves.contains(Move::capture(sq("e2"), sq("e8"))));
}

#[test]
fn test_moves_from_ignores_empty_and_enemy_squares() {
    let position = Position::new();
    assert!(position.moves_from(sq("e4")).is_empty());
    assert!(position.moves_from(sq("e7")).is_empty());
    assert_eq!(position.moves_from(sq("e2")).len(), 1);
    assert!(position.moves_from(sq("a1")).is_empty());
}

#[test]
fn test_many_queens() {
    // Far more pieces than a real game allows; generation has no capacity limit.
    let position = Position::from_fen("QQQQ2Q1/4Q2Q/1Q3Q1Q/1Q5Q/Q5Q1/Q4Q2/Q6Q/BQQQQQQ1 w - - 0 1");
    let moves = position.generate_moves();
    assert_eq!(moves.len(), 261);
    assert_eq!(moves.capture_count(), 0);
}

#[test]
fn test_generated_moves_outlive_position() {
    let moves = {
        let position = PositionBuilder::new()
            .piece(sq("h1"), Color::White, Piece::King)
            .build();
        position.generate_moves()
    };
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_concurrent_generation_matches_sequential() {
    let fens = [
        crate::board::STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1",
    ];
    let positions: Vec<Position> = fens.iter().map(|f| Position::from_fen(f)).collect();
    let sequential: Vec<_> = positions.iter().map(Position::generate_moves).collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = positions
            .iter()
            .map(|p| scope.spawn(move || p.generate_moves()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
