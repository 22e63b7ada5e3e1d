#![cfg(feature = "serde")]

use fen_movegen::board::{Color, Move, Piece, Position, Square};

#[test]
fn moves_serialize_round_trip() {
    let position = Position::from_fen("8/8/8/3p4/4P3/8/8/8 w - - 0 1");
    let moves: Vec<Move> = position.generate_moves().into_iter().collect();

    let json = serde_json::to_string(&moves).unwrap();
    let restored: Vec<Move> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, moves);
}

#[test]
fn square_and_piece_serialize() {
    let sq: Square = "e4".parse().unwrap();
    let json = serde_json::to_string(&(sq, Color::White, Piece::Knight)).unwrap();
    let (back_sq, color, piece): (Square, Color, Piece) = serde_json::from_str(&json).unwrap();
    assert_eq!(back_sq, sq);
    assert_eq!(color, Color::White);
    assert_eq!(piece, Piece::Knight);
    assert!(json.contains("\"Knight\""));
}

#[test]
fn square_deserialize_rejects_off_board() {
    assert!(serde_json::from_str::<Square>("[9,9]").is_err());
    assert!(serde_json::from_str::<Square>("[0,8]").is_err());

    let h8: Square = serde_json::from_str("[7,7]").unwrap();
    assert_eq!(h8.to_string(), "h8");
    assert_eq!(serde_json::to_string(&h8).unwrap(), "[7,7]");
}

#[test]
fn move_deserialize_rejects_unknown_flags() {
    assert!(serde_json::from_str::<Move>("65535").is_err());
    assert!(serde_json::from_str::<Move>("8192").is_err());

    let position = Position::from_fen("8/8/8/3p4/4P3/8/8/8 w - - 0 1");
    let capture = position
        .generate_moves()
        .iter()
        .copied()
        .find(|mv| mv.is_capture())
        .unwrap();
    let json = serde_json::to_string(&capture).unwrap();
    let restored: Move = serde_json::from_str(&json).unwrap();
    assert!(restored.is_capture());
    assert_eq!(restored.to_string(), "e4d5");
}
