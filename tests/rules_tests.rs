use mahoraga::shakmaty::{CastlingMode, Role, Square};
use mahoraga::{Board, EngineError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_from_fen_rejects_garbage() {
    for bad in ["", "not a fen", "8/8/8/8/8/8/8/9 w - - 0 1"] {
        assert!(matches!(
            Board::from_fen(bad),
            Err(EngineError::InvalidPosition(_))
        ));
    }
}

#[test]
fn test_fen_roundtrip() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 0 4";
    let board = Board::from_fen(fen).unwrap();
    assert_eq!(board.fen(), fen);
}

#[test]
fn test_apply_undo_restores_position_string() {
    // 100 pseudo-random legal walks; every apply/undo pair must restore
    // the exact position string before walking on.
    for seed in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();

        for _ in 0..24 {
            let legals = board.legal_moves();
            if legals.is_empty() {
                break;
            }
            let mv = legals[rng.gen_range(0..legals.len())].clone();

            let before_fen = board.fen();
            let before_hash = board.zobrist();

            board.apply(&mv).unwrap();
            board.undo().unwrap();
            assert_eq!(board.fen(), before_fen, "seed {seed}");
            assert_eq!(board.zobrist(), before_hash, "seed {seed}");

            board.apply(&mv).unwrap();
        }
    }
}

#[test]
fn test_undo_on_fresh_board() {
    let mut board = Board::new();
    assert!(board.undo().is_none());
}

#[test]
fn test_resolve_castling_from_king_drag() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = board.resolve(Square::E1, Square::G1, None).unwrap();
    assert!(mv.is_castle());
    board.apply(&mv).unwrap();
    assert_eq!(board.pieces(mahoraga::shakmaty::Color::White, Role::King), vec![Square::G1]);
}

#[test]
fn test_resolve_promotion() {
    let board = Board::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mv = board.resolve(Square::A7, Square::A8, Some(Role::Queen)).unwrap();
    assert!(mv.is_promotion());
    assert_eq!(mv.promotion(), Some(Role::Queen));
}

#[test]
fn test_resolve_rejects_illegal() {
    let board = Board::new();
    assert!(matches!(
        board.resolve(Square::E2, Square::E5, None),
        Err(EngineError::IllegalMove(_))
    ));
}

#[test]
fn test_probe_move_always_undoes() {
    let mut board = Board::new();
    let before = board.fen();
    let mv = board.legal_moves()[0].clone();
    let was_check = board.probe_move(&mv, |b| b.is_check()).unwrap();
    assert!(!was_check);
    assert_eq!(board.fen(), before);
    assert_eq!(board.ply(), 0);
}

#[test]
fn test_zobrist_tracks_applies() {
    let mut board = Board::new();
    let h0 = board.zobrist();
    let mv = board
        .legal_moves()
        .iter()
        .find(|m| m.to_uci(CastlingMode::Standard).to_string() == "e2e4")
        .cloned()
        .unwrap();
    board.apply(&mv).unwrap();
    assert_ne!(board.zobrist(), h0);
    board.undo().unwrap();
    assert_eq!(board.zobrist(), h0);
}

#[test]
fn test_terminal_predicates() {
    let mate = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    assert!(mate.is_checkmate());
    assert!(mate.is_game_over());

    let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(stalemate.is_stalemate());
    assert!(stalemate.is_draw());
    assert!(!stalemate.is_checkmate());

    let dead = Board::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1").unwrap();
    assert!(dead.is_draw());
}
