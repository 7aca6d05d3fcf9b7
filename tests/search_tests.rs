use mahoraga::engine::eval::{evaluate, mate_in, MATE_SCORE};
use mahoraga::engine::search::{order_moves, SearchLimits, Searcher};
use mahoraga::shakmaty::{CastlingMode, Color, Move};
use mahoraga::Board;

fn uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

fn depth_limits(depth: i32) -> SearchLimits {
    SearchLimits {
        depth: Some(depth),
        movetime: Some(600_000),
        ..Default::default()
    }
}

/// Exhaustive minimax with no pruning and no cache, as a reference for
/// the alpha-beta equivalence property. Mirrors the engine's terminal
/// scoring exactly.
fn plain_minimax(
    board: &mut Board,
    maximizing: bool,
    depth: i32,
    max_depth: i32,
    perspective: Color,
) -> i32 {
    if board.is_checkmate() {
        let mate = mate_in(depth);
        return if maximizing { -mate } else { mate };
    }
    if board.is_draw() {
        return 0;
    }
    if depth >= max_depth {
        let score = evaluate(board.position(), perspective);
        return match score.signum() {
            1 => (score - depth).max(0),
            -1 => (score + depth).min(0),
            _ => 0,
        };
    }

    let moves: Vec<Move> = board.legal_moves().iter().cloned().collect();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in &moves {
        board.apply(mv).unwrap();
        let score = plain_minimax(board, !maximizing, depth + 1, max_depth, perspective);
        board.undo().unwrap();
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[test]
fn test_alphabeta_matches_exhaustive_minimax() {
    let mut board = Board::new();
    let perspective = board.turn();

    // Reference: walk the same ordered root list, full minimax each.
    let root_moves = order_moves(&mut board);
    let mut expected: Option<(String, i32)> = None;
    for mv in &root_moves {
        board.apply(mv).unwrap();
        let score = plain_minimax(&mut board, false, 1, 3, perspective);
        board.undo().unwrap();
        if expected.as_ref().map_or(true, |(_, s)| score > *s) {
            expected = Some((uci(mv), score));
        }
    }
    let (expected_move, expected_score) = expected.unwrap();

    let mut searcher = Searcher::new();
    let best = searcher.find_best_move(&mut board, &depth_limits(3)).unwrap();

    assert_eq!(uci(&best), expected_move);
    assert_eq!(searcher.stats().best_score, expected_score);
}

#[test]
fn test_mate_in_one_selected() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1").unwrap();
    let mut searcher = Searcher::new();
    let best = searcher.find_best_move(&mut board, &depth_limits(4)).unwrap();

    assert_eq!(uci(&best), "a1a8");
    // Mate at ply 1, even though deeper mates exist within the horizon.
    assert_eq!(searcher.stats().best_score, MATE_SCORE - 1);
}

#[test]
fn test_shorter_mate_preferred() {
    assert!(mate_in(1) > mate_in(3));

    // Two queens: plenty of mating lines, but a mate in one is on the
    // board (Qg7#) and must win out over any slower mate.
    let mut board = Board::from_fen("7k/8/5K2/8/8/8/8/5QQ1 w - - 0 1").unwrap();
    let mut searcher = Searcher::new();
    searcher.find_best_move(&mut board, &depth_limits(4)).unwrap();
    assert_eq!(searcher.stats().best_score, MATE_SCORE - 1);
}

#[test]
fn test_search_startpos_returns_legal_move() {
    let mut board = Board::new();
    let legals: Vec<String> = board.legal_moves().iter().map(uci).collect();

    let mut searcher = Searcher::new();
    let best = searcher.find_best_move(&mut board, &depth_limits(3)).unwrap();
    assert!(legals.contains(&uci(&best)));
    // The search restored the position.
    assert_eq!(board.ply(), 0);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn test_no_legal_moves_returns_none() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut searcher = Searcher::new();
    assert!(searcher.find_best_move(&mut board, &depth_limits(3)).is_none());
}

#[test]
fn test_time_budget_returns_completed_level() {
    let mut board = Board::new();
    let mut searcher = Searcher::new();
    let limits = SearchLimits {
        depth: None,
        movetime: Some(50),
        ..Default::default()
    };
    // Must still return the best of at least the minimum depth level.
    assert!(searcher.find_best_move(&mut board, &limits).is_some());
    assert!(searcher.stats().nodes > 0);
}

#[test]
fn test_draw_score_configuration() {
    // K+Q vs K with several stalemating blunders available; a draw
    // penalty must not break the search, and the winning side still
    // finds a non-draw line.
    let mut board = Board::from_fen("7k/8/6K1/8/8/8/8/6Q1 w - - 0 1").unwrap();
    let mut searcher = Searcher::new();
    let mut limits = depth_limits(3);
    limits.draw_score = -300;
    let best = searcher.find_best_move(&mut board, &limits);
    assert!(best.is_some());
    assert!(searcher.stats().best_score > -300);
}
