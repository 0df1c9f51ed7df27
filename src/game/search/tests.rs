//! Tests for the alpha-beta searcher.

use super::quiescence::noisy_moves;
use super::*;
use crate::constants::MATE_SCORE;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use shakmaty::uci::UciMove;
use std::str::FromStr;

fn board(fen: &str) -> GameBoard {
    GameBoard::from_fen(fen).unwrap()
}

fn uci(board: &GameBoard, s: &str) -> Move {
    UciMove::from_str(s).unwrap().to_move(board.position()).unwrap()
}

fn config(tt: bool, quiescence: bool, ordering: bool) -> SearchConfig {
    SearchConfig {
        search_depth: 3,
        use_transposition_table: tt,
        use_quiescence_search: quiescence,
        use_move_ordering: ordering,
    }
}

/// Full-width stand-pat quiescence without pruning.
fn reference_quiescence(board: &mut GameBoard, maximizing: bool) -> Score {
    let stand_pat = evaluation::evaluate(board);
    if board.terminal().is_over() {
        return stand_pat;
    }
    let mut best = stand_pat;
    for mv in noisy_moves(board) {
        let score = {
            let mut child = board.apply(mv);
            reference_quiescence(&mut child, !maximizing)
        };
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Plain minimax: every node visited, no window.
fn reference_minimax(board: &mut GameBoard, depth: u8, maximizing: bool, quiescence: bool) -> Score {
    if depth == 0 || board.terminal().is_over() {
        return if quiescence {
            reference_quiescence(board, maximizing)
        } else {
            evaluation::evaluate(board)
        };
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return if maximizing { -INFINITY } else { INFINITY };
    }
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let score = {
            let mut child = board.apply(mv);
            reference_minimax(&mut child, depth - 1, !maximizing, quiescence)
        };
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Whether some iteration depth up to `max_depth` makes `best.score` both the
/// true value of the root and the true value of `best.mv`.
fn root_choice_is_sound(board: &mut GameBoard, best: ScoredMove, max_depth: u8) -> bool {
    let side = board.turn();
    let view = sign(side);
    (1..=max_depth).any(|depth| {
        let mut root_value: Option<Score> = None;
        let mut chosen_value = None;
        for mv in board.legal_moves() {
            let value = {
                let mut child = board.apply(mv);
                reference_minimax(&mut child, depth - 1, side == Color::Black, true)
            };
            if mv == best.mv {
                chosen_value = Some(value);
            }
            if root_value.map_or(true, |v| view * value > view * v) {
                root_value = Some(value);
            }
        }
        chosen_value == Some(best.score) && root_value == Some(best.score)
    })
}

const PAWN_DUEL: &str = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1";
const KNIGHT_AND_PAWNS: &str = "4k3/2p5/8/3p4/4P3/2N5/8/4K3 w - - 0 1";

#[test]
fn test_start_position_depth_one() {
    let mut board = GameBoard::default();
    let legal = board.legal_moves();
    let best = find_best_move(&mut board, 1, Color::White).unwrap();
    assert_eq!(legal.len(), 20);
    assert!(legal.contains(&best.mv));
}

#[test]
fn test_no_legal_moves_returns_none() {
    // Stalemate.
    let mut board = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(find_best_move(&mut board, 3, Color::Black), None);
}

#[test]
fn test_single_legal_move_skips_search() {
    // Kxg2 is forced.
    let mut board = board("k7/8/8/8/8/8/6q1/7K w - - 0 1");
    let forced = uci(&board, "h1g2");
    let expected = evaluation::evaluate(&board.apply(forced));

    let mut engine = Engine::default();
    let best = engine.find_best_move(&mut board, 4, Color::White).unwrap();
    assert_eq!(best.mv, forced);
    assert_eq!(best.score, expected);
    assert_eq!(engine.stats().nodes, 0);
    assert!(engine.table().is_empty());
}

#[test]
fn test_alpha_beta_matches_minimax() {
    for fen in [PAWN_DUEL, KNIGHT_AND_PAWNS] {
        for quiescence in [false, true] {
            for ordering in [false, true] {
                let mut b = board(fen);
                let expected = reference_minimax(&mut b, 2, true, quiescence);
                let mut engine = Engine::new(config(false, quiescence, ordering));
                let score = engine.minimax(&mut b, 2, -INFINITY, INFINITY, true);
                assert_eq!(score, expected, "{fen} q={quiescence} o={ordering}");
            }
        }
    }
}

#[test]
fn test_alpha_beta_matches_minimax_depth_three() {
    let mut b = board(PAWN_DUEL);
    let expected = reference_minimax(&mut b, 3, true, true);
    let mut engine = Engine::new(config(false, true, true));
    assert_eq!(engine.minimax(&mut b, 3, -INFINITY, INFINITY, true), expected);
    assert!(engine.stats().cutoffs > 0);
}

#[test]
fn test_window_around_true_value() {
    let mut b = board(KNIGHT_AND_PAWNS);
    let expected = reference_minimax(&mut b, 2, true, true);
    let mut engine = Engine::new(config(false, true, true));
    assert_eq!(engine.minimax(&mut b, 2, expected - 1, expected + 1, true), expected);

    // Failing low or high still reports the correct side of the window.
    let mut engine = Engine::new(config(false, true, true));
    assert!(engine.minimax(&mut b, 2, expected + 10, expected + 20, true) <= expected + 10);
    let mut engine = Engine::new(config(false, true, true));
    assert!(engine.minimax(&mut b, 2, expected - 20, expected - 10, true) >= expected - 10);
}

#[test]
fn test_table_does_not_change_result() {
    let mut b = board(PAWN_DUEL);
    let mut without = Engine::new(config(false, true, true));
    let expected = without.minimax(&mut b, 3, -INFINITY, INFINITY, true);

    let mut with = Engine::new(config(true, true, true));
    assert_eq!(with.minimax(&mut b, 3, -INFINITY, INFINITY, true), expected);
    assert!(!with.table().is_empty());

    // A second search reuses the stored root and agrees with a fresh one.
    assert_eq!(with.minimax(&mut b, 3, -INFINITY, INFINITY, true), expected);
    assert!(with.stats().tt_hits > 0);
}

#[test]
fn test_exact_entries_agree_with_fresh_search() {
    let mut b = board(PAWN_DUEL);
    let mut engine = Engine::new(config(true, true, true));
    engine.minimax(&mut b, 3, -INFINITY, INFINITY, true);

    // Re-derive every child of the root from scratch and compare with what
    // the table holds for it.
    for mv in b.legal_moves() {
        let mut child = b.apply(mv);
        let Some(entry) = engine.table().probe(child.hash()).copied() else {
            continue;
        };
        let fresh = reference_minimax(&mut child, entry.depth, false, true);
        match entry.bound {
            Bound::Exact => assert_eq!(entry.value, fresh),
            Bound::Lower => assert!(fresh >= entry.value),
            Bound::Upper => assert!(fresh <= entry.value),
        }
    }
}

#[test]
fn test_root_entry_written_after_each_depth() {
    let mut b = board(KNIGHT_AND_PAWNS);
    let mut engine = Engine::default();
    let best = engine.find_best_move(&mut b, 2, Color::White).unwrap();
    let root = engine.table().probe(b.hash()).copied().unwrap();
    assert!(root.is_exact());
    assert_eq!(root.depth, 2);
    assert_eq!(root.value, best.score);
}

#[test]
fn test_finds_mate_in_one_for_white() {
    let mut b = board("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let best = find_best_move(&mut b, 2, Color::White).unwrap();
    assert_eq!(best.mv, uci(&b, "a1a8"));
    assert_eq!(best.score, MATE_SCORE);
}

#[test]
fn test_mate_not_displaced_by_later_fail_low_move() {
    // Every quiet rook move is searched after Ra8# and must not tie with it.
    let mut b = board("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let mut engine = Engine::new(config(false, true, true));
    let best = engine.find_best_move(&mut b, 2, Color::White).unwrap();
    assert_eq!(best.mv, uci(&b, "a1a8"));
    assert!(root_choice_is_sound(&mut b, best, 2));
}

#[test]
fn test_does_not_hang_queen_on_tied_bound() {
    let mut b = board("r2qkbnr/p3pppp/2n5/1ppp1b2/4P2P/3N4/PPPPQPP1/RNB1KB1R w KQkq - 0 1");
    let mut engine = Engine::new(config(false, true, true));
    let best = engine.find_best_move(&mut b, 2, Color::White).unwrap();
    assert_ne!(best.mv, uci(&b, "e2g4"));
    assert!(root_choice_is_sound(&mut b, best, 2));
}

#[test]
fn test_chosen_move_is_worth_reported_score() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    while checked < 8 {
        let mut b = GameBoard::default();
        for _ in 0..6 {
            let moves = b.legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            b.play(mv);
        }
        // Forced moves skip the search and are scored statically.
        if b.terminal().is_over() || b.legal_moves().len() < 2 {
            continue;
        }
        let side = b.turn();
        let mut engine = Engine::new(config(false, true, true));
        let best = engine.find_best_move(&mut b, 2, side).unwrap();
        assert!(root_choice_is_sound(&mut b, best, 2), "unsound root choice in {}", b.fen());
        checked += 1;
    }
}

#[test]
fn test_finds_mate_in_one_for_black() {
    let mut b = board("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");
    let best = find_best_move(&mut b, 2, Color::Black).unwrap();
    assert_eq!(best.mv, uci(&b, "a8a1"));
    assert_eq!(best.score, -MATE_SCORE);
}

#[test]
fn test_black_takes_free_queen() {
    let mut b = board("4k3/8/8/3p4/4Q3/8/8/4K3 b - - 0 1");
    let best = find_best_move(&mut b, 1, Color::Black).unwrap();
    assert_eq!(best.mv, uci(&b, "d5e4"));
}

#[test]
fn test_board_restored_after_search() {
    let mut b = board("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    let fen = b.fen();
    let hash = b.hash();
    let mut engine = Engine::new(config(true, true, true));
    engine.find_best_move(&mut b, 2, Color::White).unwrap();
    assert_eq!(b.fen(), fen);
    assert_eq!(b.hash(), hash);
    assert_eq!(b.ply(), 0);
    assert!(engine.stats().nodes > 0);
}

#[test]
fn test_search_uses_configured_depth() {
    let mut b = board(PAWN_DUEL);
    let mut engine = Engine::new(SearchConfig {
        search_depth: 2,
        ..SearchConfig::default()
    });
    let best = engine.search(&mut b).unwrap();
    assert!(b.legal_moves().contains(&best.mv));
    assert_eq!(engine.table().probe(b.hash()).unwrap().depth, 2);
}

#[test]
fn test_config_round_trips_through_json() {
    let json = r#"{"search_depth": 6, "use_move_ordering": false}"#;
    let config: SearchConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.search_depth, 6);
    assert!(!config.use_move_ordering);
    assert!(config.use_transposition_table);
}
