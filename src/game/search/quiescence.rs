// src/game/search/quiescence.rs

//! Extends leaf nodes through noisy moves so the static evaluator is only
//! trusted on quiet positions.
//!
//! The side to move may always "stand pat" on the static score instead of
//! playing on. Results are read from the transposition table at any depth but
//! never written back.

use super::Engine;
use crate::game::board::GameBoard;
use crate::game::evaluation::{self, Score};
use shakmaty::Move;

impl Engine {
    pub(super) fn quiescence(
        &mut self,
        board: &mut GameBoard,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.stats.quiescence_nodes += 1;

        let stand_pat = evaluation::evaluate(board);
        if board.terminal().is_over() {
            return stand_pat;
        }

        if let Some(value) = self.probe(board.hash(), 0, alpha, beta) {
            return value;
        }

        if maximizing {
            if stand_pat >= beta {
                return stand_pat;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return stand_pat;
            }
            beta = beta.min(stand_pat);
        }

        let moves = noisy_moves(board);
        if moves.is_empty() {
            return stand_pat;
        }

        let mut best = if maximizing { alpha } else { beta };
        for m in moves {
            let score = {
                let mut child = board.apply(m);
                self.quiescence(&mut child, alpha, beta, !maximizing)
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Captures, promotions and checking moves.
pub fn noisy_moves(board: &mut GameBoard) -> Vec<Move> {
    let mut noisy = Vec::new();
    for m in board.legal_moves() {
        if board.is_capture(&m) || m.is_promotion() || gives_check(board, m) {
            noisy.push(m);
        }
    }
    noisy
}

fn gives_check(board: &mut GameBoard, m: Move) -> bool {
    board.apply(m).is_check()
}
