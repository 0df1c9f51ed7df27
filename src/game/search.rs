// src/game/search.rs

pub mod quiescence;
pub mod tt;

use crate::constants::INFINITY;
use crate::game::board::GameBoard;
use crate::game::evaluation::{self, sign, Score};
use serde::{Deserialize, Serialize};
use shakmaty::{CastlingMode, Color, Move};
use tracing::{debug, info, trace, trace_span};
use tt::{Bound, TranspositionTable, TtEntry};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub search_depth: u8,
    pub use_transposition_table: bool,
    pub use_quiescence_search: bool,
    pub use_move_ordering: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 4,
            use_transposition_table: true,
            use_quiescence_search: true,
            use_move_ordering: true,
        }
    }
}

/// Counters for a single `find_best_move` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub tt_hits: u64,
    pub cutoffs: u64,
}

/// A move together with the White-relative score the search gave it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: Score,
}

/// Iterative-deepening alpha-beta searcher.
///
/// The transposition table belongs to the engine and survives between calls,
/// so consecutive searches from the same game reuse earlier work.
#[derive(Debug, Default)]
pub struct Engine {
    config: SearchConfig,
    tt: TranspositionTable,
    stats: SearchStats,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_table(config, TranspositionTable::new())
    }

    pub fn with_table(config: SearchConfig, tt: TranspositionTable) -> Self {
        Self {
            config,
            tt,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn clear_table(&mut self) {
        self.tt.clear();
    }

    /// Best move for the side to move at the configured depth.
    pub fn search(&mut self, board: &mut GameBoard) -> Option<ScoredMove> {
        let depth = self.config.search_depth;
        let side = board.turn();
        self.find_best_move(board, depth, side)
    }

    /// Searches every depth from 1 to `max_depth` and returns the best move
    /// for `side`, or `None` when there is nothing to play.
    ///
    /// The returned score is White-relative. `board` is left exactly as it
    /// was passed in.
    pub fn find_best_move(
        &mut self,
        board: &mut GameBoard,
        max_depth: u8,
        side: Color,
    ) -> Option<ScoredMove> {
        let span = trace_span!("find_best_move", max_depth);
        let _guard = span.enter();
        self.stats = SearchStats::default();

        let moves = board.legal_moves();
        if moves.is_empty() {
            debug!("No legal moves");
            return None;
        }
        if moves.len() == 1 {
            let mv = moves[0];
            let score = evaluation::evaluate(&board.apply(mv));
            debug!(mv = %mv.to_uci(CastlingMode::Standard), score, "Only one legal move");
            return Some(ScoredMove { mv, score });
        }

        // Scores are compared from the mover's point of view at the root.
        let view = sign(side);
        let mut global: Option<ScoredMove> = None;

        for depth in 1..=max_depth.max(1) {
            let mut alpha = -INFINITY;
            let mut beta = INFINITY;
            let mut best: Option<ScoredMove> = None;

            for mv in self.ordered_moves(board) {
                // Widen the bound by one so a move scoring exactly the current
                // best comes back as an exact value rather than a fail-low bound.
                let (child_alpha, child_beta) = match side {
                    Color::White => (alpha - 1, beta),
                    Color::Black => (alpha, beta + 1),
                };
                let score = {
                    let mut child = board.apply(mv);
                    let maximizing = side == Color::Black;
                    self.minimax(&mut child, depth - 1, child_alpha, child_beta, maximizing)
                };
                if best.map_or(true, |b| view * score >= view * b.score) {
                    best = Some(ScoredMove { mv, score });
                }
                match side {
                    Color::White => alpha = alpha.max(score),
                    Color::Black => beta = beta.min(score),
                }
            }

            if let Some(best) = best {
                if global.map_or(true, |g| view * best.score >= view * g.score) {
                    global = Some(best);
                }
            }
            if let Some(g) = global {
                self.store(board.hash(), g.score, depth, Bound::Exact);
                debug!(
                    depth,
                    best = %g.mv.to_uci(CastlingMode::Standard),
                    score = g.score,
                    nodes = self.stats.nodes,
                    "Iterative deepening depth complete"
                );
            }
        }

        trace!(
            tt_hits = self.stats.tt_hits,
            cutoffs = self.stats.cutoffs,
            quiescence_nodes = self.stats.quiescence_nodes,
            tt_size = self.tt.len(),
            "Search finished"
        );
        if let Some(g) = global {
            info!(
                best = %g.mv.to_uci(CastlingMode::Standard),
                score = g.score,
                nodes = self.stats.nodes,
                "Best move"
            );
        }
        global
    }

    /// Alpha-beta over White-relative scores: White maximizes, Black minimizes.
    fn minimax(
        &mut self,
        board: &mut GameBoard,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 || board.terminal().is_over() {
            return if self.config.use_quiescence_search {
                self.quiescence(board, alpha, beta, maximizing)
            } else {
                evaluation::evaluate(board)
            };
        }

        let hash = board.hash();
        if let Some(value) = self.probe(hash, depth, alpha, beta) {
            return value;
        }

        let moves = self.ordered_moves(board);
        if moves.is_empty() {
            // Mate and stalemate are not told apart here.
            return if maximizing { -INFINITY } else { INFINITY };
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let score = {
                let mut child = board.apply(mv);
                self.minimax(&mut child, depth - 1, alpha, beta, !maximizing)
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let bound = Bound::classify(best, alpha_orig, beta_orig);
        self.store(hash, best, depth, bound);
        best
    }

    /// Legal moves, best-looking first by a one-ply White-relative static
    /// score when ordering is enabled.
    fn ordered_moves(&self, board: &mut GameBoard) -> Vec<Move> {
        let moves = board.legal_moves();
        if !self.config.use_move_ordering {
            return moves.into_iter().collect();
        }

        let mut scored: Vec<ScoredMove> = moves
            .into_iter()
            .map(|mv| ScoredMove {
                mv,
                score: evaluation::evaluate(&board.apply(mv)),
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.into_iter().map(|s| s.mv).collect()
    }

    fn probe(&mut self, hash: u64, depth: u8, alpha: Score, beta: Score) -> Option<Score> {
        if !self.config.use_transposition_table {
            return None;
        }
        let value = self.tt.probe(hash)?.cutoff(depth, alpha, beta)?;
        self.stats.tt_hits += 1;
        Some(value)
    }

    fn store(&mut self, hash: u64, value: Score, depth: u8, bound: Bound) {
        if self.config.use_transposition_table {
            self.tt.store(hash, TtEntry { value, depth, bound });
        }
    }
}

/// Searches `board` with a fresh engine and default settings.
pub fn find_best_move(board: &mut GameBoard, max_depth: u8, side: Color) -> Option<ScoredMove> {
    Engine::default().find_best_move(board, max_depth, side)
}

#[cfg(test)]
mod tests;
