//! Evaluation of a chess position.
//!
//! Every term is computed once per side and folded in as `white - black`, so
//! the final score is always relative to White: positive favours White,
//! negative favours Black. Converting to the mover's point of view is the
//! search's job.

pub mod pst;
pub mod pawn_structure;
pub mod bishops;
pub mod knights;
pub mod rooks;
pub mod queens;
pub mod king_safety;
pub mod threats;

use crate::constants::{
    BISHOP_VALUE, CHECK_BONUS, KING_RESTRICTION_BONUS, KNIGHT_VALUE, MATE_SCORE, PAWN_VALUE,
    QUEEN_VALUE, ROOK_VALUE,
};
use crate::game::board::{GameBoard, Terminal};
use serde::Serialize;
use shakmaty::{attacks, Bitboard, Board, Color, File, Piece, Rank, Role};

pub type Score = i32;

/// d4, e4, d5 and e5.
pub const CENTER: Bitboard = Bitboard(0x0000_0018_1800_0000);

/// `1` for White, `-1` for Black.
pub fn sign(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

pub fn get_piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => 0,
    }
}

/// The files directly left and right of `file`.
pub fn adjacent_files(file: File) -> Bitboard {
    let idx = file.to_u32();
    let mut files = Bitboard::EMPTY;
    if idx > 0 {
        files |= Bitboard::from_file(File::new(idx - 1));
    }
    if idx < 7 {
        files |= Bitboard::from_file(File::new(idx + 1));
    }
    files
}

/// Every rank strictly in front of `rank` from `color`'s side of the board.
pub fn ranks_ahead(color: Color, rank: Rank) -> Bitboard {
    let r = rank.to_u32();
    match color {
        Color::White => Bitboard(u64::MAX.checked_shl(8 * (r + 1)).unwrap_or(0)),
        Color::Black => Bitboard((1u64 << (8 * r)) - 1),
    }
}

/// What one side's pieces of a role contribute, from that side's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideScore {
    /// Structural/mobility term, already weighted.
    pub term: Score,
    /// Table bonuses minus capture-risk penalties.
    pub placement: Score,
}

/// Running White-relative total of checks and king-zone hits.
///
/// Each piece evaluator feeds the attack sets of its pieces in here as it goes.
#[derive(Clone, Copy, Debug, Default)]
pub struct KingPressure {
    score: Score,
}

impl KingPressure {
    pub fn record(&mut self, board: &Board, color: Color, attacks: Bitboard, count_checks: bool) {
        let Some(enemy_king) = board.king_of(!color) else {
            return;
        };
        if count_checks && attacks.contains(enemy_king) {
            self.score += sign(color) * CHECK_BONUS;
        }
        if !(attacks & attacks::king_attacks(enemy_king)).is_empty() {
            self.score += sign(color) * KING_RESTRICTION_BONUS;
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

/// Per-term report of a static evaluation, all values White-relative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EvalBreakdown {
    pub material: Score,
    pub pawn_structure: Score,
    pub bishops: Score,
    pub knights: Score,
    pub rooks: Score,
    pub king_safety: Score,
    pub placement: Score,
    pub king_pressure: Score,
    pub terminal: bool,
    pub total: Score,
}

impl EvalBreakdown {
    fn terminal(total: Score) -> Self {
        Self {
            terminal: true,
            total,
            ..Self::default()
        }
    }
}

/// A single-use static evaluator.
///
/// Scoring consumes the evaluator, so the king-pressure accumulator can never
/// carry over from one evaluation into the next.
pub struct Evaluator<'a> {
    board: &'a Board,
    terminal: Terminal,
    perspective: Color,
    pressure: KingPressure,
}

impl<'a> Evaluator<'a> {
    pub fn new(game: &'a GameBoard, perspective: Color) -> Self {
        Self {
            board: game.board(),
            terminal: game.terminal(),
            perspective,
            pressure: KingPressure::default(),
        }
    }

    pub fn static_eval(self) -> Score {
        self.breakdown().total
    }

    pub fn breakdown(mut self) -> EvalBreakdown {
        if let Some(score) = self.terminal_score() {
            return EvalBreakdown::terminal(score);
        }

        let board = self.board;
        let mut report = EvalBreakdown {
            material: material_balance(board),
            ..EvalBreakdown::default()
        };

        for color in Color::ALL {
            let s = sign(color);

            let pawns = pawn_structure::evaluate(board, color, &mut self.pressure);
            let bishops = bishops::evaluate(board, color, &mut self.pressure);
            let knights = knights::evaluate(board, color, &mut self.pressure);
            let rooks = rooks::evaluate(board, color, &mut self.pressure);
            let queens = queens::evaluate(board, color, &mut self.pressure);
            let king = king_safety::evaluate(board, color);

            report.pawn_structure += s * pawns.term;
            report.bishops += s * bishops.term;
            report.knights += s * knights.term;
            report.rooks += s * rooks.term;
            report.king_safety += s * king.term;
            report.placement += s
                * (pawns.placement
                    + bishops.placement
                    + knights.placement
                    + rooks.placement
                    + queens.placement
                    + king.placement);
        }
        report.king_pressure = self.pressure.score();

        report.total = report.material
            + report.pawn_structure
            + report.bishops
            + report.knights
            + report.rooks
            + report.king_safety
            + report.placement
            + report.king_pressure;
        report
    }

    fn terminal_score(&self) -> Option<Score> {
        let white = self.perspective == Color::White;
        match self.terminal {
            Terminal::None => None,
            Terminal::Draw => Some(0),
            Terminal::Loss => Some(if white { -MATE_SCORE } else { MATE_SCORE }),
            Terminal::Win => Some(if white { MATE_SCORE } else { -MATE_SCORE }),
        }
    }
}

/// White-relative static score of `game`, judged with the side to move as perspective.
pub fn evaluate(game: &GameBoard) -> Score {
    Evaluator::new(game, game.turn()).static_eval()
}

fn material_balance(board: &Board) -> Score {
    let mut balance = 0;
    for color in Color::ALL {
        for role in [Role::Pawn, Role::Knight, Role::Bishop, Role::Rook, Role::Queen] {
            let count = board.by_piece(Piece { role, color }).count() as i32;
            balance += sign(color) * count * get_piece_value(role);
        }
    }
    balance
}
