// src/game/evaluation/pawn_structure.rs

use super::threats::{valuable_targets, Exposure};
use super::{adjacent_files, pst, ranks_ahead, KingPressure, SideScore, CENTER};
use crate::constants::{
    BACKWARD_PAWN_PENALTY, DOUBLED_PAWN_PENALTY, ISOLATED_PAWN_PENALTY, PASSED_PAWN_BONUS,
    PAWN_CENTER_CONTROL_BONUS, PAWN_CHAIN_BONUS, PAWN_EXCESS_ATTACKER_PENALTY,
    PAWN_HANGING_PENALTY, VALUABLE_PAWN_CAPTURE_BONUS,
};
use shakmaty::{attacks, Bitboard, Board, Color, File, Piece, Role, Square};

/// Raw pawn-structure features of one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnCounts {
    pub doubled: i32,
    pub isolated: i32,
    pub passed: i32,
    pub center: i32,
    pub valuable_captures: i32,
    pub backward: i32,
    pub chain: i32,
}

impl PawnCounts {
    pub fn weighted(&self) -> i32 {
        -self.doubled * DOUBLED_PAWN_PENALTY - self.isolated * ISOLATED_PAWN_PENALTY
            + self.passed * PASSED_PAWN_BONUS
            + self.center * PAWN_CENTER_CONTROL_BONUS
            + self.valuable_captures * VALUABLE_PAWN_CAPTURE_BONUS
            - self.backward * BACKWARD_PAWN_PENALTY
            + self.chain * PAWN_CHAIN_BONUS
    }
}

pub fn evaluate(board: &Board, color: Color, pressure: &mut KingPressure) -> SideScore {
    let our_pawns = board.by_piece(Piece { role: Role::Pawn, color });
    if our_pawns.is_empty() {
        return SideScore::default();
    }

    for file in File::ALL {
        let on_file = our_pawns & Bitboard::from_file(file);
        if !on_file.is_empty() {
            pressure.record(board, color, attack_span(color, on_file), true);
        }
    }

    let mut placement = 0;
    for square in our_pawns {
        placement += pst::square_value(Role::Pawn, color, square, false);
        placement -= capture_risk(board, square, color);
    }

    SideScore {
        term: count(board, color).weighted(),
        placement,
    }
}

pub fn count(board: &Board, color: Color) -> PawnCounts {
    let our_pawns = board.by_piece(Piece { role: Role::Pawn, color });
    let their_pawns = board.by_piece(Piece { role: Role::Pawn, color: !color });
    let targets = valuable_targets(board, color);
    let mut counts = PawnCounts::default();

    for file in File::ALL {
        let on_file = our_pawns & Bitboard::from_file(file);
        let n = on_file.count() as i32;
        if n == 0 {
            continue;
        }
        if n > 1 {
            counts.doubled += n - 1;
        }
        if (our_pawns & adjacent_files(file)).is_empty() {
            counts.isolated += n;
        }
        counts.valuable_captures += (attack_span(color, on_file) & targets).count() as i32;
    }

    for square in our_pawns {
        if is_passed(color, square, their_pawns) {
            counts.passed += 1;
        }
        if is_backward(color, square, our_pawns) {
            counts.backward += 1;
        }
        // Friendly pawns standing where they defend this one.
        counts.chain += (attacks::pawn_attacks(!color, square) & our_pawns).count() as i32;
    }

    counts.center = (our_pawns & CENTER).count() as i32;
    counts
}

fn attack_span(color: Color, pawns: Bitboard) -> Bitboard {
    let mut span = Bitboard::EMPTY;
    for square in pawns {
        span |= attacks::pawn_attacks(color, square);
    }
    span
}

/// No enemy pawn ahead on this file or an adjacent one.
fn is_passed(color: Color, square: Square, their_pawns: Bitboard) -> bool {
    let lanes = Bitboard::from_file(square.file()) | adjacent_files(square.file());
    (their_pawns & lanes & ranks_ahead(color, square.rank())).is_empty()
}

/// Has neighbours on the adjacent files, but every one of them has already
/// advanced past it. Pawns without neighbours count as isolated instead.
fn is_backward(color: Color, square: Square, our_pawns: Bitboard) -> bool {
    let neighbours = our_pawns & adjacent_files(square.file());
    !neighbours.is_empty() && (neighbours & !ranks_ahead(color, square.rank())).is_empty()
}

fn capture_risk(board: &Board, square: Square, color: Color) -> i32 {
    let exposure = Exposure::of(board, square, color);
    if exposure.is_hanging() {
        PAWN_HANGING_PENALTY
    } else {
        exposure.excess() * PAWN_EXCESS_ATTACKER_PENALTY
    }
}
