//! Evaluation terms for rooks.

use super::threats::Exposure;
use super::{pst, KingPressure, SideScore};
use crate::constants::{
    ROOK_EXCESS_ATTACKER_PENALTY, ROOK_HANGING_PENALTY, ROOK_MINOR_THREAT_PENALTY,
    ROOK_MOBILITY_BONUS, ROOK_OPEN_LINE_BONUS, ROOK_PAWN_THREAT_PENALTY, STACKED_ROOKS_BONUS,
};
use shakmaty::{attacks, Bitboard, Board, Color, File, Piece, Rank, Role, Square};

/// Evaluates the placement of rooks.
pub fn evaluate(board: &Board, color: Color, pressure: &mut KingPressure) -> SideScore {
    let rooks = board.by_piece(Piece {
        role: Role::Rook,
        color,
    });
    if rooks.is_empty() {
        return SideScore::default();
    }

    let occupied = board.occupied();
    let mut score = SideScore::default();

    score.term += stacked_lines(rooks) * STACKED_ROOKS_BONUS;

    for square in rooks {
        score.term += open_lines(board, color, square) * ROOK_OPEN_LINE_BONUS;

        let reach = attacks::rook_attacks(square, occupied);
        score.term += reach.count() as i32 * ROOK_MOBILITY_BONUS;
        pressure.record(board, color, reach, true);

        score.placement += pst::square_value(Role::Rook, color, square, false);
        score.placement -= capture_risk(board, square, color);
    }

    score
}

/// Files and ranks holding two or more of these rooks.
fn stacked_lines(rooks: Bitboard) -> i32 {
    let files = File::ALL
        .into_iter()
        .filter(|&file| (rooks & Bitboard::from_file(file)).count() >= 2)
        .count();
    let ranks = Rank::ALL
        .into_iter()
        .filter(|&rank| (rooks & Bitboard::from_rank(rank)).count() >= 2)
        .count();
    (files + ranks) as i32
}

/// The rook's file and rank, each counted when no opponent pawn stands on it.
/// Our own pawns do not close a line here.
fn open_lines(board: &Board, color: Color, square: Square) -> i32 {
    let their_pawns = board.by_piece(Piece {
        role: Role::Pawn,
        color: !color,
    });
    let mut open = 0;
    if (their_pawns & Bitboard::from_file(square.file())).is_empty() {
        open += 1;
    }
    if (their_pawns & Bitboard::from_rank(square.rank())).is_empty() {
        open += 1;
    }
    open
}

fn capture_risk(board: &Board, square: Square, color: Color) -> i32 {
    let exposure = Exposure::of(board, square, color);
    if exposure.is_hanging() {
        ROOK_HANGING_PENALTY
    } else if exposure.attacked_by(board, Role::Pawn) {
        ROOK_PAWN_THREAT_PENALTY
    } else if exposure.attacked_by(board, Role::Knight) || exposure.attacked_by(board, Role::Bishop) {
        if exposure.defender_count() < exposure.attacker_count() {
            ROOK_MINOR_THREAT_PENALTY
        } else {
            0
        }
    } else {
        exposure.excess() * ROOK_EXCESS_ATTACKER_PENALTY
    }
}
