//! Evaluation terms for bishops.

use super::threats::Exposure;
use super::{pst, KingPressure, SideScore, CENTER};
use crate::constants::{
    BISHOP_CENTER_BONUS, BISHOP_EXCESS_ATTACKER_PENALTY, BISHOP_HANGING_PENALTY,
    BISHOP_MOBILITY_BONUS, BISHOP_PAIR_BONUS, BISHOP_PAWN_THREAT_PENALTY,
};
use shakmaty::{attacks, Board, Color, Piece, Role, Square};

/// Evaluates the placement of bishops.
pub fn evaluate(board: &Board, color: Color, pressure: &mut KingPressure) -> SideScore {
    let bishops = board.by_piece(Piece {
        role: Role::Bishop,
        color,
    });
    if bishops.is_empty() {
        return SideScore::default();
    }

    let occupied = board.occupied();
    let mut score = SideScore::default();

    if bishops.count() > 1 {
        score.term += BISHOP_PAIR_BONUS;
    }

    for square in bishops {
        let reach = attacks::bishop_attacks(square, occupied);
        score.term += reach.count() as i32 * BISHOP_MOBILITY_BONUS;
        pressure.record(board, color, reach, true);

        score.placement += pst::square_value(Role::Bishop, color, square, false);
        score.placement -= capture_risk(board, square, color);
    }

    score.term += (bishops & CENTER).count() as i32 * BISHOP_CENTER_BONUS;
    score
}

fn capture_risk(board: &Board, square: Square, color: Color) -> i32 {
    let exposure = Exposure::of(board, square, color);
    if exposure.attacked_by(board, Role::Pawn) {
        BISHOP_PAWN_THREAT_PENALTY
    } else if exposure.is_hanging() {
        BISHOP_HANGING_PENALTY
    } else {
        exposure.excess() * BISHOP_EXCESS_ATTACKER_PENALTY
    }
}
