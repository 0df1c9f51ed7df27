//! Evaluation terms for knights.

use super::threats::Exposure;
use super::{pst, KingPressure, SideScore};
use crate::constants::{
    KNIGHT_EXCESS_ATTACKER_PENALTY, KNIGHT_HANGING_PENALTY, KNIGHT_MOBILITY_BONUS,
    KNIGHT_PAWN_THREAT_PENALTY,
};
use shakmaty::{attacks, Board, Color, Piece, Role, Square};

/// Evaluates the placement of knights.
pub fn evaluate(board: &Board, color: Color, pressure: &mut KingPressure) -> SideScore {
    let knights = board.by_piece(Piece {
        role: Role::Knight,
        color,
    });
    let friendly = board.by_color(color);
    let mut score = SideScore::default();

    for square in knights {
        let reach = attacks::knight_attacks(square);
        pressure.record(board, color, reach, true);
        score.term += (reach & !friendly).count() as i32 * KNIGHT_MOBILITY_BONUS;

        score.placement += pst::square_value(Role::Knight, color, square, false);
        score.placement -= capture_risk(board, square, color);
    }

    score
}

fn capture_risk(board: &Board, square: Square, color: Color) -> i32 {
    let exposure = Exposure::of(board, square, color);
    if exposure.is_hanging() {
        KNIGHT_HANGING_PENALTY
    } else if exposure.attacked_by(board, Role::Pawn) {
        KNIGHT_PAWN_THREAT_PENALTY
    } else {
        exposure.excess() * KNIGHT_EXCESS_ATTACKER_PENALTY
    }
}
