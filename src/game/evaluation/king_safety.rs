// src/game/evaluation/king_safety.rs

use super::threats::Exposure;
use super::{pst, SideScore};
use crate::constants::KING_DOUBLE_ATTACK_PENALTY;
use shakmaty::{Board, Color, Role};

/// Table value of the king plus a flat penalty when two or more enemy units
/// hit the king square at once.
pub fn evaluate(board: &Board, color: Color) -> SideScore {
    let Some(king_square) = board.king_of(color) else {
        return SideScore::default();
    };

    let attackers = Exposure::of(board, king_square, color).attacker_count();
    SideScore {
        term: if attackers >= 2 { -KING_DOUBLE_ATTACK_PENALTY } else { 0 },
        placement: pst::square_value(Role::King, color, king_square, false),
    }
}
