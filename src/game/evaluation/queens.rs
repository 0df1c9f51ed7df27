//! Queens only contribute their table value and king pressure; their material
//! is counted with everything else.

use super::{pst, KingPressure, SideScore};
use crate::constants::EARLY_GAME_ENEMY_UNITS;
use shakmaty::{attacks, Board, Color, Piece, Role};

pub fn evaluate(board: &Board, color: Color, pressure: &mut KingPressure) -> SideScore {
    let queens = board.by_piece(Piece {
        role: Role::Queen,
        color,
    });
    let early_game = board.by_color(!color).count() > EARLY_GAME_ENEMY_UNITS;
    let occupied = board.occupied();
    let mut score = SideScore::default();

    for square in queens {
        score.placement += pst::square_value(Role::Queen, color, square, early_game);
        // Queen checks only start paying once the opponent's army has thinned out.
        pressure.record(board, color, attacks::queen_attacks(square, occupied), !early_game);
    }

    score
}
