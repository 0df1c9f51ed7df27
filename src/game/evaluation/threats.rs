//! Attacker/defender bookkeeping for the capture-risk penalties.
//!
//! Every piece evaluator asks the same question about its pieces: how many
//! enemy units hit this square, and how many friendly units cover it. The
//! penalties differ per role, the counting does not.

use shakmaty::{Bitboard, Board, Color, Piece, Role, Square};

#[derive(Clone, Copy, Debug)]
pub struct Exposure {
    pub attackers: Bitboard,
    pub defenders: Bitboard,
}

impl Exposure {
    /// Attackers and defenders of the `color` piece standing on `square`.
    pub fn of(board: &Board, square: Square, color: Color) -> Self {
        let occupied = board.occupied();
        Self {
            attackers: board.attacks_to(square, !color, occupied) & board.by_color(!color),
            defenders: board.attacks_to(square, color, occupied) & board.by_color(color),
        }
    }

    pub fn attacker_count(&self) -> i32 {
        self.attackers.count() as i32
    }

    pub fn defender_count(&self) -> i32 {
        self.defenders.count() as i32
    }

    pub fn is_hanging(&self) -> bool {
        !self.attackers.is_empty() && self.defenders.is_empty()
    }

    pub fn attacked_by(&self, board: &Board, role: Role) -> bool {
        !(self.attackers & board.by_role(role)).is_empty()
    }

    /// Attackers in excess of defenders, zero when the square is held.
    pub fn excess(&self) -> i32 {
        (self.attacker_count() - self.defender_count()).max(0)
    }
}

/// Enemy material a pawn capture can profitably land on: everything but pawns and the king.
pub fn valuable_targets(board: &Board, color: Color) -> Bitboard {
    board.by_color(!color)
        & !board.by_piece(Piece { role: Role::Pawn, color: !color })
        & !board.by_piece(Piece { role: Role::King, color: !color })
}
