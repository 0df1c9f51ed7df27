//! Piece-Square Tables (PSTs) for chess evaluation.
//!
//! Row 0 of every table is the owner's promotion rank. Black reads the tables
//! as written (row index = rank index), White reads the vertical mirror, so
//! both colours get the same bonus for the same relative placement.

use shakmaty::{Color, Role, Square};

type Pst = [[i32; 8]; 8];

const fn flip(pst: &Pst) -> Pst {
    let mut flipped = [[0; 8]; 8];
    let mut i = 0;
    while i < 8 {
        let mut j = 0;
        while j < 8 {
            flipped[i][j] = pst[7 - i][j];
            j += 1;
        }
        i += 1;
    }
    flipped
}

#[rustfmt::skip]
const PAWN_PST: Pst = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10, -10, -10, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_PST: Pst = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_PST: Pst = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,  10,   0,   0,   0,   0,  10, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_PST: Pst = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

// Keeps the queen at home while the opponent still has most of its army.
#[rustfmt::skip]
const QUEEN_PST_EARLY: Pst = [
    [-30, -20, -20, -20, -20, -20, -20, -30],
    [-20, -20, -10, -10, -10, -10, -20, -20],
    [-20, -10,  -5,  -5,  -5,  -5, -10, -20],
    [-10, -10,  -5,  -5,  -5,  -5, -10, -10],
    [-10, -10,  -5,  -5,  -5,  -5, -10, -10],
    [-20, -10,  -5,  -5,  -5,  -5, -10, -20],
    [-20, -20, 100, 100, 100, 100, -20, -20],
    [-30,  50, 120, 150, 150, 120,  50, -30],
];

#[rustfmt::skip]
const QUEEN_PST_LATE: Pst = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_PST: Pst = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

const WHITE_PAWN_PST: Pst = flip(&PAWN_PST);
const WHITE_KNIGHT_PST: Pst = flip(&KNIGHT_PST);
const WHITE_BISHOP_PST: Pst = flip(&BISHOP_PST);
const WHITE_ROOK_PST: Pst = flip(&ROOK_PST);
const WHITE_QUEEN_PST_EARLY: Pst = flip(&QUEEN_PST_EARLY);
const WHITE_QUEEN_PST_LATE: Pst = flip(&QUEEN_PST_LATE);
const WHITE_KING_PST: Pst = flip(&KING_PST);

fn table(role: Role, color: Color, early_game: bool) -> &'static Pst {
    match (color, role) {
        (Color::White, Role::Pawn) => &WHITE_PAWN_PST,
        (Color::White, Role::Knight) => &WHITE_KNIGHT_PST,
        (Color::White, Role::Bishop) => &WHITE_BISHOP_PST,
        (Color::White, Role::Rook) => &WHITE_ROOK_PST,
        (Color::White, Role::Queen) if early_game => &WHITE_QUEEN_PST_EARLY,
        (Color::White, Role::Queen) => &WHITE_QUEEN_PST_LATE,
        (Color::White, Role::King) => &WHITE_KING_PST,
        (Color::Black, Role::Pawn) => &PAWN_PST,
        (Color::Black, Role::Knight) => &KNIGHT_PST,
        (Color::Black, Role::Bishop) => &BISHOP_PST,
        (Color::Black, Role::Rook) => &ROOK_PST,
        (Color::Black, Role::Queen) if early_game => &QUEEN_PST_EARLY,
        (Color::Black, Role::Queen) => &QUEEN_PST_LATE,
        (Color::Black, Role::King) => &KING_PST,
    }
}

/// Table bonus for a `color` `role` standing on `square`, from that side's view.
///
/// `early_game` only changes the queen's table.
pub fn square_value(role: Role, color: Color, square: Square, early_game: bool) -> i32 {
    let rank = square.rank().to_u32() as usize;
    let file = square.file().to_u32() as usize;
    table(role, color, early_game)[rank][file]
}
