// --- Scores ---
pub const MATE_SCORE: i32 = 99_999;
/// Sentinel for "no move found yet" and for nodes without legal moves.
pub const INFINITY: i32 = 1_000_000;

// --- Piece values ---
pub const PAWN_VALUE: i32 = 200;
pub const KNIGHT_VALUE: i32 = 600;
pub const BISHOP_VALUE: i32 = 700;
pub const ROOK_VALUE: i32 = 1000;
pub const QUEEN_VALUE: i32 = 1800;

// Queen tables switch from early to late once the enemy has this many units or fewer.
pub const EARLY_GAME_ENEMY_UNITS: usize = 10;

// Pawn Structure Evaluation
pub const DOUBLED_PAWN_PENALTY: i32 = 20;
pub const ISOLATED_PAWN_PENALTY: i32 = 20;
pub const PASSED_PAWN_BONUS: i32 = 50;
pub const PAWN_CENTER_CONTROL_BONUS: i32 = 100;
pub const VALUABLE_PAWN_CAPTURE_BONUS: i32 = 5;
pub const BACKWARD_PAWN_PENALTY: i32 = 20;
pub const PAWN_CHAIN_BONUS: i32 = 30;

// Bishop Evaluation
pub const BISHOP_PAIR_BONUS: i32 = 50;
pub const BISHOP_MOBILITY_BONUS: i32 = 5;
pub const BISHOP_CENTER_BONUS: i32 = 40;

// Knight Evaluation
pub const KNIGHT_MOBILITY_BONUS: i32 = 25;

// Rook Evaluation
pub const ROOK_OPEN_LINE_BONUS: i32 = 35;
pub const STACKED_ROOKS_BONUS: i32 = 25;
pub const ROOK_MOBILITY_BONUS: i32 = 5;

// King pressure, shared by every attacking piece
pub const CHECK_BONUS: i32 = 25;
pub const KING_RESTRICTION_BONUS: i32 = 8;

// King Safety
pub const KING_DOUBLE_ATTACK_PENALTY: i32 = 300;

// Capture risk, per role
pub const PAWN_HANGING_PENALTY: i32 = 40;
pub const PAWN_EXCESS_ATTACKER_PENALTY: i32 = 10;

pub const BISHOP_PAWN_THREAT_PENALTY: i32 = 75;
pub const BISHOP_HANGING_PENALTY: i32 = 75;
pub const BISHOP_EXCESS_ATTACKER_PENALTY: i32 = 15;

pub const KNIGHT_HANGING_PENALTY: i32 = 60;
pub const KNIGHT_PAWN_THREAT_PENALTY: i32 = 50;
pub const KNIGHT_EXCESS_ATTACKER_PENALTY: i32 = 15;

pub const ROOK_HANGING_PENALTY: i32 = 125;
pub const ROOK_PAWN_THREAT_PENALTY: i32 = 125;
pub const ROOK_MINOR_THREAT_PENALTY: i32 = 50;
pub const ROOK_EXCESS_ATTACKER_PENALTY: i32 = 15;

// Match Settings
pub const MAX_ENGINE_MOVES: u32 = 1000;
