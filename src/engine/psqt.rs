//! Square-value tables.
//!
//! Classic per-piece positional bonus tables from white's perspective,
//! indexed by `Square as usize` (a1 = 0, rank-major). Black's tables
//! are derived once at compile time by mirroring ranks and flipping the
//! sign, so a single signed lookup covers both colors. All tables are
//! read-only after initialization.

use shakmaty::{Color, Role, Square};

pub const PAWN_TABLE: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

pub const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

pub const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

pub const ROOK_TABLE: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

pub const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

pub const KING_TABLE: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// Mirror ranks and flip sign: white's table viewed from black's side.
const fn mirrored(table: [i32; 64]) -> [i32; 64] {
    let mut out = [0i32; 64];
    let mut i = 0usize;
    while i < 64 {
        out[i] = -table[i ^ 56];
        i += 1;
    }
    out
}

static PAWN_TABLE_BLACK: [i32; 64] = mirrored(PAWN_TABLE);
static KNIGHT_TABLE_BLACK: [i32; 64] = mirrored(KNIGHT_TABLE);
static BISHOP_TABLE_BLACK: [i32; 64] = mirrored(BISHOP_TABLE);
static ROOK_TABLE_BLACK: [i32; 64] = mirrored(ROOK_TABLE);
static QUEEN_TABLE_BLACK: [i32; 64] = mirrored(QUEEN_TABLE);
static KING_TABLE_BLACK: [i32; 64] = mirrored(KING_TABLE);

/// Positional bonus of a piece standing on `sq`, signed in the fixed
/// white-positive convention (white bonuses positive, black negative).
pub fn bonus(color: Color, role: Role, sq: Square) -> i32 {
    let table: &[i32; 64] = match (color, role) {
        (Color::White, Role::Pawn) => &PAWN_TABLE,
        (Color::White, Role::Knight) => &KNIGHT_TABLE,
        (Color::White, Role::Bishop) => &BISHOP_TABLE,
        (Color::White, Role::Rook) => &ROOK_TABLE,
        (Color::White, Role::Queen) => &QUEEN_TABLE,
        (Color::White, Role::King) => &KING_TABLE,
        (Color::Black, Role::Pawn) => &PAWN_TABLE_BLACK,
        (Color::Black, Role::Knight) => &KNIGHT_TABLE_BLACK,
        (Color::Black, Role::Bishop) => &BISHOP_TABLE_BLACK,
        (Color::Black, Role::Rook) => &ROOK_TABLE_BLACK,
        (Color::Black, Role::Queen) => &QUEEN_TABLE_BLACK,
        (Color::Black, Role::King) => &KING_TABLE_BLACK,
    };
    table[sq as usize]
}
