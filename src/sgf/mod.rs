pub mod extract_moves;
pub mod stone_color;

pub use extract_moves::{
    extract_moves, extract_moves_with, scan_tokens, ExtractOptions, MoveRecord, MoveToken,
    Numbering,
};
pub use stone_color::StoneColor;
