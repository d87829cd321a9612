//! Move extraction from raw SGF text.
//!
//! Only `;B[..]` / `;W[..]` tokens are recognized. Everything else in the
//! record (properties, comments, variations) is ignored by the scan.

use crate::sgf::stone_color::StoneColor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static MOVE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";([BW])\[([a-z]{0,2})\]").expect("valid move token regex"));

/// One stone extracted from a game record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Column, 0 for `a`
    pub x: u32,
    /// Row, 0 for `a`
    pub y: u32,
    pub color: StoneColor,
    /// 1-based position in the scanned token window
    #[serde(rename = "move")]
    pub sequence_index: usize,
}

/// How emitted records are numbered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numbering {
    /// Position among scanned tokens. Skipped tokens leave a gap.
    #[default]
    ScanOrder,
    /// Emitted records numbered 1..N
    Contiguous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Number of tokens scanned, not number of records emitted
    pub limit: usize,
    pub numbering: Numbering,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            numbering: Numbering::ScanOrder,
        }
    }
}

/// A raw move token as found in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToken<'a> {
    pub color: StoneColor,
    /// Bracketed field, 0 to 2 lowercase letters
    pub coordinate: &'a str,
    /// Byte offset of the leading `;`
    pub offset: usize,
}

impl MoveToken<'_> {
    /// Board point for a two-letter coordinate, `None` otherwise
    pub fn point(&self) -> Option<(u32, u32)> {
        match self.coordinate.as_bytes() {
            [col, row] => Some((u32::from(col - b'a'), u32::from(row - b'a'))),
            _ => None,
        }
    }
}

/// Left-to-right, non-overlapping scan of every move token in `text`
pub fn scan_tokens(text: &str) -> impl Iterator<Item = MoveToken<'_>> {
    MOVE_TOKEN_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let color = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(StoneColor::from_marker)?;
        let coordinate = caps.get(2).map_or("", |m| m.as_str());
        Some(MoveToken {
            color,
            coordinate,
            offset: whole.start(),
        })
    })
}

/// Extracts the stones of the first `limit` move tokens.
///
/// Tokens without a two-letter coordinate (passes, truncated fields) are
/// skipped but still count against `limit` and keep their position number.
pub fn extract_moves(text: &str, limit: usize) -> Vec<MoveRecord> {
    extract_moves_with(
        text,
        &ExtractOptions {
            limit,
            numbering: Numbering::ScanOrder,
        },
    )
}

pub fn extract_moves_with(text: &str, options: &ExtractOptions) -> Vec<MoveRecord> {
    let mut records: Vec<MoveRecord> = scan_tokens(text)
        .take(options.limit)
        .enumerate()
        .filter_map(|(i, token)| {
            let Some((x, y)) = token.point() else {
                log::debug!(
                    "Skipping move token {} at byte {}: coordinate {:?}",
                    i + 1,
                    token.offset,
                    token.coordinate
                );
                return None;
            };
            Some(MoveRecord {
                x,
                y,
                color: token.color,
                sequence_index: i + 1,
            })
        })
        .collect();

    if options.numbering == Numbering::Contiguous {
        for (i, record) in records.iter_mut().enumerate() {
            record.sequence_index = i + 1;
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stone(x: u32, y: u32, color: StoneColor, sequence_index: usize) -> MoveRecord {
        MoveRecord {
            x,
            y,
            color,
            sequence_index,
        }
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        for limit in [0, 1, 5, 100] {
            assert!(extract_moves("", limit).is_empty());
        }
    }

    #[test]
    fn test_zero_limit_yields_nothing() {
        assert!(extract_moves(";B[aa];W[bb]", 0).is_empty());
    }

    #[test]
    fn test_coordinate_mapping() {
        assert_eq!(
            extract_moves(";B[bb]", 1),
            vec![stone(1, 1, StoneColor::Black, 1)]
        );
        assert_eq!(
            extract_moves(";W[dc]", 1),
            vec![stone(3, 2, StoneColor::White, 1)]
        );
    }

    #[test]
    fn test_skipped_token_leaves_gap() {
        let moves = extract_moves(";B[aa];W[];B[cc]", 3);
        assert_eq!(
            moves,
            vec![
                stone(0, 0, StoneColor::Black, 1),
                stone(2, 2, StoneColor::Black, 3),
            ]
        );
    }

    #[test]
    fn test_single_letter_coordinate_is_skipped() {
        let moves = extract_moves(";B[a];W[cd]", 2);
        assert_eq!(moves, vec![stone(2, 3, StoneColor::White, 2)]);
    }

    #[test]
    fn test_skipped_tokens_count_against_limit() {
        // the pass at position 2 uses up the window, so `cc` is never reached
        let moves = extract_moves(";B[aa];W[];B[cc]", 2);
        assert_eq!(moves, vec![stone(0, 0, StoneColor::Black, 1)]);
    }

    #[test]
    fn test_contiguous_numbering() {
        let options = ExtractOptions {
            limit: 3,
            numbering: Numbering::Contiguous,
        };
        let moves = extract_moves_with(";B[aa];W[];B[cc]", &options);
        assert_eq!(
            moves,
            vec![
                stone(0, 0, StoneColor::Black, 1),
                stone(2, 2, StoneColor::Black, 2),
            ]
        );
    }

    #[test]
    fn test_truncates_to_limit() {
        let text = ";B[aa];W[bb];B[cc];W[dd];B[ee];W[ff];B[gg];W[hh];B[ii];W[jj]";
        let moves = extract_moves(text, 5);
        assert_eq!(moves.len(), 5);
        for (i, m) in moves.iter().enumerate() {
            assert_eq!(m.x, i as u32);
            assert_eq!(m.y, i as u32);
            assert_eq!(m.sequence_index, i + 1);
            let expected = if i % 2 == 0 {
                StoneColor::Black
            } else {
                StoneColor::White
            };
            assert_eq!(m.color, expected);
        }
    }

    #[test]
    fn test_unknown_marker_is_not_a_token() {
        let moves = extract_moves(";X[aa];B[bb];W[cc]", 2);
        assert_eq!(
            moves,
            vec![
                stone(1, 1, StoneColor::Black, 1),
                stone(2, 2, StoneColor::White, 2),
            ]
        );
    }

    #[test]
    fn test_non_move_properties_are_ignored() {
        let text = "(;GM[1]FF[4]SZ[19]PB[Honinbo]C[;B[zz] looks like a move]\n;B[pd];W[dp])";
        let tokens: Vec<_> = scan_tokens(text).collect();
        // the comment text still matches; the scan has no notion of property values
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].coordinate, "zz");
        assert_eq!(tokens[1].coordinate, "pd");
        assert_eq!(&text[tokens[1].offset..tokens[1].offset + 6], ";B[pd]");
    }

    #[test]
    fn test_uppercase_or_long_coordinates_do_not_match() {
        assert!(extract_moves(";B[AA];W[abc];B[a1]", 10).is_empty());
    }

    #[test]
    fn test_output_bounded_and_increasing() {
        let inputs = [
            "",
            ";B[aa]",
            ";B[];W[];B[]",
            ";B[aa];W[];B[cc];X[dd];W[ee]",
            "(;GM[1];B[pd];W[dp];B[pp];W[dd];B[fq])",
            "noise ;W[ab] more noise ;B[b] ;B[ss]",
        ];
        for text in inputs {
            for limit in 0..8 {
                let moves = extract_moves(text, limit);
                assert!(moves.len() <= limit, "{text:?} limit={limit}");
                assert!(moves
                    .windows(2)
                    .all(|w| w[0].sequence_index < w[1].sequence_index));
                assert!(moves.iter().all(|m| m.sequence_index <= limit));
            }
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(stone(15, 3, StoneColor::Black, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"x": 15, "y": 3, "color": "black", "move": 1})
        );
    }
}
