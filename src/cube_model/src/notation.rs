//! Standard move notation, e.g. `R U R' U'` or `F2 B2`.
//!
//! A face letter alone is a clockwise quarter turn, a trailing `'` makes it
//! counter-clockwise and a trailing `2` makes it a half turn. A half turn
//! expands into two quarter turns.

use itertools::Itertools;
use thiserror::Error;

use crate::{face::Face, rotation::Turn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Move {index} (`{token}`) does not start with a face letter (U, D, L, R, F, B)")]
    UnknownFace { token: String, index: usize },
    #[error("Move {index} (`{token}`) has an unknown modifier `{modifier}`")]
    UnknownModifier {
        token: String,
        modifier: String,
        index: usize,
    },
}

/// Parse a whitespace separated sequence of moves into quarter turns.
pub fn parse_moves(sequence: &str) -> Result<Vec<Turn>, NotationError> {
    let mut turns = Vec::new();

    for (index, token) in sequence.split_whitespace().enumerate() {
        let split = token.chars().next().map_or(0, char::len_utf8);
        let (letter, modifier) = token.split_at(split);

        let Ok(face) = letter.parse::<Face>() else {
            return Err(NotationError::UnknownFace {
                token: token.to_owned(),
                index,
            });
        };

        let (clockwise, count) = match modifier {
            "" => (true, 1),
            "'" => (false, 1),
            "2" => (true, 2),
            "2'" | "'2" => (false, 2),
            _ => {
                return Err(NotationError::UnknownModifier {
                    token: token.to_owned(),
                    modifier: modifier.to_owned(),
                    index,
                });
            }
        };

        turns.extend(std::iter::repeat_n(Turn::new(face, clockwise), count));
    }

    Ok(turns)
}

/// Write quarter turns back out, one move per turn.
pub fn format_moves(turns: &[Turn]) -> String {
    turns.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_sequence() {
        let turns = parse_moves("R U R' U'").unwrap();
        assert_eq!(
            turns,
            vec![
                Turn::new(Face::Right, true),
                Turn::new(Face::Up, true),
                Turn::new(Face::Right, false),
                Turn::new(Face::Up, false),
            ]
        );
        assert_eq!(format_moves(&turns), "R U R' U'");
    }

    #[test]
    fn half_turns_expand() {
        let turns = parse_moves("f2  b2'").unwrap();
        assert_eq!(
            turns,
            vec![
                Turn::new(Face::Front, true),
                Turn::new(Face::Front, true),
                Turn::new(Face::Back, false),
                Turn::new(Face::Back, false),
            ]
        );
    }

    #[test]
    fn empty_sequence_is_empty() {
        assert_eq!(parse_moves("   "), Ok(vec![]));
    }

    #[test]
    fn reports_bad_tokens() {
        assert_eq!(
            parse_moves("R X"),
            Err(NotationError::UnknownFace {
                token: "X".to_owned(),
                index: 1,
            })
        );
        assert_eq!(
            parse_moves("U3"),
            Err(NotationError::UnknownModifier {
                token: "U3".to_owned(),
                modifier: "3".to_owned(),
                index: 0,
            })
        );
        assert!(matches!(
            parse_moves("é"),
            Err(NotationError::UnknownFace { index: 0, .. })
        ));
    }
}
