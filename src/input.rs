//! Parsing of the `ddddd-ddddd` puzzle notation: five top-row digits, a
//! hyphen, five bottom-row digits, every digit 0-9 exactly once.

use std::str::FromStr;

use crate::error::InputError;
use crate::puzzle::{Arrangement, ROW_LEN, SLOTS};

const LINE_LEN: usize = SLOTS + 1;

/// Parses one line of input. A blank line selects the default scramble.
pub fn parse_puzzle(line: &str) -> Result<Arrangement, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(Arrangement::DEFAULT_SCRAMBLE);
    }
    line.parse()
}

impl FromStr for Arrangement {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != LINE_LEN {
            return Err(InputError::WrongLength { len: chars.len() });
        }

        let mut tiles = [0; SLOTS];
        let mut slot = 0;
        for (position, &ch) in chars.iter().enumerate() {
            if position == ROW_LEN {
                if ch != '-' {
                    return Err(InputError::MisplacedSeparator { found: ch });
                }
                continue;
            }

            let digit = ch
                .to_digit(10)
                .ok_or(InputError::InvalidCharacter { ch, position })?;
            tiles[slot] = digit as u8;
            slot += 1;
        }

        Arrangement::new(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_matches_default_scramble() {
        assert_eq!(parse_puzzle("12067-59348"), Ok(Arrangement::DEFAULT_SCRAMBLE));
        assert_eq!(parse_puzzle("12067-59348\n"), Ok(Arrangement::DEFAULT_SCRAMBLE));
    }

    #[test]
    fn blank_line_selects_default() {
        assert_eq!(parse_puzzle(""), Ok(Arrangement::DEFAULT_SCRAMBLE));
        assert_eq!(parse_puzzle("\r\n"), Ok(Arrangement::DEFAULT_SCRAMBLE));
    }

    #[test]
    fn rows_land_in_slot_order() {
        let arrangement: Arrangement = "98765-43210".parse().unwrap();
        assert_eq!(arrangement.top(), &[9, 8, 7, 6, 5]);
        assert_eq!(arrangement.bottom(), &[4, 3, 2, 1, 0]);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            parse_puzzle("12067-5934"),
            Err(InputError::WrongLength { len: 10 })
        );
        assert_eq!(
            parse_puzzle("1206759348"),
            Err(InputError::WrongLength { len: 10 })
        );
    }

    #[test]
    fn rejects_misplaced_hyphen() {
        assert_eq!(
            parse_puzzle("120675-9348"),
            Err(InputError::MisplacedSeparator { found: '5' })
        );
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            parse_puzzle("12a67-59348"),
            Err(InputError::InvalidCharacter { ch: 'a', position: 2 })
        );
        assert_eq!(
            parse_puzzle("12067-5934-"),
            Err(InputError::InvalidCharacter { ch: '-', position: 10 })
        );
    }

    #[test]
    fn rejects_duplicate_digits() {
        assert_eq!(
            parse_puzzle("12067-59341"),
            Err(InputError::DuplicateDigit(1))
        );
    }
}
