use std::{fs, path::Path};

use eyre::WrapErr;
use thiserror::Error;

use crate::algorithms::pathfinding::Solution;
use crate::maze::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyMismatch {
    #[error("start {pos} is marked {found:?}, expected 'A'")]
    Start { pos: Position, found: char },

    #[error("end {pos} is marked {found:?}, expected 'B'")]
    End { pos: Position, found: char },

    #[error("path cell #{index} {pos} is marked {found:?}, expected '*'")]
    Interior {
        index: usize,
        pos: Position,
        found: char,
    },

    #[error("path cell #{index} {pos} lies outside the {rows}x{cols} key")]
    OutOfBounds {
        index: usize,
        pos: Position,
        rows: usize,
        cols: usize,
    },
}

/// A rendered solution read back as a character grid.
#[derive(Debug, Clone)]
pub struct AnswerKey {
    grid: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
}

impl AnswerKey {
    /// Reads up to `rows` lines of up to `cols` characters. Anything the text
    /// does not cover reads as a blank.
    pub fn parse(text: &str, rows: usize, cols: usize) -> Self {
        let mut grid = vec![vec![' '; cols]; rows];
        for (line, slots) in text.lines().zip(grid.iter_mut()) {
            for (c, slot) in line.chars().zip(slots.iter_mut()) {
                *slot = c;
            }
        }
        Self { grid, rows, cols }
    }

    pub fn load(path: impl AsRef<Path>, rows: usize, cols: usize) -> eyre::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read answer key {}", path.display()))?;
        Ok(Self::parse(&text, rows, cols))
    }

    pub fn marker(&self, pos: Position) -> Option<char> {
        self.grid.get(pos.row)?.get(pos.col).copied()
    }

    /// Checks that the key marks the solution: `A` first, `B` last, `*` between.
    pub fn verify(&self, solution: &Solution) -> Result<(), KeyMismatch> {
        let last = solution.len().saturating_sub(1);

        for (index, pos) in solution.iter().enumerate() {
            let found = self.marker(pos).ok_or(KeyMismatch::OutOfBounds {
                index,
                pos,
                rows: self.rows,
                cols: self.cols,
            })?;

            if index == 0 {
                if found != 'A' {
                    return Err(KeyMismatch::Start { pos, found });
                }
            } else if index == last {
                if found != 'B' {
                    return Err(KeyMismatch::End { pos, found });
                }
            } else if found != '*' {
                return Err(KeyMismatch::Interior { index, pos, found });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(cells: &[(usize, usize)]) -> Solution {
        Solution::new(cells.iter().copied().map(Position::from).collect())
    }

    #[test]
    fn accepts_matching_key() {
        let key = AnswerKey::parse("A.#\n**B\n", 2, 3);
        assert_eq!(key.verify(&solution(&[(0, 0), (1, 0), (1, 1), (1, 2)])), Ok(()));
    }

    #[test]
    fn reports_first_mismatch() {
        let key = AnswerKey::parse("A.#\n*.B\n", 2, 3);
        assert_eq!(
            key.verify(&solution(&[(0, 0), (1, 0), (1, 1), (1, 2)])),
            Err(KeyMismatch::Interior {
                index: 2,
                pos: Position::new(1, 1),
                found: '.'
            })
        );

        let key = AnswerKey::parse("*B", 1, 2);
        assert!(matches!(
            key.verify(&solution(&[(0, 0), (0, 1)])),
            Err(KeyMismatch::Start { found: '*', .. })
        ));

        let key = AnswerKey::parse("A*", 1, 2);
        assert!(matches!(
            key.verify(&solution(&[(0, 0), (0, 1)])),
            Err(KeyMismatch::End { found: '*', .. })
        ));
    }

    #[test]
    fn short_text_reads_blank() {
        let key = AnswerKey::parse("A\n", 2, 2);
        assert_eq!(key.marker(Position::new(0, 1)), Some(' '));
        assert_eq!(key.marker(Position::new(1, 1)), Some(' '));
        assert_eq!(key.marker(Position::new(2, 0)), None);
    }

    #[test]
    fn long_text_is_clipped() {
        let key = AnswerKey::parse("AxB\nzzz\nqqq", 2, 2);
        assert_eq!(key.marker(Position::new(0, 1)), Some('x'));
        assert_eq!(key.marker(Position::new(0, 2)), None);
        assert_eq!(key.marker(Position::new(2, 0)), None);
    }

    #[test]
    fn solution_past_key_grid() {
        let key = AnswerKey::parse("A*", 1, 2);
        assert!(matches!(
            key.verify(&solution(&[(0, 0), (0, 1), (0, 2)])),
            Err(KeyMismatch::OutOfBounds { index: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("maze-solver-no-such-key.txt");
        assert!(AnswerKey::load(path, 2, 2).is_err());
    }
}
