use std::{fs, path::Path, str::FromStr};

use eyre::WrapErr;

use super::{
    cell::{Cell, Tile},
    grid::Maze,
    position::Position,
};

impl Maze {
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

        let maze = text
            .parse::<Maze>()
            .wrap_err_with(|| format!("invalid maze file {}", path.display()))?;

        log::debug!(
            "loaded {}x{} maze from {}",
            maze.height(),
            maze.width(),
            path.display()
        );

        Ok(maze)
    }
}

/// Reads the text grid format: `#` wall, `A` start, `B` end, `.` or space open.
///
/// The grid may be preceded by a `<rows> <cols>` header, in which case the
/// grid has to agree with it.
impl FromStr for Maze {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let header = lines.first().and_then(|line| parse_header(line));
        let grid_offset = if header.is_some() { 1 } else { 0 };
        let rows = &lines[grid_offset.min(lines.len())..];

        if rows.is_empty() {
            eyre::bail!("maze has no rows");
        }

        let width = rows[0].chars().count();
        if width == 0 {
            eyre::bail!("line {} is empty", grid_offset + 1);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut end = None;

        for (row, line) in rows.iter().enumerate() {
            let line_no = row + grid_offset + 1;
            let len = line.chars().count();
            if len != width {
                eyre::bail!(
                    "line {} has {} columns, expected {} (grid must be rectangular)",
                    line_no,
                    len,
                    width
                );
            }

            for (col, c) in line.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or_else(|| {
                    eyre::eyre!("unknown character {:?} at line {}, column {}", c, line_no, col + 1)
                })?;

                let slot = match tile {
                    Tile::Start => Some(("start", &mut start)),
                    Tile::End => Some(("end", &mut end)),
                    _ => None,
                };
                if let Some((name, slot)) = slot {
                    if slot.is_some() {
                        eyre::bail!("second {} marker at line {}, column {}", name, line_no, col + 1);
                    }
                    *slot = Some(Position::new(row, col));
                }

                cells.push(Cell::with_glyph(!tile.is_walkable(), c));
            }
        }

        if let Some((h, w)) = header {
            if (h, w) != (rows.len(), width) {
                eyre::bail!(
                    "header declares {}x{} but grid is {}x{}",
                    h,
                    w,
                    rows.len(),
                    width
                );
            }
        }

        let start = start.ok_or_else(|| eyre::eyre!("maze has no start marker 'A'"))?;
        let end = end.ok_or_else(|| eyre::eyre!("maze has no end marker 'B'"))?;

        Maze::from_cells(rows.len(), width, cells, start, end)
    }
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let rows = parts.next()?.parse().ok()?;
    let cols = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid() {
        let maze: Maze = "A.#\n#.B\n".parse().unwrap();
        assert_eq!(maze.bounds(), (2, 3));
        assert_eq!(maze.start(), Position::new(0, 0));
        assert_eq!(maze.end(), Position::new(1, 2));
        assert!(maze[Position::new(0, 2)].is_wall());
        assert!(!maze[Position::new(1, 1)].is_wall());
    }

    #[test]
    fn header_is_optional_but_checked() {
        let maze: Maze = "2 3\nA #\n#.B".parse().unwrap();
        assert_eq!(maze.bounds(), (2, 3));
        assert!(!maze[Position::new(0, 1)].is_wall());

        let err = "3 3\nA.#\n#.B".parse::<Maze>().unwrap_err();
        assert!(err.to_string().contains("header"));
    }

    #[test]
    fn keeps_source_glyphs() {
        let maze: Maze = "A # \n  .B\n".parse().unwrap();
        assert_eq!(maze[Position::new(0, 1)].glyph(), ' ');
        assert_eq!(maze[Position::new(1, 2)].glyph(), '.');
        assert_eq!(maze[Position::new(0, 2)].glyph(), '#');
    }

    #[test]
    fn accepts_crlf() {
        let maze: Maze = "A.\r\n.B\r\n".parse().unwrap();
        assert_eq!(maze.bounds(), (2, 2));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = "A..\n.B\n".parse::<Maze>().unwrap_err();
        assert!(err.to_string().contains("rectangular"));
    }

    #[test]
    fn rejects_missing_or_duplicate_markers() {
        assert!("...\n..B".parse::<Maze>().is_err());
        assert!("A..\n...".parse::<Maze>().is_err());
        assert!("AA.\n..B".parse::<Maze>().is_err());
        assert!("A.B\n..B".parse::<Maze>().is_err());
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = "A.x\n..B".parse::<Maze>().unwrap_err();
        assert!(err.to_string().contains("unknown character"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!("".parse::<Maze>().is_err());
        assert!("\n\n".parse::<Maze>().is_err());
        assert!("4 4\n".parse::<Maze>().is_err());
    }
}
