use std::{fs, path::Path};

use colored::Colorize;
use eyre::WrapErr;

use super::{cell::Tile, grid::Maze, position::Position};
use crate::algorithms::pathfinding::Solution;

/// Cells of `solution` as a row-major mask over the maze; cells off the grid are ignored.
fn path_mask(maze: &Maze, solution: Option<&Solution>) -> Vec<bool> {
    let mut mask = vec![false; maze.width() * maze.height()];
    for pos in solution.into_iter().flat_map(|s| s.iter()) {
        if maze.contains(pos) {
            mask[pos.to_index(maze.width())] = true;
        }
    }
    mask
}

/// Marker a rendered solution shows at `pos`. Cells off the path keep the
/// character they were loaded from.
fn marker(maze: &Maze, on_path: &[bool], pos: Position) -> char {
    if pos == maze.start() {
        Tile::Start.as_char()
    } else if pos == maze.end() {
        Tile::End.as_char()
    } else if on_path[pos.to_index(maze.width())] {
        '*'
    } else {
        maze[pos].glyph()
    }
}

/// Plain text rendering: `A` start, `B` end, `*` path, everything else as loaded.
pub fn render(maze: &Maze, solution: Option<&Solution>) -> String {
    let on_path = path_mask(maze, solution);
    let mut out = String::with_capacity((maze.width() + 1) * maze.height());
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            out.push(marker(maze, &on_path, Position::new(row, col)));
        }
        out.push('\n');
    }
    out
}

/// Same layout as [`render`], colored for a terminal.
pub fn render_colored(maze: &Maze, solution: Option<&Solution>) -> String {
    let on_path = path_mask(maze, solution);
    let mut out = String::new();
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let pos = Position::new(row, col);
            let c = marker(maze, &on_path, pos).to_string();
            let painted = match c.as_str() {
                "A" => c.green().bold(),
                "B" => c.red().bold(),
                "*" => c.yellow(),
                _ if maze[pos].is_wall() => c.bright_black(),
                _ => c.normal(),
            };
            out.push_str(&painted.to_string());
        }
        out.push('\n');
    }
    out
}

pub fn write_solution(
    maze: &Maze,
    solution: Option<&Solution>,
    path: impl AsRef<Path>,
) -> eyre::Result<()> {
    let path = path.as_ref();
    fs::write(path, render(maze, solution))
        .wrap_err_with(|| format!("failed to write solution to {}", path.display()))?;
    log::debug!("wrote solution to {}", path.display());
    Ok(())
}
