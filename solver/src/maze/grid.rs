use std::ops::Index;

use super::{cell::Cell, position::Position};

/// Rectangular grid of cells stored row-major, with designated start and end.
///
/// The maze is also the scratch space of a search: exploration flags and parent
/// links live in its cells until [`Maze::reset`] clears them.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Vec<Cell>,
    width: usize,
    height: usize,
    start: Position,
    end: Position,
}

impl Maze {
    /// `walls` is row-major, `true` marking an impassable cell.
    pub fn new(
        height: usize,
        width: usize,
        walls: Vec<bool>,
        start: Position,
        end: Position,
    ) -> eyre::Result<Self> {
        let grid = walls.into_iter().map(Cell::new).collect();
        Self::from_cells(height, width, grid, start, end)
    }

    pub(crate) fn from_cells(
        height: usize,
        width: usize,
        grid: Vec<Cell>,
        start: Position,
        end: Position,
    ) -> eyre::Result<Self> {
        if height == 0 || width == 0 {
            eyre::bail!("maze must have at least one cell, got {}x{}", height, width);
        }

        let Some(size) = height.checked_mul(width) else {
            eyre::bail!("maze dimensions {}x{} overflow", height, width);
        };

        if grid.len() != size {
            eyre::bail!("grid size mismatch: expected {}, got {}", size, grid.len());
        }

        for (name, pos) in [("start", start), ("end", end)] {
            if pos.row >= height || pos.col >= width {
                eyre::bail!("{} {} lies outside the {}x{} grid", name, pos, height, width);
            }
            if grid[pos.to_index(width)].is_wall() {
                eyre::bail!("{} {} is a wall", name, pos);
            }
        }

        Ok(Self {
            grid,
            width,
            height,
            start,
            end,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.grid[pos.to_index(self.width)])
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// If `pos` is outside the grid. Guard with [`Maze::is_valid_cell`] or
    /// [`Maze::contains`] first.
    pub fn cell(&self, pos: Position) -> &Cell {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!(
                "cell {} out of bounds for {}x{} maze",
                pos, self.height, self.width
            ),
        }
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        assert!(
            self.contains(pos),
            "cell {} out of bounds for {}x{} maze",
            pos,
            self.height,
            self.width
        );
        &mut self.grid[pos.to_index(self.width)]
    }

    /// in bounds and not a wall; signed so that probes past the top/left edge are just false
    pub fn is_valid_cell(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.is_walkable(Position::new(row as usize, col as usize))
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| !cell.is_wall())
    }

    /// Marks `pos` explored with `from` as its parent.
    ///
    /// Returns false, leaving the cell as it was, if the current search already
    /// reached it.
    pub fn discover(&mut self, pos: Position, from: Position) -> bool {
        self.cell_mut(pos).discover(Some(from))
    }

    /// Marks the start explored. It has no parent, which is what ends every chain.
    pub fn discover_start(&mut self) {
        let start = self.start;
        self.cell_mut(start).discover(None);
    }

    #[cfg(test)]
    pub(crate) fn set_parent(&mut self, pos: Position, parent: Option<Position>) {
        self.cell_mut(pos).set_parent(parent);
    }

    pub fn explored_count(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_explored()).count()
    }

    /// Forgets everything the last search wrote. Walls, start and end stay.
    pub fn reset(&mut self) {
        self.grid.iter_mut().for_each(Cell::clear);
    }

    /// every cell with its position, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let width = self.width;
        self.grid
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (Position::from_index(idx, width), cell))
    }
}

impl Index<Position> for Maze {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        self.cell(pos)
    }
}
