use crate::maze::{Maze, Position};

/// Cells from start to end, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    cells: Vec<Position>,
}

impl Solution {
    pub fn new(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// number of moves, one less than the number of cells
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }
}

/// Walks parent links back from the end cell and returns the path start first.
///
/// Returns None if the chain stops before reaching the start (the end was never
/// reached) or runs longer than the grid has cells (a cycle). Reads the maze
/// only.
pub fn reconstruct(maze: &Maze) -> Option<Solution> {
    let start = maze.start();
    let limit = maze.width() * maze.height();

    let mut current = maze.end();
    let mut path = vec![current];

    while current != start {
        let Some(parent) = maze[current].parent() else {
            log::debug!("parent chain from {} stops at {}", maze.end(), current);
            return None;
        };

        if path.len() >= limit {
            log::warn!("parent chain from {} is cyclic", maze.end());
            return None;
        }

        path.push(parent);
        current = parent;
    }

    path.reverse();
    Some(Solution::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor_maze() -> Maze {
        Maze::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/resources/mazeGetSolutionTester.txt"
        ))
        .unwrap()
    }

    fn expected_corridor() -> Vec<Position> {
        [
            (5, 0),
            (5, 1),
            (4, 1),
            (3, 1),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
        ]
        .into_iter()
        .map(Position::from)
        .collect()
    }

    #[test]
    fn follows_hand_set_parents() {
        let mut maze = corridor_maze();
        let expected = expected_corridor();
        for pair in expected.windows(2) {
            maze.set_parent(pair[1], Some(pair[0]));
        }

        let solution = reconstruct(&maze).unwrap();
        assert_eq!(solution.cells(), expected.as_slice());
        assert_eq!(solution.steps(), 10);
        assert!(!solution.is_empty());
    }

    #[test]
    fn missing_chain_is_none() {
        let maze = corridor_maze();
        assert_eq!(reconstruct(&maze), None);
    }

    #[test]
    fn broken_chain_is_none() {
        let mut maze = corridor_maze();
        maze.set_parent(Position::new(0, 5), Some(Position::new(0, 4)));
        maze.set_parent(Position::new(0, 4), Some(Position::new(0, 3)));
        assert_eq!(reconstruct(&maze), None);
    }

    #[test]
    fn cyclic_chain_is_none() {
        let mut maze = corridor_maze();
        maze.set_parent(Position::new(0, 5), Some(Position::new(0, 4)));
        maze.set_parent(Position::new(0, 4), Some(Position::new(0, 5)));
        assert_eq!(reconstruct(&maze), None);
    }

    #[test]
    fn does_not_touch_maze() {
        let mut maze = corridor_maze();
        for pair in expected_corridor().windows(2) {
            maze.set_parent(pair[1], Some(pair[0]));
        }
        let before = maze.clone();
        reconstruct(&maze);
        assert!(before.cells().zip(maze.cells()).all(|(a, b)| a == b));
    }

    #[test]
    fn start_equal_to_end() {
        let maze = Maze::new(1, 2, vec![false; 2], Position::new(0, 1), Position::new(0, 1)).unwrap();
        let solution = reconstruct(&maze).unwrap();
        assert_eq!(solution.cells(), &[Position::new(0, 1)]);
        assert_eq!(solution.steps(), 0);
    }
}
