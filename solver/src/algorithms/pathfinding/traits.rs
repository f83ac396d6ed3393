use std::time::Duration;

use crate::maze::Maze;

use super::solution::{Solution, reconstruct};

/// A graph search over a [`Maze`] that leaves its results in the cells.
///
/// Implementations start from `maze.start()`, mark each cell they reach as
/// explored and record the cell it was first reached from. They do not reset
/// the maze; a maze that still carries a previous search is the caller's
/// problem.
pub trait PathfindingAlgorithm {
    fn explore(&self, maze: &mut Maze);

    fn name(&self) -> &'static str;

    /// `explore` followed by [`reconstruct`]; None means the end is unreachable.
    fn solve(&self, maze: &mut Maze) -> Option<Solution> {
        self.explore(maze);
        reconstruct(maze)
    }
}

pub struct SolveReport {
    pub solution: Option<Solution>,
    pub explored: usize,
    pub search_time: Duration,
    pub reconstruction_time: Duration,
    pub total_time: Duration,
}

impl SolveReport {
    pub fn new(
        solution: Option<Solution>,
        explored: usize,
        search_time: Duration,
        reconstruction_time: Duration,
    ) -> Self {
        let total_time = search_time + reconstruction_time;
        Self {
            solution,
            explored,
            search_time,
            reconstruction_time,
            total_time,
        }
    }

    /// moves along the solution, if there is one
    pub fn steps(&self) -> Option<usize> {
        self.solution.as_ref().map(Solution::steps)
    }
}
