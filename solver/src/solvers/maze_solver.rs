use std::time::Instant;

use crate::algorithms::pathfinding::{
    BFS, DFS, PathfindingAlgorithm, Solution, SolveReport, reconstruct,
};
use crate::maze::Maze;

/// Owns a maze and runs searches over it.
///
/// `solve_*` methods do not reset the maze first, so re-solving needs an
/// explicit [`MazeSolver::reset`] in between. [`MazeSolver::run`] resets for you.
pub struct MazeSolver {
    maze: Maze,
}

impl MazeSolver {
    pub fn new(maze: Maze) -> Self {
        Self { maze }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// swaps in another maze, handing back the previous one
    pub fn set_maze(&mut self, maze: Maze) -> Maze {
        std::mem::replace(&mut self.maze, maze)
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    pub fn reset(&mut self) {
        self.maze.reset();
    }

    pub fn solve<A: PathfindingAlgorithm + ?Sized>(&mut self, algorithm: &A) -> Option<Solution> {
        let solution = algorithm.solve(&mut self.maze);
        if solution.is_none() {
            log::warn!(
                "{}: no path from {} to {}",
                algorithm.name(),
                self.maze.start(),
                self.maze.end()
            );
        }
        solution
    }

    pub fn solve_dfs(&mut self) -> Option<Solution> {
        self.solve(&DFS)
    }

    pub fn solve_bfs(&mut self) -> Option<Solution> {
        self.solve(&BFS)
    }

    /// Path left behind by the last search, without touching the maze.
    pub fn solution(&self) -> Option<Solution> {
        reconstruct(&self.maze)
    }

    /// Resets, searches and reconstructs, timing each phase.
    pub fn run<A: PathfindingAlgorithm + ?Sized>(&mut self, algorithm: &A) -> SolveReport {
        self.maze.reset();

        let search_start = Instant::now();
        algorithm.explore(&mut self.maze);
        let search_time = search_start.elapsed();

        let reconstruction_start = Instant::now();
        let solution = reconstruct(&self.maze);
        let reconstruction_time = reconstruction_start.elapsed();

        match &solution {
            Some(s) => log::info!(
                "{}: {} steps, {} cells explored in {:?}",
                algorithm.name(),
                s.steps(),
                self.maze.explored_count(),
                search_time
            ),
            None => log::warn!(
                "{}: end unreachable after exploring {} cells",
                algorithm.name(),
                self.maze.explored_count()
            ),
        }

        SolveReport::new(
            solution,
            self.maze.explored_count(),
            search_time,
            reconstruction_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Position;

    fn solver(text: &str) -> MazeSolver {
        MazeSolver::new(text.parse().unwrap())
    }

    #[test]
    fn solution_matches_last_search() {
        let mut solver = solver("A.B\n...\n...");
        let found = solver.solve_bfs();
        assert_eq!(found, solver.solution());
    }

    #[test]
    fn reset_between_algorithms() {
        let mut solver = solver("A.B\n...\n...");
        assert_eq!(solver.solve_dfs().map(|s| s.len()), Some(7));
        solver.reset();
        assert_eq!(solver.solve_bfs().map(|s| s.len()), Some(3));
    }

    #[test]
    fn run_resets_first() {
        let mut solver = solver("A.B\n...\n...");
        solver.solve_dfs();

        let report = solver.run(&BFS);
        assert_eq!(report.steps(), Some(2));
        assert_eq!(report.explored, 4);
    }

    #[test]
    fn run_reports_unreachable() {
        let mut solver = solver("A#B");
        let report = solver.run(&DFS);
        assert!(report.solution.is_none());
        assert_eq!(report.steps(), None);
        assert_eq!(report.explored, 1);
    }

    #[test]
    fn set_maze_swaps() {
        let mut solver = solver("AB");
        let old = solver.set_maze("A.B".parse().unwrap());
        assert_eq!(old.width(), 2);
        assert_eq!(solver.maze().end(), Position::new(0, 2));
    }
}
