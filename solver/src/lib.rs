//! Grid maze loading and solving with depth-first and breadth-first search.
//!
//! ```
//! use maze_solver::{Maze, MazeSolver};
//!
//! let maze: Maze = "A.#\n..B".parse().unwrap();
//! let mut solver = MazeSolver::new(maze);
//! let path = solver.solve_bfs().unwrap();
//! assert_eq!(path.steps(), 3);
//! ```

pub mod algorithms;
pub mod answer_key;
pub mod maze;
pub mod solvers;
pub mod suite;

pub use algorithms::pathfinding::{BFS, DFS, PathfindingAlgorithm, Solution, SolveReport};
pub use maze::{Cell, Direction, Maze, Position};
pub use solvers::MazeSolver;
