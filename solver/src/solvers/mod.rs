mod maze_solver;

pub use maze_solver::MazeSolver;
