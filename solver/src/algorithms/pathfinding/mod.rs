mod bfs;
mod dfs;
mod solution;
pub mod traits;

pub use bfs::BFS;
pub use dfs::DFS;
pub use solution::{Solution, reconstruct};
pub use traits::{PathfindingAlgorithm, SolveReport};
