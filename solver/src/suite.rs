//! Numbered regression mazes with DFS and BFS answer keys stored alongside.
//!
//! A suite directory holds `maze<i>.txt` and, once generated,
//! `maze<i>-DFS-sol.txt` and `maze<i>-BFS-sol.txt` for `i` in `1..=count`.

use std::path::{Path, PathBuf};

use crate::algorithms::pathfinding::{BFS, DFS, PathfindingAlgorithm, Solution};
use crate::answer_key::{AnswerKey, KeyMismatch};
use crate::maze::{Maze, render};
use crate::solvers::MazeSolver;

pub const DEFAULT_COUNT: usize = 5;

pub fn maze_file(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("maze{}.txt", index))
}

pub fn key_file(dir: &Path, index: usize, algorithm: &str) -> PathBuf {
    dir.join(format!("maze{}-{}-sol.txt", index, algorithm))
}

#[derive(Debug)]
pub enum Failure {
    Mismatch(KeyMismatch),
    /// the search found no path, so there is nothing to compare
    NoPath,
}

#[derive(Debug)]
pub struct CaseFailure {
    pub index: usize,
    pub algorithm: &'static str,
    pub failure: Failure,
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    pub checked: usize,
    pub failures: Vec<CaseFailure>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// DFS first, then a reset, then BFS, the order the keys were generated in.
fn solve_both(maze: Maze) -> (Maze, [(&'static str, Option<Solution>); 2]) {
    let mut solver = MazeSolver::new(maze);

    let dfs = solver.solve_dfs();
    solver.reset();
    let bfs = solver.solve_bfs();

    (solver.into_maze(), [(DFS.name(), dfs), (BFS.name(), bfs)])
}

/// Solves every maze in `dir` and writes both answer keys next to it.
pub fn generate(dir: &Path, count: usize) -> eyre::Result<()> {
    for index in 1..=count {
        let maze = Maze::load(maze_file(dir, index))?;
        let (maze, results) = solve_both(maze);

        for (name, solution) in &results {
            let path = key_file(dir, index, name);
            render::write_solution(&maze, solution.as_ref(), &path)?;
            log::info!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// Solves every maze in `dir` and checks each result against its stored key.
///
/// I/O problems abort; mismatches are collected.
pub fn check(dir: &Path, count: usize) -> eyre::Result<SuiteReport> {
    let mut report = SuiteReport::default();

    for index in 1..=count {
        let maze = Maze::load(maze_file(dir, index))?;
        let (rows, cols) = maze.bounds();
        let (_, results) = solve_both(maze);

        for (name, solution) in results {
            let key_path = key_file(dir, index, name);
            let key = AnswerKey::load(&key_path, rows, cols)?;
            log::debug!("comparing {}", key_path.display());
            report.checked += 1;

            let failure = match solution {
                None => Some(Failure::NoPath),
                Some(solution) => key.verify(&solution).err().map(Failure::Mismatch),
            };

            match failure {
                None => log::info!("maze {} {}: matches {}", index, name, key_path.display()),
                Some(failure) => {
                    log::error!("maze {} {}: {:?}", index, name, failure);
                    report.failures.push(CaseFailure {
                        index,
                        algorithm: name,
                        failure,
                    });
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        let dir = Path::new("resources");
        assert_eq!(maze_file(dir, 3), dir.join("maze3.txt"));
        assert_eq!(key_file(dir, 3, "BFS"), dir.join("maze3-BFS-sol.txt"));
    }

    #[test]
    fn solve_both_runs_dfs_then_bfs() {
        let (maze, results) = solve_both("A.B\n...\n...".parse().unwrap());
        let [(dfs_name, dfs), (bfs_name, bfs)] = results;

        assert_eq!((dfs_name, bfs_name), ("DFS", "BFS"));
        assert_eq!(dfs.map(|s| s.len()), Some(7));
        assert_eq!(bfs.map(|s| s.len()), Some(3));
        assert_eq!(maze.explored_count(), 4);
    }
}
