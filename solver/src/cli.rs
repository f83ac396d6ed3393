use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use maze_solver::{BFS, DFS, PathfindingAlgorithm, suite::DEFAULT_COUNT};

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Grid maze solver using depth-first and breadth-first search")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info, global = true)]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a single maze file and print the solution
    Solve {
        /// Maze file to load
        file: PathBuf,

        /// Search algorithm to use
        #[arg(short, long, value_enum, default_value_t = Algorithm::Both)]
        algorithm: Algorithm,

        /// Also write each solution to `<OUTPUT>-<ALGORITHM>-sol.txt`
        #[arg(short, long, value_name = "PREFIX")]
        output: Option<PathBuf>,

        /// Print without terminal colors
        #[arg(long)]
        plain: bool,
    },

    /// Compare solutions of maze1..mazeN in a directory against their answer keys
    Check {
        /// Directory holding the numbered mazes and keys
        dir: PathBuf,

        /// Number of mazes in the directory
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,
    },

    /// Write DFS and BFS answer keys for maze1..mazeN in a directory
    Generate {
        /// Directory holding the numbered mazes
        dir: PathBuf,

        /// Number of mazes in the directory
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,
    },

    /// Run every algorithm on one maze and compare them
    Benchmark {
        /// Maze file to load
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Algorithm {
    /// Depth-First Search
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// Breadth-First Search, shortest path
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// DFS, then reset, then BFS
    Both,
}

impl Algorithm {
    /// searches to run, in order
    pub fn searches(self) -> &'static [&'static dyn PathfindingAlgorithm] {
        const DFS_ONLY: &[&dyn PathfindingAlgorithm] = &[&DFS];
        const BFS_ONLY: &[&dyn PathfindingAlgorithm] = &[&BFS];
        const BOTH: &[&dyn PathfindingAlgorithm] = &[&DFS, &BFS];

        match self {
            Self::DFS => DFS_ONLY,
            Self::BFS => BFS_ONLY,
            Self::Both => BOTH,
        }
    }
}
