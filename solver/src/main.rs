mod cli;
mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::Result;
use log::{debug, info};

use cli::{Algorithm, Args, Command};
use logging::Logger;
use maze_solver::{Maze, MazeSolver, SolveReport, maze::render, suite};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    match args.command {
        Command::Solve {
            file,
            algorithm,
            output,
            plain,
        } => run_solve(&file, algorithm, output, plain),
        Command::Check { dir, count } => run_check(&dir, count),
        Command::Generate { dir, count } => {
            info!("generating answer keys for {} mazes in {}", count, dir.display());
            suite::generate(&dir, count)
        }
        Command::Benchmark { file } => run_benchmark(&file),
    }
}

// ========== Single Maze ==========

fn run_solve(file: &Path, choice: Algorithm, output: Option<PathBuf>, plain: bool) -> Result<()> {
    let maze = Maze::load(file)?;
    info!(
        "{}x{} maze: {} -> {}",
        maze.height(),
        maze.width(),
        maze.start(),
        maze.end()
    );

    let mut solver = MazeSolver::new(maze);

    for &algorithm in choice.searches() {
        debug!("solving with {}", algorithm.name());
        let report = solver.run(algorithm);
        print_result(&report, algorithm.name());

        let solution = report.solution.as_ref();
        if plain {
            print!("{}", render::render(solver.maze(), solution));
        } else {
            print!("{}", render::render_colored(solver.maze(), solution));
        }
        println!();

        if let Some(ref prefix) = output {
            let path = output_path(prefix, algorithm.name());
            render::write_solution(solver.maze(), solution, &path)?;
            info!("saved {}", path.display());
        }
    }

    Ok(())
}

/// `out/maze3` + `DFS` -> `out/maze3-DFS-sol.txt`
fn output_path(prefix: &Path, algorithm: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("-{}-sol.txt", algorithm));
    PathBuf::from(name)
}

// ========== Suite ==========

fn run_check(dir: &Path, count: usize) -> Result<()> {
    info!("checking {} mazes in {}", count, dir.display());
    let report = suite::check(dir, count)?;

    if report.passed() {
        info!("all {} answers matched their keys", report.checked);
        return Ok(());
    }

    for failure in &report.failures {
        log::error!(
            "maze{} {}: {:?}",
            failure.index,
            failure.algorithm,
            failure.failure
        );
    }
    eyre::bail!(
        "{} of {} answers did not match their keys",
        report.failures.len(),
        report.checked
    )
}

// ========== Benchmark ==========

fn run_benchmark(file: &Path) -> Result<()> {
    info!("benchmarking search algorithms");

    let mut solver = MazeSolver::new(Maze::load(file)?);
    let mut results = Vec::new();

    for &algorithm in Algorithm::Both.searches() {
        info!("testing {}", algorithm.name());
        let report = solver.run(algorithm);
        print_result(&report, algorithm.name());
        results.push((algorithm.name(), report));
    }

    print_benchmark_summary(&results);
    Ok(())
}

// ========== Utilities ==========

fn print_result(report: &SolveReport, algorithm_name: &str) {
    match report.steps() {
        Some(steps) => info!(
            "{} finished in {} steps ({:?})",
            algorithm_name, steps, report.total_time
        ),
        None => info!("{} found no path ({:?})", algorithm_name, report.total_time),
    }
    debug!("explored: {} cells", report.explored);
    debug!("search: {:?}", report.search_time);
    debug!("reconstruction: {:?}", report.reconstruction_time);
}

fn print_benchmark_summary(results: &[(&str, SolveReport)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<10} {:>8}  {:>10}  {:>12}  {:>12}",
        "algorithm", "steps", "explored", "search", "total"
    );
    info!("{:-<60}", "");

    for (name, report) in results {
        let steps = report
            .steps()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        info!(
            "{:<10} {:>8}  {:>10}  {:>12?}  {:>12?}",
            name, steps, report.explored, report.search_time, report.total_time,
        );
    }

    if let Some((name, steps)) = results
        .iter()
        .filter_map(|(name, r)| r.steps().map(|s| (name, s)))
        .min_by_key(|(_, s)| *s)
    {
        info!("\nshortest: {} ({} steps)", name, steps);
    }

    if let Some((name, report)) = results.iter().min_by_key(|(_, r)| r.explored) {
        info!("least explored: {} ({} cells)", name, report.explored);
    }
}
