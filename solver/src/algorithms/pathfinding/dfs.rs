use crate::maze::Maze;

use super::traits::PathfindingAlgorithm;

/// Stack-driven search expanding neighbors north, east, south, west.
///
/// Reaching the end only stops the scan of the current cell's neighbors; the
/// stack is still drained, so every cell reachable from the start ends up
/// explored. The returned path depends on this exact order.
#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl PathfindingAlgorithm for DFS {
    fn explore(&self, maze: &mut Maze) {
        let target = maze.end();
        let mut stack = vec![maze.start()];
        maze.discover_start();

        while let Some(current) = stack.pop() {
            for (neighbor, direction) in current.neighbors(maze.bounds()) {
                if !maze.is_walkable(neighbor) || !maze.discover(neighbor, current) {
                    continue;
                }

                log::trace!("dfs: {} -> {} ({})", current, neighbor, direction.as_str());
                stack.push(neighbor);

                if neighbor == target {
                    log::debug!("dfs: reached end {} from {}", target, current);
                    break;
                }
            }
        }

        log::debug!("dfs: explored {} cells", maze.explored_count());
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
