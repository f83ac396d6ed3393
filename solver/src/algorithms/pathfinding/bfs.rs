use std::collections::VecDeque;

use crate::maze::Maze;

use super::traits::PathfindingAlgorithm;

/// Queue-driven search expanding neighbors north, east, south, west.
///
/// Stops as soon as the end is discovered. The path it leaves behind is a
/// shortest one in grid steps.
#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl PathfindingAlgorithm for BFS {
    fn explore(&self, maze: &mut Maze) {
        let target = maze.end();
        let mut queue = VecDeque::from([maze.start()]);
        maze.discover_start();

        'search: while let Some(current) = queue.pop_front() {
            for (neighbor, direction) in current.neighbors(maze.bounds()) {
                if !maze.is_walkable(neighbor) || !maze.discover(neighbor, current) {
                    continue;
                }

                log::trace!("bfs: {} -> {} ({})", current, neighbor, direction.as_str());
                queue.push_back(neighbor);

                if neighbor == target {
                    log::debug!("bfs: reached end {} from {}", target, current);
                    break 'search;
                }
            }
        }

        log::debug!("bfs: explored {} cells", maze.explored_count());
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Position;

    fn path(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn expands_in_direction_order() {
        let mut maze: Maze = "A..\n...\n..B".parse().unwrap();
        let solution = BFS.solve(&mut maze).unwrap();
        assert_eq!(
            solution.cells(),
            path(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]).as_slice()
        );
    }

    #[test]
    fn finds_the_short_way() {
        let mut maze: Maze = "A.B\n...\n...".parse().unwrap();
        let solution = BFS.solve(&mut maze).unwrap();
        assert_eq!(solution.cells(), path(&[(0, 0), (0, 1), (0, 2)]).as_slice());
    }

    #[test]
    fn stops_once_end_is_found() {
        let mut maze: Maze = "A.B\n...\n...".parse().unwrap();
        BFS.explore(&mut maze);
        assert!(maze[Position::new(0, 2)].is_explored());
        assert!(!maze[Position::new(1, 1)].is_explored());
        assert_eq!(maze.explored_count(), 4);
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let mut maze: Maze = "A#.\n##.\n..B".parse().unwrap();
        assert_eq!(BFS.solve(&mut maze), None);
        assert_eq!(maze.explored_count(), 1);
    }
}
