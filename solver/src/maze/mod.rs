mod cell;
mod direction;
mod grid;
mod parse;
mod position;
pub mod render;

pub use cell::{Cell, Tile};
pub use direction::Direction;
pub use grid::Maze;
pub use position::Position;
