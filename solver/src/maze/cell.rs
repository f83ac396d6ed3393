use super::position::Position;

/// what a single character of a maze file stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
    Start,
    End,
}

impl Tile {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'A' => Some(Self::Start),
            'B' => Some(Self::End),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'A',
            Self::End => 'B',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// one grid slot plus the bookkeeping of the search currently running over it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    wall: bool,
    glyph: char,
    explored: bool,
    parent: Option<Position>,
}

impl Cell {
    pub const fn new(wall: bool) -> Self {
        let glyph = if wall { '#' } else { '.' };
        Self::with_glyph(wall, glyph)
    }

    /// `glyph` is what the cell was written as in its maze file
    pub const fn with_glyph(wall: bool, glyph: char) -> Self {
        Self {
            wall,
            glyph,
            explored: false,
            parent: None,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.wall
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    /// cell this one was first reached from during the current search
    pub fn parent(&self) -> Option<Position> {
        self.parent
    }

    /// returns false and leaves the cell untouched if it was already explored
    pub(crate) fn discover(&mut self, parent: Option<Position>) -> bool {
        if self.explored {
            return false;
        }
        self.explored = true;
        self.parent = parent;
        true
    }

    #[cfg(test)]
    pub(crate) fn set_parent(&mut self, parent: Option<Position>) {
        self.parent = parent;
    }

    pub(crate) fn clear(&mut self) {
        self.explored = false;
        self.parent = None;
    }
}
