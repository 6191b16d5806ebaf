use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// What the static part of the board holds at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCell {
    Empty,
    Wall,
    Target,
}

/// One character of the input (and output) map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Box,
    Target,
    Player,
    PlayerOnTarget,
    BoxOnTarget,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '-' | '_' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            '$' => Some(Cell::Box),
            '.' => Some(Cell::Target),
            '@' => Some(Cell::Player),
            '+' => Some(Cell::PlayerOnTarget),
            '*' => Some(Cell::BoxOnTarget),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Box => '$',
            Cell::Target => '.',
            Cell::Player => '@',
            Cell::PlayerOnTarget => '+',
            Cell::BoxOnTarget => '*',
        }
    }

    pub(crate) fn map_cell(self) -> MapCell {
        match self {
            Cell::Wall => MapCell::Wall,
            Cell::Target | Cell::PlayerOnTarget | Cell::BoxOnTarget => MapCell::Target,
            Cell::Empty | Cell::Box | Cell::Player => MapCell::Empty,
        }
    }

    pub(crate) fn has_player(self) -> bool {
        self == Cell::Player || self == Cell::PlayerOnTarget
    }

    pub(crate) fn has_box(self) -> bool {
        self == Cell::Box || self == Cell::BoxOnTarget
    }
}

// signed so that stepping off the edge of the board is representable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// The order in which moves are generated - it decides tie-breaking in the search.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}
