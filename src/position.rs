use crate::constants::DIRECTIONS;
use nalgebra::Vector2;

/// A cell of the integer lattice. Cell `(x, y)` covers the unit square with
/// corners `(x, y)` and `(x + 1, y + 1)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The four edge-adjacent cells.
    pub fn near(&self) -> [Position; 4] {
        (*DIRECTIONS).map(|dir| self.translate(dir.to_vec2()))
    }

    /// The 3x3 block of cells centred on (and including) this one.
    pub fn area(&self) -> impl Iterator<Item = Position> + '_ {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| self.translate(Vector2::new(dx, dy))))
    }

    pub fn translate(&self, offset: Vector2<i32>) -> Self {
        Position::from(self.point() + offset)
    }

    /// Quarter turn about the lattice origin: `(x, y) -> (y, -x)`.
    pub fn rotate(&self) -> Self {
        Position::new(self.y, -self.x)
    }

    pub fn point(&self) -> Vector2<i32> {
        Vector2::new(self.x, self.y)
    }

    pub fn manhattan(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<Vector2<i32>> for Position {
    fn from(v: Vector2<i32>) -> Self {
        Position::new(v.x, v.y)
    }
}

impl From<Position> for Vector2<i32> {
    fn from(p: Position) -> Self {
        p.point()
    }
}
