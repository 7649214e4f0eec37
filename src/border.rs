use crate::constants::Direction;
use crate::position::Position;
use nalgebra::Vector2;

pub type Segment<T> = [Vector2<T>; 2];

/// One side of a cell. Equality only looks at `(pos, direction)`; the flags
/// are bookkeeping owned by the room.
#[derive(Debug, Copy, Clone)]
pub struct Border {
    pub pos: Position,
    pub direction: Direction,
    /// Shared with another cell of the same room.
    pub internal: bool,
    pub can_have_door: bool,
    /// Door already taken by a corridor.
    pub used: bool,
}

impl PartialEq for Border {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.direction == other.direction
    }
}

impl Eq for Border {}

impl Border {
    pub fn new(pos: Position, direction: Direction) -> Self {
        Border {
            pos,
            direction,
            internal: false,
            can_have_door: false,
            used: false,
        }
    }

    /// The same physical edge seen from the neighbouring cell.
    pub fn mirror(&self) -> Border {
        Border::new(
            self.pos.translate(self.direction.to_vec2()),
            self.direction.opposite(),
        )
    }

    /// The cell just outside this edge.
    pub fn outer(&self) -> Position {
        self.mirror().pos
    }

    pub fn is_door(&self) -> bool {
        self.can_have_door && !self.internal
    }

    pub fn geo_borders(&self) -> Segment<i32> {
        let p = self.pos.point();
        let corner = |dx, dy| p + Vector2::new(dx, dy);
        match self.direction {
            Direction::Left => [corner(0, 0), corner(0, 1)],
            Direction::Right => [corner(1, 1), corner(1, 0)],
            Direction::Up => [corner(0, 1), corner(1, 1)],
            Direction::Down => [corner(1, 0), corner(0, 0)],
        }
    }

    pub fn connect_point(&self) -> Vector2<f32> {
        let [a, b] = self.geo_borders();
        (a + b).cast::<f32>() / 2.0
    }

    pub fn translate(&mut self, offset: Vector2<i32>) {
        self.pos = self.pos.translate(offset);
    }

    pub fn rotate(&mut self) {
        self.pos = self.pos.rotate();
        self.direction = self.direction.rotated();
    }
}
