use crate::border::{Border, Segment};
use crate::constants::{Direction, DIRECTIONS};
use crate::position::Position;
use nalgebra::Vector2;

/// A single cell with its four borders, stored in `Direction::index` order.
#[derive(Debug, Clone)]
pub struct Block {
    pub pos: Position,
    borders: [Border; 4],
}

impl Block {
    pub fn new(pos: Position) -> Self {
        Block {
            pos,
            borders: (*DIRECTIONS).map(|dir| Border::new(pos, dir)),
        }
    }

    pub fn border(&self, direction: Direction) -> &Border {
        &self.borders[direction.index()]
    }

    pub fn border_mut(&mut self, direction: Direction) -> &mut Border {
        &mut self.borders[direction.index()]
    }

    pub fn borders(&self) -> impl Iterator<Item = &Border> {
        self.borders.iter()
    }

    /// Marks every border pair shared with `other` as internal on both sides.
    /// Returns the number of pairs found, which is at most one for distinct cells.
    pub fn sync_borders(&mut self, other: &mut Block) -> usize {
        let mut shared = 0;
        for a in self.borders.iter_mut() {
            let mirror = a.mirror();
            for b in other.borders.iter_mut() {
                if mirror == *b {
                    a.internal = true;
                    b.internal = true;
                    shared += 1;
                }
            }
        }
        shared
    }

    pub fn geo_borders(&self) -> Vec<Segment<i32>> {
        self.borders
            .iter()
            .filter(|border| !border.internal)
            .map(Border::geo_borders)
            .collect()
    }

    pub fn translate(&mut self, offset: Vector2<i32>) {
        self.pos = self.pos.translate(offset);
        for border in self.borders.iter_mut() {
            border.translate(offset);
        }
    }

    pub fn rotate(&mut self) {
        self.pos = self.pos.rotate();
        let mut rotated = self.borders;
        for border in self.borders.iter() {
            let mut border = *border;
            border.rotate();
            rotated[border.direction.index()] = border;
        }
        self.borders = rotated;
    }
}

#[cfg(test)]
mod tests {
    use crate::block::Block;
    use crate::constants::{Direction, DIRECTIONS};
    use crate::position::Position;
    use nalgebra::Vector2;

    fn internal_count(block: &Block) -> usize {
        block.borders().filter(|b| b.internal).count()
    }

    #[test]
    fn test_sync_adjacent_blocks() {
        let mut a = Block::new(Position::new(0, 0));
        let mut b = Block::new(Position::new(1, 0));
        assert_eq!(a.sync_borders(&mut b), 1);
        assert!(a.border(Direction::Right).internal);
        assert!(b.border(Direction::Left).internal);
        assert_eq!(internal_count(&a), 1);
        assert_eq!(internal_count(&b), 1);
        assert_eq!(a.geo_borders().len(), 3);
    }

    #[test]
    fn test_sync_non_adjacent_blocks() {
        let mut a = Block::new(Position::new(0, 0));
        for pos in [Position::new(1, 1), Position::new(2, 0), Position::new(0, -2)] {
            let mut b = Block::new(pos);
            assert_eq!(a.sync_borders(&mut b), 0);
            assert_eq!(internal_count(&b), 0);
        }
        assert_eq!(internal_count(&a), 0);
    }

    #[test]
    fn test_rotate_rekeys_borders() {
        let mut block = Block::new(Position::new(1, 2));
        block.border_mut(Direction::Up).can_have_door = true;
        block.rotate();
        assert_eq!(block.pos, Position::new(2, -1));
        assert!(block.border(Direction::Right).can_have_door);
        for dir in DIRECTIONS {
            assert_eq!(block.border(*dir).direction, *dir);
            assert_eq!(block.border(*dir).pos, block.pos);
        }
    }

    #[test]
    fn test_rotate_keeps_adjacency() {
        let mut a = Block::new(Position::new(0, 0));
        let mut b = Block::new(Position::new(0, 1));
        a.sync_borders(&mut b);
        a.rotate();
        b.rotate();
        assert!(a.border(Direction::Right).internal);
        assert_eq!(a.border(Direction::Right).mirror(), *b.border(Direction::Left));
    }

    #[test]
    fn test_translate() {
        let mut block = Block::new(Position::new(0, 0));
        block.translate(Vector2::new(5, -3));
        assert_eq!(block.pos, Position::new(5, -3));
        assert!(block.borders().all(|b| b.pos == block.pos));
    }
}
