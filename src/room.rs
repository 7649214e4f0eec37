use crate::block::Block;
use crate::border::{Border, Segment};
use crate::constants::Direction;
use crate::position::Position;
use nalgebra::Vector2;
use pathfinding::prelude::bfs_reach;
use rand::prelude::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

#[derive(Ord, PartialOrd, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct RoomId(u64);

impl RoomId {
    pub fn first() -> Self {
        RoomId(1)
    }

    pub fn gen_id(&mut self) -> Self {
        let ret = *self;
        self.0 += 1;
        ret
    }

    pub fn inner(&self) -> u64 {
        self.0
    }
}

/// Addresses one border of a room: the owning block (by growth order) and
/// the side. Rotating a room changes `direction`, never `block`.
#[derive(Ord, PartialOrd, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct BorderRef {
    pub block: usize,
    pub direction: Direction,
}

impl BorderRef {
    pub fn rotated_by(self, quarter_turns: u8) -> Self {
        BorderRef {
            block: self.block,
            direction: self.direction.rotated_by(quarter_turns),
        }
    }
}

/// A polyomino of blocks grown outward from a single cell.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    blocks: Vec<Block>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Room {
            id,
            blocks: vec![Block::new(Position::ORIGIN)],
        }
    }

    /// Grows a room of `block_count` cells (at least one) around the origin.
    pub fn grow<R: Rng + ?Sized>(id: RoomId, block_count: usize, rng: &mut R) -> Self {
        let mut room = Room::new(id);
        for _ in 1..block_count {
            room.expand(rng);
        }
        room
    }

    /// Builds a room from explicit cells; duplicates are ignored.
    /// Connectivity is not checked, see `is_connected`.
    pub fn from_positions<I>(id: RoomId, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut room = Room { id, blocks: vec![] };
        let mut seen = HashSet::new();
        for pos in positions {
            if seen.insert(pos) {
                room.push_block(pos);
            }
        }
        room
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn positions(&self) -> HashSet<Position> {
        self.blocks.iter().map(|block| block.pos).collect()
    }

    /// Occupied cells dilated by one cell in all eight directions.
    pub fn area_positions(&self) -> HashSet<Position> {
        self.blocks.iter().flat_map(|block| block.pos.area()).collect()
    }

    pub fn new_cell_candidates(&self) -> BTreeSet<Position> {
        let occupied = self.positions();
        self.blocks
            .iter()
            .flat_map(|block| block.pos.near())
            .filter(|pos| !occupied.contains(pos))
            .collect()
    }

    /// Adds one random cell next to the current shape.
    pub fn expand<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let candidates = self.new_cell_candidates().into_iter().collect::<Vec<_>>();
        if let Some(pos) = candidates.choose(rng) {
            self.push_block(*pos);
        }
    }

    fn push_block(&mut self, pos: Position) {
        let mut new_block = Block::new(pos);
        for block in self.blocks.iter_mut() {
            block.sync_borders(&mut new_block);
        }
        self.blocks.push(new_block);
    }

    pub fn is_connected(&self) -> bool {
        let Some(first) = self.blocks.first() else {
            return true;
        };
        let positions = self.positions();
        let reached = bfs_reach(first.pos, |pos| {
            pos.near()
                .into_iter()
                .filter(|n| positions.contains(n))
                .collect::<Vec<_>>()
        })
        .count();
        reached == positions.len()
    }

    pub fn perimeter(&self) -> Vec<Segment<i32>> {
        self.blocks.iter().flat_map(Block::geo_borders).collect()
    }

    /// Minimum and maximum occupied cell.
    pub fn bounds(&self) -> Option<(Vector2<i32>, Vector2<i32>)> {
        let first = self.blocks.first()?.pos.point();
        Some(self.blocks.iter().fold((first, first), |(min, max), block| {
            let p = block.pos.point();
            (min.inf(&p), max.sup(&p))
        }))
    }

    /// True if this room's dilated area covers any cell of `other`.
    pub fn overlaps_footprint(&self, other: &Room) -> bool {
        let area = self.area_positions();
        other.blocks.iter().any(|block| area.contains(&block.pos))
    }

    pub fn border(&self, border_ref: BorderRef) -> Option<&Border> {
        self.blocks
            .get(border_ref.block)
            .map(|block| block.border(border_ref.direction))
    }

    pub fn border_mut(&mut self, border_ref: BorderRef) -> Option<&mut Border> {
        self.blocks
            .get_mut(border_ref.block)
            .map(|block| block.border_mut(border_ref.direction))
    }

    pub fn borders(&self) -> impl Iterator<Item = (BorderRef, &Border)> {
        self.blocks.iter().enumerate().flat_map(|(index, block)| {
            block.borders().map(move |border| {
                (
                    BorderRef {
                        block: index,
                        direction: border.direction,
                    },
                    border,
                )
            })
        })
    }

    pub fn exterior_borders(&self) -> Vec<BorderRef> {
        self.borders()
            .filter(|(_, border)| !border.internal)
            .map(|(border_ref, _)| border_ref)
            .collect()
    }

    /// Flags up to `number` random exterior borders as doors and returns how
    /// many were flagged. Asking for more than the perimeter offers is not an error.
    pub fn select_doors<R: Rng + ?Sized>(&mut self, number: usize, rng: &mut R) -> usize {
        let exterior = self.exterior_borders();
        if number > exterior.len() {
            log::warn!(
                "room {:?}: requested {} doors but only {} exterior borders exist",
                self.id,
                number,
                exterior.len()
            );
        }
        let chosen = exterior
            .choose_multiple(rng, number)
            .copied()
            .collect::<Vec<_>>();
        for border_ref in chosen.iter() {
            if let Some(border) = self.border_mut(*border_ref) {
                border.can_have_door = true;
            }
        }
        chosen.len()
    }

    pub fn doors(&self) -> impl Iterator<Item = (BorderRef, &Border)> {
        self.borders().filter(|(_, border)| border.is_door())
    }

    pub fn door_segments(&self) -> Vec<Segment<i32>> {
        self.doors().map(|(_, border)| border.geo_borders()).collect()
    }

    pub fn translate(&mut self, offset: Vector2<i32>) {
        for block in self.blocks.iter_mut() {
            block.translate(offset);
        }
    }

    pub fn rotate(&mut self) {
        for block in self.blocks.iter_mut() {
            block.rotate();
        }
    }

    pub fn rotate_by(&mut self, quarter_turns: u8) {
        for _ in 0..quarter_turns % 4 {
            self.rotate();
        }
    }
}
