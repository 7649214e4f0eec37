use crate::corridor::Corridor;
use crate::placement::PlacementSearch;
use crate::position::Position;
use crate::room::{Room, RoomId};
use crate::way::shortest_way_length;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

pub const DEFAULT_MAX_RADIUS: u32 = 17;

#[derive(Debug, thiserror::Error)]
pub enum DungeonError {
    #[error("a room needs at least one block")]
    InvalidBlockCount,
    #[error("max radius must be positive")]
    InvalidMaxRadius,
    #[error("no placement found within radius {max_radius}")]
    NoPlacement { max_radius: u32 },
}

/// Rooms and corridors placed so far, together with the random source that
/// grows new rooms.
#[derive(Debug)]
pub struct Dungeon {
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    room_id: RoomId,
    rng: StdRng,
}

impl Dungeon {
    pub fn new(seed: Option<u64>) -> Self {
        let rng: StdRng = seed
            .map(SeedableRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Dungeon::from_rng(rng)
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Dungeon {
            rooms: Vec::new(),
            corridors: Vec::new(),
            room_id: RoomId::first(),
            rng,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn positions(&self) -> HashSet<Position> {
        self.rooms.iter().flat_map(Room::positions).collect()
    }

    /// Doors not yet used by a corridor.
    pub fn available_doors(&self) -> usize {
        self.rooms
            .iter()
            .flat_map(Room::doors)
            .filter(|(_, border)| !border.used)
            .count()
    }

    pub fn intersects(&self, room: &Room) -> bool {
        self.rooms
            .iter()
            .any(|current| current.overlaps_footprint(room))
    }

    /// Minimum and maximum occupied cell over all rooms.
    pub fn bounds(&self) -> Option<(Vector2<i32>, Vector2<i32>)> {
        self.rooms
            .iter()
            .filter_map(Room::bounds)
            .reduce(|(min0, max0), (min1, max1)| (min0.inf(&min1), max0.sup(&max1)))
    }

    pub fn create_room(&mut self, block_count: usize, door_count: usize) -> Room {
        let mut room = Room::grow(self.room_id.gen_id(), block_count, &mut self.rng);
        let doors = room.select_doors(door_count, &mut self.rng);
        debug_assert!(room.is_connected());
        log::debug!(
            "grew room {:?}: {} blocks, {} doors",
            room.id,
            room.len(),
            doors
        );
        room
    }

    /// Grows a room and attaches it to the dungeon through a new corridor.
    ///
    /// The first room is placed at the origin. Later rooms are tried at
    /// increasing radius around each free door until a placement passes the
    /// walk-length check. On error nothing is committed.
    pub fn expand(
        &mut self,
        block_count: usize,
        door_count: usize,
        max_radius: u32,
    ) -> Result<RoomId, DungeonError> {
        if block_count == 0 {
            return Err(DungeonError::InvalidBlockCount);
        }
        if max_radius == 0 {
            return Err(DungeonError::InvalidMaxRadius);
        }

        let room = self.create_room(block_count, door_count);
        let id = room.id;
        if self.rooms.is_empty() {
            log::debug!("placed room {:?} at origin", id);
            self.rooms.push(room);
            return Ok(id);
        }

        let search = PlacementSearch::new(&self.rooms, &room);
        let mut length = 0;
        let placement = search.find(max_radius, |placement| {
            let (Some(start), Some(end)) = (
                self.rooms[placement.dungeon_door.room].border(placement.dungeon_door.border),
                placement.room_door_border(),
            ) else {
                return false;
            };
            let candidate = placement.room.positions();
            let is_used = |p: &Position| search.filled().contains(p) || candidate.contains(p);
            match shortest_way_length(start.outer(), end.outer(), is_used, placement.radius) {
                Some(way) => {
                    length = way;
                    true
                }
                None => {
                    log::trace!(
                        "room {:?}: no walk under {} to {:?}",
                        id,
                        placement.radius,
                        placement.target
                    );
                    false
                }
            }
        });
        let Some(mut placement) = placement else {
            return Err(DungeonError::NoPlacement { max_radius });
        };

        let door = placement.dungeon_door;
        let start_room = &mut self.rooms[door.room];
        let start_room_id = start_room.id;
        let Some(start) = start_room.border_mut(door.border) else {
            return Err(DungeonError::NoPlacement { max_radius });
        };
        let Some(end) = placement.room.border_mut(placement.room_door) else {
            return Err(DungeonError::NoPlacement { max_radius });
        };
        start.used = true;
        end.used = true;
        let corridor = Corridor {
            start_room_id,
            end_room_id: id,
            start: *start,
            end: *end,
            length,
        };
        log::debug!(
            "placed room {:?} at radius {} (corridor length {}, {} quarter turns)",
            id,
            placement.radius,
            length,
            placement.quarter_turns
        );
        self.rooms.push(placement.room);
        self.corridors.push(corridor);
        Ok(id)
    }
}
