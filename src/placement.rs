use crate::border::Border;
use crate::position::Position;
use crate::room::{BorderRef, Room};
use nalgebra::Vector2;
use std::collections::{BTreeSet, HashSet};

/// Lattice points at exactly `radius` Manhattan steps from `center`.
pub fn ring(center: Position, radius: u32) -> BTreeSet<Position> {
    let r = radius as i32;
    (0..=r)
        .flat_map(|i| [(i, -(r - i)), (i, r - i), (-i, -(r - i)), (-i, r - i)])
        .map(|(dx, dy)| center.translate(Vector2::new(dx, dy)))
        .collect()
}

/// A door of a committed room, by index into the dungeon's room list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DoorRef {
    pub room: usize,
    pub border: BorderRef,
}

/// One way of attaching a candidate room to the dungeon.
#[derive(Debug, Clone)]
pub struct Placement {
    pub radius: u32,
    pub dungeon_door: DoorRef,
    /// The candidate's door, addressed in the transformed `room`.
    pub room_door: BorderRef,
    /// Where the candidate door's outer cell ends up.
    pub target: Position,
    pub quarter_turns: u8,
    /// Private, already transformed copy of the candidate.
    pub room: Room,
}

impl Placement {
    pub fn room_door_border(&self) -> Option<&Border> {
        self.room.border(self.room_door)
    }
}

/// Enumerates rigid transforms of `candidate` that put one of its doors at a
/// given ring distance from a free door of `rooms` without overlapping them.
#[derive(Debug)]
pub struct PlacementSearch<'a> {
    rooms: &'a [Room],
    candidate: &'a Room,
    filled: HashSet<Position>,
    dilated: HashSet<Position>,
}

impl<'a> PlacementSearch<'a> {
    pub fn new(rooms: &'a [Room], candidate: &'a Room) -> Self {
        PlacementSearch {
            rooms,
            candidate,
            filled: rooms.iter().flat_map(Room::positions).collect(),
            dilated: rooms.iter().flat_map(Room::area_positions).collect(),
        }
    }

    /// Cells occupied by the committed rooms.
    pub fn filled(&self) -> &HashSet<Position> {
        &self.filled
    }

    /// True if `room` stays clear of every committed room's dilated area.
    pub fn fits(&self, room: &Room) -> bool {
        !room
            .blocks()
            .iter()
            .any(|block| self.dilated.contains(&block.pos))
    }

    /// Doors of the committed rooms not yet taken by a corridor.
    pub fn available_doors(&self) -> Vec<(DoorRef, &'a Border)> {
        self.rooms
            .iter()
            .enumerate()
            .flat_map(|(room, r)| {
                r.doors()
                    .filter(|(_, border)| !border.used)
                    .map(move |(border, door)| (DoorRef { room, border }, door))
            })
            .collect()
    }

    /// Walks radii `0..max_radius` and returns the first placement `accept`
    /// approves. Nothing is ranked within a radius.
    pub fn find<F>(&self, max_radius: u32, mut accept: F) -> Option<Placement>
    where
        F: FnMut(&Placement) -> bool,
    {
        (0..max_radius).find_map(|radius| self.search_radius(radius, &mut accept))
    }

    /// Every placement at exactly `radius`, in search order.
    pub fn candidates_at(&self, radius: u32) -> Vec<Placement> {
        let mut found = Vec::new();
        self.search_radius(radius, &mut |placement: &Placement| {
            found.push(placement.clone());
            false
        });
        found
    }

    fn search_radius<F>(&self, radius: u32, accept: &mut F) -> Option<Placement>
    where
        F: FnMut(&Placement) -> bool,
    {
        let room_doors = self
            .candidate
            .doors()
            .map(|(border_ref, _)| border_ref)
            .collect::<Vec<_>>();
        for (dungeon_door, door_border) in self.available_doors() {
            for room_door in room_doors.iter() {
                for target in ring(door_border.pos, radius) {
                    if self.filled.contains(&target) {
                        continue;
                    }
                    for quarter_turns in 0..4 {
                        let Some(placement) =
                            self.place(radius, dungeon_door, *room_door, target, quarter_turns)
                        else {
                            continue;
                        };
                        if accept(&placement) {
                            return Some(placement);
                        }
                    }
                }
            }
        }
        None
    }

    fn place(
        &self,
        radius: u32,
        dungeon_door: DoorRef,
        room_door: BorderRef,
        target: Position,
        quarter_turns: u8,
    ) -> Option<Placement> {
        let mut room = self.candidate.clone();
        room.rotate_by(quarter_turns);
        let room_door = room_door.rotated_by(quarter_turns);
        let outer = room.border(room_door)?.outer();
        room.translate(target.point() - outer.point());
        if !self.fits(&room) {
            return None;
        }
        Some(Placement {
            radius,
            dungeon_door,
            room_door,
            target,
            quarter_turns,
            room,
        })
    }
}
