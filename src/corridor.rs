use crate::border::{Border, Segment};
use crate::room::RoomId;

/// Link between two doors of different rooms. Only the endpoints are kept;
/// `length` is the walk length the placement was validated with.
#[derive(Debug, Clone)]
pub struct Corridor {
    pub start_room_id: RoomId,
    pub end_room_id: RoomId,
    pub start: Border,
    pub end: Border,
    pub length: u32,
}

impl Corridor {
    /// Straight connector between the two door midpoints. It is not a
    /// walkable route and may cross other rooms.
    pub fn segment(&self) -> Segment<f32> {
        [self.start.connect_point(), self.end.connect_point()]
    }
}
