use crate::dungeon::{Dungeon, DungeonError, DEFAULT_MAX_RADIUS};

#[derive(Debug, Copy, Clone)]
pub struct RoomRequest {
    pub block_count: usize,
    pub door_count: usize, // clamped to the room's exterior borders
}

impl RoomRequest {
    pub fn new(block_count: usize, door_count: usize) -> Self {
        RoomRequest {
            block_count,
            door_count,
        }
    }
}

pub struct DungeonGeneratorConfig {
    pub seed: Option<u64>, // Seed value for random dungeon generation
    pub rooms: Vec<RoomRequest>,
    pub max_radius: u32,   // Largest corridor search radius per room
    pub max_attempts: u32, // Rooms regrown per request before giving up
}

impl Default for DungeonGeneratorConfig {
    fn default() -> Self {
        let mut rooms = vec![RoomRequest::new(15, 2); 3];
        rooms.extend([RoomRequest::new(7, 2); 2]);
        rooms.push(RoomRequest::new(30, 1));
        DungeonGeneratorConfig {
            seed: None,
            rooms,
            max_radius: DEFAULT_MAX_RADIUS,
            max_attempts: 8,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DungeonGeneratorError {
    #[error("room request {index} has no blocks")]
    EmptyRoomRequest { index: usize },
    #[error("max_radius and max_attempts must be positive")]
    InvalidLimits,
    #[error("room request {index} could not be placed after {attempts} attempts")]
    Placement {
        index: usize,
        attempts: u32,
        #[source]
        source: DungeonError,
    },
}

/// Places every requested room in order. A room that cannot be attached is
/// regrown and retried up to `max_attempts` times.
pub fn generate_dungeon(config: DungeonGeneratorConfig) -> Result<Dungeon, DungeonGeneratorError> {
    // validate
    if config.max_radius == 0 || config.max_attempts == 0 {
        return Err(DungeonGeneratorError::InvalidLimits);
    }
    if let Some(index) = config.rooms.iter().position(|room| room.block_count == 0) {
        return Err(DungeonGeneratorError::EmptyRoomRequest { index });
    }

    let mut dungeon = Dungeon::new(config.seed);
    for (index, request) in config.rooms.iter().enumerate() {
        let mut attempt = 1;
        loop {
            match dungeon.expand(request.block_count, request.door_count, config.max_radius) {
                Ok(_) => break,
                Err(source) if attempt >= config.max_attempts => {
                    return Err(DungeonGeneratorError::Placement {
                        index,
                        attempts: attempt,
                        source,
                    });
                }
                Err(err) => {
                    log::warn!("room request {} attempt {}: {}", index, attempt, err);
                    attempt += 1;
                }
            }
        }
    }

    log::info!(
        "generated dungeon: {} rooms, {} corridors",
        dungeon.rooms().len(),
        dungeon.corridors().len()
    );
    Ok(dungeon)
}

#[cfg(test)]
mod tests {
    use crate::dungeon::DungeonError;
    use crate::gen::{generate_dungeon, DungeonGeneratorConfig, DungeonGeneratorError, RoomRequest};

    #[test]
    fn test_default_generate() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dungeon = generate_dungeon(DungeonGeneratorConfig {
            seed: Some(0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(dungeon.rooms().len(), 6);
        assert_eq!(dungeon.corridors().len(), 5);
        let sizes = dungeon.rooms().iter().map(|r| r.len()).collect::<Vec<_>>();
        assert_eq!(sizes, vec![15, 15, 15, 7, 7, 30]);
        for corridor in dungeon.corridors() {
            assert!(corridor.length < 17);
        }
    }

    #[test]
    fn test_validation() {
        let result = generate_dungeon(DungeonGeneratorConfig {
            seed: Some(0),
            rooms: vec![RoomRequest::new(3, 1), RoomRequest::new(0, 1)],
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(DungeonGeneratorError::EmptyRoomRequest { index: 1 })
        ));

        let result = generate_dungeon(DungeonGeneratorConfig {
            max_attempts: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(DungeonGeneratorError::InvalidLimits)));
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        // the first room has no doors, so nothing can ever attach
        let result = generate_dungeon(DungeonGeneratorConfig {
            seed: Some(0),
            rooms: vec![RoomRequest::new(4, 0), RoomRequest::new(4, 2)],
            max_radius: 8,
            max_attempts: 3,
        });
        match result {
            Err(DungeonGeneratorError::Placement {
                index,
                attempts,
                source,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(attempts, 3);
                assert!(matches!(source, DungeonError::NoPlacement { max_radius: 8 }));
            }
            other => panic!("unexpected result: {:?}", other.map(|d| d.rooms().len())),
        }
    }

    #[test]
    fn test_empty_request_list() {
        let dungeon = generate_dungeon(DungeonGeneratorConfig {
            rooms: vec![],
            ..Default::default()
        })
        .unwrap();
        assert!(dungeon.rooms().is_empty());
        assert_eq!(dungeon.bounds(), None);
    }
}
