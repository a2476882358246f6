//! Read-only views handed to renderers and score displays once per frame.

use crate::world::World;
use forage_data::{Color, FoodShape, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerSnapshot {
    pub id: u32,
    pub position: Vec3,
    pub heading: f64,
    pub color: Color,
    pub score: u32,
    pub jumping: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FoodSnapshot {
    pub id: u32,
    pub position: Vec3,
    pub shape: FoodShape,
    pub color: Color,
    pub consumed: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub map_size: f64,
    pub players: Vec<PlayerSnapshot>,
    pub food: Vec<FoodSnapshot>,
    pub remaining_food: usize,
    pub all_food_consumed: bool,
}

impl World {
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            map_size: self.map_size,
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    id: p.id,
                    position: p.position,
                    heading: p.heading,
                    color: p.color,
                    score: p.score,
                    jumping: p.is_jumping(),
                })
                .collect(),
            food: self
                .food
                .iter()
                .map(|f| FoodSnapshot {
                    id: f.id,
                    position: f.position,
                    shape: f.shape,
                    color: f.color,
                    consumed: f.consumed,
                })
                .collect(),
            remaining_food: self.remaining_food(),
            all_food_consumed: self.all_food_consumed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_snapshot_mirrors_world() {
        let arena = ArenaConfig {
            player_count: 2,
            food_count: 5,
            ..Default::default()
        };
        let world = World::new(&arena, &mut ChaCha8Rng::seed_from_u64(5)).expect("world");
        let snap = world.snapshot();
        assert_eq!(snap.players.len(), 2);
        assert_eq!(snap.food.len(), 5);
        assert_eq!(snap.remaining_food, 5);
        assert!(!snap.all_food_consumed);
        assert_eq!(snap.players[1].color, world.players()[1].color);
        assert_eq!(snap.food[3].shape, world.food()[3].shape);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let world = World::new(&ArenaConfig::default(), &mut ChaCha8Rng::seed_from_u64(1))
            .expect("world");
        let snap = world.snapshot();
        let json = serde_json::to_string(&snap).expect("serialize");
        let back: WorldSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, snap);
    }
}
