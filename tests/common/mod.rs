pub mod macros;

use forage_core::config::MovementConfig;
use forage_core::{Color, FoodItem, FoodShape, Player, Vec3, World};

pub const GROUND: f64 = 0.5;
pub const FRAME: f64 = 1.0 / 60.0;

/// Builds worlds with hand-placed players and food.
#[allow(dead_code)]
pub struct WorldBuilder {
    players: Vec<Player>,
    food: Vec<FoodItem>,
    map_size: f64,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            food: Vec::new(),
            map_size: 8.0,
        }
    }

    pub fn with_map_size(mut self, map_size: f64) -> Self {
        self.map_size = map_size;
        self
    }

    /// Adds a player with the next free id.
    pub fn with_player(mut self, x: f64, z: f64) -> Self {
        let id = self.players.len() as u32;
        self.players
            .push(Player::new(id, Vec3::new(x, GROUND, z), 0.0, Color::default()));
        self
    }

    /// Adds food with the next free id.
    pub fn with_food(self, x: f64, z: f64) -> Self {
        let id = self.food.len() as u32;
        self.with_food_id(id, x, z)
    }

    pub fn with_food_id(mut self, id: u32, x: f64, z: f64) -> Self {
        self.food.push(FoodItem::new(
            id,
            Vec3::new(x, GROUND, z),
            FoodShape::Cube,
            Color::default(),
        ));
        self
    }

    pub fn build(self) -> World {
        World::from_parts(self.players, self.food, self.map_size)
            .expect("Failed to create world in test builder")
    }
}

/// Runs `ticks` frames and returns the final world.
#[allow(dead_code)]
pub fn run(world: World, ticks: usize, movement: &MovementConfig) -> World {
    (0..ticks).fold(world, |w, _| w.advance(FRAME, movement).world)
}
