use crate::config::{
    validate_map_size, ArenaConfig, DEFAULT_GROUND_HEIGHT, MAX_FOOD, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::error::{ensure_config, Result, SimError};
use crate::spawn;
use forage_data::{FoodItem, Player};
use rand::Rng;
use std::collections::HashSet;

/// The authoritative state of one run: players, food and arena bounds.
///
/// Counts are fixed at construction. Only positions, headings, scores and
/// consumption flags change, and only through [`World::advance`] (plus the
/// shell's jump input via [`World::trigger_jump`]).
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub(crate) players: Vec<Player>,
    pub(crate) food: Vec<FoodItem>,
    pub(crate) map_size: f64,
    pub(crate) ground_height: f64,
    pub(crate) tick: u64,
}

impl World {
    /// Builds a fresh world using the spawn rule.
    ///
    /// All randomness (food position, shape, color) is drawn from `rng`, so a
    /// seeded generator reproduces the layout exactly.
    pub fn new<R: Rng + ?Sized>(arena: &ArenaConfig, rng: &mut R) -> Result<Self> {
        arena.validate()?;

        let players = spawn::spawn_players(arena);
        let food = spawn::spawn_food(arena, rng);
        tracing::info!(
            players = players.len(),
            food = food.len(),
            map_size = arena.map_size,
            "World constructed"
        );

        Ok(Self {
            players,
            food,
            map_size: arena.map_size,
            ground_height: arena.ground_height,
            tick: 0,
        })
    }

    /// Builds a world from an explicit layout.
    ///
    /// Ids must be unique within each collection and every position must lie
    /// inside the arena.
    pub fn from_parts(players: Vec<Player>, food: Vec<FoodItem>, map_size: f64) -> Result<Self> {
        validate_map_size(map_size)?;
        ensure_config!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()),
            "Player count {} outside [{MIN_PLAYERS}, {MAX_PLAYERS}]",
            players.len()
        );
        ensure_config!(
            food.len() <= MAX_FOOD,
            "Food count {} too large (max {MAX_FOOD})",
            food.len()
        );

        let mut seen = HashSet::with_capacity(players.len());
        for p in &players {
            ensure_config!(seen.insert(p.id), "Duplicate player id {}", p.id);
            ensure_config!(p.position.is_finite(), "Player {} position not finite", p.id);
            ensure_config!(
                p.position.x.abs() <= map_size && p.position.z.abs() <= map_size,
                "Player {} outside arena",
                p.id
            );
        }
        let mut seen = HashSet::with_capacity(food.len());
        for f in &food {
            ensure_config!(seen.insert(f.id), "Duplicate food id {}", f.id);
            ensure_config!(f.position.is_finite(), "Food {} position not finite", f.id);
            ensure_config!(
                f.position.x.abs() <= map_size && f.position.z.abs() <= map_size,
                "Food {} outside arena",
                f.id
            );
        }

        Ok(Self {
            players,
            food,
            map_size,
            ground_height: DEFAULT_GROUND_HEIGHT,
            tick: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn food(&self) -> &[FoodItem] {
        &self.food
    }

    pub fn map_size(&self) -> f64 {
        self.map_size
    }

    pub fn ground_height(&self) -> f64 {
        self.ground_height
    }

    /// Number of non-degenerate ticks applied since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn food_item(&self, id: u32) -> Option<&FoodItem> {
        self.food.iter().find(|f| f.id == id)
    }

    /// True when every food item has been eaten. Vacuously true with no food.
    pub fn all_food_consumed(&self) -> bool {
        self.food.iter().all(|f| f.consumed)
    }

    pub fn remaining_food(&self) -> usize {
        self.food.iter().filter(|f| !f.consumed).count()
    }

    pub fn total_score(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.score)).sum()
    }

    /// Players ordered for a scoreboard: highest score first, then lowest id.
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        ranked
    }

    /// Launches a grounded player into a jump arc. A player already in the
    /// air keeps its current arc.
    pub fn trigger_jump(&mut self, player_id: u32, vertical_velocity: f64) -> Result<()> {
        if !(vertical_velocity.is_finite() && vertical_velocity > 0.0) {
            return Err(SimError::invalid_command(format!(
                "Jump velocity must be positive, got {vertical_velocity}"
            )));
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(SimError::UnknownPlayer(player_id))?;
        if player.jump.is_none() {
            player.jump = Some(forage_data::JumpState { vertical_velocity });
        }
        Ok(())
    }
}
