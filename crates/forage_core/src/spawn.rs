//! Initial layout of a run.
//!
//! Players sit evenly on a ring facing the center; food is scattered
//! uniformly inside the arena, away from the boundary.

use crate::config::ArenaConfig;
use crate::systems::movement::heading_for;
use forage_data::{Color, FoodItem, FoodShape, Player, Vec3};
use rand::Rng;
use std::f64::consts::TAU;

pub const PLAYER_PALETTE: [Color; 8] = [
    Color::from_hex(0xe6194b),
    Color::from_hex(0x3cb44b),
    Color::from_hex(0x4363d8),
    Color::from_hex(0xffe119),
    Color::from_hex(0xf58231),
    Color::from_hex(0x911eb4),
    Color::from_hex(0x42d4f4),
    Color::from_hex(0xf032e6),
];

pub const FOOD_PALETTE: [Color; 5] = [
    Color::from_hex(0xff4444),
    Color::from_hex(0x44ff44),
    Color::from_hex(0x4444ff),
    Color::from_hex(0xffff44),
    Color::from_hex(0xff44ff),
];

/// Places `arena.player_count` players evenly around the spawn ring.
#[must_use]
pub fn spawn_players(arena: &ArenaConfig) -> Vec<Player> {
    let count = arena.player_count;
    let radius = arena.spawn_ring_factor * arena.map_size;
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            let x = radius * angle.cos();
            let z = radius * angle.sin();
            Player::new(
                i as u32,
                Vec3::new(x, arena.ground_height, z),
                heading_for(-x, -z),
                PLAYER_PALETTE[i % PLAYER_PALETTE.len()],
            )
        })
        .collect()
}

/// Scatters `arena.food_count` items with random position, shape and color.
pub fn spawn_food<R: Rng + ?Sized>(arena: &ArenaConfig, rng: &mut R) -> Vec<FoodItem> {
    let extent = arena.map_size - arena.food_margin;
    (0..arena.food_count)
        .map(|i| {
            let x = sample_axis(extent, rng);
            let z = sample_axis(extent, rng);
            let shape = FoodShape::ALL[rng.gen_range(0..FoodShape::ALL.len())];
            let color = FOOD_PALETTE[rng.gen_range(0..FOOD_PALETTE.len())];
            FoodItem::new(i as u32, Vec3::new(x, arena.ground_height, z), shape, color)
        })
        .collect()
}

// A margin that swallows the whole arena collapses food onto the axis.
fn sample_axis<R: Rng + ?Sized>(extent: f64, rng: &mut R) -> f64 {
    if extent > 0.0 {
        rng.gen_range(-extent..extent)
    } else {
        0.0
    }
}
