mod common;

use common::{WorldBuilder, FRAME};
use forage_core::config::{ArenaConfig, MovementConfig};
use forage_core::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn deltas() -> Vec<f64> {
    (0..400)
        .map(|i| match i % 7 {
            0 => 0.0,
            3 => 1.0 / 30.0,
            5 => 0.25,
            _ => FRAME,
        })
        .collect()
}

fn replay(mut world: World, deltas: &[f64], movement: &MovementConfig) -> World {
    for &delta in deltas {
        world = world.advance(delta, movement).world;
    }
    world
}

#[test]
fn test_explicit_layout_is_deterministic() {
    let movement = MovementConfig::default();
    let world = WorldBuilder::new()
        .with_player(-6.0, 6.0)
        .with_player(6.0, -6.0)
        .with_player(0.0, 0.0)
        .with_food(1.0, 1.0)
        .with_food(-1.0, -1.0)
        .with_food(5.0, 5.0)
        .with_food(-5.0, 2.5)
        .with_food(3.0, -7.0)
        .build();

    let a = replay(world.clone(), &deltas(), &movement);
    let b = replay(world, &deltas(), &movement);
    assert_eq!(a, b);
}

#[test]
fn test_seeded_worlds_are_deterministic() {
    let arena = ArenaConfig {
        player_count: 8,
        food_count: 300,
        seed: Some(12345),
        ..Default::default()
    };
    let movement = MovementConfig::default();

    let world1 = World::new(&arena, &mut ChaCha8Rng::seed_from_u64(12345)).expect("world");
    let world2 = World::new(&arena, &mut ChaCha8Rng::seed_from_u64(12345)).expect("world");
    assert_eq!(world1, world2);

    let world1 = replay(world1, &deltas(), &movement);
    let world2 = replay(world2, &deltas(), &movement);

    for (p1, p2) in world1.players().iter().zip(world2.players()) {
        assert_eq!(p1.position, p2.position, "Player {} position", p1.id);
        assert_eq!(p1.heading, p2.heading, "Player {} heading", p1.id);
        assert_eq!(p1.score, p2.score, "Player {} score", p1.id);
    }
    let consumed1: Vec<bool> = world1.food().iter().map(|f| f.consumed).collect();
    let consumed2: Vec<bool> = world2.food().iter().map(|f| f.consumed).collect();
    assert_eq!(consumed1, consumed2);
}
