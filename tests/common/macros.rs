/// Asserts that every player lies inside the arena on both horizontal axes.
#[macro_export]
macro_rules! assert_within_arena {
    ($world:expr) => {
        let map_size = $world.map_size();
        for p in $world.players() {
            assert!(
                p.position.x.abs() <= map_size && p.position.z.abs() <= map_size,
                "Player {} at ({}, {}) outside arena of half-extent {}",
                p.id,
                p.position.x,
                p.position.z,
                map_size
            );
        }
    };
}

/// Asserts that the player with the given id has exactly `score`.
#[macro_export]
macro_rules! assert_score {
    ($world:expr, $id:expr, $score:expr) => {
        let player = $world.player($id).expect("Player not found in world");
        assert_eq!(player.score, $score, "Score mismatch for player {}", $id);
    };
}
