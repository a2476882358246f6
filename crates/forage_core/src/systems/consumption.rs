use forage_data::{FoodItem, Player, Vec3};
use serde::{Deserialize, Serialize};

/// A player's request, made during planning, to eat a food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimIntent {
    pub player_index: usize,
    pub player_id: u32,
    pub food_index: usize,
}

/// A food item eaten by a player during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub player_id: u32,
    pub food_id: u32,
    pub tick: u64,
}

#[must_use]
pub fn within_pickup(player: &Vec3, food: &Vec3, pickup_radius: f64) -> bool {
    player.horizontal_distance_sq(food) < pickup_radius * pickup_radius
}

/// Applies intents in ascending player id. The first claimant of a food item
/// wins; later intents on the same item are dropped.
pub fn resolve_claims(
    mut intents: Vec<ClaimIntent>,
    players: &mut [Player],
    food: &mut [FoodItem],
    tick: u64,
) -> Vec<Claim> {
    intents.sort_by_key(|i| i.player_id);

    let mut claims = Vec::with_capacity(intents.len());
    for intent in intents {
        let item = &mut food[intent.food_index];
        if item.consumed {
            continue;
        }
        item.consumed = true;
        let player = &mut players[intent.player_index];
        player.score = player.score.saturating_add(1);
        claims.push(Claim {
            player_id: player.id,
            food_id: item.id,
            tick,
        });
    }
    claims
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_data::{Color, FoodShape};

    fn players(n: u32) -> Vec<Player> {
        (0..n)
            .map(|id| Player::new(id, Vec3::ZERO, 0.0, Color::default()))
            .collect()
    }

    #[test]
    fn test_pickup_is_strict() {
        assert!(within_pickup(&Vec3::ZERO, &Vec3::new(0.49, 0.0, 0.0), 0.5));
        assert!(!within_pickup(&Vec3::ZERO, &Vec3::new(0.5, 0.0, 0.0), 0.5));
        assert!(within_pickup(&Vec3::ZERO, &Vec3::new(0.1, 9.0, 0.0), 0.5));
    }

    #[test]
    fn test_contested_food_goes_to_lowest_id() {
        let mut ps = players(3);
        let mut food = vec![FoodItem::new(0, Vec3::ZERO, FoodShape::Cube, Color::default())];
        let intents = vec![
            ClaimIntent {
                player_index: 2,
                player_id: 2,
                food_index: 0,
            },
            ClaimIntent {
                player_index: 1,
                player_id: 1,
                food_index: 0,
            },
        ];
        let claims = resolve_claims(intents, &mut ps, &mut food, 5);
        assert_eq!(
            claims,
            vec![Claim {
                player_id: 1,
                food_id: 0,
                tick: 5
            }]
        );
        assert_eq!(ps[1].score, 1);
        assert_eq!(ps[2].score, 0);
        assert!(food[0].consumed);
    }

    #[test]
    fn test_already_consumed_food_is_not_reclaimed() {
        let mut ps = players(1);
        let mut food = vec![FoodItem::new(0, Vec3::ZERO, FoodShape::Cube, Color::default())];
        food[0].consumed = true;
        let intents = vec![ClaimIntent {
            player_index: 0,
            player_id: 0,
            food_index: 0,
        }];
        assert!(resolve_claims(intents, &mut ps, &mut food, 1).is_empty());
        assert_eq!(ps[0].score, 0);
    }
}
