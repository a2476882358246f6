use crate::config::MovementConfig;
use crate::systems::consumption::{self, Claim, ClaimIntent};
use crate::systems::{movement, targeting};
use crate::world::World;
use forage_data::{FoodItem, Player, Vec3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Whether a tick actually moved the simulation forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Advanced,
    /// Delta was zero, negative or non-finite, or the movement tuning was
    /// invalid; the world is unchanged.
    Degenerate,
}

/// Everything the caller needs after one call to [`World::advance`].
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub world: World,
    pub all_food_consumed: bool,
    /// Food eaten this tick, in resolution order (ascending player id).
    pub claims: Vec<Claim>,
    pub status: TickStatus,
}

struct PlayerPlan {
    player: Player,
    intent: Option<ClaimIntent>,
}

struct PlanContext<'a> {
    food: &'a [FoodItem],
    movement: &'a MovementConfig,
    map_size: f64,
    ground_height: f64,
    delta: f64,
}

impl World {
    /// Advances the simulation by one tick of `delta` seconds.
    ///
    /// Each player targets the nearest food that was unconsumed at tick
    /// start, moves toward it, integrates any jump, and eats it if within
    /// the pickup radius. Claims are applied in ascending player id, so a
    /// contested item goes to the lowest id and the other claimants retarget
    /// next tick.
    ///
    /// Delta is truncated to `movement.max_delta`. A degenerate delta, or
    /// movement tuning that fails validation, returns an unchanged copy of
    /// the world.
    #[must_use]
    pub fn advance(&self, delta: f64, movement: &MovementConfig) -> TickOutcome {
        if !delta.is_finite() || delta <= 0.0 {
            tracing::debug!(delta, tick = self.tick, "Degenerate tick ignored");
            return self.unchanged();
        }
        if let Err(err) = movement.validate() {
            tracing::warn!(%err, tick = self.tick, "Tick skipped, movement config rejected");
            return self.unchanged();
        }

        let ctx = PlanContext {
            food: &self.food,
            movement,
            map_size: self.map_size,
            ground_height: self.ground_height,
            delta: delta.min(movement.max_delta),
        };

        #[cfg(feature = "parallel")]
        let plans: Vec<PlayerPlan> = self
            .players
            .par_iter()
            .enumerate()
            .map(|(idx, p)| plan_player(idx, p, &ctx))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let plans: Vec<PlayerPlan> = self
            .players
            .iter()
            .enumerate()
            .map(|(idx, p)| plan_player(idx, p, &ctx))
            .collect();

        let mut players = Vec::with_capacity(plans.len());
        let mut intents = Vec::new();
        for plan in plans {
            players.push(plan.player);
            intents.extend(plan.intent);
        }

        let tick = self.tick + 1;
        let mut food = self.food.clone();
        let claims = consumption::resolve_claims(intents, &mut players, &mut food, tick);
        for claim in &claims {
            tracing::debug!(
                tick,
                player = claim.player_id,
                food = claim.food_id,
                "Food claimed"
            );
        }

        let world = World {
            players,
            food,
            map_size: self.map_size,
            ground_height: self.ground_height,
            tick,
        };
        let all_food_consumed = world.all_food_consumed();
        TickOutcome {
            world,
            all_food_consumed,
            claims,
            status: TickStatus::Advanced,
        }
    }

    fn unchanged(&self) -> TickOutcome {
        TickOutcome {
            world: self.clone(),
            all_food_consumed: self.all_food_consumed(),
            claims: Vec::new(),
            status: TickStatus::Degenerate,
        }
    }
}

fn plan_player(index: usize, current: &Player, ctx: &PlanContext) -> PlayerPlan {
    let mut player = current.clone();
    let mut intent = None;

    match targeting::select_target(&player.position, ctx.food) {
        Some((food_index, target)) => {
            let step = movement::step_toward(
                player.position,
                target.position,
                ctx.movement.speed,
                ctx.delta,
            );
            player.position = step.position;
            player.velocity = step.velocity;
            if let Some(heading) = step.heading {
                player.heading = heading;
            }
            movement::integrate_jump(
                &mut player,
                ctx.movement.gravity,
                ctx.ground_height,
                ctx.delta,
            );
            if consumption::within_pickup(
                &player.position,
                &target.position,
                ctx.movement.pickup_radius,
            ) {
                intent = Some(ClaimIntent {
                    player_index: index,
                    player_id: player.id,
                    food_index,
                });
            }
        }
        None => {
            player.velocity = Vec3::ZERO;
            movement::integrate_jump(
                &mut player,
                ctx.movement.gravity,
                ctx.ground_height,
                ctx.delta,
            );
        }
    }

    movement::clamp_to_arena(&mut player.position, ctx.map_size);
    PlayerPlan { player, intent }
}
