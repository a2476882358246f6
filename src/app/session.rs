use forage_core::config::SimConfig;
use forage_core::{Claim, Metrics, Player, SimError, TickStatus, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Why a run stopped on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    AllFoodConsumed,
    TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Built but not started, or reset.
    Ready,
    Running,
    /// Stopped by the shell; `start` resumes.
    Paused,
    Finished(FinishReason),
}

/// One play session: a world plus the run controls around it.
///
/// The session owns the seeded RNG so that `reset` can rebuild an identical
/// layout, and keeps the claim log the score panel reads from.
pub struct Session {
    config: SimConfig,
    seed: u64,
    world: World,
    state: SessionState,
    elapsed: f64,
    claims: Vec<Claim>,
    metrics: Metrics,
}

impl Session {
    /// Validates `config` and builds the first world. Without a configured
    /// seed, one is drawn from entropy and reported by [`Session::seed`].
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let seed = config.arena.seed.unwrap_or_else(rand::random);
        let world = build_world(&config, seed)?;
        tracing::info!(seed, fingerprint = %config.fingerprint(), "Session created");

        Ok(Self {
            config,
            seed,
            world,
            state: SessionState::Ready,
            elapsed: 0.0,
            claims: Vec::new(),
            metrics: Metrics::new(),
        })
    }

    pub fn start(&mut self) {
        if matches!(self.state, SessionState::Ready | SessionState::Paused) {
            self.state = SessionState::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.state == SessionState::Running {
            self.state = SessionState::Paused;
        }
    }

    /// Discards the current world and rebuilds it from the session seed.
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.reset_with_seed(self.seed)
    }

    /// Discards the current world and rebuilds it from `seed`.
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<(), SimError> {
        self.world = build_world(&self.config, seed)?;
        self.seed = seed;
        self.state = SessionState::Ready;
        self.elapsed = 0.0;
        self.claims.clear();
        self.metrics = Metrics::new();
        tracing::info!(seed, "Session reset");
        Ok(())
    }

    /// Advances the world by one frame if the session is running.
    ///
    /// Finishes the run when all food is eaten or the configured time limit
    /// has elapsed, whichever comes first.
    pub fn frame(&mut self, dt: f64) -> SessionState {
        if self.state != SessionState::Running {
            return self.state;
        }

        let started = Instant::now();
        let outcome = self.world.advance(dt, &self.config.movement);
        self.metrics.record_tick(started.elapsed(), &outcome);

        if outcome.status == TickStatus::Advanced {
            self.elapsed += dt.min(self.config.movement.max_delta);
        }
        self.claims.extend_from_slice(&outcome.claims);
        let all_food_consumed = outcome.all_food_consumed;
        self.world = outcome.world;

        if all_food_consumed {
            self.finish(FinishReason::AllFoodConsumed);
        } else if self
            .config
            .time_limit_secs
            .is_some_and(|limit| self.elapsed >= limit)
        {
            self.finish(FinishReason::TimeLimit);
        }
        self.state
    }

    /// Forwards the shell's jump input to a player.
    pub fn jump(&mut self, player_id: u32) -> Result<(), SimError> {
        self.world
            .trigger_jump(player_id, self.config.movement.jump_velocity)
    }

    fn finish(&mut self, reason: FinishReason) {
        self.state = SessionState::Finished(reason);
        let winner = self.world.standings().first().map(|p| (p.id, p.score));
        tracing::info!(
            ?reason,
            tick = self.world.tick(),
            elapsed = self.elapsed,
            ?winner,
            "Run finished"
        );
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulated seconds, after delta truncation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds left before the time limit, if one is configured.
    pub fn remaining_time(&self) -> Option<f64> {
        self.config
            .time_limit_secs
            .map(|limit| (limit - self.elapsed).max(0.0))
    }

    /// Every claim made since the last reset, in order.
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn standings(&self) -> Vec<&Player> {
        self.world.standings()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

fn build_world(config: &SimConfig, seed: u64) -> Result<World, SimError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    World::new(&config.arena, &mut rng)
}
