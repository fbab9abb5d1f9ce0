//! Service configuration and per-submission overrides.

/// Configuration for [`SimulationService`](crate::SimulationService).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Number of worker threads. `None` = one per available hardware
    /// thread.
    pub worker_count: Option<usize>,
    /// Games per simulation when a submission does not say. Default: 1.
    pub default_games: u32,
    /// Whether to skip the turn-1 draw when a submission does not say.
    /// Default: false.
    pub default_skip_first_draw: bool,
    /// Base seed for deterministic libraries. `None` = OS-seeded.
    ///
    /// With a seed, the n-th submission's library is seeded from
    /// `seed` and `n`, so the same submission order replays the same draws.
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            default_games: 1,
            default_skip_first_draw: false,
            seed: None,
        }
    }
}

impl ServiceConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 256]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 256),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }

    /// Library seed for the submission with sequence number `job`.
    pub(crate) fn job_seed(&self, job: u64) -> Option<u64> {
        self.seed
            .map(|seed| seed ^ job.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Per-submission overrides of the service defaults.
///
/// `None` fields fall back to the service's current defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of games to simulate.
    pub games: Option<u32>,
    /// Whether to skip the turn-1 draw (on the play).
    pub skip_first_draw: Option<bool>,
}

impl SimulationOptions {
    /// Override the number of games.
    pub fn games(mut self, games: u32) -> Self {
        self.games = Some(games);
        self
    }

    /// Override the skip-first-draw flag.
    pub fn skip_first_draw(mut self, skip: bool) -> Self {
        self.skip_first_draw = Some(skip);
        self
    }
}
