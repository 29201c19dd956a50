use crate::geometry::{Vector, squared};

/// Decision-engine constants and tunable parameters.
///
/// Every distance threshold is stored pre-squared so it can be compared
/// directly against [`Vector::distance_sqr`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusterConfig {
    /// Seed for the explore-target generator. Equal seeds replay identical sessions.
    pub rng_seed: u64,
}

impl BusterConfig {
    // ===== arena =====
    pub const ARENA_WIDTH: i32 = 16000;
    pub const ARENA_HEIGHT: i32 = 9000;
    /// Team 0 base corner.
    pub const LEFT_BASE: Vector = Vector::new(0, 0);
    /// Team 1 base corner.
    pub const RIGHT_BASE: Vector = Vector::new(Self::ARENA_WIDTH, Self::ARENA_HEIGHT);

    // ===== capture =====
    /// Lower bound (inclusive) of the squared capture band. Real radius 900.
    pub const CAPTURE_MIN_SQR: i64 = squared(900);
    /// Upper bound (exclusive) of the squared capture band. Real radius 1760.
    pub const CAPTURE_MAX_SQR: i64 = squared(1760);

    // ===== stun =====
    /// Squared stun reach (inclusive). Real radius 1760.
    pub const STUN_RANGE_SQR: i64 = squared(1760);
    /// Turns an agent stays in the stunned state.
    pub const STUNNED_TURNS: u32 = 10;
    /// Turns before an agent may stun again after leaving the stun state.
    pub const STUN_COOLDOWN: u32 = 20;

    // ===== navigation =====
    /// Arrival radius of the home-base waypoint.
    pub const RETURN_RADIUS: i32 = 1600;
    /// Arrival radius of patrol waypoints.
    pub const PATROL_RADIUS: i32 = 50;
    /// Squared distance at which a random explore target counts as reached.
    pub const EXPLORE_ARRIVAL_SQR: i64 = 100;

    // ===== perception =====
    /// Ghosts unseen for this many turns or more are no longer fallback targets.
    pub const STALE_GHOST_TURNS: u32 = 5;

    // ===== behavior stack =====
    /// Activations an agent may hold above its root behavior.
    pub const STACK_CAPACITY: usize = stack_fsm::DEFAULT_CAPACITY;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RNG_SEED: u64 = 0x6275_7374_6572;

    pub fn new() -> Self {
        Self {
            rng_seed: Self::DEFAULT_RNG_SEED,
        }
    }

    pub fn with_rng_seed(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

impl Default for BusterConfig {
    fn default() -> Self {
        Self::new()
    }
}
