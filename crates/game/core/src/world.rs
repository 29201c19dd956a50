//! Session-wide world records.
//!
//! The [`Arena`] is everything an agent's behaviors may consult or touch
//! besides the agent itself: ghost records, the best-guess picture of the
//! opposing squad, the explore-target generator and the capture tally.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::behavior::StateId;
use crate::config::BusterConfig;
use crate::geometry::Vector;
use crate::report::AgentStatus;

/// Identifier of a ghost or an agent, as assigned by the referee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side of the arena a squad plays from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Team {
    /// Team 0, base in the top-left corner.
    Left,
    /// Team 1, base in the bottom-right corner.
    Right,
}

impl Team {
    /// Maps the referee's team index (0 or 1).
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn index(self) -> u32 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Corner where captured ghosts are released.
    pub const fn home_base(self) -> Vector {
        match self {
            Self::Left => BusterConfig::LEFT_BASE,
            Self::Right => BusterConfig::RIGHT_BASE,
        }
    }
}

/// What is known about one ghost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ghost {
    /// Last reported position.
    pub position: Vector,
    /// Turns since the last sighting; `None` if never seen this session.
    pub last_seen: Option<u32>,
    /// Set while some agent reports carrying this ghost.
    pub captured: bool,
}

impl Ghost {
    /// Records a fresh sighting.
    pub fn sighted(&mut self, position: Vector) {
        self.position = position;
        self.last_seen = Some(0);
        self.captured = false;
    }

    /// Advances the sighting age by one turn. Never-seen ghosts stay unseen.
    pub fn age(&mut self) {
        if let Some(turns) = self.last_seen.as_mut() {
            *turns += 1;
        }
    }

    /// True if the ghost was reported in the current turn.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.last_seen == Some(0)
    }
}

/// Best-guess record of an opposing agent.
///
/// The opponent's real decision state is unobservable; `posture` is inferred
/// from the coarse status code it reports and is only as good as that code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rival {
    pub id: EntityId,
    pub position: Vector,
    /// Reported in the current turn.
    pub seen: bool,
    pub posture: StateId,
}

impl Rival {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            position: Vector::ORIGIN,
            seen: false,
            posture: StateId::Explore,
        }
    }

    /// Records a sighting and replaces the inferred posture.
    pub fn sighted(&mut self, position: Vector, status: AgentStatus) {
        self.position = position;
        self.seen = true;
        self.posture = status.inferred_state();
    }
}

/// Shared world state that behaviors read and mutate.
#[derive(Clone, Debug)]
pub struct Arena {
    team: Team,
    ghosts: Vec<Ghost>,
    rivals: Vec<Rival>,
    rng: ChaCha8Rng,
    captured: u32,
}

impl Arena {
    pub fn new(team: Team, ghost_count: usize, rivals: Vec<Rival>, rng_seed: u64) -> Self {
        Self {
            team,
            ghosts: vec![Ghost::default(); ghost_count],
            rivals,
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            captured: 0,
        }
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    pub fn ghost(&self, id: EntityId) -> Option<&Ghost> {
        self.ghosts.get(id.index())
    }

    pub fn ghost_mut(&mut self, id: EntityId) -> Option<&mut Ghost> {
        self.ghosts.get_mut(id.index())
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    /// Ages every ghost record by one turn.
    pub fn age_ghosts(&mut self) {
        self.ghosts.iter_mut().for_each(Ghost::age);
    }

    pub fn rival(&self, id: EntityId) -> Option<&Rival> {
        self.rivals.iter().find(|rival| rival.id == id)
    }

    pub fn rival_mut(&mut self, id: EntityId) -> Option<&mut Rival> {
        self.rivals.iter_mut().find(|rival| rival.id == id)
    }

    pub fn rivals(&self) -> &[Rival] {
        &self.rivals
    }

    /// Clears the per-turn `seen` flag of every rival.
    pub fn forget_rivals(&mut self) {
        for rival in &mut self.rivals {
            rival.seen = false;
        }
    }

    /// Uniformly random point inside the arena.
    pub fn random_point(&mut self) -> Vector {
        Vector::new(
            self.rng.gen_range(0..BusterConfig::ARENA_WIDTH),
            self.rng.gen_range(0..BusterConfig::ARENA_HEIGHT),
        )
    }

    /// Ghosts released at home this session.
    #[inline]
    pub fn captured(&self) -> u32 {
        self.captured
    }

    pub(crate) fn record_capture(&mut self) {
        self.captured += 1;
    }
}

/// Entities reported in the current turn, in report order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Perception {
    pub ghosts: Vec<EntityId>,
    pub rivals: Vec<EntityId>,
}

impl Perception {
    pub fn clear(&mut self) {
        self.ghosts.clear();
        self.rivals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_age_counts_only_after_first_sighting() {
        let mut ghost = Ghost::default();
        ghost.age();
        assert_eq!(ghost.last_seen, None);

        ghost.sighted(Vector::new(10, 10));
        assert!(ghost.is_fresh());

        ghost.age();
        ghost.age();
        assert_eq!(ghost.last_seen, Some(2));
        assert!(!ghost.is_fresh());
    }

    #[test]
    fn home_base_depends_on_team() {
        assert_eq!(Team::Left.home_base(), Vector::new(0, 0));
        assert_eq!(Team::Right.home_base(), Vector::new(16000, 9000));
        assert_eq!(Team::from_index(1), Some(Team::Right));
        assert_eq!(Team::from_index(2), None);
    }

    #[test]
    fn random_points_stay_in_arena_and_replay_with_seed() {
        let mut a = Arena::new(Team::Left, 0, Vec::new(), 7);
        let mut b = Arena::new(Team::Left, 0, Vec::new(), 7);

        for _ in 0..100 {
            let point = a.random_point();
            assert_eq!(point, b.random_point());
            assert!((0..BusterConfig::ARENA_WIDTH).contains(&point.x));
            assert!((0..BusterConfig::ARENA_HEIGHT).contains(&point.y));
        }
    }

    #[test]
    fn rival_posture_follows_status() {
        let mut rival = Rival::new(EntityId(3));
        rival.sighted(Vector::new(5, 5), AgentStatus::Carrying);

        assert!(rival.seen);
        assert_eq!(rival.posture, StateId::Return);
    }
}
