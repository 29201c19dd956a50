use buster_core::{
    AgentStatus, BusterConfig, Command, EntityId, Match, MatchSetup, Report, StateId, Team, Vector,
};

fn new_match(busters_per_player: u32, ghost_count: u32) -> Match {
    let setup = MatchSetup {
        busters_per_player,
        ghost_count,
        team: Team::Left,
    };
    Match::new(setup, &BusterConfig::with_rng_seed(99))
}

fn own(id: u32, position: Vector, status: AgentStatus) -> Report {
    Report::Agent {
        id: EntityId(id),
        position,
        team: Team::Left,
        status,
        carried: None,
    }
}

fn ghost(id: u32, position: Vector) -> Report {
    Report::Ghost {
        id: EntityId(id),
        position,
    }
}

fn rival(id: u32, position: Vector, status: AgentStatus) -> Report {
    Report::Agent {
        id: EntityId(id),
        position,
        team: Team::Right,
        status,
        carried: None,
    }
}

/// Hunting a ghost from first sighting to release.
///
/// 1. Two ghosts appear; the nearer one is tracked
/// 2. The agent closes in until the ghost sits in the capture band
/// 3. The referee reports the agent carrying; it heads home
/// 4. Inside the home radius it releases, then resumes exploring
#[test]
fn test_full_capture_cycle() {
    let mut game = new_match(1, 2);
    let agent = EntityId(0);

    // ================================================================
    // PHASE 1: Target selection
    // ================================================================
    let commands = game
        .play_turn(&[
            own(0, Vector::ORIGIN, AgentStatus::Idle),
            ghost(0, Vector::new(100, 0)),
            ghost(1, Vector::new(50, 0)),
        ])
        .expect("turn 1 should play");

    assert_eq!(commands, vec![Command::move_to(Vector::new(50, 0), StateId::Track)]);
    let buster = game.agent(agent).expect("agent exists");
    assert_eq!(buster.stack(), vec![StateId::Explore, StateId::Track]);
    assert_eq!(buster.body().focus, Some(EntityId(1)));

    // ================================================================
    // PHASE 2: Approach
    // ================================================================
    // Ghost drifted away; it is now exactly on the lower band edge
    let commands = game
        .play_turn(&[
            own(0, Vector::new(3000, 3000), AgentStatus::Idle),
            ghost(1, Vector::new(3900, 3000)),
        ])
        .expect("turn 2 should play");

    assert_eq!(commands, vec![Command::Bust(EntityId(1))]);
    assert_eq!(game.squad()[0].state(), StateId::Capture);

    // ================================================================
    // PHASE 3: Carry home
    // ================================================================
    let carrying = Report::Agent {
        id: agent,
        position: Vector::new(3000, 3000),
        team: Team::Left,
        status: AgentStatus::Carrying,
        carried: Some(EntityId(1)),
    };
    let commands = game.play_turn(&[carrying]).expect("turn 3 should play");

    assert_eq!(commands, vec![Command::move_to(Vector::ORIGIN, StateId::Return)]);
    assert_eq!(game.squad()[0].stack(), vec![StateId::Explore, StateId::Return]);

    // ================================================================
    // PHASE 4: Release exactly on the home radius
    // ================================================================
    let home_edge = Vector::new(BusterConfig::RETURN_RADIUS, 0);
    let commands = game
        .play_turn(&[own(0, home_edge, AgentStatus::Carrying)])
        .expect("turn 4 should play");

    assert_eq!(commands, vec![Command::Release]);
    assert_eq!(game.captured(), 0);

    let commands = game
        .play_turn(&[own(0, home_edge, AgentStatus::Idle)])
        .expect("turn 5 should play");

    assert!(matches!(
        commands[0],
        Command::Move {
            label: StateId::Explore,
            ..
        }
    ));
    assert_eq!(game.squad()[0].stack(), vec![StateId::Explore]);
    assert_eq!(game.captured(), 1);
}

#[test]
fn test_upper_band_edge_keeps_tracking() {
    let mut game = new_match(1, 1);

    game.play_turn(&[
        own(0, Vector::ORIGIN, AgentStatus::Idle),
        ghost(0, Vector::new(1760, 0)),
    ])
    .expect("turn should play");

    assert_eq!(game.squad()[0].state(), StateId::Track);
}

#[test]
fn test_ghost_too_close_is_never_busted() {
    let mut game = new_match(1, 1);
    let report = [
        own(0, Vector::ORIGIN, AgentStatus::Idle),
        ghost(0, Vector::new(899, 0)),
    ];

    for _ in 0..3 {
        let commands = game.play_turn(&report).expect("turn should play");
        assert_eq!(commands, vec![Command::move_to(Vector::new(899, 0), StateId::Track)]);
    }
}

/// Stun, lose the target, then sit out the full cooldown.
#[test]
fn test_stun_cooldown_spans_twenty_turns() {
    let mut game = new_match(1, 0);
    let me = own(0, Vector::ORIGIN, AgentStatus::Idle);
    let runner = rival(1, Vector::new(1000, 0), AgentStatus::Carrying);

    let commands = game.play_turn(&[me, runner]).expect("stun turn");
    assert_eq!(commands, vec![Command::Stun(EntityId(1))]);

    // Target out of view: Stun ends and the cooldown starts
    game.play_turn(&[me]).expect("escape turn");
    assert_eq!(game.squad()[0].state(), StateId::Explore);
    assert_eq!(game.squad()[0].body().stun_cooldown, BusterConfig::STUN_COOLDOWN);

    for turn in 1..BusterConfig::STUN_COOLDOWN {
        let commands = game.play_turn(&[me, runner]).expect("cooldown turn");
        assert!(
            !matches!(commands[0], Command::Stun(_)),
            "stunned again after {turn} turns"
        );
    }

    let commands = game.play_turn(&[me, runner]).expect("ready turn");
    assert_eq!(commands, vec![Command::Stun(EntityId(1))]);
}

#[test]
fn test_stale_ghost_is_chased_by_whole_squad() {
    let mut game = new_match(2, 3);

    game.play_turn(&[
        own(0, Vector::new(8000, 8000), AgentStatus::Stunned),
        own(1, Vector::new(12000, 1000), AgentStatus::Idle),
        ghost(2, Vector::new(6000, 6000)),
    ])
    .expect("sighting turn");
    // Agent 1 tracked the ghost; it is gone next turn so Track pops
    game.play_turn(&[
        own(0, Vector::new(8000, 8000), AgentStatus::Stunned),
        own(1, Vector::new(11000, 2000), AgentStatus::Idle),
    ])
    .expect("lost turn");
    assert_eq!(game.squad()[1].state(), StateId::Explore);

    // No fresh ghost: fall back to the one seen two turns ago
    game.begin_turn();
    for report in [
        own(0, Vector::new(8000, 8000), AgentStatus::Idle),
        own(1, Vector::new(10000, 3000), AgentStatus::Idle),
    ] {
        game.observe(report).expect("known agent");
    }
    game.assign_targets().expect("targets assigned");

    for agent in game.squad() {
        assert_eq!(agent.body().focus, Some(EntityId(2)));
        assert_eq!(agent.state(), StateId::Track);
    }

    // Still out of view and out of the band: both give it up on update
    let commands = game.act().expect("agents act");
    assert!(commands.iter().all(|command| matches!(
        command,
        Command::Move {
            label: StateId::Explore,
            ..
        }
    )));
}
