//! End-to-end sessions over in-memory input.

use buster_client::{ClientConfig, ProtocolError, SessionSummary, run};

fn play(input: &str) -> (anyhow::Result<SessionSummary>, String) {
    let mut output = Vec::new();
    let result = run(input.as_bytes(), &mut output, &ClientConfig::default());
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn tracks_nearest_ghost_and_drops_it_once_lost() {
    let input = "\
1
4
0
3
0 0 0 0 0 -1
0 100 0 -1 0 0
1 50 0 -1 0 0
2
0 5000 5000 0 0 -1
2 5900 5000 -1 0 0
";
    let (result, output) = play(input);

    assert_eq!(result.unwrap(), SessionSummary { turns: 2, captured: 0 });
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "MOVE 50 0 TRACK");
    // Ghost 1 vanished while still tracked: back to the patrol route
    assert_eq!(lines[1], "MOVE 13801 2200 EXPLORE");
}

#[test]
fn release_near_home_scores_once() {
    let input = "\
1
1
1
1
1 15000 8000 1 1 0
1
1 15000 8000 1 0 -1
1
1 15000 8000 1 0 -1
";
    let (result, output) = play(input);

    let summary = result.unwrap();
    assert_eq!(summary.captured, 1);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "RELEASE");
    assert!(lines[1].starts_with("MOVE ") && lines[1].ends_with(" EXPLORE"));
    assert!(lines[2].ends_with(" EXPLORE"));
}

#[test]
fn stunned_agent_holds_position() {
    let input = "\
1
0
0
1
0 2500 3000 0 2 -1
";
    let (result, output) = play(input);

    result.unwrap();
    assert_eq!(output, "MOVE 2500 3000 STUNNED\n");
}

#[test]
fn carrying_rival_in_reach_is_stunned() {
    let input = "\
2
0
0
3
0 4000 4000 0 0 -1
1 9000 1000 0 0 -1
2 5000 4500 1 1 7
";
    let (result, output) = play(input);

    result.unwrap();
    assert_eq!(output.lines().next(), Some("STUN 2"));
}

#[test]
fn eof_between_turns_ends_cleanly() {
    let (result, output) = play("2\n3\n0\n");

    assert_eq!(result.unwrap(), SessionSummary::default());
    assert!(output.is_empty());
}

#[test]
fn truncated_setup_fails() {
    let (result, _) = play("2\n");

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProtocolError>(),
        Some(ProtocolError::UnexpectedEof { .. })
    ));
}

fn roamer_lines(seed: u64) -> Vec<String> {
    // Three agents: slots 0 and 2 patrol, slot 1 roams to random points
    let input = "\
3
0
0
3
0 2000 2000 0 0 -1
1 8000 4500 0 0 -1
2 3000 7000 0 0 -1
3
0 2100 2000 0 0 -1
1 8100 4500 0 0 -1
2 3100 7000 0 0 -1
";
    let config = ClientConfig {
        seed: Some(seed),
        ..ClientConfig::default()
    };
    let mut output = Vec::new();
    run(input.as_bytes(), &mut output, &config).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .skip(1)
        .step_by(3)
        .map(str::to_owned)
        .collect()
}

#[test]
fn explore_targets_replay_with_the_seed() {
    let first = roamer_lines(11);
    let again = roamer_lines(11);
    let other = roamer_lines(12);

    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|line| line.ends_with(" EXPLORE")));
    assert_eq!(first, again);
    assert_ne!(first, other);
}
