//! Session loop: referee input in, one command line per agent out.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use buster_core::Match;

use crate::config::ClientConfig;
use crate::protocol::ProtocolReader;

/// What a finished session amounted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub turns: u32,
    pub captured: u32,
}

/// Plays turns until `input` ends.
///
/// Commands are written in squad order and flushed after every turn. End of
/// input between turns finishes the session normally.
pub fn run<R, W>(input: R, mut output: W, config: &ClientConfig) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut reader = ProtocolReader::new(input);
    let setup = reader.read_setup().context("reading match setup")?;
    let mut game = Match::new(setup, &config.buster_config());

    while let Some(reports) = reader
        .read_turn()
        .with_context(|| format!("reading turn {}", game.turn() + 1))?
    {
        let commands = game
            .play_turn(&reports)
            .with_context(|| format!("playing turn {}", game.turn()))?;

        for command in &commands {
            writeln!(output, "{command}").context("writing command")?;
        }
        output.flush().context("flushing commands")?;

        if config.trace_stacks {
            for agent in game.squad() {
                tracing::info!(
                    turn = game.turn(),
                    agent = %agent.id(),
                    stack = ?agent.stack(),
                    "Behavior stack"
                );
            }
        }
    }

    let summary = SessionSummary {
        turns: game.turn(),
        captured: game.captured(),
    };
    tracing::info!(
        turns = summary.turns,
        captured = summary.captured,
        lines = reader.line(),
        "Input closed"
    );
    Ok(summary)
}
