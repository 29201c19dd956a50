//! Referee text protocol.
//!
//! Input is line oriented:
//!
//! ```text
//! <busters per player>
//! <ghost count>
//! <my team id>
//! then per turn:
//! <entity count>
//! <entityId> <x> <y> <entityType> <state> <value>   (entity count times)
//! ```
//!
//! `entityType` is -1 for ghosts and the owning team id for agents. For agents
//! `state` is the status code and `value` the id of the carried ghost (-1 if
//! none). Ghost `state` and `value` are not used.

use std::io::BufRead;

use buster_core::{AgentStatus, EntityId, ErrorSeverity, GameError, MatchSetup, Report, Team, Vector};

/// Fields on an entity line.
const ENTITY_FIELDS: usize = 6;
/// `entityType` of a ghost.
const GHOST_TYPE: i32 = -1;
/// Upper bound on report slots reserved from an untrusted entity count.
const MAX_RESERVED_REPORTS: usize = 64;

/// Errors raised while reading referee input.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("input ended while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: expected {expected} fields, found {found}: {text:?}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
        text: String,
    },

    #[error("line {line}: invalid {field}: {text:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        text: String,
    },

    #[error("line {line}: unknown team id {team}")]
    UnknownTeam { line: usize, team: i32 },

    #[error("line {line}: unknown agent status {code}")]
    UnknownStatus { line: usize, code: i32 },

    #[error("reading input failed")]
    Io(#[from] std::io::Error),
}

impl GameError for ProtocolError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnexpectedEof { .. } | Self::Io(_) | Self::FieldCount { .. } => {
                ErrorSeverity::Fatal
            }
            Self::InvalidNumber { .. } | Self::UnknownTeam { .. } | Self::UnknownStatus { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnexpectedEof { .. } => "PROTOCOL_EOF",
            Self::FieldCount { .. } => "PROTOCOL_FIELD_COUNT",
            Self::InvalidNumber { .. } => "PROTOCOL_INVALID_NUMBER",
            Self::UnknownTeam { .. } => "PROTOCOL_UNKNOWN_TEAM",
            Self::UnknownStatus { .. } => "PROTOCOL_UNKNOWN_STATUS",
            Self::Io(_) => "PROTOCOL_IO",
        }
    }
}

/// Parses one entity line.
///
/// `line` is the 1-based input line number, used only in errors.
pub fn parse_entity(line: usize, text: &str) -> Result<Report, ProtocolError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != ENTITY_FIELDS {
        return Err(ProtocolError::FieldCount {
            line,
            expected: ENTITY_FIELDS,
            found: fields.len(),
            text: text.to_owned(),
        });
    }

    let id: u32 = parse_field(line, "entity id", fields[0])?;
    let x: i32 = parse_field(line, "x coordinate", fields[1])?;
    let y: i32 = parse_field(line, "y coordinate", fields[2])?;
    let kind: i32 = parse_field(line, "entity type", fields[3])?;
    let state: i32 = parse_field(line, "state", fields[4])?;
    let value: i32 = parse_field(line, "value", fields[5])?;

    let id = EntityId(id);
    let position = Vector::new(x, y);

    if kind == GHOST_TYPE {
        return Ok(Report::Ghost { id, position });
    }

    let team = Team::from_index(kind).ok_or(ProtocolError::UnknownTeam { line, team: kind })?;
    let status =
        AgentStatus::from_code(state).ok_or(ProtocolError::UnknownStatus { line, code: state })?;
    let carried = match u32::try_from(value) {
        Ok(ghost) if status == AgentStatus::Carrying => Some(EntityId(ghost)),
        _ => None,
    };

    Ok(Report::Agent {
        id,
        position,
        team,
        status,
        carried,
    })
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    text: &str,
) -> Result<T, ProtocolError> {
    text.trim().parse().map_err(|_| ProtocolError::InvalidNumber {
        line,
        field,
        text: text.to_owned(),
    })
}

/// Line reader over referee input.
#[derive(Debug)]
pub struct ProtocolReader<R> {
    input: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: 0,
            buf: String::new(),
        }
    }

    /// Lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Reads the three setup lines.
    pub fn read_setup(&mut self) -> Result<MatchSetup, ProtocolError> {
        let busters_per_player = self.read_number("busters per player")?;
        let ghost_count = self.read_number("ghost count")?;
        let team_id: i32 = self.read_number("team id")?;
        let team = Team::from_index(team_id).ok_or(ProtocolError::UnknownTeam {
            line: self.line,
            team: team_id,
        })?;

        Ok(MatchSetup {
            busters_per_player,
            ghost_count,
            team,
        })
    }

    /// Reads one turn of reports.
    ///
    /// Returns `Ok(None)` when input ends cleanly before the entity count.
    /// Entity lines with bad values are logged and skipped; a missing or
    /// malformed line structure is an error.
    pub fn read_turn(&mut self) -> Result<Option<Vec<Report>>, ProtocolError> {
        if !self.next_line()? {
            return Ok(None);
        }
        let count: usize = parse_field(self.line, "entity count", &self.buf)?;

        let mut reports = Vec::with_capacity(count.min(MAX_RESERVED_REPORTS));
        for _ in 0..count {
            if !self.next_line()? {
                return Err(ProtocolError::UnexpectedEof {
                    expected: "entity line",
                });
            }
            match parse_entity(self.line, &self.buf) {
                Ok(report) => reports.push(report),
                Err(err) if err.severity().is_recoverable() => {
                    tracing::warn!(code = err.error_code(), "Skipping entity: {err}");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(Some(reports))
    }

    fn read_number<T: std::str::FromStr>(&mut self, field: &'static str) -> Result<T, ProtocolError> {
        if !self.next_line()? {
            return Err(ProtocolError::UnexpectedEof { expected: field });
        }
        parse_field(self.line, field, &self.buf)
    }

    /// Loads the next non-blank line into `buf`. Returns false at EOF.
    fn next_line(&mut self) -> Result<bool, ProtocolError> {
        loop {
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            if !self.buf.trim().is_empty() {
                let trimmed = self.buf.trim_end().len();
                self.buf.truncate(trimmed);
                return Ok(true);
            }
        }
    }
}
