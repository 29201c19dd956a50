//! Text-protocol front end for the `buster-core` decision engine.
//!
//! The `busters` binary wires these pieces together: [`config`] from the
//! environment, [`logging`] to stderr or a file, then [`session::run`] over
//! stdin and stdout.

pub mod config;
pub mod logging;
pub mod protocol;
pub mod session;

pub use config::ClientConfig;
pub use protocol::{ProtocolError, ProtocolReader, parse_entity};
pub use session::{SessionSummary, run};
