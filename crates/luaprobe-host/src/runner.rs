use std::io::Write;

use tracing::debug;

use crate::engine::{LuaEngine, ScriptEngine};
use crate::error::{HostError, HostResult};

pub const DEFAULT_CHUNK: &str = "print('Hello from Lua!')";

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub chunk: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { chunk: DEFAULT_CHUNK.to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

/// Acquire an engine, install its standard libraries and run `opts.chunk`.
///
/// A script failure is written to `err` as `Error: <message>` and returned as
/// [`Outcome::Failed`]; it is not an `Err`. Only failing to set the engine up,
/// or to write the diagnostic, is. The engine is dropped on every path.
pub fn run<E: ScriptEngine, W: Write>(opts: &RunOptions, err: &mut W) -> HostResult<Outcome> {
    let mut engine = E::acquire()?;
    engine.open_std_libs()?;
    match engine.version() {
        Ok(version) => debug!(%version, "engine ready"),
        Err(e) => debug!(error = %e, "engine version unavailable"),
    }

    match engine.exec(&opts.chunk) {
        Ok(()) => Ok(Outcome::Succeeded),
        Err(HostError::Script { message }) => {
            debug!(%message, "script failed");
            writeln!(err, "Error: {message}")?;
            err.flush()?;
            Ok(Outcome::Failed { message })
        }
        Err(e) => Err(e),
    }
}

pub fn run_lua<W: Write>(opts: &RunOptions, err: &mut W) -> HostResult<Outcome> {
    run::<LuaEngine, W>(opts, err)
}
