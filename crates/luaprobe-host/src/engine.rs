//! Engine seam: the handful of calls the runner needs from an embedded interpreter.
use mlua::{Lua, LuaOptions, StdLib};
use tracing::debug;

use crate::error::{HostError, HostResult};

/// An embedded interpreter. Dropping the value releases the state.
pub trait ScriptEngine: Sized {
    fn acquire() -> HostResult<Self>;
    fn open_std_libs(&mut self) -> HostResult<()>;
    /// Load and run `chunk` to completion. Any load or runtime failure comes
    /// back as [`HostError::Script`].
    fn exec(&mut self, chunk: &str) -> HostResult<()>;
    /// The engine's own version string, e.g. Lua's `_VERSION`.
    fn version(&self) -> HostResult<String>;
}

pub struct LuaEngine {
    lua: Lua,
}

impl LuaEngine {
    #[cfg(test)]
    fn lua(&self) -> &Lua {
        &self.lua
    }
}

impl ScriptEngine for LuaEngine {
    fn acquire() -> HostResult<Self> {
        // No libraries yet; they go in through open_std_libs.
        let lua = Lua::new_with(StdLib::NONE, LuaOptions::default())
            .map_err(|e| HostError::Acquire(lua_error_message(&e)))?;
        debug!("lua state created");
        Ok(Self { lua })
    }

    fn open_std_libs(&mut self) -> HostResult<()> {
        self.lua
            .load_std_libs(StdLib::ALL_SAFE)
            .map_err(|e| HostError::OpenLibs(lua_error_message(&e)))?;
        debug!("standard libraries loaded");
        Ok(())
    }

    fn exec(&mut self, chunk: &str) -> HostResult<()> {
        debug!(len = chunk.len(), "executing chunk");
        // chunk named after its source, same as luaL_dostring
        self.lua
            .load(chunk)
            .set_name(chunk)
            .exec()
            .map_err(|e| HostError::Script { message: lua_error_message(&e) })
    }

    fn version(&self) -> HostResult<String> {
        self.lua
            .globals()
            .get::<String>("_VERSION")
            .map_err(|e| HostError::OpenLibs(lua_error_message(&e)))
    }
}

impl Drop for LuaEngine {
    fn drop(&mut self) {
        debug!(used_memory = self.lua.used_memory(), "releasing lua state");
    }
}

const TRACEBACK_MARKER: &str = "\nstack traceback:";

/// The plain message Lua reported, without mlua's variant prefix or the
/// traceback mlua appends to runtime errors.
pub fn lua_error_message(err: &mlua::Error) -> String {
    match err {
        mlua::Error::SyntaxError { message, .. } => message.clone(),
        mlua::Error::RuntimeError(message) | mlua::Error::MemoryError(message) => {
            strip_traceback(message).to_string()
        }
        mlua::Error::CallbackError { cause, .. } => lua_error_message(cause),
        other => strip_traceback(&other.to_string()).to_string(),
    }
}

fn strip_traceback(message: &str) -> &str {
    match message.find(TRACEBACK_MARKER) {
        Some(at) => &message[..at],
        None => message,
    }
}
