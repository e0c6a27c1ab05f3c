//! Minimal Lua host: create a state, load the standard libraries, run one chunk.
pub mod engine;
pub mod error;
pub mod runner;

pub use engine::{lua_error_message, LuaEngine, ScriptEngine};
pub use error::{HostError, HostResult};
pub use runner::{run, run_lua, Outcome, RunOptions, DEFAULT_CHUNK};

#[cfg(all(feature = "vendored", feature = "system"))]
compile_error!("features `vendored` and `system` are mutually exclusive");

/// How the Lua library got into this binary.
pub const LINKAGE: &str = if cfg!(feature = "vendored") { "vendored" } else { "system" };

#[cfg(test)]
mod tests {
    #[test]
    fn linkage_follows_features() {
        if cfg!(feature = "system") {
            assert_eq!(super::LINKAGE, "system");
        } else if cfg!(feature = "vendored") {
            assert_eq!(super::LINKAGE, "vendored");
        }
    }
}
