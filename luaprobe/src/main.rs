use anyhow::Result;
use clap::Parser;
use luaprobe_host::{run_lua, RunOptions, DEFAULT_CHUNK, LINKAGE};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Check that the embedded Lua runtime links and runs.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Lua chunk to run instead of the built-in greeting
    #[arg(long, value_name = "CHUNK", default_value = DEFAULT_CHUNK)]
    eval: String,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    debug!(linkage = LINKAGE, "starting");
    let opts = RunOptions { chunk: cli.eval };
    let mut stderr = std::io::stderr().lock();
    // A failing script is reported on stderr but does not change the exit status.
    let outcome = run_lua(&opts, &mut stderr)?;
    debug!(ok = outcome.is_success(), "chunk finished");
    Ok(())
}
