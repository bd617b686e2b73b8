//! todoctl - todo list service
//!
//! Entry point for the HTTP service:
//! - `serve` (default): run the HTTP API on top of PostgreSQL
//! - `init-db`: create the todos table and exit
//! - `completions`: generate shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "Todo list HTTP service backed by PostgreSQL",
    long_about = "Serve a small JSON API for todos. Configuration comes from DB_HOST, DB_PORT, \
                  DB_NAME, DB_USER, DB_PASSWORD, DATABASE_URL, LISTEN_HOST, PORT and \
                  CORS_PERMISSIVE (a .env file in the working directory is loaded first)."
)]
struct Cli {
    /// Enable debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (default)
    Serve(commands::serve::ServeArgs),
    /// Create the todos table if it does not exist, then exit
    InitDb,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; the process environment still applies
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli
        .command
        .unwrap_or_else(|| Commands::Serve(Default::default()))
    {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::InitDb => commands::run_init_db().await,
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown_otel();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
