use crate::router::Router;
use crate::runtime_config::RouterConfig;
use crate::table::{load_table, parse_method};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Command-line interface for trierouter
///
/// Builds a router from a route table file and inspects it.
#[derive(Parser)]
#[command(name = "trierouter")]
#[command(about = "trierouter CLI", long_about = None)]
pub struct Cli {
    /// Log level for diagnostics written to stderr
    #[arg(long, global = true, env = "TRIEROUTER_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the routing tree built from a route table
    Dump {
        /// Path to the route table (YAML or JSON)
        #[arg(short, long)]
        table: PathBuf,
    },
    /// List every registered method and route pattern
    Routes {
        /// Path to the route table (YAML or JSON)
        #[arg(short, long)]
        table: PathBuf,
    },
    /// Resolve a request path and print the handler and captured parameters
    Resolve {
        /// Path to the route table (YAML or JSON)
        #[arg(short, long)]
        table: PathBuf,

        /// HTTP method of the request
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request path, e.g. /users/42
        path: String,
    },
}

/// Run a parsed command, writing its output to stdout
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}

/// Run a command, writing its output to `out`
pub fn run<W: Write>(command: Commands, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Dump { table } => {
            let router = build_router(&table)?;
            write!(out, "{}", router.tree())?;
        }
        Commands::Routes { table } => {
            let router = build_router(&table)?;
            for (method, pattern) in router.routes() {
                writeln!(out, "{:<7} {}", method.as_str(), pattern)?;
            }
        }
        Commands::Resolve {
            table,
            method,
            path,
        } => {
            let router = build_router(&table)?;
            let method = parse_method(&method)?;
            let matched = router.resolve(&path, &method)?;
            writeln!(out, "handler={}", matched.handler)?;
            writeln!(out, "pattern={}", matched.pattern)?;
            for (key, value) in &matched.path_params {
                writeln!(out, "param {key}={value}")?;
            }
        }
    }
    Ok(())
}

fn build_router(table: &Path) -> anyhow::Result<Router<Arc<str>>> {
    load_table(table)?.build_router_with_config(RouterConfig::from_env())
}
