//! `slots` CLI — run the scheduling service or compute suggestions offline.
//!
//! ## Usage
//!
//! ```sh
//! # Serve the HTTP API on 127.0.0.1:8000
//! slots serve
//!
//! # Serve on another address with a custom working day
//! slots serve --host 0.0.0.0 --port 9000 --work-start 08:00 --work-end 17:00
//!
//! # Suggest 60-minute slots for a saved-slots document (stdin → stdout)
//! echo '{"users":[{"id":1,"busy":[["09:00","10:00"]]}]}' | slots suggest --duration 60
//!
//! # Same, reading from a file
//! slots suggest --duration 30 -i team.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slot_engine::{Scheduler, WorkWindow};
use slot_server::config::{self, ServerConfig, DEFAULT_PORT};
use slot_server::routes::slots::SaveSlotsRequest;
use std::io::{self, Read};
use std::net::IpAddr;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find and book free time common to a group"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind
        #[arg(long, env = "SLOTS_HOST", default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to bind
        #[arg(long, env = "SLOTS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Print common free slots for a saved-slots JSON document
    Suggest {
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: i32,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Args)]
struct WindowArgs {
    /// Start of the working day (HH:MM)
    #[arg(long, env = "SLOTS_WORK_START", default_value = "09:00")]
    work_start: String,
    /// End of the working day (HH:MM)
    #[arg(long, env = "SLOTS_WORK_END", default_value = "18:00")]
    work_end: String,
}

impl WindowArgs {
    fn to_window(&self) -> Result<WorkWindow> {
        config::parse_window(&self.work_start, &self.work_end)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, window } => {
            slot_server::logging::init();
            let config = ServerConfig {
                host,
                port,
                window: window.to_window()?,
            };
            slot_server::serve(config).await?;
        }
        Commands::Suggest {
            duration,
            input,
            window,
        } => {
            slot_server::logging::init_with_level("warn");
            let json = read_input(input.as_deref())?;
            let request: SaveSlotsRequest =
                serde_json::from_str(&json).context("Failed to parse saved-slots JSON")?;

            let mut scheduler = Scheduler::with_window(window.to_window()?);
            scheduler
                .save_slots(&request.users)
                .context("Failed to load busy slots")?;

            let suggestions = scheduler.suggest(duration);
            println!("{}", serde_json::to_string(&suggestions)?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
