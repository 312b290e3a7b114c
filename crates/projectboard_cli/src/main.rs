//! Interactive project board in the terminal.
//!
//! # Responsibility
//! - Prompt for the three form fields and submit them to the core.
//! - Print both project lists whenever the store changes.

mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use projectboard_core::{default_log_level, init_logging, FieldId, FormSurface, ProjectBoard};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use terminal::TerminalSurface;

/// Command-line arguments for projectboard
#[derive(Parser, Debug)]
#[command(name = "projectboard")]
#[command(about = "Collect projects from a form into active/finished lists")]
#[command(version)]
struct Args {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "PROJECTBOARD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "PROJECTBOARD_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Print the final project snapshot as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = args
        .log_dir
        .unwrap_or_else(|| std::env::temp_dir().join("projectboard-logs"));
    init_logging(&level, &log_dir).context("Failed to initialize logging")?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        projectboard_core::core_version()
    );

    let surface = Rc::new(TerminalSurface::new());
    let board = ProjectBoard::new(surface.clone(), surface.clone());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    'form: loop {
        for field in FieldId::ALL {
            let current = surface.read_field(field);
            if current.is_empty() {
                print!("{field}: ");
            } else {
                print!("{field} [{current}]: ");
            }
            std::io::stdout().flush().context("Failed to flush prompt")?;

            let Some(line) = lines.next() else {
                break 'form;
            };
            let line = line.context("Failed to read input")?;
            if !line.is_empty() {
                surface.set_field(field, line);
            }
        }

        // Rejections are reported through the surface; fields stay filled.
        let _ = board.input().submit_form();
    }
    println!();

    if args.json {
        let json = serde_json::to_string_pretty(&board.snapshot())
            .context("Failed to serialize projects")?;
        println!("{json}");
    }

    info!(
        "event=cli_exit module=cli status=ok projects={}",
        board.state().borrow().len()
    );
    Ok(())
}
