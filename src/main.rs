use clap::Parser;
use std::fs;
use std::io::Read;

use arraybag::script::{self, Outcome};
use arraybag::{group_thousands, ArrayBag, Bag, MAX_CAPACITY};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// JSON report for `--json`.
#[derive(Serialize)]
struct Report {
    capacity: usize,
    size: usize,
    outcomes: Vec<Outcome>,
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            file,
            capacity,
            json,
        } => run_script(file.as_deref(), capacity, json),
        Commands::Demo { json } => run_source("demo", script::DEMO_SCRIPT, None, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `ARRAYBAG_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("ARRAYBAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_script(file: Option<&str>, capacity: Option<i64>, json: bool) -> Result<(), String> {
    let (name, source) = match file {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read script {}: {}", path, e))?;
            (path, source)
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("Failed to read script from stdin: {}", e))?;
            ("<stdin>", source)
        }
    };

    run_source(name, &source, capacity, json)
}

fn run_source(name: &str, source: &str, capacity: Option<i64>, json: bool) -> Result<(), String> {
    let commands = script::parse_script(source).map_err(|e| format!("{}: {}", name, e))?;

    let mut bag = match capacity {
        Some(capacity) => ArrayBag::with_capacity(capacity).map_err(|e| {
            format!(
                "Cannot create bag: {} (allowed: 1 to {})",
                e,
                group_thousands(MAX_CAPACITY as i64)
            )
        })?,
        None => ArrayBag::new(),
    };

    let outcomes = script::run(&mut bag, &commands);

    if json {
        let report = Report {
            capacity: bag.capacity(),
            size: bag.current_size(),
            outcomes,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    display::title(&format!("{} ({} commands)", name, commands.len()));
    for (step, outcome) in outcomes.iter().enumerate() {
        println!("{}", display::outcome_line(step + 1, outcome));
    }
    println!(
        "{}",
        display::color(
            display::GRAY,
            &format!(
                "size {} / capacity {}",
                bag.current_size(),
                bag.capacity()
            )
        )
    );

    Ok(())
}
