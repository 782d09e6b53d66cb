mod summary;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use libero_core::context::{self, AppConfig};
use libero_core::reader::parse_match_file;
use libero_core::watcher::{ScoutFileEvent, ScoutWatcher};

#[derive(Parser)]
#[command(version, about = "volleyball scout log parser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one scout file and print a match summary
    Parse {
        path: String,
        /// Dump the full structured match as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Watch the scout directory and re-parse files as they change
    Watch {
        /// Directory to watch; defaults to the configured scout directory
        #[arg(short, long)]
        dir: Option<String>,
    },
    /// Show the active configuration
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = context::load_config();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { path, json } => parse(&config, &path, json),
        Commands::Watch { dir } => watch(&config, dir),
        Commands::Config => {
            println!("scout directory: {}", config.scout_directory);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse(config: &AppConfig, path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = context::resolve_scout_path(config, Path::new(path));
    let record = parse_match_file(&resolved)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        summary::print_match(&record);
    }
    Ok(())
}

fn watch(config: &AppConfig, dir: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.scout_directory));
    if !dir.is_dir() {
        return Err(format!("not a directory: {}", dir.display()).into());
    }

    let watcher = ScoutWatcher::new(&dir)?;
    println!("watching {}", dir.display());

    while let Some(event) = watcher.next_event() {
        let path = match event {
            ScoutFileEvent::Created(path) | ScoutFileEvent::Modified(path) => path,
        };
        match parse_match_file(&path) {
            Ok(record) => {
                println!("── {} ──", path.display());
                summary::print_match(&record);
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "re-parse failed"),
        }
    }

    Ok(())
}
