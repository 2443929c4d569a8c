mod config;
mod render;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use delve_core::{Algorithm, LevelLayout, LevelLayoutPlanner, LevelProfile, LevelRequest};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

use config::GeneratorConfig;
use render::render_ascii;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Generate one maze level and print it", long_about = None)]
struct Args {
    /// Level seed, or the run seed when `--depth` is given
    #[arg(short, long, default_value_t = 42)]
    seed: u128,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    /// binary-tree, aldous-broder, recursive-backtracker or recursive-division
    #[arg(short, long)]
    algorithm: Option<Algorithm>,
    #[arg(short, long)]
    difficulty: Option<u8>,
    /// Size the level for this depth of a run and derive its seed from `--seed`
    #[arg(long)]
    depth: Option<u32>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    /// Generator defaults file; defaults to the per-user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the effective rows, cols, difficulty and algorithm back to the config file
    #[arg(long)]
    save_config: bool,
    /// Repeat for more log output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// File values first, then the depth profile, then explicit flags.
fn resolve_request(args: &Args, file: &GeneratorConfig) -> LevelRequest {
    let mut request = match args.depth {
        Some(depth) => LevelProfile::for_depth(depth).level_request(args.seed),
        None => LevelRequest::new(file.rows, file.cols, args.seed).with_difficulty(file.difficulty),
    };
    if let Some(rows) = args.rows {
        request.rows = rows;
    }
    if let Some(cols) = args.cols {
        request.cols = cols;
    }
    if let Some(difficulty) = args.difficulty {
        request.difficulty = difficulty;
    }
    request.algorithm = args.algorithm.or(file.algorithm);
    request
}

fn print_level(layout: &LevelLayout, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Ascii => {
            print!("{}", render_ascii(layout));
            println!("Algorithm: {}", layout.algorithm());
            println!("Entrance: {}  Goal: {}", layout.entrance(), layout.goal());
            println!(
                "Fallback: {}  Repaired links: {}",
                layout.used_fallback(),
                layout.repaired_links()
            );
            println!("Fingerprint: {:016x}", layout.fingerprint());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&layout.snapshot())
                .context("Failed to serialize level snapshot")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config_path = args.config.clone().or_else(GeneratorConfig::get_default_path);
    let file = match &config_path {
        Some(path) => GeneratorConfig::load_or_default(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let request = resolve_request(&args, &file);
    log::info!(
        "generating {}x{} level from seed {} (difficulty {})",
        request.rows,
        request.cols,
        request.seed,
        request.difficulty
    );
    let layout = LevelLayoutPlanner::plan(&request).context("Level generation failed")?;

    if args.save_config {
        let path = config_path.context("No config path available on this platform")?;
        let saved = GeneratorConfig {
            rows: request.rows,
            cols: request.cols,
            difficulty: request.difficulty,
            algorithm: request.algorithm,
            ..file
        };
        saved
            .write_atomic(&path)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        log::info!("saved generator config to {}", path.display());
    }

    print_level(&layout, args.format)
}
