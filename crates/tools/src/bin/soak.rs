use anyhow::{Result, bail};
use clap::Parser;
use delve_core::{
    Algorithm, DistanceField, LevelLayout, LevelLayoutPlanner, LevelRequest, TileKind,
    derive_level_seed,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(author, version, about = "Generate many levels and check their invariants", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u128,
    /// Levels per algorithm and size
    #[arg(short, long, default_value_t = 200)]
    iterations: u32,
    /// Largest side length tried
    #[arg(long, default_value_t = 24)]
    max_side: usize,
}

fn check_level(layout: &LevelLayout) -> Result<()> {
    let grid = layout.grid();
    grid.verify_connected()?;

    let entrance = grid.id_at(layout.entrance())?;
    let goal = grid.id_at(layout.goal())?;
    let path = DistanceField::from_root(grid, entrance).path_to(goal)?;
    if path.windows(2).any(|pair| !grid.is_linked(pair[0], pair[1])) {
        bail!("entrance-to-goal path crosses a wall");
    }

    if grid.cell_count() > 1 {
        if layout.entrance() == layout.goal() {
            bail!("entrance and goal coincide on a {}x{} grid", grid.rows(), grid.cols());
        }
        if layout.used_fallback() {
            bail!("placement fell back on a connected {}x{} grid", grid.rows(), grid.cols());
        }
        if layout.tiles().contains(&TileKind::Wall) {
            bail!("a connected grid left a cell without links");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        LevelFilter::Warn,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let sides: Vec<usize> =
        [1, 2, 3, 5, 8, 13, 21].into_iter().filter(|&side| side <= args.max_side).collect();
    println!(
        "Soaking seed {} with {} iterations over {} side lengths...",
        args.seed,
        args.iterations,
        sides.len()
    );

    let mut generated = 0_u64;
    for algorithm in Algorithm::ALL {
        for &rows in &sides {
            for &cols in &sides {
                for iteration in 0..args.iterations {
                    let seed = derive_level_seed(args.seed, iteration);
                    let request = LevelRequest::new(rows, cols, seed).with_algorithm(algorithm);
                    let layout = LevelLayoutPlanner::plan(&request)?;
                    if let Err(err) = check_level(&layout) {
                        bail!("{algorithm} {rows}x{cols} seed {seed}: {err}");
                    }
                    generated += 1;
                }
            }
        }
    }

    println!("Soak completed successfully: {generated} levels checked.");
    Ok(())
}
