//! Extent demo: builds a biome buffer from config, paints it, and prints the
//! buffer alongside a window and the window's relative view.

use std::process::ExitCode;

use clap::Parser;
use extent_area::{AreaError, BiomeArea, BiomeBuffer, BiomeType, MutableBiomeArea};
use extent_config::{CliArgs, Config, default_config_dir};
use glam::IVec2;
use tracing::{error, info};

/// Island rings from the center outwards.
const ISLAND: [BiomeType; 6] = [
    BiomeType::IcePlains,
    BiomeType::ExtremeHills,
    BiomeType::Forest,
    BiomeType::Plains,
    BiomeType::Beach,
    BiomeType::Ocean,
];

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = match args.config.clone().map(Ok).unwrap_or_else(default_config_dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    extent_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AreaError> {
    let mut buffer = config.area.create_buffer()?;
    info!(
        min = %buffer.biome_min(),
        max = %buffer.biome_max(),
        fill = %config.area.default_biome,
        "Created biome buffer"
    );
    paint_island(&mut buffer);

    let live = buffer.unmodifiable_biome_view();
    let snapshot = buffer.immutable_biome_copy();

    let (min, max) = inset_window(&buffer);
    let window = buffer.biome_view(min, max)?;
    let mut relative = window.relative_biome_view();
    relative.set_biome(0, 0, BiomeType::MushroomIsland)?;

    print_area("buffer", &buffer);
    print_area("window", &window);
    print_area("relative", &relative);

    info!(
        live = %live.get_biome_at(min)?,
        snapshot = %snapshot.get_biome_at(min)?,
        "Window corner after relative write"
    );
    Ok(())
}

/// Paints concentric diamond rings of [`ISLAND`] around the buffer center.
fn paint_island(buffer: &mut BiomeBuffer) {
    let (min, max) = (buffer.biome_min(), buffer.biome_max());
    let center = min + (max - min) / 2;
    let size = buffer.biome_size();
    let reach = (i64::from(size.x) + i64::from(size.y)) / 2;
    buffer.fill_biomes(|pos| island_biome(pos, center, reach));
}

/// Ring biome for `pos`, by Manhattan distance from `center` scaled to `reach`.
///
/// Computed in `i64` so areas near `i32::MAX` wide don't overflow.
fn island_biome(pos: IVec2, center: IVec2, reach: i64) -> BiomeType {
    let dx = (i64::from(pos.x) - i64::from(center.x)).abs();
    let dy = (i64::from(pos.y) - i64::from(center.y)).abs();
    let ring = (dx + dy) * ISLAND.len() as i64 / reach.max(1);
    ISLAND[usize::try_from(ring).unwrap_or(usize::MAX).min(ISLAND.len() - 1)]
}

/// Rectangle inset by a quarter of the area's size on every side.
fn inset_window<A: BiomeArea>(area: &A) -> (IVec2, IVec2) {
    let inset = area.biome_size() / 4;
    (area.biome_min() + inset, area.biome_max() - inset)
}

/// Renders one row of biome symbols per line, min row first.
fn render<A: BiomeArea>(area: &A) -> String {
    let size = area.biome_size();
    let last_x = area.biome_max().x;
    let mut out = String::with_capacity((size.x as usize + 1).saturating_mul(size.y as usize));
    area.for_each_biome(|pos, biome| {
        out.push(biome.symbol());
        if pos.x == last_x {
            out.push('\n');
        }
    });
    out
}

fn print_area<A: BiomeArea>(label: &str, area: &A) {
    println!(
        "{label}: {} ..= {} (size {})",
        area.biome_min(),
        area.biome_max(),
        area.biome_size()
    );
    print!("{}", render(area));
}
