//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};

/// Which solving strategy to run
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Strategy {
    /// Plain nested-loop scan
    Linear,
    /// Work queue drained on the main thread
    Queue,
    /// Work queue drained by a worker pool
    Threaded,
    /// Run every strategy on identical grids and compare the counts
    #[default]
    All,
}

/// Obstacle layout preset
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum MapPreset {
    /// No obstacles
    #[default]
    Open,
    /// Wall down one column with a single opening row
    Wall,
    /// Start cell blocked (unsolvable)
    BlockedStart,
    /// End cell blocked (unsolvable)
    BlockedEnd,
}

/// Count monotone down-and-left paths through an obstacle grid
#[derive(Parser, Debug)]
#[command(name = "downleft", about = "Count monotone down-and-left paths through an obstacle grid", version)]
pub struct Args {
    /// Grid side length
    #[arg(short, long, default_value_t = 100)]
    pub size: usize,

    /// Strategy to run
    #[arg(long, value_enum, default_value = "all")]
    pub strategy: Strategy,

    /// Worker threads for the threaded strategy
    #[arg(short, long, default_value_t = 2)]
    pub workers: usize,

    /// Obstacle layout
    #[arg(short, long, value_enum, default_value = "open")]
    pub map: MapPreset,

    /// Column the wall preset blocks (defaults to the middle column)
    #[arg(long)]
    pub wall_column: Option<usize>,

    /// Row left open in the wall preset (defaults to the bottom row)
    #[arg(long)]
    pub opening_row: Option<usize>,

    /// Print the populated grid after each solve
    #[arg(short, long)]
    pub print_map: bool,
}
