//! Obstacle layout presets.
//!
//! Each solve mutates its grid in place, so the driver builds a fresh grid
//! per strategy run. The wall preset reproduces the classic demo layout: one
//! column blocked top to bottom except for a single opening row, which
//! funnels every path through that one cell.

use downleft::{Grid, Position};

use crate::cli::{Args, MapPreset};
use crate::error::CliError;

/// Builds a fresh grid with the layout the arguments describe.
pub fn build(args: &Args) -> Result<Grid, CliError> {
    let grid = Grid::new(args.size)?;
    match args.map {
        MapPreset::Open => {}
        MapPreset::Wall => {
            let column = args.wall_column.unwrap_or(args.size / 2);
            let opening_row = args.opening_row.unwrap_or(args.size - 1);
            if column >= args.size {
                return Err(CliError::InvalidMap(format!(
                    "wall column {column} is outside a {0}x{0} grid",
                    args.size
                )));
            }
            if opening_row >= args.size {
                return Err(CliError::InvalidMap(format!(
                    "opening row {opening_row} is outside a {0}x{0} grid",
                    args.size
                )));
            }
            for row in 0..args.size {
                if row != opening_row {
                    grid.block(Position::new(row, column));
                }
            }
        }
        MapPreset::BlockedStart => grid.block(grid.start()),
        MapPreset::BlockedEnd => grid.block(grid.end()),
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use downleft::Cell;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("downleft").chain(argv.iter().copied()))
    }

    #[test]
    fn wall_preset_blocks_all_but_the_opening() {
        let grid = build(&args(&["--size", "5", "--map", "wall", "--wall-column", "2"])).unwrap();
        for row in 0..4 {
            assert_eq!(grid.cell(Position::new(row, 2)), Cell::Blocked);
        }
        assert_eq!(grid.cell(Position::new(4, 2)), Cell::Open);
    }

    #[test]
    fn out_of_bounds_wall_is_rejected() {
        let result = build(&args(&["--size", "4", "--map", "wall", "--wall-column", "9"]));
        assert!(matches!(result, Err(CliError::InvalidMap(_))));
    }

    #[test]
    fn blocked_end_preset_is_unsolvable() {
        let grid = build(&args(&["--size", "4", "--map", "blocked-end"])).unwrap();
        assert!(!grid.is_solvable());
    }
}
