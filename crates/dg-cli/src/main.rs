//! Command-line front end for the dungeon generation engine.
//!
//! Builds a dungeon from CLI parameters and prints the engine's structured
//! query results, as plain text or JSON.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use dg_core::DungeonRng;
use dg_core::dungeon::{Coord, Dungeon, DungeonConfig, Edge};
use dg_player::Player;

/// Generate an MST-based grid dungeon and report its structure.
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(version, about = "Grid-graph dungeon generator", long_about = None)]
struct Args {
    /// Number of grid rows
    #[arg(short = 'r', long, default_value_t = 6)]
    rows: usize,

    /// Number of grid columns
    #[arg(short = 'c', long, default_value_t = 8)]
    cols: usize,

    /// Explicit start cell as "row,col" (random if omitted)
    #[arg(long)]
    start: Option<String>,

    /// Explicit end cell as "row,col" (random if omitted)
    #[arg(long)]
    end: Option<String>,

    /// Percentage of cells holding treasure (0-100)
    #[arg(short = 't', long, default_value_t = 20)]
    treasure: u32,

    /// Extra non-tree edges added beyond the spanning tree
    #[arg(short = 'i', long, default_value_t = 0)]
    interconnectivity: u32,

    /// Connect opposite borders with wraparound passages
    #[arg(short = 'w', long)]
    wrap: bool,

    /// RNG seed (random if omitted)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TreasureCell {
    coord: Coord,
    count: usize,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    rows: usize,
    cols: usize,
    total_nodes: usize,
    start: Coord,
    end: Coord,
    edges: Vec<Edge>,
    treasure_cells: Vec<TreasureCell>,
    moves_from_start: Vec<Coord>,
}

fn parse_coord(text: &str) -> Result<Coord> {
    let (row, col) = text
        .split_once(',')
        .with_context(|| format!("expected \"row,col\", got {text:?}"))?;
    Ok(Coord::new(
        row.trim().parse().context("bad row")?,
        col.trim().parse().context("bad column")?,
    ))
}

fn build_report(args: &Args) -> Result<Report> {
    let mut rng = match args.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };

    let config = DungeonConfig {
        rows: args.rows,
        cols: args.cols,
        start: args.start.as_deref().map(parse_coord).transpose()?,
        end: args.end.as_deref().map(parse_coord).transpose()?,
        treasure_percentage: args.treasure,
        interconnectivity: args.interconnectivity,
        wrap_allowed: args.wrap,
    };

    let dungeon = Dungeon::generate(&config, &mut rng).context("dungeon construction failed")?;
    let player = Player::enter(&dungeon);

    Ok(Report {
        seed: rng.seed(),
        rows: dungeon.rows(),
        cols: dungeon.cols(),
        total_nodes: dungeon.total_nodes(),
        start: dungeon.start_position(),
        end: dungeon.end_position(),
        edges: dungeon.edges().to_vec(),
        treasure_cells: dungeon
            .treasure_bearing_nodes()
            .iter()
            .map(|node| TreasureCell {
                coord: node.coord(),
                count: node.treasures().len(),
            })
            .collect(),
        moves_from_start: dungeon.possible_moves(player.location()),
    })
}

fn print_text(report: &Report) {
    println!("seed: {}", report.seed);
    println!(
        "grid: {} x {} ({} nodes)",
        report.rows, report.cols, report.total_nodes
    );
    println!("start: {}  end: {}", report.start, report.end);

    println!("edges ({}):", report.edges.len());
    for edge in &report.edges {
        println!("  {} -> {} (weight {})", edge.src, edge.dest, edge.weight);
    }

    println!("treasure cells ({}):", report.treasure_cells.len());
    for cell in &report.treasure_cells {
        println!("  {} holds {}", cell.coord, cell.count);
    }

    let moves: Vec<String> = report
        .moves_from_start
        .iter()
        .map(|coord| coord.to_string())
        .collect();
    println!("moves from start: {}", moves.join(", "));
}

fn main() -> Result<()> {
    let args = Args::parse();
    let report = build_report(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coord("2,3").unwrap(), Coord::new(2, 3));
        assert_eq!(parse_coord(" 0 , 11 ").unwrap(), Coord::new(0, 11));
        assert!(parse_coord("7").is_err());
    }

    #[test]
    fn seeded_report_is_reproducible() {
        let args = Args::parse_from(["dungeon", "--seed", "77", "--rows", "5", "--cols", "6"]);
        let a = build_report(&args).unwrap();
        let b = build_report(&args).unwrap();
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn infeasible_request_surfaces_as_error() {
        let args = Args::parse_from([
            "dungeon",
            "--seed",
            "1",
            "--rows",
            "3",
            "--cols",
            "4",
            "--interconnectivity",
            "100",
        ]);
        assert!(build_report(&args).is_err());
    }
}
