use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use npuzzle_solver::{solve, Board};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Missing puzzle file argument")?;
    let data = std::fs::read_to_string(&path).context("Failed to read the puzzle")?;
    let board = data
        .parse::<Board>()
        .context("Failed to parse the puzzle")?;

    if !board.is_solvable() {
        println!("{}", style("Unsolvable puzzle").red());
        return Ok(());
    }

    let bar = ProgressBar::new_spinner()
        .with_style(ProgressStyle::with_template("{spinner} {pos} nodes expanded")?);
    let solution = solve::astar(&board, || bar.inc(1))?;
    bar.finish_and_clear();

    println!("Minimum number of moves = {}", solution.moves);
    for board in &solution.path {
        println!("{board}");
    }
    Ok(())
}
