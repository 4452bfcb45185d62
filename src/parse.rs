use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::Board;

/// Text format: the size N first, then N² tile values in row-major order,
/// all whitespace-delimited.
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let size = tokens
            .next()
            .context("Missing board size")?
            .parse::<usize>()
            .context("Invalid board size")?;
        ensure!(size >= 2, "Board size must be at least 2, got {size}");
        // Bound before reserving anything proportional to the header.
        ensure!(
            size <= u8::MAX as usize,
            "Board size {size} too large",
        );

        let mut rows = Vec::with_capacity(size);
        for row in 0..size {
            let mut values = Vec::with_capacity(size);
            for col in 0..size {
                let token = tokens.next().with_context(|| {
                    format!("Missing tile ({row}, {col}), expected {} values", size * size)
                })?;
                let value = token
                    .parse::<u32>()
                    .with_context(|| format!("Invalid tile ({row}, {col}): {token:?}"))?;
                values.push(value);
            }
            rows.push(values);
        }
        ensure!(
            tokens.next().is_none(),
            "Trailing input after {} tiles",
            size * size,
        );

        Board::from_tiles(&rows)
    }
}
