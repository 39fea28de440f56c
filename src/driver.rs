use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::input::{parse_values, read_values};
use crate::print::write_values;
use crate::sort::{is_sorted_binary, sort_binary_in_place};

/// Built-in sample sorted when no values are supplied.
pub const SAMPLE: [i32; 9] = [0, 1, 0, 0, 1, 1, 0, 0, 1];

fn load_values(config: &Config) -> Result<Vec<i32>> {
    if let Some(list) = &config.values {
        return parse_values(list).context("parsing --values");
    }
    if let Some(path) = &config.input {
        return read_values(path).with_context(|| format!("loading input file {}", path));
    }
    Ok(SAMPLE.to_vec())
}

/// Prints the length and the array, sorts it, then prints it again.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let mut values = load_values(config)?;
    let n = values.len();
    info!(n, "loaded values");

    if !config.quiet {
        writeln!(out, "Length: {}", n)?;
    }
    write_values(out, "Unsorted: ", &values, n)?;

    sort_binary_in_place(&mut values, n)?;
    debug!(sorted = is_sorted_binary(&values), "sort complete");

    write_values(out, "Sorted:   ", &values, n)?;
    Ok(())
}
