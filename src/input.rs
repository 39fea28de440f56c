use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SortError};

/// Parses signed integers separated by commas and/or whitespace.
/// Empty tokens (e.g. a trailing comma) are skipped.
pub fn parse_values(text: &str) -> Result<Vec<i32>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|source| SortError::Parse {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Reads integers from a text file, one or more per line.
pub fn read_values<P: AsRef<Path>>(path: P) -> Result<Vec<i32>> {
    let path = path.as_ref();
    let io_err = |source| SortError::Io {
        path: path.display().to_string(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(io_err)?;
        values.extend(parse_values(&line)?);
    }

    debug!(path = %path.display(), count = values.len(), "read input values");
    Ok(values)
}
