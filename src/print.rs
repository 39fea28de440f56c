use std::io::Write;

use crate::error::{Result, SortError};

/// Renders the first `len` values as a single line, each value followed by a
/// space, terminated by a newline.
pub fn render(values: &[i32], len: usize) -> Result<String> {
    let prefix = values.get(..len).ok_or(SortError::LengthMismatch {
        len,
        actual: values.len(),
    })?;

    let mut line = String::with_capacity(prefix.len() * 3 + 1);
    for v in prefix {
        line.push_str(&v.to_string());
        line.push(' ');
    }
    line.push('\n');
    Ok(line)
}

/// Writes `label` followed by the rendered first `len` values.
pub fn write_values<W: Write>(out: &mut W, label: &str, values: &[i32], len: usize) -> Result<()> {
    let line = render(values, len)?;
    write!(out, "{}{}", label, line)?;
    Ok(())
}
