use std::path::Path;

use anyhow::{Context, Result};

/// Read newline-delimited category tokens, in file order.
///
/// Trailing whitespace is stripped per line. Blank lines are kept as
/// empty-string categories and duplicates are not collapsed, so the
/// output file gets exactly one record per input line.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read category file {}", path.display()))?;
    Ok(text.lines().map(|line| line.trim_end().to_string()).collect())
}
