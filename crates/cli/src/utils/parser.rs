use anyhow::{Context, Result, bail};
use quickcd_core::{ColumnRange, extract};
use std::path::PathBuf;

use crate::cli::SelectionArgs;

/// A `FILE:LINE[:COLUMN]` location, converted to 0-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

/// Parse `FILE:LINE[:COLUMN]` with 1-based numbers, as printed by compilers
/// and `grep -n`. Drive-letter colons in FILE are left alone.
pub fn parse_location(location: &str) -> Option<Location> {
    let mut parts = location.rsplitn(3, ':');
    let last = parts.next()?;
    let middle = parts.next()?;

    match (middle.parse::<usize>(), last.parse::<usize>()) {
        (Ok(line), Ok(column)) => {
            let file = parts.next().filter(|f| !f.is_empty())?;
            Some(Location {
                file: PathBuf::from(file),
                line: line.saturating_sub(1),
                column: column.saturating_sub(1),
            })
        }
        (_, Ok(line)) => {
            let file = location[..location.len() - last.len() - 1].to_string();
            if file.is_empty() {
                return None;
            }
            Some(Location {
                file: PathBuf::from(file),
                line: line.saturating_sub(1),
                column: 0,
            })
        }
        _ => None,
    }
}

/// The token a resolving command should work on.
pub fn selection_token(selection: &SelectionArgs) -> Result<String> {
    if let Some(token) = &selection.token {
        return Ok(token.trim().to_string());
    }

    if let Some(line) = &selection.line {
        let range = ColumnRange::new(selection.column, selection.end.unwrap_or(selection.column));
        return Ok(extract(line, range).trim().to_string());
    }

    if let Some(at) = &selection.at {
        let location = parse_location(at)
            .with_context(|| format!("expected FILE:LINE[:COLUMN], got '{at}'"))?;
        let contents = std::fs::read_to_string(&location.file)
            .with_context(|| format!("failed to read {}", location.file.display()))?;
        let line = contents.lines().nth(location.line).with_context(|| {
            format!(
                "{} has no line {}",
                location.file.display(),
                location.line + 1
            )
        })?;
        return Ok(extract(line, ColumnRange::cursor(location.column))
            .trim()
            .to_string());
    }

    bail!("nothing to resolve: pass a TOKEN, --line or --at")
}
