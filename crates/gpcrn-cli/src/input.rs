use crate::error::{CliError, Result};
use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

/// Collects the query lines for one run.
///
/// Sources stack in order: positional queries first, then the lines of
/// `--file`. When neither is given, piped stdin is read line by line; an
/// interactive terminal with no queries is an error rather than a silent hang.
pub fn gather_queries(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut queries: Vec<String> = args.to_vec();

    if let Some(path) = file {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Argument(format!("failed to read query file '{}': {e}", path.display()))
        })?;
        queries.extend(query_lines(content.lines().map(str::to_string)));
    }

    if queries.is_empty() && file.is_none() {
        if io::stdin().is_terminal() {
            return Err(CliError::Argument(
                "no queries provided; pass <target>:<numbering> arguments, use --file, or pipe queries via stdin".to_string(),
            ));
        }
        let stdin = io::stdin().lock();
        let lines = stdin.lines().collect::<io::Result<Vec<_>>>()?;
        queries.extend(query_lines(lines.into_iter()));
    }

    Ok(queries)
}

/// Trims line-oriented input, dropping blanks and '#' comment lines.
fn query_lines(lines: impl Iterator<Item = String>) -> impl Iterator<Item = String> {
    lines.filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
