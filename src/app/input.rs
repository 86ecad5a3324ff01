//! Command-line URL input.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Collects the URLs to scan from the positional arguments.
///
/// A `-` argument is replaced by the lines of stdin. Arguments are passed
/// through untouched (validation happens per scan), but blank stdin lines and
/// lines starting with `#` are skipped.
pub async fn read_input_urls(args: &[String]) -> Result<Vec<String>> {
    let mut urls = Vec::with_capacity(args.len());
    let mut stdin_consumed = false;

    for arg in args {
        if arg != "-" {
            urls.push(arg.clone());
            continue;
        }
        if stdin_consumed {
            log::warn!("stdin was already read; ignoring repeated '-' argument");
            continue;
        }
        stdin_consumed = true;
        log::info!("Reading URLs from stdin");
        let lines = read_url_lines(BufReader::new(tokio::io::stdin()))
            .await
            .context("Failed to read URLs from stdin")?;
        urls.extend(lines);
    }

    Ok(urls)
}

/// Reads one URL per line, skipping blanks and `#` comments.
pub async fn read_url_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut urls = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}
