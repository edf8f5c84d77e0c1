//! Input reading: domain lists and resolver pool files.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::DnsServerPool;
use crate::utils::sanitize_for_log;

/// Reads domains from `path`, or from stdin when `path` is `-`.
///
/// See [`read_domains_from`] for the line rules.
pub async fn read_domains(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        log::info!("Reading domains from stdin ...");
        return read_domains_from(BufReader::new(tokio::io::stdin())).await;
    }

    log::info!("Reading domains from input file ...");
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    read_domains_from(BufReader::new(file)).await
}

/// Reads one domain per line, stripping trailing whitespace only.
///
/// Blank lines and comment-looking lines are kept: the checker classifies
/// them (as invalid) so every input line is accounted for.
pub async fn read_domains_from<R>(reader: R) -> Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut domains = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read line from input")?
    {
        domains.push(line.trim_end().to_string());
    }
    Ok(domains)
}

/// Loads a resolver pool file (one address per line, `#` comments allowed).
pub async fn load_pool(path: &Path) -> Result<DnsServerPool> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read DNS server pool {}", path.display()))?;
    let pool = DnsServerPool::parse(&contents);
    log::info!(
        "Loaded {} DNS servers from {}",
        pool.len(),
        sanitize_for_log(&path.display().to_string())
    );
    Ok(pool)
}
