//! Output persistence and overwrite confirmation.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

/// Asks whether an existing file may be overwritten.
///
/// Writes the question to `output` and reads one line from `input`. Only `y`
/// or `yes` (any case) confirms; anything else, including end of input,
/// declines.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    write!(
        output,
        "File {} already exists. Overwrite? [y/N] ",
        path.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Writes one domain per line to `path`, replacing any existing content.
pub async fn write_domains(path: &Path, domains: &[String]) -> Result<()> {
    let mut contents = String::with_capacity(domains.iter().map(|d| d.len() + 1).sum());
    for domain in domains {
        contents.push_str(domain);
        contents.push('\n');
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Persists one output list, asking first if the file exists.
///
/// Returns the path if the file was written, `None` if the user declined.
pub async fn persist_domains(
    path: &Path,
    domains: &[String],
    label: &str,
    assume_yes: bool,
) -> Result<Option<PathBuf>> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check whether {} exists", path.display()))?;
    if !assume_yes && exists {
        let prompt_path = path.to_path_buf();
        let confirmed = tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            confirm_overwrite(&prompt_path, &mut stdin.lock(), &mut std::io::stderr())
        })
        .await
        .context("Overwrite prompt task failed")?
        .context("Failed to read overwrite confirmation")?;

        if !confirmed {
            warn!(
                "Not overwriting {}; {} {label} domains were not saved",
                path.display(),
                domains.len()
            );
            return Ok(None);
        }
    }

    info!("Saving {label} domains to {} ...", path.display());
    write_domains(path, domains).await?;
    Ok(Some(path.to_path_buf()))
}
