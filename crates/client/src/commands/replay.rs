//! Renders an archived combat log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use encounter_core::CombatLog;
use encounter_core::log::archive::{LogDigest, digest_bytes};

use crate::render;

/// Render an archived combat log
#[derive(Parser)]
pub struct Replay {
    /// Archive written by `simulate --out`
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Expected SHA-256 digest (hex); the archive is rejected on mismatch
    #[arg(short, long, value_name = "HEX")]
    digest: Option<String>,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let bytes = std::fs::read(&self.file)
            .with_context(|| format!("Failed to read log archive: {}", self.file.display()))?;

        let log = match &self.digest {
            Some(hex_digest) => {
                let expected = parse_digest(hex_digest)?;
                CombatLog::decode_verified(&bytes, &expected)
                    .with_context(|| format!("Rejected log archive: {}", self.file.display()))?
            }
            None => CombatLog::decode(&bytes)
                .with_context(|| format!("Failed to decode log archive: {}", self.file.display()))?,
        };

        tracing::debug!(entries = log.len(), "archive decoded");

        println!(
            "{} {} {}",
            style("Archive:").bold().cyan(),
            self.file.display(),
            if self.digest.is_some() {
                style("(verified)").green()
            } else {
                style("(unverified)").yellow()
            }
        );
        println!(
            "{} {}",
            style("Digest:").bold().cyan(),
            hex::encode(digest_bytes(&bytes))
        );
        render::print_log(&log);
        Ok(())
    }
}

fn parse_digest(text: &str) -> Result<LogDigest> {
    let raw = hex::decode(text.trim()).context("Digest is not valid hex")?;
    let digest: LogDigest = raw
        .try_into()
        .map_err(|raw: Vec<u8>| anyhow::anyhow!("Digest must be 32 bytes, got {}", raw.len()))?;
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_length_digest() {
        let text = "ab".repeat(32);
        assert_eq!(parse_digest(&text).unwrap(), [0xab; 32]);
    }

    #[test]
    fn rejects_short_or_malformed_digest() {
        let err = parse_digest("abcd").unwrap_err();
        assert!(err.to_string().contains("got 2"));
        assert!(parse_digest("not hex").is_err());
    }
}
