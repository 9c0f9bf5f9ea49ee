//! Target list input.

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::Config;

/// Reads non-empty, non-comment lines from `reader`, trimmed.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub async fn parse_target_lines<R: AsyncBufRead + Unpin>(
    reader: R,
) -> std::io::Result<Vec<String>> {
    let mut targets = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            targets.push(trimmed.to_string());
        }
    }
    Ok(targets)
}

/// Collects targets from the positional arguments followed by `--file`.
///
/// A file path of `-` reads from stdin. Positional arguments are passed through
/// untouched so that empty ones are reported as invalid rather than dropped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn read_targets(config: &Config) -> Result<Vec<String>> {
    let mut targets = config.urls.clone();

    if let Some(path) = &config.file {
        let from_file = if path.as_os_str() == "-" {
            info!("Reading targets from stdin");
            parse_target_lines(BufReader::new(tokio::io::stdin()))
                .await
                .context("Failed to read targets from stdin")?
        } else {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            parse_target_lines(BufReader::new(file))
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?
        };
        info!("Read {} target(s) from {}", from_file.len(), path.display());
        targets.extend(from_file);
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_parse_target_lines_skips_blanks_and_comments() {
        let input: &[u8] = b"example.com\n\n  # staging hosts\n  https://example.org/login  \r\n#x\n";
        let targets = parse_target_lines(input).await.unwrap();
        assert_eq!(targets, vec!["example.com", "https://example.org/login"]);
    }

    #[tokio::test]
    async fn test_read_targets_combines_args_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "from-file.example").unwrap();
        writeln!(file, "# comment").unwrap();

        let config = Config {
            urls: vec!["from-args.example".to_string()],
            file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let targets = read_targets(&config).await.unwrap();
        assert_eq!(targets, vec!["from-args.example", "from-file.example"]);
    }

    #[tokio::test]
    async fn test_read_targets_missing_file() {
        let config = Config {
            file: Some(std::path::PathBuf::from("/nonexistent/targets.txt")),
            ..Default::default()
        };
        let err = read_targets(&config).await.unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }
}
