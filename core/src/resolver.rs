//! # Target Resolution
//!
//! Figures out which infrastructure group an experiment run acts on, either
//! from a static configuration value or from a provisioning-output file.
//!
//! File resolution is deliberately lenient: the first line *containing* the
//! key as a substring wins, and the value is whatever follows the first `=` on
//! that line, trimmed, with at most one layer of enclosing quotes stripped.
//! This matches how provisioning tools dump `key = "value"` outputs and is a
//! compatibility contract, not strict parsing.

use std::fs;
use std::io;

use faultline_common::config::TargetSource;
use faultline_common::error::ResolutionError;
use tracing::debug;

/// Resolves the target group name from the configured source.
///
/// Static sources cannot fail. File sources fail with
/// [`ResolutionError::FileNotFound`] for a missing path,
/// [`ResolutionError::KeyNotFound`] when no line contains the key, and
/// [`ResolutionError::Read`] for any other I/O problem.
pub fn resolve(source: &TargetSource) -> Result<String, ResolutionError> {
    match source {
        TargetSource::Static(name) => Ok(name.clone()),
        TargetSource::OutputsFile { path, key } => {
            let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ResolutionError::FileNotFound(path.clone()),
                _ => ResolutionError::Read {
                    path: path.clone(),
                    source: e,
                },
            })?;

            let line = contents
                .lines()
                .find(|line| line.contains(key.as_str()))
                .ok_or_else(|| ResolutionError::KeyNotFound {
                    path: path.clone(),
                    key: key.clone(),
                })?;

            debug!("matched provisioning-output line: {line}");
            Ok(extract_value(line))
        }
    }
}

/// Takes everything after the first `=`, trims whitespace, strips one
/// matching quote pair. A matched line without `=` resolves to the whole
/// trimmed line (best-effort, first match wins).
fn extract_value(line: &str) -> String {
    let raw = match line.split_once('=') {
        Some((_, rest)) => rest,
        None => line,
    };
    unquote(raw.trim()).to_string()
}

fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
