//! Edge file parsing: one `child parent` pair per line.
//!
//! ```text
//! # dominator tree of main
//! entry entry
//! loop  entry
//! exit  loop   # trailing comments are ignored
//! ```

use regex::Regex;
use thiserror::Error;
use tracing::{instrument, trace};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected `<child> <parent>`, found: {content}")]
    MalformedLine { line: usize, content: String },
}

/// Parses edge files into `(child, parent)` pairs in file order.
pub struct EdgeParser {
    edge_regex: Regex,
}

impl Default for EdgeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeParser {
    pub fn new() -> Self {
        Self {
            edge_regex: Regex::new(r"^\s*(\S+)\s+(\S+)\s*$").expect("edge pattern is valid"),
        }
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn parse(&self, content: &str) -> Result<Vec<(String, String)>, ParseError> {
        let mut edges = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default();
            if line.trim().is_empty() {
                continue;
            }
            let caps = self
                .edge_regex
                .captures(line)
                .ok_or_else(|| ParseError::MalformedLine {
                    line: index + 1,
                    content: raw.trim().to_string(),
                })?;
            let child = caps[1].to_string();
            let parent = caps[2].to_string();
            trace!(%child, %parent, "parsed edge");
            edges.push((child, parent));
        }

        Ok(edges)
    }
}
