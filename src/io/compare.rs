//! Order-insensitive comparison of two enumeration logs
//!
//! Blocks are matched by position. Within a block the order of lines does
//! not matter, and within a line the order of groups does not matter.

use crate::io::configuration::HEADER_SUFFIX;
use crate::io::error::{Result, SolverError, WithContext};
use std::fmt;
use std::path::Path;

/// One hand's header and its normalised lines
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogBlock {
    header: String,
    lines: Vec<String>,
}

impl LogBlock {
    /// Header line including the trailing colon
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Normalised lines, sorted
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for LogBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Sort the bracketed groups of a line, so `(99)(123)[4]` equals `(123)(99)[4]`
///
/// Returns `None` if the line is not made entirely of bracketed groups.
pub fn normalize_line(line: &str) -> Option<String> {
    let mut groups = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let close = match rest.chars().next()? {
            '(' => ')',
            '[' => ']',
            _ => return None,
        };
        let end = rest.find(close)?;
        let (group, tail) = rest.split_at(end + close.len_utf8());
        if group.len() <= 2 {
            return None;
        }
        groups.push(group);
        rest = tail;
    }
    if groups.is_empty() {
        return None;
    }
    groups.sort_unstable();
    Some(groups.concat())
}

/// Split log text into blocks, normalising every line
///
/// # Errors
///
/// Returns `MalformedLog` for a line before the first header, a line that
/// is not a sequence of groups, or a block with no lines
pub fn parse_log(text: &str, path: &Path) -> Result<Vec<LogBlock>> {
    let malformed = |line: usize, reason: &str| SolverError::MalformedLog {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    };

    let mut blocks: Vec<LogBlock> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let number = index + 1;
        if line.ends_with(HEADER_SUFFIX) {
            if let Some(last) = blocks.last()
                && last.lines.is_empty()
            {
                return Err(malformed(number, "previous block has no lines"));
            }
            blocks.push(LogBlock {
                header: line.to_string(),
                lines: Vec::new(),
            });
            continue;
        }

        let normalized =
            normalize_line(line).ok_or_else(|| malformed(number, "not a sequence of groups"))?;
        let block = blocks
            .last_mut()
            .ok_or_else(|| malformed(number, "line before the first header"))?;
        block.lines.push(normalized);
    }

    if blocks.last().is_some_and(|block| block.lines.is_empty()) {
        return Err(malformed(text.lines().count(), "last block has no lines"));
    }

    for block in &mut blocks {
        block.lines.sort_unstable();
    }
    Ok(blocks)
}

/// Read and parse a log file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `MalformedLog` as
/// for [`parse_log`]
pub fn read_log(path: &Path) -> Result<Vec<LogBlock>> {
    let text = std::fs::read_to_string(path).with_path(path, "read")?;
    parse_log(&text, path)
}

/// Outcome of comparing two logs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// Blocks in the first log
    pub left_blocks: usize,
    /// Blocks in the second log
    pub right_blocks: usize,
    /// Differing block pairs, first log's block then second's
    pub differences: Vec<(LogBlock, LogBlock)>,
}

impl Comparison {
    /// Test whether both logs hold the same blocks
    pub fn is_identical(&self) -> bool {
        self.left_blocks == self.right_blocks && self.differences.is_empty()
    }
}

/// Compare parsed logs block by block
pub fn compare_blocks(left: &[LogBlock], right: &[LogBlock]) -> Comparison {
    Comparison {
        left_blocks: left.len(),
        right_blocks: right.len(),
        differences: left
            .iter()
            .zip(right)
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect(),
    }
}

/// Read and compare two log files
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed
pub fn compare_files(left: &Path, right: &Path) -> Result<Comparison> {
    Ok(compare_blocks(&read_log(left)?, &read_log(right)?))
}

