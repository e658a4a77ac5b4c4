use serde::{Deserialize, Serialize};

use super::CommentDetector;
use crate::language::CommentSyntax;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    pub const fn add(&mut self, other: &Self) {
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// Classifies each line of a source file as blank, comment or code.
pub struct LineCounter<'a> {
    detector: CommentDetector<'a>,
}

impl<'a> LineCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            detector: CommentDetector::new(syntax),
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut stats = LineStats::new();
        let mut open_block: Option<&str> = None;

        for line in source.lines() {
            stats.total += 1;

            if let Some(end) = open_block {
                stats.comment += 1;
                if CommentDetector::contains_block_end(line, end) {
                    open_block = None;
                }
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                stats.blank += 1;
                continue;
            }

            if self.detector.is_single_line_comment(trimmed) {
                stats.comment += 1;
                continue;
            }

            let Some(block) = self.detector.find_block_start(line) else {
                stats.code += 1;
                continue;
            };

            let after = &line[block.position + block.start.len()..];
            if !CommentDetector::contains_block_end(after, block.end) {
                open_block = Some(block.end);
            }

            // Code before the opener keeps the line a code line
            if line[..block.position].trim().is_empty() {
                stats.comment += 1;
            } else {
                stats.code += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
