use crate::language::CommentSyntax;

/// Where a block comment opens on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStart<'a> {
    pub position: usize,
    pub start: &'a str,
    pub end: &'a str,
}

pub struct CommentDetector<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    #[must_use]
    pub fn is_single_line_comment(&self, trimmed: &str) -> bool {
        self.syntax
            .single_line
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    /// Find the earliest block-comment opener that is not inside a string
    /// literal.
    ///
    /// Markers are checked before quote handling so delimiters made of quote
    /// characters (Python's `"""`) are still recognized.
    #[must_use]
    pub fn find_block_start(&self, line: &str) -> Option<BlockStart<'a>> {
        if self.syntax.multi_line.is_empty() {
            return None;
        }

        let mut quote: Option<char> = None;
        let mut escaped = false;

        for (pos, ch) in line.char_indices() {
            if let Some(open) = quote {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == open {
                    quote = None;
                }
                continue;
            }

            let rest = &line[pos..];
            if let Some((start, end)) = self
                .syntax
                .multi_line
                .iter()
                .find(|(start, _)| rest.starts_with(start.as_str()))
            {
                return Some(BlockStart {
                    position: pos,
                    start,
                    end,
                });
            }

            // A line comment before any block opener wins
            if self
                .syntax
                .single_line
                .iter()
                .any(|prefix| rest.starts_with(prefix.as_str()))
            {
                return None;
            }

            if ch == '"' || ch == '\'' {
                quote = Some(ch);
            }
        }

        None
    }

    #[must_use]
    pub fn contains_block_end(line: &str, end: &str) -> bool {
        line.contains(end)
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
