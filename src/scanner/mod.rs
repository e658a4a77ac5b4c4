//! Source tree walking for the `tokount` helper.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a file or directory and return every file under it.
    fn scan(&self, root: &Path) -> Vec<PathBuf>;
}

/// Walks a tree honoring `.gitignore` and pruning excluded directory names.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner {
    excluded_dirs: HashSet<String>,
    use_gitignore: bool,
    follow_links: bool,
}

impl DirectoryScanner {
    #[must_use]
    pub fn new<I, S>(excluded_dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_dirs: excluded_dirs
                .into_iter()
                .map(Into::into)
                .filter(|d: &String| !d.is_empty())
                .collect(),
            use_gitignore: true,
            follow_links: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = use_gitignore;
        self
    }

    /// Descend into symlinked directories and count symlinked files.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl FileScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let excluded = self.excluded_dirs.clone();

        WalkBuilder::new(root)
            .git_ignore(self.use_gitignore)
            .git_global(self.use_gitignore)
            .git_exclude(self.use_gitignore)
            .require_git(false)
            .hidden(true)
            .parents(false)
            .follow_links(self.follow_links)
            .filter_entry(move |entry| {
                // The root itself is never pruned
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && entry.file_name().to_str().is_some_and(|n| excluded.contains(n)))
            })
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
