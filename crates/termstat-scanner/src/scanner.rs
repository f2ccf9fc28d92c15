use crate::selection::Selection;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use termstat_core::{Language, SourceFile};
use tracing::debug;

/// Walks a directory tree and lists the source files worth analyzing.
pub struct Scanner<'a> {
    root: &'a Path,
    selection: Selection,
    respect_ignore: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            selection: Selection::default(),
            respect_ignore: true,
        }
    }

    /// Restrict which files are picked up.
    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Honour .gitignore, .ignore and global git excludes (the default).
    pub fn respect_ignore(mut self, respect: bool) -> Self {
        self.respect_ignore = respect;
        self
    }

    /// Scan the directory tree and return every selected file, sorted by path.
    pub fn scan(&self) -> anyhow::Result<Vec<SourceFile>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(self.root)
            .hidden(false) // don't skip dotfiles by default
            .ignore(self.respect_ignore)
            .git_ignore(self.respect_ignore)
            .git_global(self.respect_ignore)
            .git_exclude(self.respect_ignore)
            .parents(self.respect_ignore)
            .filter_entry(|entry| entry.file_name() != OsStr::new(".git"))
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    debug!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            // Skip directories
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }

            let path = entry.path();

            let rel_path = match path.strip_prefix(self.root) {
                Ok(p) => p,
                Err(_) => continue,
            };

            // A root that is itself a file yields an empty relative path
            let rel_path = if rel_path.as_os_str().is_empty() {
                match path.file_name() {
                    Some(name) => Path::new(name),
                    None => continue,
                }
            } else {
                rel_path
            };

            let language = Language::from_path(rel_path);
            if !self.selection.accepts(rel_path, language) {
                continue;
            }

            let metadata = match path.metadata() {
                Ok(m) => m,
                Err(err) => {
                    debug!("skipping {}: {err}", path.display());
                    continue;
                }
            };

            // Skip non-regular files
            if !metadata.is_file() {
                continue;
            }

            files.push(SourceFile {
                path: to_slash(rel_path),
                size: metadata.len(),
                language,
            });
        }

        // Sort by path for deterministic output
        files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!("selected {} files under {}", files.len(), self.root.display());
        Ok(files)
    }
}

/// Location on disk of a file returned by [`Scanner::scan`] for `root`.
pub fn source_path(root: &Path, file: &SourceFile) -> PathBuf {
    if root.is_file() {
        root.to_path_buf()
    } else {
        root.join(&file.path)
    }
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
