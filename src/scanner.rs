use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::models::{RepositoryProfile, UNKNOWN_PROJECT_TYPE};
use crate::taxonomy;

/// Names excluded from traversal, matched exactly against every path
/// component below the root.
const IGNORED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    ".pytest_cache",
    "node_modules",
    ".venv",
    "venv",
];

/// Filenames treated as application entry points (case-insensitive).
const ENTRY_POINT_NAMES: &[&str] = &["main.py", "app.py", "index.py", "run.py"];

/// Filenames treated as project configuration (case-insensitive).
const CONFIG_FILE_NAMES: &[&str] = &[
    "requirements.txt",
    "package.json",
    "setup.py",
    "pyproject.toml",
    "dockerfile",
    "docker-compose.yml",
    ".env.example",
    "config.json",
];

/// Files larger than this are skipped without reading their content.
const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Leading bytes sniffed for the binary-content check.
const BINARY_SNIFF_LEN: u64 = 1024;

/// Walks a repository tree, applies the ignore policy and classifies every
/// retained file into a [`RepositoryProfile`].
pub struct RepositoryScanner {
    root: PathBuf,
}

impl RepositoryScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Scan the repository and build its classification profile.
    ///
    /// Traversal is depth-first with entries at each level visited in
    /// byte-wise file-name order, so `structure` is stable across runs.
    /// Unreadable files are skipped, never fatal; the only error surfaced
    /// is a root path that is missing or not a directory.
    pub fn scan(&self) -> Result<RepositoryProfile> {
        if !self.root.is_dir() {
            return Err(Error::InvalidRepository(self.root.clone()));
        }

        tracing::info!("Scanning repository: {}", self.root.display());

        let mut profile = RepositoryProfile::default();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_ignored_name(entry.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_file() || self.should_ignore(entry.path()) {
                continue;
            }

            let relative = match entry.path().strip_prefix(&self.root) {
                Ok(relative) => relative.to_string_lossy().into_owned(),
                Err(_) => continue,
            };

            profile.structure.push(relative.clone());
            self.classify(entry.path(), &relative, &mut profile);
        }

        tracing::info!("Scan complete, {} files retained", profile.structure.len());
        Ok(profile)
    }

    /// Size and binary-content checks. Any I/O failure counts as "ignore":
    /// an unreadable file must never abort the scan.
    fn should_ignore(&self, path: &Path) -> bool {
        let size = match path.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                tracing::debug!("Skipping {}: {}", path.display(), err);
                return true;
            }
        };

        if size > MAX_FILE_SIZE {
            return true;
        }

        match read_leading_bytes(path) {
            Ok(chunk) => chunk.contains(&0),
            Err(err) => {
                tracing::debug!("Skipping {}: {}", path.display(), err);
                true
            }
        }
    }

    fn classify(&self, path: &Path, relative: &str, profile: &mut RepositoryProfile) {
        let filename = match path.file_name().and_then(OsStr::to_str) {
            Some(name) => name.to_lowercase(),
            None => return,
        };

        if ENTRY_POINT_NAMES.contains(&filename.as_str()) {
            profile.main_files.push(relative.to_string());
        }

        if CONFIG_FILE_NAMES.contains(&filename.as_str()) {
            profile.config_files.push(relative.to_string());
        }

        if let Some(extension) = normalized_extension(path) {
            if let Some(language) = taxonomy::language_for_extension(&extension) {
                profile.languages.insert(language.to_string());
                if taxonomy::is_primary_language(language)
                    && profile.project_type == UNKNOWN_PROJECT_TYPE
                {
                    profile.project_type = language.to_string();
                }
            }
            profile.file_types.insert(extension);
        }

        // Dependency extraction is best-effort: a manifest that cannot be
        // read still appears in structure/config_files.
        if filename == "requirements.txt" {
            match std::fs::read_to_string(path) {
                Ok(content) => profile.dependencies.extend(parse_requirements(&content)),
                Err(err) => tracing::debug!("Could not read {}: {}", path.display(), err),
            }
        }
    }
}

fn is_ignored_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| IGNORED_DIRS.contains(&name))
}

/// Extension with leading dot, lower-cased, e.g. ".py". Dotfiles like
/// `.gitignore` have no extension.
fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|extension| format!(".{}", extension.to_lowercase()))
}

fn read_leading_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut chunk = Vec::with_capacity(BINARY_SNIFF_LEN as usize);
    file.take(BINARY_SNIFF_LEN).read_to_end(&mut chunk)?;
    Ok(chunk)
}

/// Keep pinned dependency lines (`name==version`) verbatim, dropping blank
/// lines and comments.
fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && line.contains("=="))
        .map(str::to_string)
        .collect()
}
