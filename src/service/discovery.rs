// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file discovery.
//!
//! Looks for one of the [`SUPPORTED_FILES`] in a directory and, optionally, in
//! each of its ancestors. Within a directory the table order decides which file
//! wins; the filesystem listing order plays no part.

use crate::adapters::{EmptyRepository, EnvFileRepository, IniRepository, JsonRepository};
use crate::domain::Result;
use crate::ports::{Environment, FileSystem, Repository};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The repository flavour used for a discovered file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    /// `secrets.json`
    Json,
    /// `settings.ini`
    Ini,
    /// `.env`
    EnvFile,
    /// No file was found.
    Empty,
}

/// Candidate file names in the order they are tried.
pub const SUPPORTED_FILES: [(&str, RepositoryKind); 3] = [
    ("secrets.json", RepositoryKind::Json),
    ("settings.ini", RepositoryKind::Ini),
    (".env", RepositoryKind::EnvFile),
];

impl RepositoryKind {
    /// Maps a file name to its repository kind, [`RepositoryKind::Empty`] if it
    /// is not one of the [`SUPPORTED_FILES`].
    pub fn for_file_name(name: &str) -> Self {
        SUPPORTED_FILES
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, kind)| *kind)
            .unwrap_or(RepositoryKind::Empty)
    }

    /// Maps a discovered path to its repository kind by base name.
    pub fn for_path(path: Option<&Path>) -> Self {
        path.and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .map(Self::for_file_name)
            .unwrap_or(RepositoryKind::Empty)
    }

    /// Builds the repository for `path`.
    ///
    /// Text-format repositories are given `environment` so that their
    /// `contains` sees the same variables as the resolver.
    pub fn load(
        self,
        fs: &dyn FileSystem,
        path: &Path,
        environment: Arc<dyn Environment>,
    ) -> Result<Arc<dyn Repository>> {
        let repository: Arc<dyn Repository> = match self {
            RepositoryKind::Json => Arc::new(JsonRepository::load(fs, path)?),
            RepositoryKind::Ini => {
                Arc::new(IniRepository::load(fs, path)?.with_shared_environment(environment))
            }
            RepositoryKind::EnvFile => {
                Arc::new(EnvFileRepository::load(fs, path)?.with_shared_environment(environment))
            }
            RepositoryKind::Empty => Arc::new(EmptyRepository),
        };
        Ok(repository)
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RepositoryKind::Json => "json",
            RepositoryKind::Ini => "ini",
            RepositoryKind::EnvFile => "env-file",
            RepositoryKind::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Searches `dir` and, if `search_parents` is set, its ancestors for a
/// supported file.
///
/// The walk stops below the filesystem root: a file placed directly in `/` is
/// never picked up through parent traversal.
pub fn find_file(fs: &dyn FileSystem, dir: &Path, search_parents: bool) -> Option<PathBuf> {
    let mut current = dir;
    loop {
        tracing::debug!("Searching {} for configuration files", current.display());
        for (name, _) in SUPPORTED_FILES.iter() {
            let candidate = current.join(name);
            if fs.is_file(&candidate) {
                tracing::debug!("Found configuration file {}", candidate.display());
                return Some(candidate);
            }
        }

        if !search_parents {
            return None;
        }
        match current.parent() {
            Some(parent) if parent.parent().is_some() => current = parent,
            _ => return None,
        }
    }
}

/// The outcome of discovery: where the file is and the repository over it.
#[derive(Clone)]
pub struct Discovery {
    path: Option<PathBuf>,
    kind: RepositoryKind,
    repository: Arc<dyn Repository>,
}

impl Discovery {
    /// Runs discovery from `dir` and loads the repository for whatever is found.
    pub fn run(
        fs: &dyn FileSystem,
        dir: &Path,
        search_parents: bool,
        environment: Arc<dyn Environment>,
    ) -> Result<Self> {
        let path = find_file(fs, dir, search_parents);
        let kind = RepositoryKind::for_path(path.as_deref());
        let repository = match &path {
            Some(path) => kind.load(fs, path, environment)?,
            None => Arc::new(EmptyRepository),
        };
        tracing::debug!("Selected {} repository", kind);
        Ok(Self {
            path,
            kind,
            repository,
        })
    }

    /// The result used when no directory could be searched.
    pub fn empty() -> Self {
        Self {
            path: None,
            kind: RepositoryKind::Empty,
            repository: Arc::new(EmptyRepository),
        }
    }

    /// Returns the discovered file, or `None` if nothing was found.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the kind of repository that was selected.
    pub fn kind(&self) -> RepositoryKind {
        self.kind
    }

    /// Returns the selected repository.
    pub fn repository(&self) -> &Arc<dyn Repository> {
        &self.repository
    }
}

impl fmt::Debug for Discovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discovery")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .finish()
    }
}
