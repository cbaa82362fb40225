// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem access trait definition.
//!
//! Discovery and repository loading go through this trait so callers can run
//! them against an instrumented or in-memory filesystem.

use std::io;
use std::path::{Component, Path, PathBuf};

/// The filesystem operations needed to find and read configuration files.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` names an existing regular file.
    ///
    /// Any error while checking is reported as `false`.
    fn is_file(&self, path: &Path) -> bool;

    /// Reads the whole file at `path` as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Returns the process working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Makes `path` absolute against [`current_dir`](FileSystem::current_dir)
    /// and removes `.` and `..` components lexically.
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir()?.join(path)
        };
        Ok(normalize(&joined))
    }
}

/// Removes `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
