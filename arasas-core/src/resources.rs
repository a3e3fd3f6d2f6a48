//! On-disk resources and their one-time fetching
//!
//! A resource is a named file below the data directory. When it is absent,
//! the store asks its fetcher once and then checks again.

use crate::error::{AnnotateError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A named file the pipeline depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Name used in logs and errors
    pub name: String,
    /// Path relative to the data directory, or absolute
    pub path: PathBuf,
}

impl Resource {
    /// Describe a resource
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Something that can make a missing resource appear on disk
pub trait ResourceFetcher: Send + Sync {
    /// Fetch `resource` so that it exists at `target`
    fn fetch(&self, resource: &Resource, target: &Path) -> Result<()>;
}

/// Fetcher that never fetches
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFetcher;

impl ResourceFetcher for NoFetcher {
    fn fetch(&self, resource: &Resource, _target: &Path) -> Result<()> {
        Err(AnnotateError::FetchFailed {
            name: resource.name.clone(),
            reason: "no fetch command configured".to_string(),
        })
    }
}

/// Fetcher that runs a shell command, e.g. a data downloader
#[derive(Debug, Clone)]
pub struct CommandFetcher {
    command: String,
}

impl CommandFetcher {
    /// Create a fetcher for the given shell command line
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn shell(&self) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&self.command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&self.command);
            cmd
        }
    }
}

impl ResourceFetcher for CommandFetcher {
    fn fetch(&self, resource: &Resource, target: &Path) -> Result<()> {
        log::info!("Fetching {} with `{}`", resource.name, self.command);
        let status = self
            .shell()
            .env("ARASAS_RESOURCE", &resource.name)
            .env("ARASAS_RESOURCE_PATH", target)
            .status()
            .map_err(|e| AnnotateError::FetchFailed {
                name: resource.name.clone(),
                reason: format!("cannot run `{}`: {e}", self.command),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AnnotateError::FetchFailed {
                name: resource.name.clone(),
                reason: format!("`{}` exited with {status}", self.command),
            })
        }
    }
}

/// Resolves resources under a data directory, fetching them when absent
pub struct ResourceStore {
    data_dir: PathBuf,
    fetcher: Box<dyn ResourceFetcher>,
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("data_dir", &self.data_dir)
            .finish_non_exhaustive()
    }
}

impl ResourceStore {
    /// Store with no fetcher
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_fetcher(data_dir, Box::new(NoFetcher))
    }

    /// Store with a custom fetcher
    pub fn with_fetcher(data_dir: impl Into<PathBuf>, fetcher: Box<dyn ResourceFetcher>) -> Self {
        Self {
            data_dir: data_dir.into(),
            fetcher,
        }
    }

    /// Absolute or data-dir-relative location of a resource
    pub fn path_of(&self, resource: &Resource) -> PathBuf {
        if resource.path.is_absolute() {
            resource.path.clone()
        } else {
            self.data_dir.join(&resource.path)
        }
    }

    /// Return the resource path, fetching it once if it is missing
    ///
    /// Calling this for a present resource has no side effects.
    pub fn ensure_ready(&self, resource: &Resource) -> Result<PathBuf> {
        let path = self.path_of(resource);
        if path.exists() {
            return Ok(path);
        }

        log::warn!(
            "Resource {} not found at {}, fetching",
            resource.name,
            path.display()
        );
        if let Err(e) = self.fetcher.fetch(resource, &path) {
            log::error!("{e}");
        }

        if path.exists() {
            Ok(path)
        } else {
            Err(AnnotateError::resource_missing(&resource.name, path))
        }
    }
}
