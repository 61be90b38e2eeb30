//! Directory tree of a generated project.

use crate::config::ProjectOptions;
use crate::constants::{DEBIAN_DIR, DEFAULT_MODE, MISC_DIR, MOUNT_DIR};
use crate::error::{Error, Result};
use log::debug;
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

/// Computes the directories of a project, relative to its root.
///
/// Packaged projects get the packaging directories first and nest the kind
/// directories under `<project_name>/`.
///
/// # Arguments
/// * `options` - Project options
/// * `kind_dirs` - Directories the project kind needs (`src`, `include`, ...)
pub fn subdirs(options: &ProjectOptions, kind_dirs: &[&str]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let mut prefix = PathBuf::new();

    if options.package_project {
        prefix.push(&options.project_name);
        dirs.extend([MISC_DIR, DEBIAN_DIR, MOUNT_DIR].map(PathBuf::from));
    }

    dirs.extend(kind_dirs.iter().map(|dir| prefix.join(dir)));
    dirs
}

/// Creates every directory of `subdirs` under `root_path`.
///
/// Existing directories are left alone. Stops at the first directory that
/// cannot be created; the ones created before it stay on disk.
///
/// # Errors
/// * `Error::CreateDirError` naming the directory that failed
pub fn create_dirtree<P: AsRef<Path>>(root_path: P, subdirs: &[PathBuf]) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DEFAULT_MODE);
    }

    for dir in subdirs {
        let path = root_path.as_ref().join(dir);
        debug!("Creating directory: {}", path.display());
        builder
            .create(&path)
            .map_err(|source| Error::CreateDirError {
                path: path.display().to_string(),
                source,
            })?;
    }

    Ok(())
}
