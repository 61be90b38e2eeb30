//! File descriptors: one generated file, its options and its template.

use crate::config::ProjectOptions;
use crate::constants::DEFAULT_MODE;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::{render_banner, FileTemplate};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends `extension` to `path` unless the file name already ends with it.
///
/// # Examples
/// ```
/// use sourcetpl::file::add_extension;
/// use std::path::PathBuf;
///
/// assert_eq!(add_extension("src/main", ".c"), PathBuf::from("src/main.c"));
/// assert_eq!(add_extension("src/main.c", ".c"), PathBuf::from("src/main.c"));
/// ```
pub fn add_extension<P: AsRef<Path>>(path: P, extension: &str) -> PathBuf {
    let path = path.as_ref();
    let already_qualified = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(extension));

    if extension.is_empty() || already_qualified {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(extension);
        PathBuf::from(name)
    }
}

/// Per-file options.
#[derive(Debug, Clone)]
pub struct FileOptions {
    pub project: Arc<ProjectOptions>,
    /// Prefix the content with the generated-file banner
    pub header_comment: bool,
    /// Mark the written file as executable
    pub executable: bool,
    /// Destination path, already extension-qualified
    pub name: PathBuf,
}

impl FileOptions {
    pub fn new<P: Into<PathBuf>>(project: Arc<ProjectOptions>, name: P) -> Self {
        Self {
            project,
            header_comment: true,
            executable: false,
            name: name.into(),
        }
    }

    pub fn with_header_comment(mut self, header_comment: bool) -> Self {
        self.header_comment = header_comment;
        self
    }

    pub fn with_executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }
}

/// A file that can materialize itself on disk.
pub struct FileInfo {
    options: FileOptions,
    template: Box<dyn FileTemplate>,
}

impl FileInfo {
    pub fn new<T: FileTemplate + 'static>(options: FileOptions, template: T) -> Self {
        Self {
            options,
            template: Box::new(template),
        }
    }

    pub fn options(&self) -> &FileOptions {
        &self.options
    }

    /// Destination path of the file.
    pub fn name(&self) -> &Path {
        &self.options.name
    }

    /// Renders the final content of the file.
    ///
    /// When the banner is enabled it goes first, or right after the `#!`
    /// line for scripts.
    pub fn render(&self, renderer: &dyn TemplateRenderer) -> Result<String> {
        let content = self.template.render(renderer, &self.options)?;
        if !self.options.header_comment {
            return Ok(content);
        }

        let banner = render_banner(renderer, &self.options, self.template.comment_style())?;
        if content.starts_with("#!") {
            let split = content.find('\n').map_or(content.len(), |i| i + 1);
            let (shebang, rest) = content.split_at(split);
            let separator = if shebang.ends_with('\n') { "" } else { "\n" };
            Ok(format!("{shebang}{separator}{banner}{rest}"))
        } else {
            Ok(format!("{banner}{content}"))
        }
    }

    /// Renders the file and writes it to its destination, overwriting any
    /// existing file.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if rendering fails
    /// * `Error::WriteFileError` if the parent directory is missing or the
    ///   file cannot be written
    pub fn build(&self, renderer: &dyn TemplateRenderer) -> Result<()> {
        let content = self.render(renderer)?;
        let path = &self.options.name;

        debug!("Writing file: {}", path.display());
        fs::write(path, content).map_err(|source| Error::WriteFileError {
            path: path.display().to_string(),
            source,
        })?;

        if self.options.executable {
            set_executable(path)?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path).map_err(Error::IoError)?.permissions();
    perms.set_mode(DEFAULT_MODE);
    fs::set_permissions(path, perms).map_err(Error::IoError)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_extension_never_doubles() {
        let main = PathBuf::from("/tmp/x/main.c");
        assert_eq!(add_extension("/tmp/x/main", ".c"), main);
        assert_eq!(add_extension(&main, ".c"), main);
        assert_eq!(add_extension("a.h", ".c"), PathBuf::from("a.h.c"));
        assert_eq!(add_extension("Makefile", ""), PathBuf::from("Makefile"));
    }
}
