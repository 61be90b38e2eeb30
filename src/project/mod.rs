//! Projects and their build pipeline.
//!
//! A [`Project`] owns the root path and four categories of files (sources,
//! headers, packaging, misc). Each project kind plugs its directory policy
//! and file selection in through a [`Layout`]; the pipeline itself is shared.

use crate::config::{ProjectKind, ProjectOptions};
use crate::constants::PACKAGE_ROOT_PREFIX;
use crate::dirtree::{create_dirtree, subdirs};
use crate::error::{Error, Result};
use crate::file::FileInfo;
use crate::packaging::create_packaging_scripts;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use log::debug;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod application;
pub mod library;

pub use application::Application;
pub use library::Library;

/// Directory policy and file selection of a project kind.
pub trait Layout {
    /// Directories the kind needs under the project prefix.
    fn directories(&self) -> &'static [&'static str];

    /// Source files placed under `base`.
    fn sources(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo>;

    /// Header files placed under `base`.
    fn headers(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo>;

    /// Remaining files (build scripts and the like).
    fn misc(&self, _options: &Arc<ProjectOptions>, _base: &Path) -> Vec<FileInfo> {
        Vec::new()
    }
}

impl ProjectKind {
    /// Returns the layout of this kind.
    pub fn layout(self) -> &'static dyn Layout {
        match self {
            ProjectKind::Application => &Application,
            ProjectKind::Library => &Library,
        }
    }
}

/// A project ready to be written to disk.
pub struct Project {
    kind: ProjectKind,
    root_path: PathBuf,
    sources: Vec<FileInfo>,
    headers: Vec<FileInfo>,
    packaging: Vec<FileInfo>,
    misc: Vec<FileInfo>,
    options: Arc<ProjectOptions>,
    renderer: Box<dyn TemplateRenderer>,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProjectKind::Application => write!(f, "Application project"),
            ProjectKind::Library => write!(f, "Library project"),
        }
    }
}

impl Project {
    /// Creates the project described by `options` under the directory
    /// returned by `cwd`.
    ///
    /// # Arguments
    /// * `options` - Project options
    /// * `cwd` - Working directory lookup, usually `std::env::current_dir`
    ///
    /// # Errors
    /// * `Error::InvalidProjectName` if the options do not validate
    /// * `Error::WorkingDirError` if `cwd` fails
    pub fn new<F>(options: ProjectOptions, cwd: F) -> Result<Self>
    where
        F: FnOnce() -> io::Result<PathBuf>,
    {
        options.validate()?;
        let cwd = cwd().map_err(Error::WorkingDirError)?;
        let options = Arc::new(options);

        let (root_path, prefix) = if options.package_project {
            let root = cwd.join(format!("{PACKAGE_ROOT_PREFIX}{}", options.project_name));
            (root, options.project_name.as_str())
        } else {
            (cwd.join(&options.project_name), "")
        };
        let base = if prefix.is_empty() {
            root_path.clone()
        } else {
            root_path.join(prefix)
        };

        let layout = options.kind.layout();
        Ok(Self {
            kind: options.kind,
            sources: layout.sources(&options, &base),
            headers: layout.headers(&options, &base),
            packaging: create_packaging_scripts(&options, &root_path, prefix),
            misc: layout.misc(&options, &base),
            root_path,
            options,
            renderer: Box::new(MiniJinjaRenderer::new()),
        })
    }

    /// Replaces the template engine used by [`Project::build`].
    pub fn with_renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn sources(&self) -> &[FileInfo] {
        &self.sources
    }

    pub fn headers(&self) -> &[FileInfo] {
        &self.headers
    }

    pub fn packaging(&self) -> &[FileInfo] {
        &self.packaging
    }

    pub fn misc(&self) -> &[FileInfo] {
        &self.misc
    }

    /// Writes the project to disk.
    ///
    /// Creates the directory tree, then builds sources, headers, packaging
    /// and misc files in that order. The first failure aborts the build;
    /// whatever was written before it is left in place.
    pub fn build(&self) -> Result<()> {
        debug!("Building {} in {}", self, self.root_path.display());

        let dirs = subdirs(&self.options, self.kind.layout().directories());
        create_dirtree(&self.root_path, &dirs)?;

        let categories = [
            ("sources", &self.sources),
            ("headers", &self.headers),
            ("packaging", &self.packaging),
            ("misc", &self.misc),
        ];
        for (category, files) in categories {
            debug!("Creating {} {} file(s)", files.len(), category);
            for file in files {
                file.build(&*self.renderer)?;
            }
        }

        Ok(())
    }
}
