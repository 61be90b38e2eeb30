//! Project configuration for sourcetpl.
//! Holds the immutable options a project is generated from and loads
//! optional defaults from a `.sourcetpl.{json,yml,yaml}` file.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use clap::ValueEnum;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Project names must work both as C identifiers and as path segments.
const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_-]*$";

/// Kinds of project the generator knows how to lay out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Executable with a `main` entry point
    #[default]
    Application,
    /// Static library with a public `lib<name>.h` header
    Library,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::Application => write!(f, "application"),
            ProjectKind::Library => write!(f, "library"),
        }
    }
}

/// License notices the generated-file banner can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum License {
    /// MIT license
    #[value(name = "mit")]
    Mit,
    /// Apache License 2.0
    #[value(name = "apache2")]
    Apache2,
    /// GNU GPL version 2 or later
    #[value(name = "gpl2")]
    Gpl2,
    /// GNU GPL version 3 or later
    #[value(name = "gpl3")]
    Gpl3,
}

/// Options a project is generated from.
///
/// Built once from external input and then shared read-only by every
/// file descriptor of the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOptions {
    pub project_name: String,
    pub package_project: bool,
    pub kind: ProjectKind,
    pub author: Option<String>,
    pub license: Option<License>,
}

impl ProjectOptions {
    /// Creates options for a non-packaged application named `project_name`.
    pub fn new<S: Into<String>>(project_name: S) -> Self {
        Self {
            project_name: project_name.into(),
            package_project: false,
            kind: ProjectKind::default(),
            author: None,
            license: None,
        }
    }

    pub fn with_kind(mut self, kind: ProjectKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_package(mut self, package_project: bool) -> Self {
        self.package_project = package_project;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_license(mut self, license: Option<License>) -> Self {
        self.license = license;
        self
    }

    /// Project name with dashes turned into underscores, used for C symbols
    /// and packaging file names (`my-app` becomes `my_app`).
    pub fn identifier(&self) -> String {
        self.project_name.replace('-', "_")
    }

    /// Checks the options before anything touches the filesystem.
    ///
    /// # Errors
    /// * `Error::InvalidProjectName` if the name is empty or is not a
    ///   path-safe identifier starting with a letter
    pub fn validate(&self) -> Result<()> {
        let name = &self.project_name;
        if name.is_empty() {
            return Err(Error::InvalidProjectName {
                name: name.clone(),
                reason: "the project name cannot be empty".to_string(),
            });
        }

        let pattern =
            Regex::new(PROJECT_NAME_PATTERN).map_err(|e| Error::ConfigError(e.to_string()))?;
        if !pattern.is_match(name) {
            return Err(Error::InvalidProjectName {
                name: name.clone(),
                reason: format!("expected a name matching {PROJECT_NAME_PATTERN}"),
            });
        }

        Ok(())
    }
}

/// Values read from a defaults file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<String>,
    pub kind: Option<ProjectKind>,
    pub license: Option<License>,
    pub package: bool,
}

/// Parses the contents of a defaults file, trying JSON before YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
pub fn parse_defaults(content: &str) -> Result<Defaults> {
    match serde_json::from_str(content) {
        Ok(defaults) => Ok(defaults),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid defaults file: {e}"))),
    }
}

/// Loads defaults from the first existing file of [`CONFIG_FILES`] in `dir`.
///
/// # Returns
/// * `Result<Defaults>` - Parsed defaults, or `Defaults::default()` if no
///   file exists
pub fn load_defaults<P: AsRef<Path>>(dir: P) -> Result<Defaults> {
    for file in CONFIG_FILES {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading defaults from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
            return parse_defaults(&content);
        }
    }

    debug!("No defaults file found in {}", dir.as_ref().display());
    Ok(Defaults::default())
}
