//! sourcetpl is a scaffolding generator for C projects.
//! It lays out the directory tree of an application or library, writes
//! stub sources, headers and Makefiles, and optionally the Debian packaging
//! scripts around them.

/// Command-line interface module for sourcetpl
pub mod cli;

/// Project options and the optional defaults file
/// (.sourcetpl.json, .sourcetpl.yml, .sourcetpl.yaml)
pub mod config;

/// Common constants: directory names, extensions, modes
pub mod constants;

/// Directory tree creation
pub mod dirtree;

/// Error types and handling for sourcetpl
pub mod error;

/// File descriptors that write one generated file each
pub mod file;

/// Logger setup
pub mod logger;

/// Debian packaging files
pub mod packaging;

/// Project kinds and the build pipeline
pub mod project;

/// Template rendering engine
pub mod renderer;

/// File templates: sources, headers, scripts
pub mod template;
