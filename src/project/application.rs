use super::Layout;
use crate::config::ProjectOptions;
use crate::constants::{HEADER_EXTENSION, INCLUDE_DIR, SOURCES_DIR, SOURCE_EXTENSION};
use crate::file::{add_extension, FileInfo, FileOptions};
use crate::template::{CommentStyle, HeaderTemplate, ScriptTemplate, SourceTemplate};
use std::path::Path;
use std::sync::Arc;

const MAKEFILE: &str = include_str!("../../templates/c/application.mk.j2");

/// Suffixes of the private headers, in generation order
pub const HEADER_SUFFIXES: [&str; 3] = ["_def", "_prt", "_struct"];

/// Executable project: a `main.c` entry point and headers named after the
/// project.
#[derive(Debug, Clone, Copy, Default)]
pub struct Application;

impl Layout for Application {
    fn directories(&self) -> &'static [&'static str] {
        &[SOURCES_DIR, INCLUDE_DIR]
    }

    fn sources(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo> {
        let include = format!("{}{HEADER_EXTENSION}", options.project_name);

        ["main"]
            .iter()
            .map(|name| {
                let path = add_extension(base.join(SOURCES_DIR).join(name), SOURCE_EXTENSION);
                FileInfo::new(
                    FileOptions::new(Arc::clone(options), path),
                    SourceTemplate::entry_point(include.clone()),
                )
            })
            .collect()
    }

    fn headers(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo> {
        create_headers(options, base, &options.project_name)
    }

    fn misc(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo> {
        let makefile = base.join(SOURCES_DIR).join("Makefile");
        vec![FileInfo::new(
            FileOptions::new(Arc::clone(options), makefile),
            ScriptTemplate::new(MAKEFILE, CommentStyle::Hash),
        )]
    }
}

/// Builds the private headers `<name>_def.h`, `<name>_prt.h`,
/// `<name>_struct.h` followed by the umbrella header `<umbrella>.h`, which
/// includes the other three.
pub(crate) fn create_headers(
    options: &Arc<ProjectOptions>,
    base: &Path,
    umbrella: &str,
) -> Vec<FileInfo> {
    let include_dir = base.join(INCLUDE_DIR);
    let header = |name: &str, template: HeaderTemplate| {
        let path = add_extension(include_dir.join(name), HEADER_EXTENSION);
        FileInfo::new(FileOptions::new(Arc::clone(options), path), template)
    };

    let name = &options.project_name;
    let private: Vec<String> = HEADER_SUFFIXES
        .iter()
        .map(|suffix| format!("{name}{suffix}"))
        .collect();

    // Structures before prototypes, which may use them
    let body = ["_def", "_struct", "_prt"]
        .iter()
        .map(|suffix| format!("#include \"{name}{suffix}{HEADER_EXTENSION}\""))
        .collect::<Vec<_>>()
        .join("\n");

    let mut files: Vec<FileInfo> = private
        .iter()
        .map(|name| header(name, HeaderTemplate::stub()))
        .collect();
    files.push(header(umbrella, HeaderTemplate::new(body)));
    files
}
