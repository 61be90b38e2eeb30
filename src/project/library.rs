use super::application::create_headers;
use super::Layout;
use crate::config::ProjectOptions;
use crate::constants::{HEADER_EXTENSION, INCLUDE_DIR, LIB_DIR, SOURCES_DIR, SOURCE_EXTENSION};
use crate::file::{add_extension, FileInfo, FileOptions};
use crate::template::{CommentStyle, ScriptTemplate, SourceTemplate};
use std::path::Path;
use std::sync::Arc;

const MAKEFILE: &str = include_str!("../../templates/c/library.mk.j2");

/// Static library project. Sources include the public `lib<name>.h`
/// header and the Makefile archives them into `lib/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Library;

fn public_header(options: &ProjectOptions) -> String {
    format!("lib{}", options.project_name)
}

impl Layout for Library {
    fn directories(&self) -> &'static [&'static str] {
        &[SOURCES_DIR, INCLUDE_DIR, LIB_DIR]
    }

    fn sources(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo> {
        let include = format!("{}{HEADER_EXTENSION}", public_header(options));
        let names = [
            options.project_name.clone(),
            format!("{}_utils", options.project_name),
        ];

        names
            .iter()
            .map(|name| {
                let path = add_extension(base.join(SOURCES_DIR).join(name), SOURCE_EXTENSION);
                FileInfo::new(
                    FileOptions::new(Arc::clone(options), path),
                    SourceTemplate::new(include.clone()),
                )
            })
            .collect()
    }

    fn headers(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo> {
        create_headers(options, base, &public_header(options))
    }

    fn misc(&self, options: &Arc<ProjectOptions>, base: &Path) -> Vec<FileInfo> {
        let makefile = base.join(SOURCES_DIR).join("Makefile");
        vec![FileInfo::new(
            FileOptions::new(Arc::clone(options), makefile),
            ScriptTemplate::new(MAKEFILE, CommentStyle::Hash),
        )]
    }
}
