//! Debian packaging files of a packaged project.
//! Produces the maintainer scripts, the scripts that assemble the `.deb`
//! and the `package.conf` they read. Applications also get the cron and
//! init.d files the package installs; libraries have no service to run.

use crate::config::{ProjectKind, ProjectOptions};
use crate::constants::{DEBIAN_DIR, MISC_DIR, MOUNT_DIR, PACKAGE_DIR};
use crate::file::{FileInfo, FileOptions};
use crate::template::{CommentStyle, ScriptTemplate};
use std::path::Path;
use std::sync::Arc;

const MAINTAINER_SCRIPT: &str = include_str!("../templates/packaging/maintainer.sh.j2");
const BUILD_PACKAGE: &str = include_str!("../templates/packaging/build-package.sh.j2");
const CLEAN_PACKAGE: &str = include_str!("../templates/packaging/clean-package.sh.j2");
const CRON: &str = include_str!("../templates/packaging/cron.j2");
const INITD: &str = include_str!("../templates/packaging/initd.sh.j2");
const PACKAGE_CONF: &str = include_str!("../templates/packaging/package.conf.j2");

/// Debian maintainer scripts, in generation order
pub const MAINTAINER_SCRIPTS: [&str; 4] = ["postinst", "postrm", "preinst", "prerm"];

/// Returns the packaging files of a project, or nothing when the project
/// is not packaged. Only applications get the `<identifier>_cron` and
/// `<identifier>_initd` files.
///
/// # Arguments
/// * `options` - Project options
/// * `root_path` - Project root, i.e. `<cwd>/package-<name>`
/// * `prefix` - Directory holding the project's module, listed in `package.conf`
pub fn create_packaging_scripts(
    options: &Arc<ProjectOptions>,
    root_path: &Path,
    prefix: &str,
) -> Vec<FileInfo> {
    if !options.package_project {
        return Vec::new();
    }

    let identifier = options.identifier();
    let script = |dir: &str, name: &str| {
        FileOptions::new(Arc::clone(options), root_path.join(dir).join(name))
            .with_executable(true)
    };

    let mut files: Vec<FileInfo> = MAINTAINER_SCRIPTS
        .iter()
        .map(|name| {
            let template = ScriptTemplate::new(MAINTAINER_SCRIPT, CommentStyle::Hash)
                .with_var("script", *name);
            FileInfo::new(script(DEBIAN_DIR, name), template)
        })
        .collect();

    files.push(FileInfo::new(
        script(MOUNT_DIR, "build-package"),
        ScriptTemplate::new(BUILD_PACKAGE, CommentStyle::Hash),
    ));
    files.push(FileInfo::new(
        script(MOUNT_DIR, "clean-package"),
        ScriptTemplate::new(CLEAN_PACKAGE, CommentStyle::Hash),
    ));

    // Installed as-is, no banner
    if options.kind == ProjectKind::Application {
        files.push(FileInfo::new(
            script(MISC_DIR, &format!("{identifier}_cron"))
                .with_executable(false)
                .with_header_comment(false),
            ScriptTemplate::new(CRON, CommentStyle::Hash),
        ));
        files.push(FileInfo::new(
            script(MISC_DIR, &format!("{identifier}_initd")).with_header_comment(false),
            ScriptTemplate::new(INITD, CommentStyle::Hash),
        ));
    }
    files.push(FileInfo::new(
        script(PACKAGE_DIR, "package.conf")
            .with_executable(false)
            .with_header_comment(false),
        ScriptTemplate::new(PACKAGE_CONF, CommentStyle::Hash).with_var("modules", prefix),
    ));

    files
}
