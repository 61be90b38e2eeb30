//! Common constants used throughout sourcetpl.

/// Supported defaults file names, looked up in the working directory
pub const CONFIG_FILES: [&str; 3] = [".sourcetpl.json", ".sourcetpl.yml", ".sourcetpl.yaml"];

/// Root directory prefix of packaged projects: `package-<name>`
pub const PACKAGE_ROOT_PREFIX: &str = "package-";

/// Sources directory of every project kind
pub const SOURCES_DIR: &str = "src";

/// Headers directory of every project kind
pub const INCLUDE_DIR: &str = "include";

/// Library output directory
pub const LIB_DIR: &str = "lib";

/// Packaging directory, relative to the project root
pub const PACKAGE_DIR: &str = "pkg_install";

/// Debian maintainer scripts
pub const DEBIAN_DIR: &str = "pkg_install/debian";

/// Cron and init.d files installed by the package
pub const MISC_DIR: &str = "pkg_install/misc";

/// Scripts that assemble the package
pub const MOUNT_DIR: &str = "pkg_install/mount";

pub const SOURCE_EXTENSION: &str = ".c";
pub const HEADER_EXTENSION: &str = ".h";

/// Permissions for created directories and executable files
pub const DEFAULT_MODE: u32 = 0o755;
