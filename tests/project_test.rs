use sourcetpl::config::{ProjectKind, ProjectOptions};
use sourcetpl::error::{Error, Result};
use sourcetpl::project::Project;
use sourcetpl::renderer::{MiniJinjaRenderer, TemplateRenderer};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

fn new_project(options: ProjectOptions, cwd: &Path) -> Project {
    let cwd = cwd.to_path_buf();
    Project::new(options, move || Ok(cwd)).unwrap()
}

fn file_names(files: &[sourcetpl::file::FileInfo]) -> Vec<String> {
    files
        .iter()
        .filter_map(|f| f.name().file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

/// Reads every file below `root`, keyed by path.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.insert(path.clone(), fs::read(&path).unwrap());
            }
        }
    }
    files
}

/// Counts render calls and delegates to MiniJinja.
struct CountingRenderer {
    calls: Rc<Cell<usize>>,
    inner: MiniJinjaRenderer,
}

impl TemplateRenderer for CountingRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.inner.render(template, context)
    }
}

#[test]
fn test_root_path_derivation() {
    let cwd = Path::new("/work");

    let project = new_project(ProjectOptions::new("foo"), cwd);
    assert_eq!(project.root_path(), Path::new("/work/foo"));
    assert_eq!(
        project.sources()[0].name(),
        Path::new("/work/foo/src/main.c")
    );
    assert_eq!(
        project.headers()[0].name(),
        Path::new("/work/foo/include/foo_def.h")
    );

    let project = new_project(ProjectOptions::new("foo").with_package(true), cwd);
    assert_eq!(project.root_path(), Path::new("/work/package-foo"));
    assert_eq!(
        project.sources()[0].name(),
        Path::new("/work/package-foo/foo/src/main.c")
    );
    assert_eq!(
        project.headers()[0].name(),
        Path::new("/work/package-foo/foo/include/foo_def.h")
    );
}

#[test]
fn test_application_files() {
    let project = new_project(ProjectOptions::new("widget"), Path::new("/work"));

    assert_eq!(project.kind(), ProjectKind::Application);
    assert_eq!(project.to_string(), "Application project");
    assert_eq!(file_names(project.sources()), vec!["main.c"]);
    assert_eq!(
        file_names(project.headers()),
        vec!["widget_def.h", "widget_prt.h", "widget_struct.h", "widget.h"]
    );
    assert!(project.packaging().is_empty());
    assert_eq!(file_names(project.misc()), vec!["Makefile"]);
}

#[test]
fn test_library_files() {
    let options = ProjectOptions::new("widget").with_kind(ProjectKind::Library);
    let project = new_project(options, Path::new("/work"));

    assert_eq!(project.to_string(), "Library project");
    assert_eq!(
        file_names(project.sources()),
        vec!["widget.c", "widget_utils.c"]
    );
    assert_eq!(
        file_names(project.headers()),
        vec!["widget_def.h", "widget_prt.h", "widget_struct.h", "libwidget.h"]
    );
    assert_eq!(file_names(project.misc()), vec!["Makefile"]);
}

#[test]
fn test_extension_added_once() {
    let project = new_project(ProjectOptions::new("widget"), Path::new("/work"));
    for file in project.sources().iter().chain(project.headers()) {
        let name = file.name().to_string_lossy().into_owned();
        let doubled = name.ends_with(".c.c") || name.ends_with(".h.h");
        assert!(!doubled, "{name}");
    }
}

#[test]
fn test_category_independence() {
    let cwd = Path::new("/work");
    let plain = new_project(ProjectOptions::new("widget"), cwd);
    let packaged = new_project(ProjectOptions::new("widget").with_package(true), cwd);

    assert!(plain.packaging().is_empty());
    assert_eq!(packaged.packaging().len(), 9);
    assert_eq!(file_names(plain.sources()), file_names(packaged.sources()));
    assert_eq!(file_names(plain.headers()), file_names(packaged.headers()));
}

#[test]
fn test_invalid_name_rejected_before_cwd() {
    let called = Cell::new(false);
    let result = Project::new(ProjectOptions::new(""), || {
        called.set(true);
        Ok(PathBuf::from("/work"))
    });

    assert!(matches!(result, Err(Error::InvalidProjectName { .. })));
    assert!(!called.get());
}

#[test]
fn test_working_dir_unavailable() {
    let result = Project::new(ProjectOptions::new("widget"), || {
        Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
    });
    assert!(matches!(result, Err(Error::WorkingDirError(_))));
}

#[test]
fn test_build_application() {
    let temp_dir = TempDir::new().unwrap();
    let project = new_project(ProjectOptions::new("widget"), temp_dir.path());
    project.build().unwrap();

    let root = temp_dir.path().join("widget");
    for path in [
        "src/main.c",
        "src/Makefile",
        "include/widget_def.h",
        "include/widget_prt.h",
        "include/widget_struct.h",
        "include/widget.h",
    ] {
        assert!(root.join(path).is_file(), "{path} missing");
    }
    assert!(!root.join("pkg_install").exists());

    let umbrella = fs::read_to_string(root.join("include/widget.h")).unwrap();
    assert!(umbrella.contains(
        "#include \"widget_def.h\"\n#include \"widget_struct.h\"\n#include \"widget_prt.h\"\n"
    ));

    let makefile = fs::read_to_string(root.join("src/Makefile")).unwrap();
    assert!(makefile.starts_with("#\n# Makefile\n"));
    assert!(makefile.contains("TARGET = ../bin/widget\n"));
    assert!(makefile.contains("\n\t$(CC) $(CPPFLAGS) $(CFLAGS) -c -o $@ $<\n"));
}

#[test]
fn test_build_packaged_library() {
    let temp_dir = TempDir::new().unwrap();
    let options = ProjectOptions::new("widget")
        .with_kind(ProjectKind::Library)
        .with_package(true);
    let project = new_project(options, temp_dir.path());
    project.build().unwrap();

    let root = temp_dir.path().join("package-widget");
    assert!(root.join("widget/lib").is_dir());
    assert!(root.join("widget/src/widget.c").is_file());
    assert!(root.join("widget/src/widget_utils.c").is_file());
    assert!(root.join("widget/include/libwidget.h").is_file());
    assert!(root.join("pkg_install/debian/postinst").is_file());
    assert!(root.join("pkg_install/mount/build-package").is_file());
    assert!(root.join("pkg_install/package.conf").is_file());
    assert!(root.join("pkg_install/misc").is_dir());
    assert!(!root.join("pkg_install/misc/widget_initd").exists());
    assert!(!root.join("pkg_install/misc/widget_cron").exists());

    let source = fs::read_to_string(root.join("widget/src/widget.c")).unwrap();
    assert!(source.contains("#include \"libwidget.h\"\n"));

    let script = root.join("pkg_install/mount/build-package");
    let build_package = fs::read_to_string(script).unwrap();
    assert!(build_package.contains("cp -f ../../$app/lib/* $package_tmp_dir/usr/lib"));
    assert!(!build_package.contains("_initd"));
}

#[cfg(unix)]
#[test]
fn test_build_sets_executable_bits() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let options = ProjectOptions::new("widget").with_package(true);
    let project = new_project(options, temp_dir.path());
    project.build().unwrap();

    let root = temp_dir.path().join("package-widget");
    let mode = |path: &str| fs::metadata(root.join(path)).unwrap().permissions().mode();
    assert_eq!(mode("pkg_install/debian/prerm") & 0o111, 0o111);
    assert_eq!(mode("pkg_install/misc/widget_initd") & 0o111, 0o111);
    assert_eq!(mode("pkg_install/misc/widget_cron") & 0o111, 0);
    assert_eq!(mode("widget/src/main.c") & 0o111, 0);
}

#[test]
fn test_rebuild_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let options = ProjectOptions::new("widget")
        .with_package(true)
        .with_author(Some("Jane Doe".to_string()));
    let project = new_project(options, temp_dir.path());

    project.build().unwrap();
    let first = snapshot(project.root_path());
    project.build().unwrap();
    let second = snapshot(project.root_path());

    assert_eq!(first.len(), 15);
    assert_eq!(first, second);
}

#[test]
fn test_same_options_same_tree() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let options = ProjectOptions::new("widget").with_kind(ProjectKind::Library);

    new_project(options.clone(), first.path()).build().unwrap();
    new_project(options, second.path()).build().unwrap();

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_rebuild_overwrites_manual_edits() {
    let temp_dir = TempDir::new().unwrap();
    let project = new_project(ProjectOptions::new("widget"), temp_dir.path());
    project.build().unwrap();

    let main = temp_dir.path().join("widget/src/main.c");
    let original = fs::read(&main).unwrap();
    fs::write(&main, "edited").unwrap();
    project.build().unwrap();

    assert_eq!(fs::read(&main).unwrap(), original);
}

#[test]
fn test_dirtree_failure_skips_all_files() {
    let temp_dir = TempDir::new().unwrap();
    // The project root is taken by a regular file
    fs::write(temp_dir.path().join("widget"), "").unwrap();

    let calls = Rc::new(Cell::new(0));
    let renderer = CountingRenderer {
        calls: Rc::clone(&calls),
        inner: MiniJinjaRenderer::new(),
    };
    let project = new_project(ProjectOptions::new("widget"), temp_dir.path())
        .with_renderer(Box::new(renderer));

    assert!(matches!(project.build(), Err(Error::CreateDirError { .. })));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_file_failure_keeps_earlier_output() {
    let temp_dir = TempDir::new().unwrap();
    let options = ProjectOptions::new("widget").with_kind(ProjectKind::Library);
    let project = new_project(options, temp_dir.path());

    // A directory where the second source file should be written
    let root = temp_dir.path().join("widget");
    fs::create_dir_all(root.join("src/widget_utils.c")).unwrap();

    match project.build() {
        Err(Error::WriteFileError { path, .. }) => assert!(path.ends_with("widget_utils.c")),
        Err(other) => panic!("Expected WriteFileError, got {other:?}"),
        Ok(()) => panic!("Expected the build to fail"),
    }

    // Partial output is expected: the first source stays, nothing after it is written
    assert!(root.join("src/widget.c").is_file());
    assert!(root.join("include").is_dir());
    assert!(!root.join("include/widget_def.h").exists());
    assert!(!root.join("src/Makefile").exists());
}
