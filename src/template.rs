//! File templates for sourcetpl.
//! A [`FileTemplate`] turns the options of one file into its textual content.
//! The concrete variants cover C sources, C headers and the scripts,
//! Makefiles and configuration files of a project.

use crate::config::License;
use crate::error::Result;
use crate::file::FileOptions;
use crate::renderer::TemplateRenderer;
use cruet::Inflector;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};

const BANNER: &str = include_str!("../templates/banner.j2");
const SOURCE: &str = include_str!("../templates/c/source.c.j2");
const HEADER: &str = include_str!("../templates/c/header.h.j2");

const MIT: &str = include_str!("../templates/licenses/mit.j2");
const APACHE2: &str = include_str!("../templates/licenses/apache2.j2");
const GPL2: &str = include_str!("../templates/licenses/gpl2.j2");
const GPL3: &str = include_str!("../templates/licenses/gpl3.j2");

/// Comment syntax used for the generated-file banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */` block comment
    #[default]
    C,
    /// `#` line comments (shell, make, cron)
    Hash,
}

impl CommentStyle {
    /// Returns the opening, leading and closing delimiters of the banner.
    fn delimiters(self) -> (&'static str, &'static str, &'static str) {
        match self {
            CommentStyle::C => ("/*", " *", " */"),
            CommentStyle::Hash => ("#", "#", "#"),
        }
    }
}

/// Producer of a file's content.
pub trait FileTemplate {
    /// Comment syntax of the rendered file.
    fn comment_style(&self) -> CommentStyle {
        CommentStyle::C
    }

    /// Renders the full content of the file described by `options`.
    ///
    /// # Arguments
    /// * `renderer` - Engine used to expand the template
    /// * `options` - Options of the file being rendered
    ///
    /// # Returns
    /// * `Result<String>` - Rendered content, without banner
    fn render(&self, renderer: &dyn TemplateRenderer, options: &FileOptions) -> Result<String>;
}

/// Builds the variables every template can use.
///
/// # Notes
/// - `guard` is the screaming snake case of the file stem plus `_H`
/// - `identifier` is the project name with dashes turned into underscores
pub fn base_context(options: &FileOptions) -> Map<String, Value> {
    let project = &options.project;
    let file_name = options
        .name
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_stem = options
        .name
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let guard = format!("{}_H", file_stem.to_screaming_snake_case());

    let mut context = Map::new();
    context.insert("project_name".to_string(), json!(project.project_name));
    context.insert("identifier".to_string(), json!(project.identifier()));
    context.insert("author".to_string(), json!(project.author));
    context.insert("kind".to_string(), json!(project.kind.to_string()));
    context.insert("file_name".to_string(), json!(file_name));
    context.insert("file_stem".to_string(), json!(file_stem));
    context.insert("guard".to_string(), json!(guard));
    context
}

fn license_source(license: License) -> &'static str {
    match license {
        License::Mit => MIT,
        License::Apache2 => APACHE2,
        License::Gpl2 => GPL2,
        License::Gpl3 => GPL3,
    }
}

/// Renders the notice of `license`, held by the author or, without one,
/// by the project.
pub fn render_license(
    renderer: &dyn TemplateRenderer,
    options: &FileOptions,
    license: License,
) -> Result<String> {
    let project = &options.project;
    let holder = project.author.as_deref().unwrap_or(&project.project_name);

    renderer.render(license_source(license), &json!({ "holder": holder }))
}

/// Renders the generated-file banner in the given comment style, followed
/// by the license notice when the project has one.
pub fn render_banner(
    renderer: &dyn TemplateRenderer,
    options: &FileOptions,
    style: CommentStyle,
) -> Result<String> {
    let (open, lead, close) = style.delimiters();
    let mut context = base_context(options);
    context.insert(
        "comment".to_string(),
        json!({ "open": open, "lead": lead, "close": close }),
    );

    if let Some(license) = options.project.license {
        let notice = render_license(renderer, options, license)?;
        let lines: Vec<&str> = notice.lines().collect();
        context.insert("license".to_string(), json!(lines));
    }

    renderer.render(BANNER, &Value::Object(context))
}

/// Source stub. Includes the project header and, for entry points, a
/// `main` function.
#[derive(Debug, Clone)]
pub struct SourceTemplate {
    include: String,
    entry_point: bool,
}

impl SourceTemplate {
    /// Plain translation unit including `include`.
    pub fn new<S: Into<String>>(include: S) -> Self {
        Self {
            include: include.into(),
            entry_point: false,
        }
    }

    /// Translation unit holding the program's `main`.
    pub fn entry_point<S: Into<String>>(include: S) -> Self {
        Self {
            include: include.into(),
            entry_point: true,
        }
    }
}

impl FileTemplate for SourceTemplate {
    fn render(&self, renderer: &dyn TemplateRenderer, options: &FileOptions) -> Result<String> {
        let mut context = base_context(options);
        context.insert("include".to_string(), json!(self.include));
        context.insert("entry_point".to_string(), json!(self.entry_point));

        renderer.render(SOURCE, &Value::Object(context))
    }
}

/// Header stub with include guard and an optional body.
#[derive(Debug, Clone, Default)]
pub struct HeaderTemplate {
    body: String,
}

impl HeaderTemplate {
    /// Header whose guard wraps `body`. An empty body yields a bare stub.
    pub fn new<S: Into<String>>(body: S) -> Self {
        Self { body: body.into() }
    }

    pub fn stub() -> Self {
        Self::default()
    }
}

impl FileTemplate for HeaderTemplate {
    fn render(&self, renderer: &dyn TemplateRenderer, options: &FileOptions) -> Result<String> {
        let mut context = base_context(options);
        context.insert("body".to_string(), json!(self.body));

        renderer.render(HEADER, &Value::Object(context))
    }
}

/// Shell scripts, Makefiles and configuration files.
///
/// Renders a fixed template source with the base context plus the
/// variables given through [`ScriptTemplate::with_var`].
#[derive(Debug, Clone)]
pub struct ScriptTemplate {
    source: &'static str,
    style: CommentStyle,
    vars: IndexMap<String, String>,
}

impl ScriptTemplate {
    pub fn new(source: &'static str, style: CommentStyle) -> Self {
        Self {
            source,
            style,
            vars: IndexMap::new(),
        }
    }

    pub fn with_var<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl FileTemplate for ScriptTemplate {
    fn comment_style(&self) -> CommentStyle {
        self.style
    }

    fn render(&self, renderer: &dyn TemplateRenderer, options: &FileOptions) -> Result<String> {
        let mut context = base_context(options);
        for (key, value) in &self.vars {
            context.insert(key.clone(), json!(value));
        }

        renderer.render(self.source, &Value::Object(context))
    }
}
