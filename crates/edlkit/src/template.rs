//! EDL templates and the renderer that fills them in.
//!
//! Every widget names a template file. The built-in set (`screen.edl`,
//! `rectangle.edl`, `circle.edl`, `text.edl`) is embedded at compile time and
//! can be overlaid by a directory of `*.edl` files.
//!
//! # Syntax
//!
//! Templates are Jinja, rendered with [`minijinja`] the way the EDM screen
//! tools render them: block tags swallow their own line (`trim_blocks` and
//! `lstrip_blocks`) and the final newline of a template is dropped.
//!
//! - `{{ widget.x }}` substitutes a value from the context. Printing a value
//!   that does not exist is an error.
//! - `{% if widget.fill %} ... {% else %} ... {% endif %}` tests a value;
//!   missing values are falsy. Loops, filters and expressions work as in
//!   Jinja.
//!
//! Syntax errors, including unknown or unbalanced tags, fail the render.
//!
//! # Example
//!
//! ```
//! use edlkit::template::{TemplateRenderer, Templates};
//! use serde_json::json;
//!
//! let mut templates = Templates::builtin().unwrap();
//! templates.insert("led.edl", "led {{ widget.name }}\n{% if widget.on %}\non\n{% endif %}\n");
//!
//! let out = templates
//!     .render("led.edl", &json!({ "widget": { "name": "run", "on": true } }))
//!     .unwrap();
//! assert_eq!(out, "led run\non");
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;

use edlkit_core::logging::targets;

use crate::error::{DesignerError, Result};

/// Templates shipped with the crate.
static BUILTIN: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "edl";

/// Renders a named template against a JSON context.
///
/// The designer only talks to templates through this trait, so another
/// engine can be swapped in with [`Designer::with_renderer`](crate::Designer::with_renderer).
pub trait TemplateRenderer {
    /// Render `template` with `context`.
    fn render(&self, template: &str, context: &Value) -> Result<String>;

    /// Whether a template with this name exists.
    fn contains(&self, template: &str) -> bool;
}

/// The built-in template set and renderer.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    sources: BTreeMap<String, String>,
    directory: Option<PathBuf>,
}

impl Templates {
    /// The templates embedded in the crate.
    pub fn builtin() -> Result<Self> {
        let mut templates = Self::default();
        for file in BUILTIN.files() {
            let path = file.path();
            if path.extension().is_none_or(|ext| ext != TEMPLATE_EXTENSION) {
                continue;
            }
            if let (Some(name), Some(text)) = (path.to_str(), file.contents_utf8()) {
                templates.insert(name, text);
            }
        }
        Ok(templates)
    }

    /// The built-in templates overlaid by every `*.edl` file in `dir`.
    ///
    /// Files in `dir` replace built-ins of the same name.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(DesignerError::TemplateDirMissing(dir.to_path_buf()));
        }
        tracing::debug!(target: targets::TEMPLATE, dir = %dir.display(), "using template directory");

        let mut templates = Self::builtin()?;
        let entries = fs::read_dir(dir).map_err(|e| DesignerError::io(dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| DesignerError::io(dir, e))?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != TEMPLATE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|e| DesignerError::io(&path, e))?;
            tracing::debug!(target: targets::TEMPLATE, template = name, "loaded template");
            templates.insert(name, source);
        }

        templates.directory = Some(dir.to_path_buf());
        Ok(templates)
    }

    /// Add or replace a template.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(name.into(), source.into());
    }

    /// Names of all known templates, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Raw source of a template.
    pub fn source(&self, name: &str) -> Option<&str> {
        self.sources.get(name).map(String::as_str)
    }

    /// The overlay directory, if one was loaded.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Render template source that is not registered under a name.
    ///
    /// `name` is only used in error messages.
    pub fn render_source(&self, name: &str, source: &str, context: &Value) -> Result<String> {
        let template_error = |err| DesignerError::Template {
            template: name.to_owned(),
            source: err,
        };

        let env = environment();
        let template = env
            .template_from_named_str(name, source)
            .map_err(template_error)?;
        template.render(context).map_err(template_error)
    }
}

impl TemplateRenderer for Templates {
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        let Some(source) = self.sources.get(template) else {
            let widget = context
                .pointer("/widget/name")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return Err(DesignerError::TemplateNotFound {
                widget: widget.to_owned(),
                template: template.to_owned(),
            });
        };
        tracing::trace!(target: targets::TEMPLATE, template, "rendering");
        self.render_source(template, source, context)
    }

    fn contains(&self, template: &str) -> bool {
        self.sources.contains_key(template)
    }
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
    env
}
