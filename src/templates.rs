//! Template module
//!
//! Loads the two page templates (`view.html`, `edit.html`) once at startup
//! and renders them against a page by placeholder substitution. Markup
//! lives in the template files; this module only fills in `{{title}}` and
//! `{{body}}`, HTML-escaped.

use std::path::Path;
use thiserror::Error;

use crate::wiki::Page;

/// Template execution or loading failure
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to load template {name}: {source}")]
    Load {
        name: &'static str,
        source: std::io::Error,
    },
}

/// Which template to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    View,
    Edit,
}

impl TemplateName {
    const fn file_name(self) -> &'static str {
        match self {
            Self::View => "view.html",
            Self::Edit => "edit.html",
        }
    }
}

/// The compiled template set, immutable after startup
#[derive(Debug)]
pub struct TemplateSet {
    view: String,
    edit: String,
}

impl TemplateSet {
    /// Load both templates from the template directory
    ///
    /// Missing or unreadable template files are a startup error; the
    /// server refuses to run without them.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        Ok(Self {
            view: read_template(dir, TemplateName::View)?,
            edit: read_template(dir, TemplateName::Edit)?,
        })
    }

    /// Render a named template against a page
    pub fn render(&self, name: TemplateName, page: &Page) -> String {
        let source = match name {
            TemplateName::View => &self.view,
            TemplateName::Edit => &self.edit,
        };
        source
            .replace("{{title}}", &escape_html(page.title.as_str()))
            .replace("{{body}}", &escape_html(&page.body_text()))
    }
}

fn read_template(dir: &Path, name: TemplateName) -> Result<String, TemplateError> {
    let file_name = name.file_name();
    std::fs::read_to_string(dir.join(file_name)).map_err(|source| TemplateError::Load {
        name: file_name,
        source,
    })
}

/// Escape text for interpolation into HTML element or attribute content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
