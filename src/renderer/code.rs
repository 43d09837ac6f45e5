//! Code rendering with catalog lookup and generic fallback

use tracing::debug;

use crate::model::{CodeType, Language};
use crate::template::{interpolate, Placeholders, TemplateCatalog, FALLBACK_TEMPLATE};

/// Which path produced a rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// An exact catalog template matched
    Catalog,
    /// No template matched; the generic skeleton was used
    Fallback,
}

/// Renders code for a (language, code type, description) triple
///
/// Rendering never fails: pairs that are not in the catalog, including
/// unknown language or code type strings, degrade to a generic skeleton.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    catalog: &'static TemplateCatalog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            catalog: TemplateCatalog::builtin(),
        }
    }
}

impl Renderer {
    /// Render from untyped language and code type keys
    pub fn render(&self, language: &str, code_type: &str, description: &str) -> String {
        self.resolve(language, code_type, description).0
    }

    /// Render from typed keys
    pub fn render_typed(&self, language: Language, code_type: CodeType, description: &str) -> String {
        self.render(language.as_str(), code_type.as_str(), description)
    }

    /// Render and report whether the catalog or the fallback was used
    pub fn resolve(&self, language: &str, code_type: &str, description: &str) -> (String, Resolution) {
        match self.catalog.lookup_str(language, code_type) {
            Ok(template) => {
                debug!(%language, %code_type, "rendering catalog template");
                (template.render(description), Resolution::Catalog)
            }
            Err(err) => {
                debug!(%err, "falling back to generic template");
                (render_fallback(language, code_type, description), Resolution::Fallback)
            }
        }
    }
}

fn render_fallback(language: &str, code_type: &str, description: &str) -> String {
    let comment = language
        .parse::<Language>()
        .map(Language::comment_prefix)
        .unwrap_or("//");
    let language = display_key(language, "unknown-language");
    let code_type = display_key(code_type, "code");

    let placeholders = Placeholders::from_description(description)
        .with("comment", comment)
        .with("language", language)
        .with("code_type", code_type);
    interpolate(FALLBACK_TEMPLATE, &placeholders)
}

/// Trimmed key for display, or `default` when blank
fn display_key(key: &str, default: &str) -> String {
    let key = key.trim();
    if key.is_empty() {
        default.to_string()
    } else {
        key.to_string()
    }
}
