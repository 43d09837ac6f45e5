//! Template catalog for looking up code templates by language and code type

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::model::{CodeType, Language};

use super::placeholder::{interpolate, Placeholders};
use super::sources::BUILTIN_TEMPLATES;

static BUILTIN: Lazy<TemplateCatalog> = Lazy::new(|| {
    let mut catalog = TemplateCatalog {
        templates: BTreeMap::new(),
    };
    for &(language, code_type, source) in BUILTIN_TEMPLATES {
        catalog
            .templates
            .insert((language, code_type), CodeTemplate::new(language, code_type, source));
    }
    catalog
});

/// Errors that can occur during catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No template is registered for the requested pair
    #[error("no template for {language} {code_type}")]
    NotFound { language: String, code_type: String },
}

/// A stored code template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTemplate {
    pub language: Language,
    pub code_type: CodeType,
    /// Template text with `{placeholder}` tokens
    pub source: &'static str,
}

impl CodeTemplate {
    pub fn new(language: Language, code_type: CodeType, source: &'static str) -> Self {
        Self {
            language,
            code_type,
            source,
        }
    }

    /// Render this template for a description
    pub fn render(&self, description: &str) -> String {
        interpolate(self.source, &Placeholders::from_description(description))
    }
}

/// Read-only table of code templates keyed by (language, code type)
#[derive(Debug)]
pub struct TemplateCatalog {
    templates: BTreeMap<(Language, CodeType), CodeTemplate>,
}

impl TemplateCatalog {
    /// The built-in catalog shared by the whole process
    pub fn builtin() -> &'static TemplateCatalog {
        &BUILTIN
    }

    /// Get the template for an exact pair
    pub fn lookup(
        &self,
        language: Language,
        code_type: CodeType,
    ) -> Result<&CodeTemplate, CatalogError> {
        self.templates
            .get(&(language, code_type))
            .ok_or_else(|| CatalogError::NotFound {
                language: language.to_string(),
                code_type: code_type.to_string(),
            })
    }

    /// Get a template from untyped keys; unknown keys are `NotFound`
    pub fn lookup_str(&self, language: &str, code_type: &str) -> Result<&CodeTemplate, CatalogError> {
        match (language.parse::<Language>(), code_type.parse::<CodeType>()) {
            (Ok(language), Ok(code_type)) => self.lookup(language, code_type),
            _ => Err(CatalogError::NotFound {
                language: language.to_string(),
                code_type: code_type.to_string(),
            }),
        }
    }

    /// Check if a pair has a template
    pub fn contains(&self, language: Language, code_type: CodeType) -> bool {
        self.templates.contains_key(&(language, code_type))
    }

    /// All templates, ordered by language then code type
    pub fn entries(&self) -> impl Iterator<Item = &CodeTemplate> {
        self.templates.values()
    }

    /// Code types with a template for a language
    pub fn code_types_for(&self, language: Language) -> impl Iterator<Item = CodeType> + '_ {
        self.templates
            .keys()
            .filter(move |(lang, _)| *lang == language)
            .map(|&(_, code_type)| code_type)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_lookup_and_render() {
        let catalog = TemplateCatalog::builtin();
        let template = catalog
            .lookup(Language::Python, CodeType::Function)
            .expect("python function template");
        let code = template.render("Parse a CSV file");
        assert!(code.contains("def parse_a_csv_file(data):"));
        assert!(code.contains("Parse a CSV file"));
    }

    #[test]
    fn test_lookup_missing_pair_is_not_found() {
        let catalog = TemplateCatalog::builtin();
        let result = catalog.lookup(Language::Go, CodeType::Component);
        assert_eq!(
            result,
            Err(CatalogError::NotFound {
                language: "go".to_string(),
                code_type: "component".to_string(),
            })
        );
    }

    #[test]
    fn test_lookup_str_unknown_language() {
        let catalog = TemplateCatalog::builtin();
        let result = catalog.lookup_str("cobol", "function");
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
        assert!(catalog.lookup_str("JavaScript", "Class").is_ok());
    }

    #[test]
    fn test_every_builtin_template_embeds_description() {
        let catalog = TemplateCatalog::builtin();
        assert!(!catalog.is_empty());
        for template in catalog.entries() {
            let code = template.render("marker-description-42");
            assert!(
                code.contains("marker-description-42"),
                "{} {} does not embed the description",
                template.language,
                template.code_type
            );
        }
    }

    #[test]
    fn test_entries_are_ordered() {
        let catalog = TemplateCatalog::builtin();
        let keys: Vec<_> = catalog.entries().map(|t| (t.language, t.code_type)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(
            catalog.code_types_for(Language::Go).collect::<Vec<_>>(),
            vec![CodeType::Function, CodeType::Api]
        );
    }

    #[test]
    fn test_rust_function_snapshot() {
        let catalog = TemplateCatalog::builtin();
        let code = catalog
            .lookup(Language::Rust, CodeType::Function)
            .unwrap()
            .render("Reverse a string");
        insta::assert_snapshot!(code, @r###"
        // Generated function: Reverse a string
        pub fn reverse_a_string(input: &str) -> Result<String, String> {
            // Implementation based on: Reverse a string
            Ok(input.to_string())
        }
        "###);
    }
}
