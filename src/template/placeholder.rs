//! Placeholder substitution for code templates

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Identifier used when the description has no usable words
const DEFAULT_NAME: &str = "generated";

/// Number of description words that make up a derived identifier
const NAME_WORDS: usize = 4;

/// Values available to a template, all derived from the description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders<'a> {
    pub description: &'a str,
    pub snake_name: String,
    pub camel_name: String,
    pub pascal_name: String,
    pub kebab_name: String,
    extra: Vec<(&'static str, String)>,
}

impl<'a> Placeholders<'a> {
    pub fn from_description(description: &'a str) -> Self {
        let words = identifier_words(description);
        Self {
            description,
            snake_name: words.to_snake_case(),
            camel_name: words.to_lower_camel_case(),
            pascal_name: words.to_upper_camel_case(),
            kebab_name: words.to_kebab_case(),
            extra: Vec::new(),
        }
    }

    /// Add a caller-supplied placeholder
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.extra.push((key, value.into()));
        self
    }

    /// Look up a placeholder by name
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "description" => Some(self.description),
            "snake_name" => Some(&self.snake_name),
            "camel_name" => Some(&self.camel_name),
            "pascal_name" => Some(&self.pascal_name),
            "kebab_name" => Some(&self.kebab_name),
            _ => self
                .extra
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str()),
        }
    }
}

/// Pick the leading ASCII words of a description that can form an identifier.
///
/// Words starting with a digit are skipped at the front so the result never
/// starts with one.
fn identifier_words(description: &str) -> String {
    let words: Vec<&str> = description
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .skip_while(|w| w.starts_with(|c: char| c.is_ascii_digit()))
        .take(NAME_WORDS)
        .collect();

    if words.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        words.join(" ")
    }
}

/// Substitute `{key}` tokens in `template` with values from `placeholders`.
///
/// Only the template text is scanned; substituted values are copied as-is.
/// Braces that do not enclose a known key are kept literally.
pub fn interpolate(template: &str, placeholders: &Placeholders<'_>) -> String {
    let mut out = String::with_capacity(template.len() + placeholders.description.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let key_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let value = if after[key_len..].starts_with('}') {
            placeholders.get(&after[..key_len])
        } else {
            None
        };

        match value {
            Some(value) => {
                out.push_str(value);
                rest = &after[key_len + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_from_description() {
        let p = Placeholders::from_description("Validate user email address format");
        assert_eq!(p.snake_name, "validate_user_email_address");
        assert_eq!(p.camel_name, "validateUserEmailAddress");
        assert_eq!(p.pascal_name, "ValidateUserEmailAddress");
        assert_eq!(p.kebab_name, "validate-user-email-address");
    }

    #[test]
    fn test_names_skip_leading_digits() {
        let p = Placeholders::from_description("2 sum problem");
        assert_eq!(p.snake_name, "sum_problem");
    }

    #[test]
    fn test_names_default_without_ascii_words() {
        let p = Placeholders::from_description("日本語 !!!");
        assert_eq!(p.snake_name, "generated");
        assert_eq!(p.pascal_name, "Generated");
    }

    #[test]
    fn test_interpolate_keeps_code_braces() {
        let p = Placeholders::from_description("add numbers");
        let out = interpolate("function {camel_name}() { return {}; }", &p);
        assert_eq!(out, "function addNumbers() { return {}; }");
    }

    #[test]
    fn test_interpolate_does_not_rescan_values() {
        let p = Placeholders::from_description("use {snake_name} literally");
        let out = interpolate("// {description}", &p);
        assert_eq!(out, "// use {snake_name} literally");
    }

    #[test]
    fn test_interpolate_unknown_key_and_unterminated_brace() {
        let p = Placeholders::from_description("x");
        assert_eq!(interpolate("{unknown} {description", &p), "{unknown} {description");
        assert_eq!(interpolate("trailing {", &p), "trailing {");
    }

    #[test]
    fn test_interpolate_extra_placeholder() {
        let p = Placeholders::from_description("x").with("language", "cobol");
        assert_eq!(interpolate("{language}: {description}", &p), "cobol: x");
    }
}
