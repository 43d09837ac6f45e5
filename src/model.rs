//! Core data types: languages, code types and generated artifacts

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a string does not name a known language or code type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Target programming language of a generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Java,
    TypeScript,
    Go,
    Rust,
    Cpp,
    CSharp,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::TypeScript,
        Language::Go,
        Language::Rust,
        Language::Cpp,
        Language::CSharp,
    ];

    /// Lowercase key, as used in requests and export filenames
    pub fn as_str(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
        }
    }

    /// Human readable name
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::TypeScript => "TypeScript",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
        }
    }

    /// Prefix of a single-line comment
    pub fn comment_prefix(self) -> &'static str {
        match self {
            Language::Python => "#",
            _ => "//",
        }
    }

    /// File extension used when exporting code in this language
    pub fn extension(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Java => "java",
            Language::TypeScript => "ts",
            Language::Go => "go",
            Language::Rust => "rs",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == key)
            .ok_or_else(|| ParseEnumError {
                kind: "language",
                value: s.to_string(),
                expected: join_keys(Language::ALL.iter().map(|l| l.as_str())),
            })
    }
}

/// Kind of code to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeType {
    Function,
    Class,
    Api,
    Component,
    Algorithm,
    Test,
    Config,
    Script,
}

impl CodeType {
    pub const ALL: [CodeType; 8] = [
        CodeType::Function,
        CodeType::Class,
        CodeType::Api,
        CodeType::Component,
        CodeType::Algorithm,
        CodeType::Test,
        CodeType::Config,
        CodeType::Script,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CodeType::Function => "function",
            CodeType::Class => "class",
            CodeType::Api => "api",
            CodeType::Component => "component",
            CodeType::Algorithm => "algorithm",
            CodeType::Test => "test",
            CodeType::Config => "config",
            CodeType::Script => "script",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeType::Function => "Function",
            CodeType::Class => "Class",
            CodeType::Api => "API Endpoint",
            CodeType::Component => "Component",
            CodeType::Algorithm => "Algorithm",
            CodeType::Test => "Test Case",
            CodeType::Config => "Configuration",
            CodeType::Script => "Script",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        CodeType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == key)
            .ok_or_else(|| ParseEnumError {
                kind: "code type",
                value: s.to_string(),
                expected: join_keys(CodeType::ALL.iter().map(|t| t.as_str())),
            })
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}

/// Unique identifier of a generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(Uuid);

impl ArtifactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArtifactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single piece of generated code with its metadata
///
/// Artifacts are immutable once created; fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    id: ArtifactId,
    language: Language,
    #[serde(rename = "type")]
    code_type: CodeType,
    code: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl GeneratedArtifact {
    /// Wrap freshly rendered code into an artifact with a new id and timestamp
    pub(crate) fn new(
        language: Language,
        code_type: CodeType,
        code: String,
        description: impl Into<String>,
    ) -> Self {
        debug_assert!(!code.is_empty(), "rendered code is never empty");
        Self {
            id: ArtifactId::new(),
            language,
            code_type,
            code,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ArtifactId {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code_type(&self) -> CodeType {
        self.code_type
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_language_parse_is_case_insensitive() {
        assert_eq!("Python".parse::<Language>(), Ok(Language::Python));
        assert_eq!("  csharp ".parse::<Language>(), Ok(Language::CSharp));
        assert_eq!("CPP".parse::<Language>(), Ok(Language::Cpp));
    }

    #[test]
    fn test_language_parse_unknown() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err.kind, "language");
        assert_eq!(err.value, "cobol");
        assert!(err.to_string().contains("javascript"));
    }

    #[test]
    fn test_code_type_roundtrip_through_display() {
        for ty in CodeType::ALL {
            assert_eq!(ty.to_string().parse::<CodeType>(), Ok(ty));
        }
    }

    #[test]
    fn test_artifact_ids_are_unique() {
        let a = ArtifactId::new();
        let b = ArtifactId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_artifact_json_shape() {
        let artifact = GeneratedArtifact::new(
            Language::Go,
            CodeType::Api,
            "package main".to_string(),
            "health endpoint",
        );
        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(value["language"], "go");
        assert_eq!(value["type"], "api");
        assert_eq!(value["description"], "health endpoint");
        assert_eq!(value["id"], artifact.id().to_string());
        assert!(value.get("created_at").is_some());
    }
}
