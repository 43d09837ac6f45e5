//! Framework Hub - template-based example code generator
//!
//! This library turns a language, a code type and a free-text description into
//! a piece of example code, and keeps a bounded history of what was generated.
//!
//! # Example
//!
//! ```rust
//! use framework_hub::render;
//!
//! let code = render("python", "function", "Parse a CSV file");
//! assert!(code.contains("def parse_a_csv_file"));
//! assert!(code.contains("Parse a CSV file"));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod ledger;
pub mod model;
pub mod renderer;
pub mod template;

pub use config::{ConfigError, HubConfig};
pub use controller::{
    Controller, ControllerState, LatencyScheduler, Notification, NotificationKind,
    NotificationLog, Notifier, SimulatedLatency,
};
pub use error::GenerateError;
pub use export::{export_filename, extension_for, write_artifact, ExportError};
pub use ledger::{HistoryLedger, LedgerStats};
pub use model::{ArtifactId, CodeType, GeneratedArtifact, Language, ParseEnumError};
pub use renderer::{Renderer, Resolution};
pub use template::{CatalogError, TemplateCatalog};

/// Render code with the built-in catalog
///
/// Unknown languages or code types never fail; they produce a generic
/// skeleton that still contains the description.
///
/// # Example
///
/// ```rust
/// use framework_hub::render;
///
/// let code = render("cobol", "report", "Monthly totals");
/// assert!(code.contains("Generated cobol report"));
/// assert!(code.contains("Monthly totals"));
/// ```
pub fn render(language: &str, code_type: &str, description: &str) -> String {
    Renderer::default().render(language, code_type, description)
}
