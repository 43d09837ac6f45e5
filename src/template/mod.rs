//! Template catalog for generated code
//!
//! This module holds the built-in code templates, keyed by language and code
//! type, and the placeholder substitution used to render them. The catalog is
//! static data; choosing a fallback when a pair is missing is up to the
//! [`crate::renderer`].
//!
//! # Example
//!
//! ```text
//! // Template source
//! def {snake_name}(data):
//!     """{description}"""
//!
//! // Rendered for "Parse a CSV file"
//! def parse_a_csv_file(data):
//!     """Parse a CSV file"""
//! ```

mod catalog;
mod placeholder;
mod sources;

pub use catalog::{CatalogError, CodeTemplate, TemplateCatalog};
pub use placeholder::{interpolate, Placeholders};
pub(crate) use sources::FALLBACK_TEMPLATE;
