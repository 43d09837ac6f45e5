//! Error types for generation requests

use thiserror::Error;

/// Errors that can occur when a generation request is submitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The description is empty or only whitespace
    #[error("description must not be empty")]
    EmptyDescription,
}

impl GenerateError {
    /// Message shown to the user for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerateError::EmptyDescription => "Please enter a description of the code to generate",
        }
    }
}
