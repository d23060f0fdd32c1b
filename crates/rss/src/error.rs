// ABOUTME: Error types for RSS parsing, validation, and serialization.
// ABOUTME: Provides RssError enum covering XML, structural, date, and namespace failures.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RssError>;

/// Errors that can occur while reading, validating, or writing an RSS document.
///
/// Every variant is terminal for the operation in progress: no partial
/// document is ever returned.
#[derive(Debug, Error)]
pub enum RssError {
    /// The underlying XML token stream was malformed (wrapped tokenizer error).
    #[error("malformed xml: {0}")]
    Xml(String),

    /// A structural validation rule was violated (required element or
    /// attribute missing, enumeration or numeric range violation, blank
    /// text where content is required).
    #[error("invalid rss: {0}")]
    Invalid(String),

    /// None of the accepted RFC-822 date variants matched the input.
    #[error("unable to parse date: {0}")]
    DateParse(String),

    /// One or more extension element prefixes have no matching `xmlns:*`
    /// declaration on the rss element. Reported once per document with
    /// every offending prefix.
    #[error("unbound namespace prefixes: {}", .0.join(", "))]
    UnboundPrefix(Vec<String>),
}

impl RssError {
    /// Creates an Xml error from an underlying quick-xml error.
    pub fn xml(err: impl fmt::Display) -> Self {
        RssError::Xml(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        RssError::Invalid(msg.into())
    }
}
