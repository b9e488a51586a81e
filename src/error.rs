//! Error types for record mapping operations.
//!
//! This module provides the [`DnbError`] type for all mapping, lookup and
//! serialization operations of the crate and the [`Result`] convenience type.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Error type for all mapping operations.
///
/// A failure aborts the serialization of a single record. Nothing is
/// retried: mapping and vocabulary lookups are deterministic reads.
#[derive(Error, Debug)]
pub enum DnbError {
    /// A field the target schema requires is absent from the source record.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Dotted path of the missing field (e.g. `metadata.publisher`).
        field: String,
    },

    /// The controlled vocabulary has no entry for the requested id.
    #[error("No mapping for '{id}' in vocabulary '{vocabulary}'")]
    UnmappedVocabulary {
        /// Vocabulary that was queried (e.g. `resourcetypes`).
        vocabulary: String,
        /// Item id that could not be resolved.
        id: String,
    },

    /// A persistent identifier failed syntax validation.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// An OAI-PMH metadata prefix that no mapper handles.
    #[error("Unknown metadata format: {0}")]
    UnknownFormat(String),

    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Record or vocabulary JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by the XML writer.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Serialized XML was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl DnbError {
    /// Shorthand for [`DnbError::MissingField`].
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`DnbError`].
pub type Result<T> = std::result::Result<T, DnbError>;
