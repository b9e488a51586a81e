//! OAI-PMH metadata formats served to the DNB harvester.
//!
//! This module describes the two metadata prefixes the crate renders and
//! dispatches a record to the matching mapper. The OAI-PMH server that
//! answers `ListMetadataFormats` and `GetRecord` lives outside this crate;
//! it uses [`MetadataFormat`] to advertise the formats and a
//! [`RecordSerializer`] to render each record.
//!
//! # Supported Formats
//!
//! | Prefix | Module | Description |
//! |--------|--------|-------------|
//! | `epicur` | [`epicur`](crate::epicur) | URN administrative data for passive URN registration |
//! | `xMetaDissPlus` | [`xmetadiss`](crate::xmetadiss) | Descriptive metadata for online publications |
//!
//! # Usage
//!
//! ```ignore
//! use dnb_xmetadiss::formats::MetadataFormat;
//!
//! let format = MetadataFormat::from_prefix("xMetaDissPlus")?;
//! let tree = format.render(&record, &config, &vocabulary)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod traits;

pub use traits::{EpicurSerializer, RecordSerializer, XMetaDissSerializer};

use crate::config::MapperConfig;
use crate::epicur;
use crate::error::{DnbError, Result};
use crate::namespaces;
use crate::record::Record;
use crate::vocabulary::VocabularyLookup;
use crate::xmetadiss;
use crate::xml::XmlElement;

/// Metadata formats served to the harvester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MetadataFormat {
    /// `epicur` URN administrative data
    Epicur,
    /// `xMetaDissPlus` descriptive metadata
    XMetaDissPlus,
}

impl MetadataFormat {
    /// All supported formats, in advertisement order.
    pub const ALL: [Self; 2] = [Self::Epicur, Self::XMetaDissPlus];

    /// Look up a format by its OAI-PMH metadata prefix.
    ///
    /// Prefixes are matched exactly; OAI-PMH prefixes are case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DnbError::UnknownFormat`] for any other prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use dnb_xmetadiss::formats::MetadataFormat;
    ///
    /// assert_eq!(MetadataFormat::from_prefix("epicur").ok(), Some(MetadataFormat::Epicur));
    /// assert!(MetadataFormat::from_prefix("oai_dc").is_err());
    /// ```
    pub fn from_prefix(prefix: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.prefix() == prefix)
            .ok_or_else(|| DnbError::UnknownFormat(prefix.to_string()))
    }

    /// The OAI-PMH metadata prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Epicur => "epicur",
            Self::XMetaDissPlus => "xMetaDissPlus",
        }
    }

    /// Namespace of the format's root element.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::Epicur => namespaces::EPICUR,
            Self::XMetaDissPlus => namespaces::XMETADISS,
        }
    }

    /// URL of the format's XML schema.
    #[must_use]
    pub const fn schema(&self) -> &'static str {
        match self {
            Self::Epicur => "http://www.persistent-identifier.de/xepicur/version1.0/xepicur.xsd",
            Self::XMetaDissPlus => "http://www.d-nb.de/standards/xmetadissplus/xmetadissplus.xsd",
        }
    }

    /// Render a record in this format.
    ///
    /// `vocabulary` is only consulted for `xMetaDissPlus`.
    ///
    /// # Errors
    ///
    /// Returns the mapper's error for this record.
    pub fn render(
        &self,
        record: &Record,
        config: &MapperConfig,
        vocabulary: &dyn VocabularyLookup,
    ) -> Result<XmlElement> {
        match self {
            Self::Epicur => epicur::map_epicur_with_config(record, config),
            Self::XMetaDissPlus => xmetadiss::map_xmetadissplus(record, config, vocabulary),
        }
    }
}

impl std::fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}
