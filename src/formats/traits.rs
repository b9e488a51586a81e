//! Record serializer trait and its two implementations.
//!
//! A [`RecordSerializer`] owns everything a format needs besides the record
//! itself (configuration, vocabulary), so an OAI-PMH layer can keep one
//! serializer per metadata prefix and hand it records one at a time.
//!
//! # Example
//!
//! ```ignore
//! use dnb_xmetadiss::formats::{RecordSerializer, XMetaDissSerializer};
//!
//! fn render_all<S: RecordSerializer>(serializer: &S, records: &[Record]) -> Vec<String> {
//!     serializer
//!         .serialize_batch(records)
//!         .into_iter()
//!         .filter_map(Result::ok)
//!         .collect()
//! }
//! ```

use crate::config::MapperConfig;
use crate::epicur;
use crate::error::Result;
use crate::record::Record;
use crate::vocabulary::VocabularyLookup;
use crate::xmetadiss;
use crate::xml::XmlElement;

use super::MetadataFormat;

/// Trait for serializers that render records in one metadata format.
pub trait RecordSerializer: std::fmt::Debug {
    /// The format this serializer renders.
    fn format(&self) -> MetadataFormat;

    /// Map a record to its element tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the record lacks data the format requires.
    fn map_record(&self, record: &Record) -> Result<XmlElement>;

    /// Map and serialize a record to an XML string.
    ///
    /// # Errors
    ///
    /// Returns an error if mapping or serialization fails.
    fn serialize(&self, record: &Record) -> Result<String> {
        self.map_record(record)?.to_xml_string()
    }

    /// Serialize several records.
    ///
    /// Each record gets its own result; a failing record does not affect
    /// the others.
    fn serialize_batch(&self, records: &[Record]) -> Vec<Result<String>> {
        records
            .iter()
            .map(|record| {
                let result = self.serialize(record);
                if let Err(err) = &result {
                    tracing::warn!(
                        format = %self.format(),
                        record = record.id.as_deref().unwrap_or("<no id>"),
                        error = %err,
                        "record could not be serialized"
                    );
                }
                result
            })
            .collect()
    }
}

/// Serializer for the `epicur` format.
#[derive(Debug, Clone)]
pub struct EpicurSerializer {
    config: MapperConfig,
}

impl EpicurSerializer {
    /// Create a serializer using the given configuration.
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }
}

impl RecordSerializer for EpicurSerializer {
    fn format(&self) -> MetadataFormat {
        MetadataFormat::Epicur
    }

    fn map_record(&self, record: &Record) -> Result<XmlElement> {
        epicur::map_epicur_with_config(record, &self.config)
    }
}

/// Serializer for the `xMetaDissPlus` format.
#[derive(Debug, Clone)]
pub struct XMetaDissSerializer<V> {
    config: MapperConfig,
    vocabulary: V,
}

impl<V: VocabularyLookup> XMetaDissSerializer<V> {
    /// Create a serializer using the given configuration and vocabulary.
    #[must_use]
    pub fn new(config: MapperConfig, vocabulary: V) -> Self {
        Self { config, vocabulary }
    }
}

impl<V: VocabularyLookup + std::fmt::Debug> RecordSerializer for XMetaDissSerializer<V> {
    fn format(&self) -> MetadataFormat {
        MetadataFormat::XMetaDissPlus
    }

    fn map_record(&self, record: &Record) -> Result<XmlElement> {
        xmetadiss::map_xmetadissplus(record, &self.config, &self.vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DnbError;
    use crate::record::Pid;
    use crate::vocabulary::StaticVocabulary;

    #[test]
    fn test_batch_isolates_failures() {
        let serializer = EpicurSerializer::new(MapperConfig::default());
        let mut with_urn = Record {
            id: Some("ok".to_string()),
            ..Record::default()
        };
        with_urn.pids.insert(
            "urn".to_string(),
            Pid {
                identifier: "urn:nbn:de:hbz:6-ok".to_string(),
                provider: None,
            },
        );
        let without_urn = Record {
            id: Some("no-urn".to_string()),
            ..Record::default()
        };
        let records = vec![with_urn, Record::default(), without_urn];
        let results = serializer.serialize_batch(&records);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DnbError::MissingField { ref field }) if field == "id"));
        assert!(matches!(results[2], Err(DnbError::MissingField { ref field }) if field == "pids.urn"));
    }

    #[test]
    fn test_serializer_formats() {
        let epicur = EpicurSerializer::new(MapperConfig::default());
        let xmeta = XMetaDissSerializer::new(MapperConfig::default(), StaticVocabulary::new());
        assert_eq!(epicur.format(), MetadataFormat::Epicur);
        assert_eq!(xmeta.format(), MetadataFormat::XMetaDissPlus);
    }
}
