#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # dnb-xmetadiss
//!
//! Maps repository records to the XML formats harvested by the German
//! National Library (DNB): `epicur` for passive URN registration and
//! `xMetaDissPlus` for descriptive metadata of online publications.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dnb_xmetadiss::{MapperConfig, MetadataFormat, Record, StaticVocabulary};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MapperConfig::load()?;
//! let vocabulary = StaticVocabulary::new()
//!     .load_json("resourcetypes", &std::fs::read_to_string("resourcetypes.json")?)?;
//! let record = Record::from_json(&std::fs::read_to_string("record.json")?)?;
//!
//! for format in MetadataFormat::ALL {
//!     let tree = format.render(&record, &config, &vocabulary)?;
//!     println!("{}", tree.to_xml_string_pretty()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`record`]: Input record model, deserialized from JSON
//! - [`epicur`]: `epicur` mapping
//! - [`xmetadiss`]: `xMetaDissPlus` mapping and its normalization rules
//! - [`formats`]: Metadata prefix registry and record serializers
//! - [`provider`]: `urn:nbn` identifier provider
//! - [`vocabulary`]: Controlled-vocabulary lookup
//! - [`config`]: Site configuration
//! - [`xml`]: Element tree and XML serialization
//! - [`namespaces`]: Namespace URIs and schema locations
//! - [`error`]: Error types and result type

pub mod config;
pub mod epicur;
pub mod error;
/// Metadata prefix registry with a unified serializer trait.
///
/// See the [`formats`] module documentation for the supported prefixes.
pub mod formats;
pub mod namespaces;
pub mod provider;
/// Input record model (`Record`, `Metadata`, `Creatibutor`, ...)
pub mod record;
pub mod vocabulary;
pub mod xmetadiss;
pub mod xml;

pub use config::MapperConfig;
pub use epicur::map_epicur;
pub use error::{DnbError, Result};
pub use formats::{EpicurSerializer, MetadataFormat, RecordSerializer, XMetaDissSerializer};
pub use provider::{PidStatus, UrnProvider};
pub use record::{Metadata, Record};
pub use vocabulary::{StaticVocabulary, VocabularyLookup};
pub use xmetadiss::map_xmetadissplus;
pub use xml::XmlElement;
