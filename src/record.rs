//! Input record structures.
//!
//! This module models the record snapshot handed to the mappers by the
//! record-fetch layer:
//! - [`Record`]: Top level snapshot (`id`, `metadata`, `pids`, `access`, `custom_fields`)
//! - [`Metadata`]: Descriptive metadata, every field optional at the type level
//! - [`Creatibutor`] / [`PersonOrOrg`]: Creators and contributors
//!
//! Required-ness is not enforced here. A mapper reports a missing required
//! field as [`DnbError::MissingField`](crate::error::DnbError::MissingField)
//! when it needs it, and skips optional elements otherwise.
//!
//! # Examples
//!
//! ```ignore
//! use dnb_xmetadiss::Record;
//!
//! let record = Record::from_json(r#"{
//!     "id": "abc123",
//!     "metadata": {"title": "T", "publisher": "Inst A / City B"},
//!     "access": {"files": "public"}
//! }"#)?;
//! assert_eq!(record.metadata.title.as_deref(), Some("T"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A record snapshot as returned by the platform's record/search layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque persistent record id
    #[serde(default)]
    pub id: Option<String>,
    /// Descriptive metadata
    #[serde(default)]
    pub metadata: Metadata,
    /// Persistent identifiers keyed by scheme (`urn`, `doi`, ...)
    #[serde(default)]
    pub pids: IndexMap<String, Pid>,
    /// Access settings
    #[serde(default)]
    pub access: Option<Access>,
    /// Optional thesis metadata
    #[serde(default)]
    pub custom_fields: Option<CustomFields>,
}

impl Record {
    /// Parse a record from JSON.
    ///
    /// Both the bare record and the search-hit form (`{"_source": {...}}`)
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or does not match the record shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a record from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not match the record shape.
    pub fn from_value(mut value: serde_json::Value) -> Result<Self> {
        if let Some(source) = value.get_mut("_source") {
            let source = source.take();
            return Ok(serde_json::from_value(source)?);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Identifier value of the persistent identifier with the given scheme.
    #[must_use]
    pub fn pid(&self, scheme: &str) -> Option<&str> {
        self.pids.get(scheme).map(|p| p.identifier.as_str())
    }
}

/// A persistent identifier entry of [`Record::pids`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pid {
    /// The identifier value (e.g. `urn:nbn:de:hbz:6-123`)
    pub identifier: String,
    /// Name of the provider that manages the identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// Descriptive metadata of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Main title (required by `xMetaDissPlus`)
    #[serde(default)]
    pub title: Option<String>,
    /// Subtitles, translated titles and other titles
    #[serde(default)]
    pub additional_titles: Vec<AdditionalTitle>,
    /// Creators in display order
    #[serde(default)]
    pub creators: Vec<Creatibutor>,
    /// Contributors in display order
    #[serde(default)]
    pub contributors: Vec<Creatibutor>,
    /// Subject terms and classifications
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Free-text publisher, optionally `institution / place`
    #[serde(default)]
    pub publisher: Option<String>,
    /// Typed dates
    #[serde(default)]
    pub dates: Vec<DateEntry>,
    /// Fallback for the `issued` date
    #[serde(default)]
    pub publication_date: Option<String>,
    /// Languages; the first entry is authoritative
    #[serde(default)]
    pub languages: Vec<VocabularyRef>,
    /// Alternate identifiers
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    /// Licences
    #[serde(default)]
    pub rights: Vec<Right>,
    /// Physical or digital sizes (e.g. `120 pages`)
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Main description
    #[serde(default)]
    pub description: Option<String>,
    /// Additional typed descriptions
    #[serde(default)]
    pub additional_descriptions: Vec<Description>,
    /// Resource type
    #[serde(default)]
    pub resource_type: Option<VocabularyRef>,
}

impl Metadata {
    /// Id of the first language entry, if any.
    #[must_use]
    pub fn primary_language(&self) -> Option<&str> {
        self.languages.first().map(|l| l.id.as_str())
    }

    /// The `issued` date, falling back to `publication_date`.
    #[must_use]
    pub fn issued_date(&self) -> Option<&str> {
        self.dates
            .iter()
            .find(|d| d.date_type.as_ref().is_some_and(|t| t.id == "issued"))
            .map(|d| d.date.as_str())
            .or(self.publication_date.as_deref())
    }
}

/// Reference to a controlled vocabulary entry (`{"id": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRef {
    /// Vocabulary item id
    pub id: String,
}

impl VocabularyRef {
    /// Create a reference to the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An entry of [`Metadata::additional_titles`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalTitle {
    /// Title text
    pub title: String,
    /// Title type (`subtitle`, `translated-title`, `alternative-title`, ...)
    #[serde(rename = "type")]
    pub title_type: VocabularyRef,
    /// Language of the title
    #[serde(default)]
    pub lang: Option<VocabularyRef>,
}

/// A creator or contributor entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creatibutor {
    /// The person or organization
    pub person_or_org: PersonOrOrg,
    /// Affiliations, in order
    #[serde(default)]
    pub affiliations: Vec<Affiliation>,
    /// Contribution role
    #[serde(default)]
    pub role: Option<VocabularyRef>,
}

/// A person or an organization, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PersonOrOrg {
    /// A natural person
    Personal {
        /// Given name(s)
        #[serde(default)]
        given_name: Option<String>,
        /// Family name
        #[serde(default)]
        family_name: Option<String>,
        /// Person identifiers (`orcid`, `gnd`, `isni`, `ror`)
        #[serde(default)]
        identifiers: Vec<Identifier>,
    },
    /// An organization
    Organizational {
        /// Organization name
        name: String,
        /// Organization identifiers
        #[serde(default)]
        identifiers: Vec<Identifier>,
    },
}

impl PersonOrOrg {
    /// Identifiers of the person or organization.
    #[must_use]
    pub fn identifiers(&self) -> &[Identifier] {
        match self {
            Self::Personal { identifiers, .. } | Self::Organizational { identifiers, .. } => {
                identifiers
            },
        }
    }
}

/// An affiliation of a creator or contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Affiliation id in the affiliations vocabulary
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// A scheme/value identifier pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier scheme (`orcid`, `isbn`, `url`, ...)
    pub scheme: String,
    /// Identifier value
    pub identifier: String,
}

impl Identifier {
    /// Create an identifier.
    pub fn new(scheme: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            identifier: identifier.into(),
        }
    }
}

/// A subject term, optionally from a classification scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject label
    #[serde(default)]
    pub subject: Option<String>,
    /// Classification scheme (`FOS`, `DDC`, ...)
    #[serde(default)]
    pub scheme: Option<String>,
    /// Vocabulary id; for DDC a slash-delimited path
    #[serde(default)]
    pub id: Option<String>,
}

/// A typed date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    /// Date value (EDTF)
    pub date: String,
    /// Date type (`issued`, `accepted`, ...)
    #[serde(rename = "type", default)]
    pub date_type: Option<VocabularyRef>,
}

/// An additional description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Description text
    pub description: String,
    /// Description type (`abstract`, `methods`, ...)
    #[serde(rename = "type", default)]
    pub description_type: Option<VocabularyRef>,
    /// Language of the description
    #[serde(default)]
    pub lang: Option<VocabularyRef>,
}

/// A licence descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Right {
    /// Licence id (e.g. `cc-by-4.0`)
    #[serde(default)]
    pub id: Option<String>,
    /// Language-keyed titles (`de`, `en`, ...)
    #[serde(default)]
    pub title: IndexMap<String, String>,
    /// Language-keyed descriptions
    #[serde(default)]
    pub description: IndexMap<String, String>,
    /// Licence URL
    #[serde(default)]
    pub link: Option<String>,
    /// Vocabulary properties of the licence
    #[serde(default)]
    pub props: Option<RightProps>,
}

impl Right {
    /// Title in German, else English.
    #[must_use]
    pub fn preferred_title(&self) -> Option<&str> {
        self.title
            .get("de")
            .or_else(|| self.title.get("en"))
            .map(String::as_str)
    }

    /// Licence URL from `link`, else from `props.url`.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.link
            .as_deref()
            .or_else(|| self.props.as_ref().and_then(|p| p.url.as_deref()))
    }
}

/// Vocabulary properties of a licence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightProps {
    /// Licence URL
    #[serde(default)]
    pub url: Option<String>,
    /// Licence scheme (`spdx`, ...)
    #[serde(default)]
    pub scheme: Option<String>,
}

/// Access settings of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    /// Visibility of the files
    #[serde(default)]
    pub files: Option<FileAccess>,
    /// Visibility of the record itself
    #[serde(default)]
    pub record: Option<String>,
}

/// Visibility of a record's files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAccess {
    /// Files are openly accessible
    #[default]
    Public,
    /// Files are restricted
    Restricted,
    /// Any other access level
    #[serde(other)]
    Other,
}

/// Thesis metadata stored in custom fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFields {
    /// Degree level
    #[serde(default, alias = "thesis:level")]
    pub level: Option<String>,
    /// Degree-granting organisation
    #[serde(default, alias = "thesis:organisation")]
    pub organisation: Option<String>,
    /// Place of the degree-granting organisation
    #[serde(default, alias = "thesis:place")]
    pub place: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_record() {
        let record = Record::from_json(
            r#"{
                "id": "abc123",
                "metadata": {
                    "title": "T",
                    "creators": [{"person_or_org": {"type": "organizational", "name": "Org"}}],
                    "publisher": "Inst A / City B",
                    "resource_type": {"id": "publication-article"}
                },
                "pids": {},
                "access": {"files": "public"}
            }"#,
        )
        .expect("parse");

        assert_eq!(record.id.as_deref(), Some("abc123"));
        assert_eq!(record.metadata.creators.len(), 1);
        assert!(matches!(
            record.metadata.creators[0].person_or_org,
            PersonOrOrg::Organizational { ref name, .. } if name == "Org"
        ));
        assert_eq!(
            record.access.and_then(|a| a.files),
            Some(FileAccess::Public)
        );
        assert!(record.pids.is_empty());
    }

    #[test]
    fn test_parse_search_hit_source_wrapper() {
        let record = Record::from_json(r#"{"_source": {"id": "x1", "metadata": {"title": "A"}}}"#)
            .expect("parse");
        assert_eq!(record.id.as_deref(), Some("x1"));
        assert_eq!(record.metadata.title.as_deref(), Some("A"));
    }

    #[test]
    fn test_unknown_file_access_is_other() {
        let access: Access = serde_json::from_str(r#"{"files": "embargoed"}"#).expect("parse");
        assert_eq!(access.files, Some(FileAccess::Other));
    }

    #[test]
    fn test_access_without_files_parses() {
        let record = Record::from_json(r#"{"id": "x1", "access": {"record": "public"}}"#)
            .expect("parse");
        let access = record.access.expect("access");
        assert_eq!(access.files, None);
        assert_eq!(access.record.as_deref(), Some("public"));
    }

    #[test]
    fn test_issued_date_prefers_typed_entry() {
        let metadata = Metadata {
            dates: vec![
                DateEntry {
                    date: "2020".to_string(),
                    date_type: Some(VocabularyRef::new("accepted")),
                },
                DateEntry {
                    date: "2021-05-01".to_string(),
                    date_type: Some(VocabularyRef::new("issued")),
                },
            ],
            publication_date: Some("2019".to_string()),
            ..Metadata::default()
        };
        assert_eq!(metadata.issued_date(), Some("2021-05-01"));
    }

    #[test]
    fn test_issued_date_falls_back_to_publication_date() {
        let metadata = Metadata {
            publication_date: Some("2019".to_string()),
            ..Metadata::default()
        };
        assert_eq!(metadata.issued_date(), Some("2019"));
        assert_eq!(Metadata::default().issued_date(), None);
    }

    #[test]
    fn test_custom_fields_namespaced_keys() {
        let fields: CustomFields = serde_json::from_str(
            r#"{"thesis:level": "master", "thesis:organisation": "Uni", "thesis:place": "Münster"}"#,
        )
        .expect("parse");
        assert_eq!(fields.level.as_deref(), Some("master"));
        assert_eq!(fields.place.as_deref(), Some("Münster"));
    }

    #[test]
    fn test_right_preferences() {
        let mut right = Right::default();
        right.title.insert("en".to_string(), "English".to_string());
        assert_eq!(right.preferred_title(), Some("English"));
        right.title.insert("de".to_string(), "Deutsch".to_string());
        assert_eq!(right.preferred_title(), Some("Deutsch"));

        right.props = Some(RightProps {
            url: Some("https://props".to_string()),
            scheme: None,
        });
        assert_eq!(right.url(), Some("https://props"));
        right.link = Some("https://link".to_string());
        assert_eq!(right.url(), Some("https://link"));
    }

    #[test]
    fn test_pid_lookup() {
        let mut record = Record::default();
        record.pids.insert(
            "doi".to_string(),
            Pid {
                identifier: "10.1234/abc".to_string(),
                provider: None,
            },
        );
        assert_eq!(record.pid("doi"), Some("10.1234/abc"));
        assert_eq!(record.pid("urn"), None);
    }
}
