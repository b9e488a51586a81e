//! `xMetaDissPlus` serialization of records.
//!
//! This module converts a [`Record`] into the descriptive metadata format the
//! German National Library harvests for online publications and theses.
//! Field mappings, in output order:
//!
//! - `title` → `dc:title` (language from `languages[0]`, `deu` written as `ger`)
//! - `additional_titles` (subtitle, translated title) → `dcterms:alternative`
//! - `creators` → `dc:creator` / `pc:person`
//! - `subjects` → `dc:subject` (`xMetaDiss:DDC-SG` for DDC, `xMetaDiss:noScheme` otherwise)
//! - `description`, abstracts → `dcterms:abstract`
//! - `publisher` → `dc:publisher` / `cc:universityOrInstitution`
//! - `contributors` → `dc:contributor` / `pc:person`
//! - issued date → `dcterms:issued`
//! - `resource_type` → `dc:type` (DINI publication type, DCMI type)
//! - `pids.urn` / `pids.doi` → `dc:identifier`
//! - `sizes` → `dcterms:extent`
//! - first language → `dc:language`
//! - thesis custom fields → `thesis:degree`
//! - files archive → `ddb:transfer`
//! - `identifiers`, landing page → `ddb:identifier`
//! - `access.files` → `ddb:rights`
//! - `rights` → `ddb:licence`
//!
//! Absent optional fields are skipped. Absent required fields (`id`,
//! `title`, `creators`, `publisher`, issued date, `resource_type`, `access`)
//! fail with [`DnbError::MissingField`], as do required texts that are
//! present but blank (title, publisher institution, person and organization
//! names).
//!
//! # Examples
//!
//! ```ignore
//! use dnb_xmetadiss::{xmetadiss, MapperConfig, Record, StaticVocabulary};
//!
//! let record = Record::from_json(include_str!("record.json"))?;
//! let vocabulary = StaticVocabulary::new();
//! let tree = xmetadiss::map_xmetadissplus(&record, &MapperConfig::default(), &vocabulary)?;
//! println!("{}", tree.to_xml_string_pretty()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::MapperConfig;
use crate::error::{DnbError, Result};
use crate::namespaces::{XMETADISS_NAMESPACES, XMETADISS_SCHEMA_LOCATION};
use crate::record::{Creatibutor, CustomFields, FileAccess, Metadata, PersonOrOrg, Record, Subject};
use crate::vocabulary::{VocabularyLookup, RESOURCE_TYPES};
use crate::xml::XmlElement;

/// Place written when the publisher string names no place.
pub const UNKNOWN_PLACE: &str = "...";

/// Licence text written when a record carries no rights at all.
pub const NO_LICENCE_INFORMATION: &str = "Keine Angabe";

/// Country code of publishers and degree grantors.
const COUNTRY_CODE: &str = "DE";

/// Map a language code to the ISO 639-2/B form used by the DNB.
///
/// Only `deu` differs from the terminology code the platform stores; every
/// other code passes through unchanged.
#[must_use]
pub fn dnb_language(code: &str) -> &str {
    match code {
        "deu" => "ger",
        other => other,
    }
}

/// Institution and place parsed from a free-text publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherParts {
    /// Publishing institution
    pub institution: String,
    /// Place of publication
    pub place: String,
}

/// Split a publisher string of the form `institution / place`.
///
/// The institution is the text before the first `/` (trailing whitespace
/// removed), the place the text after the last `/` (leading whitespace
/// removed). Without any `/` the whole string is the institution and the
/// place is [`UNKNOWN_PLACE`].
#[must_use]
pub fn split_publisher(publisher: &str) -> PublisherParts {
    match (publisher.find('/'), publisher.rfind('/')) {
        (Some(first), Some(last)) => PublisherParts {
            institution: publisher[..first].trim_end().to_string(),
            place: publisher[last + 1..].trim_start().to_string(),
        },
        _ => PublisherParts {
            institution: publisher.trim_end().to_string(),
            place: UNKNOWN_PLACE.to_string(),
        },
    }
}

/// DDC notation of a slash-delimited vocabulary id: the text after the last `/`.
#[must_use]
pub fn ddc_notation(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Label of a `ddb:identifier` `ddb:type` attribute for an identifier scheme.
#[must_use]
pub fn identifier_label(scheme: &str) -> &'static str {
    match scheme.to_ascii_lowercase().as_str() {
        "url" => "URL",
        "urn" => "URN",
        "doi" => "DOI",
        "handle" => "handle",
        "isbn" => "ISBN",
        _ => "other",
    }
}

/// Classification a subject is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectScheme {
    /// Fields of Science and Technology; no DNB scheme exists, written as `noScheme`
    Fos,
    /// Dewey Decimal Classification subject groups
    Ddc,
    /// Free keyword
    NoScheme,
}

impl SubjectScheme {
    /// Classify a subject by its `scheme`.
    #[must_use]
    pub fn of(subject: &Subject) -> Self {
        match subject.scheme.as_deref() {
            Some("FOS") => Self::Fos,
            Some(scheme) if scheme.contains("DDC") => Self::Ddc,
            _ => Self::NoScheme,
        }
    }

    /// The `xsi:type` of the `dc:subject` element.
    #[must_use]
    pub const fn xsi_type(self) -> &'static str {
        match self {
            Self::Ddc => "xMetaDiss:DDC-SG",
            Self::Fos | Self::NoScheme => "xMetaDiss:noScheme",
        }
    }
}

/// Kind of access to a record's files, as written to `ddb:rights`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightsKind {
    /// Freely accessible
    Free,
    /// Restricted to a domain
    Domain,
}

impl RightsKind {
    /// Derive the kind from the record's file access.
    #[must_use]
    pub const fn from_access(files: FileAccess) -> Self {
        match files {
            FileAccess::Restricted => Self::Domain,
            FileAccess::Public | FileAccess::Other => Self::Free,
        }
    }

    /// Attribute value of `ddb:kind`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Domain => "domain",
        }
    }
}

/// Convert a record to an `xMetaDiss` element tree.
///
/// `vocabulary` resolves the record's resource type to the DINI publication
/// type and DCMI type, using the property names configured in `config`.
///
/// # Errors
///
/// Returns [`DnbError::MissingField`] if a required field is absent and
/// [`DnbError::UnmappedVocabulary`] if the resource type is unknown to the
/// vocabulary.
pub fn map_xmetadissplus(
    record: &Record,
    config: &MapperConfig,
    vocabulary: &dyn VocabularyLookup,
) -> Result<XmlElement> {
    let id = record.id.as_deref().ok_or_else(|| DnbError::missing("id"))?;
    let metadata = &record.metadata;
    let language = metadata.primary_language().map(dnb_language);

    let mut root = XmlElement::new("xMetaDiss:xMetaDiss");
    for (prefix, uri) in XMETADISS_NAMESPACES {
        root.set_attr(format!("xmlns:{prefix}"), uri);
    }
    root.set_attr("xsi:schemaLocation", XMETADISS_SCHEMA_LOCATION);

    add_titles(&mut root, metadata, language)?;
    add_creators(&mut root, metadata)?;
    add_subjects(&mut root, metadata);
    add_abstracts(&mut root, metadata, language);
    add_publisher(&mut root, metadata)?;
    add_contributors(&mut root, metadata)?;
    add_issued(&mut root, metadata)?;
    add_types(&mut root, metadata, config, vocabulary)?;
    add_pid_identifier(&mut root, record);
    add_extents(&mut root, metadata);
    add_language(&mut root, language);
    add_degree(&mut root, record.custom_fields.as_ref());
    add_footer(&mut root, record, id, config);
    add_rights(&mut root, record)?;

    tracing::debug!(record = id, elements = root.children.len(), "mapped xMetaDissPlus");
    Ok(root)
}

/// Convert a record directly to an `xMetaDiss` XML string.
///
/// # Errors
///
/// Returns an error if mapping or serialization fails.
pub fn record_to_xmetadissplus_xml(
    record: &Record,
    config: &MapperConfig,
    vocabulary: &dyn VocabularyLookup,
) -> Result<String> {
    map_xmetadissplus(record, config, vocabulary)?.to_xml_string()
}

fn add_titles(root: &mut XmlElement, metadata: &Metadata, language: Option<&str>) -> Result<()> {
    let title =
        non_empty(metadata.title.as_deref()).ok_or_else(|| DnbError::missing("metadata.title"))?;

    let mut element = XmlElement::new("dc:title").with_attr("xsi:type", "ddb:titleISO639-2");
    if let Some(lang) = language {
        element.set_attr("lang", lang);
    }
    root.push_child(element.with_text(title));

    for additional in &metadata.additional_titles {
        let translated = match additional.title_type.id.as_str() {
            "translated-title" => true,
            "subtitle" => false,
            _ => continue,
        };

        let mut element =
            XmlElement::new("dcterms:alternative").with_attr("xsi:type", "ddb:talternativeISO639-2");
        if let Some(lang) = &additional.lang {
            element.set_attr("lang", dnb_language(&lang.id));
        }
        if translated {
            element.set_attr("ddb:type", "translated");
        }
        root.push_child(element.with_text(additional.title.as_str()));
    }
    Ok(())
}

fn add_creators(root: &mut XmlElement, metadata: &Metadata) -> Result<()> {
    if metadata.creators.is_empty() {
        return Err(DnbError::missing("metadata.creators"));
    }
    for creator in &metadata.creators {
        root.push_child(
            XmlElement::new("dc:creator")
                .with_attr("xsi:type", "pc:MetaPers")
                .with_child(person_element(creator, "metadata.creators")?),
        );
    }
    Ok(())
}

fn add_contributors(root: &mut XmlElement, metadata: &Metadata) -> Result<()> {
    for contributor in &metadata.contributors {
        root.push_child(
            XmlElement::new("dc:contributor")
                .with_attr("xsi:type", "pc:Contributor")
                .with_child(person_element(contributor, "metadata.contributors")?),
        );
    }
    Ok(())
}

/// Build the `pc:person` element of a creator or contributor.
///
/// `list` names the source list in errors. A person needs a given or family
/// name and an organization a name.
fn person_element(entry: &Creatibutor, list: &str) -> Result<XmlElement> {
    let mut person = XmlElement::new("pc:person");
    let mut identifiers = Vec::new();

    for identifier in entry.person_or_org.identifiers() {
        let value = identifier.identifier.as_str();
        match identifier.scheme.to_ascii_lowercase().as_str() {
            "gnd" => person.set_attr("ddb:GND-Nr", value),
            "orcid" => identifiers.push(XmlElement::new("ddb:ORCID").with_text(value)),
            "isni" => identifiers.push(XmlElement::new("ddb:ISNI").with_text(value)),
            "ror" => identifiers.push(XmlElement::new("ddb:OtherId").with_text(format!("(ror){value}"))),
            other => tracing::debug!(scheme = other, "ignoring person identifier scheme"),
        }
    }

    let name = match &entry.person_or_org {
        PersonOrOrg::Personal {
            given_name,
            family_name,
            ..
        } => {
            let mut name = XmlElement::new("pc:name").with_attr("type", "nameUsedByThePerson");
            if let Some(given) = non_empty(given_name.as_deref()) {
                name.push_child(XmlElement::new("pc:foreName").with_text(given));
            }
            if let Some(family) = non_empty(family_name.as_deref()) {
                name.push_child(XmlElement::new("pc:surName").with_text(family));
            }
            if name.children.is_empty() {
                return Err(DnbError::missing(format!("{list}.person_or_org.family_name")));
            }
            name
        },
        PersonOrOrg::Organizational { name, .. } => {
            let name = non_empty(Some(name.as_str()))
                .ok_or_else(|| DnbError::missing(format!("{list}.person_or_org.name")))?;
            XmlElement::new("pc:name")
                .with_attr("type", "otherName")
                .with_child(XmlElement::new("pc:organisationName").with_text(name))
        },
    };

    person.push_child(name);
    person.children.extend(identifiers);

    // Only the first affiliation is written.
    if entry.affiliations.len() > 1 {
        tracing::debug!(
            dropped = entry.affiliations.len() - 1,
            "writing first affiliation only"
        );
    }
    if let Some(affiliation) = entry
        .affiliations
        .first()
        .and_then(|a| non_empty(a.name.as_deref()))
    {
        person.push_child(XmlElement::new("pc:affiliation").with_text(affiliation));
    }

    Ok(person)
}

fn add_subjects(root: &mut XmlElement, metadata: &Metadata) {
    for subject in &metadata.subjects {
        let scheme = SubjectScheme::of(subject);
        let text = match scheme {
            SubjectScheme::Ddc => subject
                .id
                .as_deref()
                .map(ddc_notation)
                .and_then(|n| non_empty(Some(n))),
            SubjectScheme::Fos | SubjectScheme::NoScheme => non_empty(subject.subject.as_deref()),
        };

        let Some(text) = text else {
            tracing::warn!(?subject, "skipping subject without usable text");
            continue;
        };
        root.push_child(
            XmlElement::new("dc:subject")
                .with_attr("xsi:type", scheme.xsi_type())
                .with_text(text),
        );
    }
}

fn add_abstracts(root: &mut XmlElement, metadata: &Metadata, language: Option<&str>) {
    let main = metadata
        .description
        .as_deref()
        .and_then(|d| non_empty(Some(d)))
        .map(|d| (d, language));
    let additional = metadata
        .additional_descriptions
        .iter()
        .filter(|d| d.description_type.as_ref().is_some_and(|t| t.id == "abstract"))
        .map(|d| {
            let lang = d.lang.as_ref().map(|l| dnb_language(&l.id)).or(language);
            (d.description.as_str(), lang)
        });

    for (text, lang) in main.into_iter().chain(additional) {
        let mut element =
            XmlElement::new("dcterms:abstract").with_attr("xsi:type", "ddb:contentISO639-2");
        if let Some(lang) = lang {
            element.set_attr("lang", lang);
        }
        root.push_child(element.with_text(text));
    }
}

fn add_publisher(root: &mut XmlElement, metadata: &Metadata) -> Result<()> {
    let publisher = metadata
        .publisher
        .as_deref()
        .ok_or_else(|| DnbError::missing("metadata.publisher"))?;
    let parts = split_publisher(publisher);
    if parts.institution.is_empty() {
        return Err(DnbError::missing("metadata.publisher"));
    }

    root.push_child(
        XmlElement::new("dc:publisher")
            .with_attr("xsi:type", "cc:Publisher")
            .with_attr("type", "dcterms:ISO3166")
            .with_attr("countryCode", COUNTRY_CODE)
            .with_child(institution_element(&parts.institution, &parts.place)),
    );
    Ok(())
}

fn institution_element(name: &str, place: &str) -> XmlElement {
    XmlElement::new("cc:universityOrInstitution")
        .with_child(XmlElement::new("cc:name").with_text(name))
        .with_child(XmlElement::new("cc:place").with_text(place))
}

fn add_issued(root: &mut XmlElement, metadata: &Metadata) -> Result<()> {
    let issued = metadata
        .issued_date()
        .ok_or_else(|| DnbError::missing("metadata.dates.issued"))?;
    root.push_child(
        XmlElement::new("dcterms:issued")
            .with_attr("xsi:type", "dcterms:W3CDTF")
            .with_text(issued),
    );
    Ok(())
}

fn add_types(
    root: &mut XmlElement,
    metadata: &Metadata,
    config: &MapperConfig,
    vocabulary: &dyn VocabularyLookup,
) -> Result<()> {
    let resource_type = metadata
        .resource_type
        .as_ref()
        .ok_or_else(|| DnbError::missing("metadata.resource_type"))?;

    let dini_path = format!("props.{}", config.dini_publtype_key);
    let dcmi_path = format!("props.{}", config.dcterms_dcmitype_key);
    let props = vocabulary.props(
        RESOURCE_TYPES,
        &[dini_path.as_str(), dcmi_path.as_str()],
        &resource_type.id,
    )?;

    for (path, xsi_type) in [(&dini_path, "dini:PublType"), (&dcmi_path, "dcterms:DCMIType")] {
        match props.get(path.as_str()).cloned().flatten() {
            Some(value) => root.push_child(
                XmlElement::new("dc:type")
                    .with_attr("xsi:type", xsi_type)
                    .with_text(value),
            ),
            None => tracing::warn!(
                resource_type = %resource_type.id,
                property = %path,
                "resource type has no value for property"
            ),
        }
    }
    Ok(())
}

fn add_pid_identifier(root: &mut XmlElement, record: &Record) {
    let primary = record
        .pid("urn")
        .map(|urn| ("urn:nbn", urn))
        .or_else(|| record.pid("doi").map(|doi| ("doi:doi", doi)));

    if let Some((xsi_type, value)) = primary {
        root.push_child(
            XmlElement::new("dc:identifier")
                .with_attr("xsi:type", xsi_type)
                .with_text(value),
        );
    }
}

fn add_extents(root: &mut XmlElement, metadata: &Metadata) {
    for size in metadata.sizes.iter().filter(|s| !s.trim().is_empty()) {
        root.push_child(XmlElement::new("dcterms:extent").with_text(size.as_str()));
    }
}

fn add_language(root: &mut XmlElement, language: Option<&str>) {
    if let Some(lang) = language {
        root.push_child(
            XmlElement::new("dc:language")
                .with_attr("xsi:type", "dcterms:ISO639-2")
                .with_text(lang),
        );
    }
}

fn add_degree(root: &mut XmlElement, custom_fields: Option<&CustomFields>) {
    let Some(fields) = custom_fields else {
        return;
    };
    let (Some(level), Some(organisation), Some(place)) = (
        non_empty(fields.level.as_deref()),
        non_empty(fields.organisation.as_deref()),
        non_empty(fields.place.as_deref()),
    ) else {
        if fields.level.is_some() || fields.organisation.is_some() || fields.place.is_some() {
            tracing::debug!("incomplete thesis fields, degree omitted");
        }
        return;
    };

    root.push_child(
        XmlElement::new("thesis:degree")
            .with_child(XmlElement::new("thesis:level").with_text(level))
            .with_child(
                XmlElement::new("thesis:grantor")
                    .with_attr("xsi:type", "cc:Corporate")
                    .with_attr("type", "dcterms:ISO3166")
                    .with_attr("countryCode", COUNTRY_CODE)
                    .with_child(institution_element(organisation, place)),
            ),
    );
}

fn add_footer(root: &mut XmlElement, record: &Record, id: &str, config: &MapperConfig) {
    root.push_child(
        XmlElement::new("ddb:transfer")
            .with_attr("ddb:type", "dcterms:URI")
            .with_text(config.files_archive_url(id)),
    );

    // The primary dc:identifier already carries the URN, the DOI goes here.
    if let (Some(_), Some(doi)) = (record.pid("urn"), record.pid("doi")) {
        root.push_child(ddb_identifier("DOI", doi));
    }

    for identifier in &record.metadata.identifiers {
        root.push_child(ddb_identifier(
            identifier_label(&identifier.scheme),
            &identifier.identifier,
        ));
    }

    root.push_child(ddb_identifier("URL", &config.record_url(id)));
}

fn ddb_identifier(label: &str, value: &str) -> XmlElement {
    XmlElement::new("ddb:identifier")
        .with_attr("ddb:type", label)
        .with_text(value)
}

fn add_rights(root: &mut XmlElement, record: &Record) -> Result<()> {
    let access = record
        .access
        .as_ref()
        .ok_or_else(|| DnbError::missing("access"))?;
    let files = access
        .files
        .ok_or_else(|| DnbError::missing("access.files"))?;
    let kind = RightsKind::from_access(files);
    root.push_child(XmlElement::new("ddb:rights").with_attr("ddb:kind", kind.as_str()));

    let rights = &record.metadata.rights;
    if rights.is_empty() {
        root.push_child(licence("access", "nOA"));
        root.push_child(licence("otherScheme", NO_LICENCE_INFORMATION));
        root.push_child(licence("URL", NO_LICENCE_INFORMATION));
        return Ok(());
    }

    for right in rights {
        // Written as open access even when the rights kind is `domain`.
        root.push_child(licence("access", "OA"));

        match right.id.as_deref() {
            Some(id) if id.contains("cc") => root.push_child(licence("cc", id)),
            _ => {
                if let Some(title) = right.preferred_title() {
                    root.push_child(licence("otherScheme", title));
                }
            },
        }

        if let Some(url) = right.url() {
            root.push_child(licence("URL", url));
        }
    }
    Ok(())
}

fn licence(licence_type: &str, text: &str) -> XmlElement {
    XmlElement::new("ddb:licence")
        .with_attr("ddb:licenceType", licence_type)
        .with_text(text)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
