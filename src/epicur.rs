//! `epicur` serialization of records.
//!
//! The DNB registers URNs passively: it harvests the repository with the
//! `epicur` metadata prefix and reads, for every record, the URN and the URL
//! it should resolve to. The document is purely administrative:
//!
//! ```text
//! epicur
//! ├── administrative_data/delivery/update_status  type="urn_new"
//! └── record
//!     ├── identifier  scheme="{nbn_scheme}"   the record's URN
//!     └── resource
//!         ├── identifier  scheme="url" role="primary"   {site_url}/records/{id}
//!         └── format      scheme="imt"                  text/html
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use dnb_xmetadiss::{epicur, Record};
//!
//! let record = Record::from_json(r#"{"id": "abc123", "pids": {"urn": {"identifier": "urn:nbn:de:abc123"}}}"#)?;
//! let tree = epicur::map_epicur(&record, "https://repo.example.org", "urn:nbn:de")?;
//! println!("{}", tree.to_xml_string()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::MapperConfig;
use crate::error::{DnbError, Result};
use crate::namespaces::{EPICUR, EPICUR_SCHEMA_LOCATION, XSI};
use crate::record::Record;
use crate::xml::XmlElement;

/// Media type of the resolved landing page.
const LANDING_PAGE_MEDIA_TYPE: &str = "text/html";

/// Convert a record to an `epicur` element tree.
///
/// `site_url` is the user interface base URL the URN resolves to and
/// `nbn_scheme` the scheme attribute of the URN identifier (normally
/// `urn:nbn:de`).
///
/// The URN text is taken from the record's `urn` pid.
///
/// # Errors
///
/// Returns [`DnbError::MissingField`] if the record has no `id` or no
/// non-blank `urn` pid.
pub fn map_epicur(record: &Record, site_url: &str, nbn_scheme: &str) -> Result<XmlElement> {
    let id = record.id.as_deref().ok_or_else(|| DnbError::missing("id"))?;
    let Some(urn) = record.pid("urn").filter(|urn| !urn.trim().is_empty()) else {
        tracing::warn!(record = id, "record has no URN pid");
        return Err(DnbError::missing("pids.urn"));
    };

    let urn = XmlElement::new("identifier")
        .with_attr("scheme", nbn_scheme)
        .with_text(urn);

    let resource = XmlElement::new("resource")
        .with_child(
            XmlElement::new("identifier")
                .with_attr("scheme", "url")
                .with_attr("role", "primary")
                .with_attr("type", "frontpage")
                .with_text(format!("{}/records/{id}", site_url.trim_end_matches('/'))),
        )
        .with_child(
            XmlElement::new("format")
                .with_attr("scheme", "imt")
                .with_text(LANDING_PAGE_MEDIA_TYPE),
        );

    let delivery = XmlElement::new("delivery")
        .with_child(XmlElement::new("update_status").with_attr("type", "urn_new"));

    Ok(XmlElement::new("epicur")
        .with_attr("xmlns", EPICUR)
        .with_attr("xmlns:xsi", XSI)
        .with_attr("xsi:schemaLocation", EPICUR_SCHEMA_LOCATION)
        .with_child(XmlElement::new("administrative_data").with_child(delivery))
        .with_child(
            XmlElement::new("record")
                .with_child(urn)
                .with_child(resource),
        ))
}

/// [`map_epicur`] with the site URL and NBN scheme taken from a [`MapperConfig`].
///
/// # Errors
///
/// Returns [`DnbError::MissingField`] if the record has no `id` or URN.
pub fn map_epicur_with_config(record: &Record, config: &MapperConfig) -> Result<XmlElement> {
    map_epicur(record, &config.site_ui_url, &config.epicur_nbn_scheme)
}

/// Convert a record directly to an `epicur` XML string.
///
/// # Errors
///
/// Returns an error if the record has no `id` or URN, or serialization fails.
pub fn record_to_epicur_xml(record: &Record, config: &MapperConfig) -> Result<String> {
    map_epicur_with_config(record, config)?.to_xml_string()
}
