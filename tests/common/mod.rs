//! Common test helpers and fixtures shared across the test suite.

use dnb_xmetadiss::{MapperConfig, Record, StaticVocabulary};
use serde_json::json;

/// Fully populated doctoral thesis with URN, DOI and a CC licence.
pub const FULL_RECORD: &str = include_str!("../data/full_record.json");

/// Restricted dataset wrapped in a search-index `_source` envelope.
#[allow(dead_code)]
pub const RESTRICTED_RECORD: &str = include_str!("../data/restricted_record.json");

/// Resource-type vocabulary export.
pub const RESOURCE_TYPES: &str = include_str!("../data/resourcetypes.json");

/// Site configuration used throughout the integration tests.
pub fn test_config() -> MapperConfig {
    MapperConfig::new("https://repo.example.org", "https://repo.example.org/api")
        .with_dcterms_dcmitype_key("dcmi")
        .with_urn_prefix("de:hbz:6-")
}

/// Resource-type vocabulary loaded from the JSON fixture.
pub fn test_vocabulary() -> StaticVocabulary {
    StaticVocabulary::new()
        .load_json("resourcetypes", RESOURCE_TYPES)
        .expect("resource type fixture parses")
}

/// Parses the full thesis fixture.
#[allow(dead_code)]
pub fn full_record() -> Record {
    Record::from_json(FULL_RECORD).expect("full record fixture parses")
}

/// The smallest record the xMetaDissPlus mapper accepts: an organizational
/// creator, a publisher with a place, no pids and no rights.
///
/// `with_date` adds a `publication_date`, without which the issued date is
/// missing.
#[allow(dead_code)]
pub fn minimal_record(with_date: bool) -> Record {
    let mut value = json!({
        "id": "abc123",
        "metadata": {
            "title": "T",
            "creators": [{"person_or_org": {"type": "organizational", "name": "Org"}}],
            "publisher": "Inst A / City B",
            "resource_type": {"id": "publication-article"}
        },
        "pids": {},
        "access": {"files": "public"}
    });
    if with_date {
        value["metadata"]["publication_date"] = json!("2024-03-01");
    }
    Record::from_value(value).expect("minimal record parses")
}
