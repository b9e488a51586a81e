//! Namespace definitions and schema locations.
//!
//! This module defines the XML namespaces used by the `xMetaDissPlus` and
//! `epicur` formats, following the DNB standards pages.

/// xMetaDissPlus namespace URI.
pub const XMETADISS: &str = "http://www.d-nb.de/standards/xmetadissplus/";

/// Dublin Core elements namespace URI.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";

/// DCMI terms namespace URI.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// DNB `ddb` namespace URI (identifiers, rights, transfer).
pub const DDB: &str = "http://www.d-nb.de/standards/ddb/";

/// DNB person (`pc`) namespace URI.
pub const PC: &str = "http://www.d-nb.de/standards/pc/";

/// DNB corporation (`cc`) namespace URI.
pub const CC: &str = "http://www.d-nb.de/standards/cc/";

/// XML Schema instance namespace URI.
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// ETD-MS thesis namespace URI.
pub const THESIS: &str = "http://www.ndltd.org/standards/metadata/etdms/1.0/";

/// DINI publication type vocabulary namespace URI.
pub const DINI: &str = "http://www.d-nb.de/standards/subject/dini/";

/// DNB URN type namespace URI.
pub const URN: &str = "http://www.d-nb.de/standards/urn/";

/// DNB DOI type namespace URI.
pub const DOI: &str = "http://www.d-nb.de/standards/doi/";

/// Default namespace of the `epicur` format.
pub const EPICUR: &str = "urn:nbn:de:1111-2004033116";

/// `xsi:schemaLocation` value of an `xMetaDiss` root element.
pub const XMETADISS_SCHEMA_LOCATION: &str = "http://www.d-nb.de/standards/xmetadissplus/ \
     http://www.d-nb.de/standards/xmetadissplus/xmetadissplus.xsd";

/// `xsi:schemaLocation` value of an `epicur` root element.
pub const EPICUR_SCHEMA_LOCATION: &str = "urn:nbn:de:1111-2004033116 \
     http://www.persistent-identifier.de/xepicur/version1.0/xepicur.xsd";

/// Prefix/URI pairs declared on the `xMetaDiss` root, in declaration order.
pub const XMETADISS_NAMESPACES: [(&str, &str); 11] = [
    ("xMetaDiss", XMETADISS),
    ("dc", DC),
    ("dcterms", DCTERMS),
    ("ddb", DDB),
    ("pc", PC),
    ("cc", CC),
    ("xsi", XSI),
    ("thesis", THESIS),
    ("dini", DINI),
    ("urn", URN),
    ("doi", DOI),
];
