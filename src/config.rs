//! Configuration for the record mappers.
//!
//! This module provides the [`MapperConfig`] struct, passed explicitly into
//! every mapper call. It carries the site base URLs, the NBN scheme used by
//! `epicur`, the vocabulary property names used to derive publication types,
//! and the URN prefix of the identifier provider.
//!
//! Values come from [`Default`], the builder methods, or [`MapperConfig::load`]
//! which reads an optional configuration file and then the process
//! environment. Environment keys are the upper-case field names
//! (`SITE_UI_URL`, `EPICUR_NBN_SCHEME`, `XMETADISS_TYPE_DINI_PUBLTYPE`, ...).

use std::collections::HashMap;
use std::path::Path;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration consumed by the `epicur` and `xMetaDissPlus` mappers.
///
/// # Examples
///
/// ```ignore
/// use dnb_xmetadiss::MapperConfig;
///
/// let config = MapperConfig::new("https://repo.example.org", "https://repo.example.org/api")
///     .with_dini_publtype_key("dini_publtype");
/// assert_eq!(config.epicur_nbn_scheme, "urn:nbn:de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Base URL of the user interface (`SITE_UI_URL`).
    pub site_ui_url: String,

    /// Base URL of the REST API (`SITE_API_URL`).
    pub site_api_url: String,

    /// Scheme attribute of the `epicur` URN identifier (`EPICUR_NBN_SCHEME`).
    pub epicur_nbn_scheme: String,

    /// Resource-type vocabulary property holding the DINI publication type
    /// (`XMETADISS_TYPE_DINI_PUBLTYPE`).
    #[serde(rename = "xmetadiss_type_dini_publtype")]
    pub dini_publtype_key: String,

    /// Resource-type vocabulary property holding the DCMI type
    /// (`XMETADISS_TYPE_DCTERMS_DCMITYPE`).
    #[serde(rename = "xmetadiss_type_dcterms_dcmitype")]
    pub dcterms_dcmitype_key: String,

    /// Prefix inserted between `urn:nbn:` and the record id when minting
    /// URNs (`URN_DNB_ID_PREFIX`).
    pub urn_dnb_id_prefix: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            site_ui_url: "https://127.0.0.1".to_string(),
            site_api_url: "https://127.0.0.1/api".to_string(),
            epicur_nbn_scheme: "urn:nbn:de".to_string(),
            dini_publtype_key: "openaire_type".to_string(),
            dcterms_dcmitype_key: "openaire_type".to_string(),
            urn_dnb_id_prefix: String::new(),
        }
    }
}

impl MapperConfig {
    /// Creates a configuration with the given site URLs and default values otherwise.
    #[must_use]
    pub fn new(site_ui_url: impl Into<String>, site_api_url: impl Into<String>) -> Self {
        Self {
            site_ui_url: site_ui_url.into(),
            site_api_url: site_api_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment value cannot be deserialized.
    pub fn load() -> Result<Self> {
        Self::build(None, None)
    }

    /// Load configuration from a file, with environment variables layered on top.
    ///
    /// The file format is derived from the extension (`.toml`, `.json`, `.yaml`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::build(Some(path), None)
    }

    /// Build configuration from an explicit key/value map instead of the
    /// process environment. Keys use the environment spelling (`SITE_UI_URL`).
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be deserialized.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::build(None, Some(vars))
    }

    fn build(path: Option<&Path>, vars: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::default().source(vars))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            site_ui_url = %loaded.site_ui_url,
            site_api_url = %loaded.site_api_url,
            "loaded mapper configuration"
        );
        Ok(loaded)
    }

    /// Set the user interface base URL.
    #[must_use]
    pub fn with_site_ui_url(mut self, url: impl Into<String>) -> Self {
        self.site_ui_url = url.into();
        self
    }

    /// Set the REST API base URL.
    #[must_use]
    pub fn with_site_api_url(mut self, url: impl Into<String>) -> Self {
        self.site_api_url = url.into();
        self
    }

    /// Set the NBN scheme of the `epicur` URN identifier.
    #[must_use]
    pub fn with_epicur_nbn_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.epicur_nbn_scheme = scheme.into();
        self
    }

    /// Set the vocabulary property holding the DINI publication type.
    #[must_use]
    pub fn with_dini_publtype_key(mut self, key: impl Into<String>) -> Self {
        self.dini_publtype_key = key.into();
        self
    }

    /// Set the vocabulary property holding the DCMI type.
    #[must_use]
    pub fn with_dcterms_dcmitype_key(mut self, key: impl Into<String>) -> Self {
        self.dcterms_dcmitype_key = key.into();
        self
    }

    /// Set the URN prefix used by the identifier provider.
    #[must_use]
    pub fn with_urn_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.urn_dnb_id_prefix = prefix.into();
        self
    }

    /// Landing page of a record: `{site_ui_url}/records/{id}`.
    #[must_use]
    pub fn record_url(&self, id: &str) -> String {
        format!("{}/records/{id}", self.site_ui_url.trim_end_matches('/'))
    }

    /// Files archive download of a record: `{site_api_url}/records/{id}/files-archive`.
    #[must_use]
    pub fn files_archive_url(&self, id: &str) -> String {
        format!(
            "{}/records/{id}/files-archive",
            self.site_api_url.trim_end_matches('/')
        )
    }
}
