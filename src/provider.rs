//! URN persistent-identifier provider.
//!
//! URNs in the `urn:nbn` namespace are minted locally from a configured
//! prefix and the record's own pid value. Registration with the DNB is
//! passive: the library harvests the repository with the `epicur` metadata
//! prefix, so reserving an identifier always succeeds and new identifiers
//! start out registered.

use regex::Regex;

use crate::config::MapperConfig;
use crate::error::{DnbError, Result};

lazy_static::lazy_static! {
    /// `urn:nbn:<country>[:<sub-namespace>...]-<local part>`
    static ref URN_NBN: Option<Regex> = Regex::new(
        r"(?i)^urn:nbn:[a-z]{2}(?::[a-z0-9]+(?:-[a-z0-9]+)*)*-[a-z0-9()+,.:=@;$_!*'%/?#-]+$"
    )
    .ok();
}

/// Lifecycle status of a persistent identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PidStatus {
    /// Created but not yet reserved
    New,
    /// Reserved with the registration agency
    Reserved,
    /// Registered and resolvable
    Registered,
}

/// Provider for DNB `urn:nbn` identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrnProvider {
    prefix: String,
}

impl UrnProvider {
    /// Provider name and pid type.
    pub const NAME: &'static str = "urn";

    /// Create a provider minting identifiers under `prefix`
    /// (e.g. `de:hbz:6-`).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Create a provider using the configured `urn_dnb_id_prefix`.
    #[must_use]
    pub fn from_config(config: &MapperConfig) -> Self {
        Self::new(config.urn_dnb_id_prefix.clone())
    }

    /// The configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether identifiers are managed by this repository.
    #[must_use]
    pub const fn is_managed(&self) -> bool {
        true
    }

    /// Status assigned to newly created identifiers.
    #[must_use]
    pub const fn default_status(&self) -> PidStatus {
        PidStatus::Registered
    }

    /// Build the URN for a record's pid value.
    ///
    /// # Example
    ///
    /// ```
    /// use dnb_xmetadiss::provider::UrnProvider;
    ///
    /// let provider = UrnProvider::new("de:hbz:6-");
    /// assert_eq!(provider.generate_id("abc123"), "urn:nbn:de:hbz:6-abc123");
    /// ```
    #[must_use]
    pub fn generate_id(&self, pid_value: &str) -> String {
        let urn = format!("urn:nbn:{}{pid_value}", self.prefix);
        tracing::debug!(urn = %urn, "generated URN");
        urn
    }

    /// Reserve an identifier. Always succeeds.
    #[must_use]
    pub const fn reserve(&self, _identifier: &str) -> bool {
        true
    }

    /// Check that `identifier` is a syntactically valid URN:NBN.
    ///
    /// # Errors
    ///
    /// Returns [`DnbError::InvalidIdentifier`] otherwise.
    pub fn validate(&self, identifier: &str) -> Result<()> {
        let valid = URN_NBN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(identifier));
        if valid {
            Ok(())
        } else {
            Err(DnbError::InvalidIdentifier(identifier.to_string()))
        }
    }
}
