//! Dialect profiles.

use serde::Serialize;

use crate::dialect::{Capabilities, DialectConfig, VersionThresholds};
use crate::error::Result;
use crate::history::HistoryTableGenerator;
use crate::policy::{self, UpgradeRecommendation};
use crate::quote::IdentifierQuoter;
use crate::schema::SchemaLocator;
use crate::version::ServerVersion;

/// Immutable description of one connected database: its dialect and the
/// server version detected at connection time.
///
/// A profile never changes once built. A new connection or version gets a
/// new profile. Profiles hold no mutable state and can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectProfile {
    #[serde(rename = "dialect")]
    config: &'static DialectConfig,
    version: ServerVersion,
}

impl DialectProfile {
    /// Creates a profile for a dialect and a detected server version.
    #[must_use]
    pub const fn new(config: &'static DialectConfig, version: ServerVersion) -> Self {
        Self { config, version }
    }

    /// Returns the dialect configuration.
    #[must_use]
    pub const fn config(&self) -> &'static DialectConfig {
        self.config
    }

    /// Returns the short dialect identifier, for display and logging.
    #[must_use]
    pub const fn dialect_name(&self) -> &'static str {
        self.config.name
    }

    /// Returns the product name used in user-facing messages.
    #[must_use]
    pub const fn product_label(&self) -> &'static str {
        self.config.product_label
    }

    /// Returns the product vendor.
    #[must_use]
    pub const fn vendor(&self) -> &'static str {
        self.config.vendor
    }

    /// Returns the detected server version.
    #[must_use]
    pub const fn version(&self) -> ServerVersion {
        self.version
    }

    /// Returns the detected major version.
    #[must_use]
    pub const fn major_version(&self) -> u32 {
        self.version.major
    }

    /// Returns the detected minor version.
    #[must_use]
    pub const fn minor_version(&self) -> u32 {
        self.version.minor
    }

    /// Returns the dialect's capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &'static Capabilities {
        &self.config.capabilities
    }

    /// Returns the dialect's version thresholds.
    #[must_use]
    pub const fn thresholds(&self) -> &'static VersionThresholds {
        &self.config.thresholds
    }

    /// Whether DDL statements participate in transactions.
    #[must_use]
    pub const fn supports_ddl_transactions(&self) -> bool {
        self.config.capabilities.supports_ddl_transactions
    }

    /// Literal stored for `true`.
    #[must_use]
    pub const fn boolean_true(&self) -> &'static str {
        self.config.capabilities.boolean_true
    }

    /// Literal stored for `false`.
    #[must_use]
    pub const fn boolean_false(&self) -> &'static str {
        self.config.capabilities.boolean_false
    }

    /// SQL expression returning the current user.
    #[must_use]
    pub const fn current_user_function(&self) -> &'static str {
        self.config.capabilities.current_user_function
    }

    /// Whether the catalog plays the role of the schema.
    #[must_use]
    pub const fn catalog_is_schema(&self) -> bool {
        self.config.capabilities.catalog_is_schema
    }

    /// Whether every operation of a migration run must use the same
    /// physical connection.
    #[must_use]
    pub const fn use_single_connection(&self) -> bool {
        self.config.capabilities.use_single_connection
    }

    /// Checks the server version against the dialect's thresholds.
    ///
    /// See [`policy::ensure_supported`].
    pub fn ensure_supported(&self) -> Result<Option<UpgradeRecommendation>> {
        policy::ensure_supported(self)
    }

    /// Returns the identifier quoter for this dialect.
    #[must_use]
    pub const fn quoter(&self) -> IdentifierQuoter {
        IdentifierQuoter::new(self.config.quote.0, self.config.quote.1)
    }

    /// Quotes an identifier.
    #[must_use]
    pub fn quote(&self, identifier: &str) -> String {
        self.quoter().quote(identifier)
    }

    /// Returns the history table DDL generator for this dialect.
    #[must_use]
    pub fn history_table(&self) -> HistoryTableGenerator<'static> {
        HistoryTableGenerator::new(self.config)
    }

    /// Returns the schema locator for this profile.
    #[must_use]
    pub const fn schema_locator(&self) -> SchemaLocator<'_> {
        SchemaLocator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{DB2, MYSQL, SQLITE};

    #[test]
    fn test_db2_capabilities() {
        let profile = DialectProfile::new(&DB2, ServerVersion::new(11, 1));
        assert_eq!(profile.dialect_name(), "db2");
        assert_eq!(profile.major_version(), 11);
        assert_eq!(profile.minor_version(), 1);
        assert!(profile.supports_ddl_transactions());
        assert_eq!(profile.boolean_true(), "1");
        assert_eq!(profile.boolean_false(), "0");
        assert_eq!(profile.current_user_function(), "CURRENT_USER");
        assert!(!profile.catalog_is_schema());
        assert!(!profile.use_single_connection());
    }

    #[test]
    fn test_other_dialect_capabilities() {
        let mysql = DialectProfile::new(&MYSQL, ServerVersion::new(8, 0));
        assert!(!mysql.supports_ddl_transactions());
        assert!(mysql.catalog_is_schema());
        assert_eq!(mysql.quote("abc"), "`abc`");

        let sqlite = DialectProfile::new(&SQLITE, ServerVersion::new(3, 45));
        assert!(sqlite.use_single_connection());
    }

    #[test]
    fn test_quote() {
        let profile = DialectProfile::new(&DB2, ServerVersion::new(11, 1));
        assert_eq!(profile.quote("abc"), "\"abc\"");
    }

    #[test]
    fn test_profiles_are_values() {
        let a = DialectProfile::new(&DB2, ServerVersion::new(10, 5));
        let b = DialectProfile::new(&DB2, ServerVersion::new(11, 1));
        assert_ne!(a, b);
        assert_eq!(a, DialectProfile::new(&DB2, ServerVersion::new(10, 5)));
    }

    #[test]
    fn test_serialize() {
        let profile = DialectProfile::new(&DB2, ServerVersion::new(11, 1));
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["dialect"]["name"], "db2");
        assert_eq!(json["version"]["major"], 11);
        assert_eq!(json["dialect"]["thresholds"]["min_supported"]["minor"], 7);
        assert_eq!(
            json["dialect"]["thresholds"]["max_known_good"]["Release"]["minor"],
            1
        );
    }

    #[test]
    fn test_profile_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DialectProfile>();
    }
}
