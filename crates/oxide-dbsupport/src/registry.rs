//! Dialect registry.
//!
//! Maps the product name reported by a driver to a [`DialectConfig`] and
//! builds the [`DialectProfile`] the migration engine works with.

use tracing::info;

use crate::connection::SqlConnection;
use crate::dialect::{DialectConfig, BUILTIN_DIALECTS};
use crate::error::{DbSupportError, Result};
use crate::profile::DialectProfile;
use crate::version::ServerVersion;

/// A set of known dialects.
///
/// The default registry is empty, like [`DialectRegistry::new`].
#[derive(Debug, Clone, Default)]
pub struct DialectRegistry {
    dialects: Vec<&'static DialectConfig>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dialects: Vec::new(),
        }
    }

    /// Creates a registry with all built-in dialects.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self {
            dialects: BUILTIN_DIALECTS.to_vec(),
        }
    }

    /// Registers a dialect.
    ///
    /// Dialects registered later take precedence over earlier ones with a
    /// matching product prefix.
    #[must_use]
    pub fn register(mut self, dialect: &'static DialectConfig) -> Self {
        self.dialects.insert(0, dialect);
        self
    }

    /// Returns the registered dialects.
    pub fn dialects(&self) -> impl Iterator<Item = &'static DialectConfig> + '_ {
        self.dialects.iter().copied()
    }

    /// Finds the dialect whose product prefix matches `product_name`.
    ///
    /// Matching is case-insensitive, so `DB2/LINUXX8664` resolves to DB2.
    #[must_use]
    pub fn find(&self, product_name: &str) -> Option<&'static DialectConfig> {
        let product = product_name.trim().to_ascii_lowercase();
        self.dialects
            .iter()
            .copied()
            .find(|d| prefix_matches(&product, d))
    }

    /// Finds a dialect by its short name, e.g. `db2`.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static DialectConfig> {
        self.dialects
            .iter()
            .copied()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Builds a profile for a product and version.
    pub fn profile_for(
        &self,
        product_name: &str,
        version: ServerVersion,
    ) -> Result<DialectProfile> {
        let unsupported = || DbSupportError::UnsupportedDatabase(product_name.to_string());
        let config = self.find(product_name).ok_or_else(unsupported)?;
        Ok(DialectProfile::new(config, version))
    }

    /// Detects the product and version of the connected server and builds
    /// its profile.
    ///
    /// The version is not checked; call [`DialectProfile::ensure_supported`]
    /// before doing anything else with the connection.
    pub async fn detect<C: SqlConnection>(&self, conn: &mut C) -> Result<DialectProfile> {
        let server = conn.server_info().await?;
        let version = ServerVersion::parse(&server.version)?;
        let profile = self.profile_for(&server.product, version)?;

        info!(
            dialect = profile.dialect_name(),
            product = %server.product,
            version = %version,
            "Detected database"
        );

        Ok(profile)
    }
}

fn prefix_matches(product: &str, dialect: &DialectConfig) -> bool {
    product.starts_with(&dialect.product_prefix.to_ascii_lowercase())
}
