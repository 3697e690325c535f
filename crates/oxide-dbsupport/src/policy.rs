//! Version support policy.
//!
//! Every dialect carries its own [`VersionThresholds`]. A detected version is
//! evaluated against them in a fixed order:
//!
//! 1. below `min_supported`: fatal, nothing else is checked
//! 2. inside the edition band: fatal, a full edition is required
//! 3. above `max_known_good`: supported, with an upgrade recommendation
//! 4. otherwise: supported
//!
//! The edition band is checked independently of the minimum, so a version
//! may pass the first tier and still require a full edition.

use std::fmt;

use tracing::{debug, warn};

use crate::dialect::VersionThresholds;
use crate::error::{DbSupportError, Result};
use crate::profile::DialectProfile;
use crate::version::ServerVersion;

/// Outcome of evaluating a version against a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionVerdict {
    /// Supported, nothing to report.
    Supported,
    /// Older than the minimum supported version.
    TooLow,
    /// Only supported by a full edition.
    EditionUpgradeRequired,
    /// Newer than the newest version known to work.
    UpgradeRecommended,
}

impl VersionThresholds {
    /// Evaluates `version` against this table.
    #[must_use]
    pub fn evaluate(&self, version: ServerVersion) -> VersionVerdict {
        if version < self.min_supported {
            return VersionVerdict::TooLow;
        }
        if self.edition_band.is_some_and(|band| band.contains(version)) {
            return VersionVerdict::EditionUpgradeRequired;
        }
        if self.max_known_good.is_exceeded_by(version) {
            return VersionVerdict::UpgradeRecommended;
        }
        VersionVerdict::Supported
    }
}

/// Advisory emitted when the server is newer than any version known to work.
///
/// This is not an error: execution continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeRecommendation {
    /// Display name of the product.
    pub product: String,
    /// Detected version, `major.minor`.
    pub detected: String,
}

impl fmt::Display for UpgradeRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is newer than this version of the migration engine has been tested with. \
             Upgrading the migration engine is recommended.",
            self.product, self.detected
        )
    }
}

/// Ensures the profile's server version is supported.
///
/// Returns `Ok(Some(_))` with a recommendation when the server is newer than
/// the dialect's newest known-good version. The recommendation is also
/// logged once at `warn` level.
pub fn ensure_supported(profile: &DialectProfile) -> Result<Option<UpgradeRecommendation>> {
    let version = profile.version();
    let product = profile.product_label();

    match profile.thresholds().evaluate(version) {
        VersionVerdict::TooLow => Err(DbSupportError::VersionTooLow {
            product: product.to_string(),
            detected: version.to_string(),
            minimum: profile.thresholds().min_supported.to_string(),
        }),
        VersionVerdict::EditionUpgradeRequired => Err(DbSupportError::EditionUpgradeRequired {
            vendor: profile.vendor().to_string(),
            product: product.to_string(),
            detected: version.to_string(),
        }),
        VersionVerdict::UpgradeRecommended => {
            let recommendation = UpgradeRecommendation {
                product: product.to_string(),
                detected: version.to_string(),
            };
            warn!("{recommendation}");
            Ok(Some(recommendation))
        }
        VersionVerdict::Supported => {
            debug!(product, version = %version, "Database version supported");
            Ok(None)
        }
    }
}
