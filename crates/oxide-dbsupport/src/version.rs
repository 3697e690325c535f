//! Database server versions.

use std::fmt;

use serde::Serialize;

use crate::error::{DbSupportError, Result};

/// A `major.minor` server version.
///
/// Ordering is lexicographic on `(major, minor)`, which is how every
/// threshold in a dialect's version table is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ServerVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl ServerVersion {
    /// Creates a new version.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses a version string as reported by a database server.
    ///
    /// Leading non-numeric text is skipped and anything after the numeric
    /// `major[.minor[.patch...]]` run is ignored, so `10.5 (Debian 10.5-2)`,
    /// `8.0.36-0ubuntu0` and `v11.1.4.4` all parse. A missing minor is `0`.
    pub fn parse(version: &str) -> Result<Self> {
        let invalid = || DbSupportError::InvalidVersion(version.to_string());

        let start = version
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let numeric: &str = {
            let rest = &version[start..];
            let end = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(rest.len());
            &rest[..end]
        };

        let mut parts = numeric.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some("") | None => 0,
            Some(p) => p.parse::<u32>().map_err(|_| invalid())?,
        };

        Ok(Self { major, minor })
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The newest version a dialect is known to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersionCeiling {
    /// A specific release, e.g. `11.1`.
    Release(ServerVersion),
    /// Every minor release of a major version, e.g. `10.x`.
    Major(u32),
}

impl VersionCeiling {
    /// Creates a ceiling at a specific release.
    #[must_use]
    pub const fn release(major: u32, minor: u32) -> Self {
        Self::Release(ServerVersion::new(major, minor))
    }

    /// Returns whether `version` is newer than the ceiling.
    #[must_use]
    pub fn is_exceeded_by(&self, version: ServerVersion) -> bool {
        match *self {
            Self::Release(max) => version > max,
            Self::Major(major) => version.major > major,
        }
    }
}

impl fmt::Display for VersionCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release(version) => write!(f, "{version}"),
            Self::Major(major) => write!(f, "{major}.x"),
        }
    }
}
