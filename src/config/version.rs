//! Webflow API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Webflow Data API to use. The version is sent on every request in the
//! `accept-version` header.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Webflow Data API version.
///
/// # Example
///
/// ```rust
/// use webflow_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "1.0.0");
///
/// let version: ApiVersion = "1.0.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1_0_0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1.0.0.
    V1_0_0,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1_0_0
    }

    /// Returns `true` if this is a known API version.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1_0_0 => f.write_str("1.0.0"),
            Self::Custom(version) => f.write_str(version),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "1.0.0" {
            return Ok(Self::V1_0_0);
        }

        let parts: Vec<&str> = s.split('.').collect();
        let is_semver = parts.len() == 3
            && parts
                .iter()
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !is_semver {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }

        Ok(Self::Custom(s.to_string()))
    }
}
