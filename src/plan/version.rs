//! Platform version identifiers and their derived release strings.

use std::fmt;
use std::str::FromStr;

use regex_lite::Regex;

use crate::error::VersionError;

/// A two-part IDE platform version like `2025.2`.
///
/// Not semver: the first part is a four-digit year, the second a release
/// number within that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProductVersion {
    pub year: u16,
    pub release: u16,
}

impl ProductVersion {
    /// Short numeric API level used as a directory/file suffix:
    /// the last two digits of the year followed by the release number
    /// (`2025.2` -> `252`).
    pub fn api_level(&self) -> String {
        format!("{:02}{}", self.year % 100, self.release)
    }

    /// Underscore-joined label used to reference externally-versioned
    /// integration repositories (`2025.2` -> `2025_2`).
    pub fn label(&self) -> String {
        format!("{}_{}", self.year, self.release)
    }
}

impl fmt::Display for ProductVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.year, self.release)
    }
}

impl FromStr for ProductVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(r"^(\d{4})\.(\d+)$").expect("Invalid regex");
        let caps = re
            .captures(s)
            .ok_or_else(|| VersionError::ParseFailed(s.to_string()))?;

        let year = caps[1]
            .parse::<u16>()
            .map_err(|_| VersionError::ParseFailed(s.to_string()))?;
        let release = caps[2]
            .parse::<u16>()
            .map_err(|_| VersionError::ParseFailed(s.to_string()))?;

        Ok(ProductVersion { year, release })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_version() {
        let v: ProductVersion = "2025.2".parse().unwrap();
        assert_eq!(v.year, 2025);
        assert_eq!(v.release, 2);
    }

    #[test]
    fn test_parse_rejects_missing_release() {
        assert!(matches!(
            "2025".parse::<ProductVersion>(),
            Err(VersionError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_two_digit_year() {
        assert!("25.2".parse::<ProductVersion>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("2025.x".parse::<ProductVersion>().is_err());
        assert!("".parse::<ProductVersion>().is_err());
        assert!("2025.2-eap".parse::<ProductVersion>().is_err());
    }

    #[test]
    fn test_api_level_derivation() {
        let v: ProductVersion = "2025.2".parse().unwrap();
        assert_eq!(v.api_level(), "252");

        let v: ProductVersion = "2024.3".parse().unwrap();
        assert_eq!(v.api_level(), "243");
    }

    #[test]
    fn test_api_level_pads_year_below_ten() {
        // A century rollover keeps the suffix two digits wide.
        let v = ProductVersion {
            year: 2103,
            release: 1,
        };
        assert_eq!(v.api_level(), "031");
    }

    #[test]
    fn test_label_derivation() {
        let v: ProductVersion = "2025.2".parse().unwrap();
        assert_eq!(v.label(), "2025_2");
    }

    #[test]
    fn test_display_round_trip() {
        let v: ProductVersion = "2025.2".parse().unwrap();
        assert_eq!(v.to_string(), "2025.2");
    }

    #[test]
    fn test_ordering() {
        let older: ProductVersion = "2024.3".parse().unwrap();
        let newer: ProductVersion = "2025.1".parse().unwrap();
        assert!(older < newer);
    }
}
