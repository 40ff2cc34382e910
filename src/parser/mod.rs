//! Version string parser
//!
//! Handles:
//! - Strict semver: `1.2.3`, `1.2.3-rc.1`, `1.2.3+build.5`
//! - Leading `v`: `v1.2.3`, `V2.0`
//! - Partial versions: `1`, `1.2` (padded with zeros)
//! - Maven-style qualifiers: `1.2.3-SNAPSHOT`, `2.0.0.Final`, `1.4.RELEASE`
//!
//! Only the numeric `major.minor.patch` part is kept. Qualifiers are dropped.

use crate::domain::SemanticVersion;
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

// Leading numeric version: 1, 1.2, 1.2.3, optionally followed by a qualifier
static NUMERIC_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:[.\-+_][0-9A-Za-z][0-9A-Za-z.\-+_]*)?$").unwrap()
});

/// Parse a version string into a `SemanticVersion`
pub fn parse_version(input: &str) -> Result<SemanticVersion, ParseError> {
    let trimmed = input.trim();
    let stripped = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    if let Ok(version) = semver::Version::parse(stripped) {
        return Ok(SemanticVersion::from(&version));
    }

    let caps = NUMERIC_PREFIX_RE
        .captures(stripped)
        .ok_or_else(|| ParseError::invalid_version(input))?;

    let component = |index: usize| -> Result<u64, ParseError> {
        match caps.get(index) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| ParseError::invalid_version(input)),
            None => Ok(0),
        }
    };

    Ok(SemanticVersion::new(component(1)?, component(2)?, component(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u64, minor: u64, patch: u64) -> SemanticVersion {
        SemanticVersion::new(major, minor, patch)
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(parse_version("1.2.3").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("0.0.0").unwrap(), v(0, 0, 0));
    }

    #[test]
    fn test_parse_prerelease_and_build_are_dropped() {
        assert_eq!(parse_version("1.2.3-rc.1").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("1.2.3+build.5").unwrap(), v(1, 2, 3));
    }

    #[test]
    fn test_parse_v_prefix() {
        assert_eq!(parse_version("v1.2.3").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("V2.0").unwrap(), v(2, 0, 0));
    }

    #[test]
    fn test_parse_partial_versions() {
        assert_eq!(parse_version("1").unwrap(), v(1, 0, 0));
        assert_eq!(parse_version("1.2").unwrap(), v(1, 2, 0));
    }

    #[test]
    fn test_parse_maven_qualifiers() {
        assert_eq!(parse_version("1.2.3-SNAPSHOT").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("2.0.0.Final").unwrap(), v(2, 0, 0));
        assert_eq!(parse_version("1.4.RELEASE").unwrap(), v(1, 4, 0));
        assert_eq!(parse_version("01.02.03").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("1.2.3.4").unwrap(), v(1, 2, 3));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_version("  1.2.3 ").unwrap(), v(1, 2, 3));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_version("").is_err());
        assert!(parse_version("latest").is_err());
        assert!(parse_version("a.b.c").is_err());
        assert!(parse_version("1..2").is_err());
        assert!(parse_version("99999999999999999999999.0.0").is_err());
    }

    #[test]
    fn test_parse_error_keeps_input() {
        let err = parse_version("latest").unwrap_err();
        assert_eq!(err, ParseError::invalid_version("latest"));
    }
}
