use std::fmt;
use std::str::FromStr;

/// A bare `major.minor.patch` triple. Pre-release and build metadata are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    /// Exactly three dot-separated parts, each a non-empty run of ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(format!(
                "version '{}' must have exactly three dot-separated parts, found {}",
                s,
                parts.len()
            ));
        }

        let component = |name: &str, raw: &str| -> Result<u64, String> {
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!(
                    "version '{}' has a non-numeric {} component '{}'",
                    s, name, raw
                ));
            }
            raw.parse::<u64>()
                .map_err(|e| format!("version '{}' has an invalid {} component: {}", s, name, e))
        };

        Ok(Version {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_plain_triples() {
        let v: Version = "1.2.9".parse().unwrap();
        assert_eq!(v, Version::new(1, 2, 9));
        assert_eq!(v.to_string(), "1.2.9");
    }

    #[test]
    fn leading_zeros_are_dropped_on_print() {
        let v: Version = "01.002.3".parse().unwrap();
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn rejects_wrong_part_counts() {
        assert!("1.2".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn rejects_non_numeric_components() {
        for bad in ["1.2.x", "1..3", "1.2.3-beta", " 1.2.3", "1.+2.3", "-1.2.3"] {
            let err = bad.parse::<Version>().unwrap_err();
            assert!(err.contains("non-numeric"), "{}: {}", bad, err);
        }
    }

    #[test]
    fn rejects_components_overflowing_u64() {
        let err = "1.2.99999999999999999999".parse::<Version>().unwrap_err();
        assert!(err.contains("invalid patch"));
    }
}
