//! Deployment profiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment profile selecting which built-in environment record applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development against a loopback API
    #[default]
    Development,
    /// Public deployment
    Production,
}

impl Profile {
    /// Canonical lowercase name, also used in override file names
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Whether records for this profile must set `production: true`
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!(
                "Unknown profile: {other}. Must be one of: development, production"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("dev".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("Development".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("PROD".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!(" production ".parse::<Profile>().unwrap(), Profile::Production);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "staging".parse::<Profile>().unwrap_err();
        assert!(err.contains("staging"));
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(Profile::default(), Profile::Development);
        assert_eq!(Profile::Production.to_string(), "production");
        assert!(Profile::Production.is_production());
        assert!(!Profile::Development.is_production());
    }
}
