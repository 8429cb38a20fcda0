//! Retrieval domains ("modes") supported by the assistant

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fully isolated retrieval domain. Each mode owns its own knowledge
/// base; queries against one mode never see another mode's chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// CV, work history, skills and certifications
    Professional,
    /// Space-effect tutorial sources (Three.js / GLSL components)
    Tutorial,
}

impl Mode {
    /// All modes, in the order they are ingested at startup.
    pub const ALL: [Mode; 2] = [Mode::Professional, Mode::Tutorial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Professional => "professional",
            Mode::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Mode::Professional),
            "tutorial" => Ok(Mode::Tutorial),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Returned when a caller supplies a mode string outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode() {
        let err = "marketing".parse::<Mode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown mode: 'marketing'");
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&Mode::Professional).unwrap();
        assert_eq!(json, "\"professional\"");

        let mode: Mode = serde_json::from_str("\"tutorial\"").unwrap();
        assert_eq!(mode, Mode::Tutorial);
    }
}
