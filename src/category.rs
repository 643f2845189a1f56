//! Handling category labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handling category assigned to a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Neither bulky nor heavy
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Both bulky and heavy
    Rejected,
}

impl Category {
    /// Pick the category for a pair of bulky/heavy flags.
    pub fn from_flags(is_bulky: bool, is_heavy: bool) -> Self {
        match (is_bulky, is_heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }

    /// Label as printed and serialized: `STANDARD`, `SPECIAL` or `REJECTED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Category::Standard),
            "SPECIAL" => Ok(Category::Special),
            "REJECTED" => Ok(Category::Rejected),
            _ => anyhow::bail!(
                "Unknown category '{}'. Expected STANDARD, SPECIAL or REJECTED",
                s
            ),
        }
    }
}
