//! Categorical values found in the catalog spreadsheet.
//!
//! The sheet is maintained by hand, so the same answer shows up as "Yes",
//! "yes ", "Y" or a check mark. These enums accept the common spellings and
//! treat everything else as absent rather than guessing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Yes/No answer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    /// Parses a cell, returning `None` for blanks and unrecognized text.
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "Yes",
            Flag::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Flag::Yes)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "yes" | "y" | "true" | "1" | "x" | "✓" | "✔" => Ok(Flag::Yes),
            "no" | "n" | "false" | "0" | "none" => Ok(Flag::No),
            _ => Err(format!("Unknown yes/no value: {s}")),
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Flag::Yes } else { Flag::No }
    }
}

/// How a robot uses an internet connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InternetUse {
    Required,
    NotUsed,
    Optional,
}

impl InternetUse {
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InternetUse::Required => "Required",
            InternetUse::NotUsed => "Not used",
            InternetUse::Optional => "Optional",
        }
    }
}

impl fmt::Display for InternetUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InternetUse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "required" | "yes" | "needed" => Ok(InternetUse::Required),
            "not used" | "not required" | "no" | "none" | "not needed" => Ok(InternetUse::NotUsed),
            "optional" | "sometimes" => Ok(InternetUse::Optional),
            _ => Err(format!("Unknown internet usage: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_spellings() {
        assert_eq!(Flag::parse("Yes"), Some(Flag::Yes));
        assert_eq!(Flag::parse(" yes "), Some(Flag::Yes));
        assert_eq!(Flag::parse("Y"), Some(Flag::Yes));
        assert_eq!(Flag::parse("NO"), Some(Flag::No));
        assert_eq!(Flag::parse("false"), Some(Flag::No));
    }

    #[test]
    fn test_flag_unknown_is_absent() {
        assert_eq!(Flag::parse(""), None);
        assert_eq!(Flag::parse("maybe"), None);
        assert_eq!(Flag::parse("N/A"), None);
    }

    #[test]
    fn test_internet_use() {
        assert_eq!(InternetUse::parse("Required"), Some(InternetUse::Required));
        assert_eq!(InternetUse::parse("Not  used"), Some(InternetUse::NotUsed));
        assert_eq!(InternetUse::parse("optional"), Some(InternetUse::Optional));
        assert_eq!(InternetUse::parse("wifi"), None);
        assert_eq!(InternetUse::NotUsed.to_string(), "Not used");
    }
}
