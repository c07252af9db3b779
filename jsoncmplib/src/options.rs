//! Input options controlling normalization and projection.
//!
//! This module contains the configuration types that decide how nested
//! JSON structure is turned into columns and which cell values count
//! as missing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::source::FilterConfig;

/// Normalization strategy for nested objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// One level of grouping: top-level objects become named column groups,
    /// top-level scalars collapse into the reserved root group.
    #[default]
    Grouped,
    /// Recursive flattening: nesting of any depth becomes a single key
    /// joined by underscores (`b.c` -> `b_c`).
    Flat,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grouped" | "group" => Ok(Mode::Grouped),
            "flat" | "flatten" => Ok(Mode::Flat),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

/// Which cell values render as the missing sentinel.
///
/// Renderers have historically disagreed on whether `0`, `""` and
/// `false` are data or gaps, so both semantics stay available.
/// `AbsentOnly` is the default since zero and false are usually valid
/// measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingPolicy {
    /// Only a truly absent key renders the sentinel.
    #[default]
    AbsentOnly,
    /// Absent keys plus falsy values (`null`, `false`, `0`, `""`) render
    /// the sentinel.
    FalsyAsMissing,
}

impl FromStr for MissingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "absent" | "absent-only" => Ok(MissingPolicy::AbsentOnly),
            "falsy" | "falsy-as-missing" => Ok(MissingPolicy::FalsyAsMissing),
            _ => Err(format!("Unknown missing policy: {}", s)),
        }
    }
}

/// Options for building a comparison table.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Normalization strategy
    pub mode: Mode,
    /// Missing-cell semantics
    pub missing: MissingPolicy,
    /// File filter configuration
    pub filter: FilterConfig,
}

impl CompareOptions {
    /// Create new default options (grouped mode, absent-only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the normalization mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the missing-cell policy.
    pub fn missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// Set the file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("flat").unwrap(), Mode::Flat);
        assert_eq!(Mode::from_str("flatten").unwrap(), Mode::Flat);
        assert_eq!(Mode::from_str("grouped").unwrap(), Mode::Grouped);
        assert_eq!(Mode::from_str("GROUP").unwrap(), Mode::Grouped);
        assert!(Mode::from_str("nested").is_err());
    }

    #[test]
    fn test_missing_policy_from_str() {
        assert_eq!(
            MissingPolicy::from_str("absent").unwrap(),
            MissingPolicy::AbsentOnly
        );
        assert_eq!(
            MissingPolicy::from_str("falsy").unwrap(),
            MissingPolicy::FalsyAsMissing
        );
        assert!(MissingPolicy::from_str("sometimes").is_err());
    }

    #[test]
    fn test_options_builder() {
        let options = CompareOptions::new()
            .mode(Mode::Flat)
            .missing(MissingPolicy::FalsyAsMissing);
        assert_eq!(options.mode, Mode::Flat);
        assert_eq!(options.missing, MissingPolicy::FalsyAsMissing);
    }

    #[test]
    fn test_options_default() {
        let options = CompareOptions::default();
        assert_eq!(options.mode, Mode::Grouped);
        assert_eq!(options.missing, MissingPolicy::AbsentOnly);
    }
}
