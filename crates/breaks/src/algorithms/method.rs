//! Classification method selection.
//!
//! Methods can be chosen by variant or by name; names are matched
//! case-insensitively and accept `_`, `-` or no separator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::BreaksError;

/// Classification method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Equal-width classes over the value range.
    EqualInterval,

    /// Classes holding roughly equal numbers of observations.
    Quantile,

    /// Iterated mean splits for heavy-tailed data.
    HeadTail,

    /// Jenks natural breaks (minimum within-class variance).
    #[default]
    Jenks,
}

impl Method {
    /// All methods, in documentation order.
    pub const ALL: [Method; 4] = [
        Method::EqualInterval,
        Method::Quantile,
        Method::HeadTail,
        Method::Jenks,
    ];

    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EqualInterval => "equal_interval",
            Self::Quantile => "quantile",
            Self::HeadTail => "head_tail",
            Self::Jenks => "jenks",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = BreaksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "equalinterval" => Ok(Self::EqualInterval),
            "quantile" => Ok(Self::Quantile),
            "headtail" | "headtailbreaks" => Ok(Self::HeadTail),
            "jenks" | "naturalbreaks" => Ok(Self::Jenks),
            _ => Err(BreaksError::UnknownMethod(s.to_string())),
        }
    }
}
