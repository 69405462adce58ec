//! # Jurisdiction Types
//!
//! Australian regulation is layered: local councils, states and
//! territories, and the Commonwealth. This module defines the tag sets used
//! to place records on those layers and the fixed table of the eight
//! states and territories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RtnError;

/// A single regulatory layer. Requirements always sit on exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JurisdictionLevel {
    /// Local council.
    Local,
    /// State or territory government.
    State,
    /// Commonwealth.
    Federal,
}

impl JurisdictionLevel {
    /// All levels in bucket order.
    pub fn all() -> &'static [JurisdictionLevel] {
        &[Self::Local, Self::State, Self::Federal]
    }

    /// Returns the lowercase string identifier for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::State => "state",
            Self::Federal => "federal",
        }
    }
}

impl fmt::Display for JurisdictionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JurisdictionLevel {
    type Err = RtnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "state" => Ok(Self::State),
            "federal" => Ok(Self::Federal),
            other => Err(RtnError::UnknownTag {
                kind: "jurisdiction level",
                value: other.to_string(),
            }),
        }
    }
}

/// Jurisdiction tag carried by a regulation. `Multi` marks regulations
/// spanning more than one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JurisdictionTag {
    Local,
    State,
    Federal,
    Multi,
}

impl JurisdictionTag {
    /// The single layer this tag denotes, or `None` for `Multi`.
    pub fn level(&self) -> Option<JurisdictionLevel> {
        match self {
            Self::Local => Some(JurisdictionLevel::Local),
            Self::State => Some(JurisdictionLevel::State),
            Self::Federal => Some(JurisdictionLevel::Federal),
            Self::Multi => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::State => "state",
            Self::Federal => "federal",
            Self::Multi => "multi",
        }
    }
}

impl From<JurisdictionLevel> for JurisdictionTag {
    fn from(level: JurisdictionLevel) -> Self {
        match level {
            JurisdictionLevel::Local => Self::Local,
            JurisdictionLevel::State => Self::State,
            JurisdictionLevel::Federal => Self::Federal,
        }
    }
}

impl fmt::Display for JurisdictionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JurisdictionTag {
    type Err = RtnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multi" => Ok(Self::Multi),
            other => other
                .parse::<JurisdictionLevel>()
                .map(Self::from)
                .map_err(|_| RtnError::UnknownTag {
                    kind: "jurisdiction",
                    value: other.to_string(),
                }),
        }
    }
}

/// The eight Australian states and territories.
///
/// Declaration order is significant: location detection walks states in
/// this order and the first hit wins.
///
/// | Code | Name                         | Capital   |
/// |------|------------------------------|-----------|
/// | NSW  | New South Wales              | Sydney    |
/// | VIC  | Victoria                     | Melbourne |
/// | QLD  | Queensland                   | Brisbane  |
/// | WA   | Western Australia            | Perth     |
/// | SA   | South Australia              | Adelaide  |
/// | TAS  | Tasmania                     | Hobart    |
/// | ACT  | Australian Capital Territory | Canberra  |
/// | NT   | Northern Territory           | Darwin    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AustralianState {
    #[serde(rename = "NSW")]
    Nsw,
    #[serde(rename = "VIC")]
    Vic,
    #[serde(rename = "QLD")]
    Qld,
    #[serde(rename = "WA")]
    Wa,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "TAS")]
    Tas,
    #[serde(rename = "ACT")]
    Act,
    #[serde(rename = "NT")]
    Nt,
}

/// Total number of states and territories.
pub const AUSTRALIAN_STATE_COUNT: usize = 8;

impl AustralianState {
    /// All states in declaration (tie-break) order.
    pub fn all() -> &'static [AustralianState] {
        &[
            Self::Nsw,
            Self::Vic,
            Self::Qld,
            Self::Wa,
            Self::Sa,
            Self::Tas,
            Self::Act,
            Self::Nt,
        ]
    }

    /// Upper-case postal code, e.g. `"NSW"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Wa => "WA",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Act => "ACT",
            Self::Nt => "NT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Nsw => "New South Wales",
            Self::Vic => "Victoria",
            Self::Qld => "Queensland",
            Self::Wa => "Western Australia",
            Self::Sa => "South Australia",
            Self::Tas => "Tasmania",
            Self::Act => "Australian Capital Territory",
            Self::Nt => "Northern Territory",
        }
    }

    pub fn capital(&self) -> &'static str {
        match self {
            Self::Nsw => "Sydney",
            Self::Vic => "Melbourne",
            Self::Qld => "Brisbane",
            Self::Wa => "Perth",
            Self::Sa => "Adelaide",
            Self::Tas => "Hobart",
            Self::Act => "Canberra",
            Self::Nt => "Darwin",
        }
    }
}

impl fmt::Display for AustralianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AustralianState {
    type Err = RtnError;

    /// Parse a state from its postal code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|state| state.code() == upper)
            .ok_or_else(|| RtnError::UnknownTag {
                kind: "state",
                value: s.to_string(),
            })
    }
}
