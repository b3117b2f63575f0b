use crate::errors::InvalidTierError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Compatibility strength assigned to a taste trio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[serde(alias = "Highly Compatible")]
    Highly,
    #[serde(alias = "Moderately Compatible")]
    Moderately,
    #[serde(alias = "Compatible")]
    Compatible,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Highly, Tier::Moderately, Tier::Compatible];

    /// Short query name, as accepted by every connection operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Highly => "highly",
            Tier::Moderately => "moderately",
            Tier::Compatible => "compatible",
        }
    }

    /// Classification label used in the trio dataset.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Highly => "Highly Compatible",
            Tier::Moderately => "Moderately Compatible",
            Tier::Compatible => "Compatible",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = InvalidTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Tier::ALL
            .into_iter()
            .find(|tier| normalized == tier.as_str() || normalized == tier.label().to_lowercase())
            .ok_or_else(|| InvalidTierError::new(s))
    }
}

impl TryFrom<&str> for Tier {
    type Error = InvalidTierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Anything an operation accepts as its tier argument.
///
/// Strings are validated here, so a bad tier is rejected before any
/// partition is touched.
pub trait IntoTier {
    fn into_tier(self) -> Result<Tier, InvalidTierError>;
}

impl IntoTier for Tier {
    fn into_tier(self) -> Result<Tier, InvalidTierError> {
        Ok(self)
    }
}

impl IntoTier for &str {
    fn into_tier(self) -> Result<Tier, InvalidTierError> {
        self.parse()
    }
}

impl IntoTier for &String {
    fn into_tier(self) -> Result<Tier, InvalidTierError> {
        self.parse()
    }
}
