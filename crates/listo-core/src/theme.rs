use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Accent colour assigned to a list when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    /// `bg-blue-500`
    Blue,
    /// `bg-emerald-500`
    Emerald,
    /// `bg-indigo-500`
    Indigo,
    /// `bg-rose-500`
    Rose,
    /// `bg-amber-500`
    Amber,
    /// `bg-purple-500`
    Purple,
}

/// Raised when a stored colour is not part of the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme color: {0}")]
pub struct UnknownThemeColor(pub String);

impl ThemeColor {
    /// Every colour a list can be assigned.
    pub const PALETTE: [Self; 6] = [
        Self::Blue,
        Self::Emerald,
        Self::Indigo,
        Self::Rose,
        Self::Amber,
        Self::Purple,
    ];

    /// Wire representation stored in `themeColor`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Emerald => "bg-emerald-500",
            Self::Indigo => "bg-indigo-500",
            Self::Rose => "bg-rose-500",
            Self::Amber => "bg-amber-500",
            Self::Purple => "bg-purple-500",
        }
    }

    /// Pick a palette colour uniformly using the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Pick a palette colour uniformly from `rng`.
    pub fn random_with(rng: &mut impl Rng) -> Self {
        Self::PALETTE.choose(rng).copied().unwrap_or(Self::Blue)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeColor {
    type Err = UnknownThemeColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PALETTE
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownThemeColor(s.to_owned()))
    }
}

impl Serialize for ThemeColor {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThemeColor {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
