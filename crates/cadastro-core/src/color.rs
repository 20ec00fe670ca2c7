//! # Preferred Color — Single Source of Truth
//!
//! Defines the [`CorPreferida`] enum with all 7 palette values. This is the
//! single definition used across the workspace. The Rust compiler enforces
//! exhaustive `match`: a color cannot be accepted at the HTTP boundary and
//! then dropped on the floor somewhere downstream, and an unknown string is
//! an explicit rejection rather than a pass-through.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A registrant's preferred color, restricted to the seven rainbow values
/// the registration form offers.
///
/// Serialized in lowercase Portuguese (`"vermelho"`, ..., `"violeta"`), which
/// is also the storage representation in the `cor_preferida` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorPreferida {
    /// Red.
    Vermelho,
    /// Orange.
    Laranja,
    /// Yellow.
    Amarelo,
    /// Green.
    Verde,
    /// Blue.
    Azul,
    /// Indigo.
    Anil,
    /// Violet.
    Violeta,
}

impl CorPreferida {
    /// Return all palette values as a slice.
    ///
    /// Useful when the full palette must be enumerated (e.g., building a
    /// selection list or an error message).
    pub fn all() -> &'static [CorPreferida] {
        &[
            Self::Vermelho,
            Self::Laranja,
            Self::Amarelo,
            Self::Verde,
            Self::Azul,
            Self::Anil,
            Self::Violeta,
        ]
    }

    /// The total number of palette values.
    pub const COUNT: usize = 7;

    /// The lowercase wire/storage name of this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vermelho => "vermelho",
            Self::Laranja => "laranja",
            Self::Amarelo => "amarelo",
            Self::Verde => "verde",
            Self::Azul => "azul",
            Self::Anil => "anil",
            Self::Violeta => "violeta",
        }
    }
}

impl std::fmt::Display for CorPreferida {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CorPreferida {
    type Err = ValidationError;

    /// Parse a stored/wire color name. Matching is exact: case variants and
    /// unknown values are rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vermelho" => Ok(Self::Vermelho),
            "laranja" => Ok(Self::Laranja),
            "amarelo" => Ok(Self::Amarelo),
            "verde" => Ok(Self::Verde),
            "azul" => Ok(Self::Azul),
            "anil" => Ok(Self::Anil),
            "violeta" => Ok(Self::Violeta),
            other => Err(ValidationError::InvalidCor(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_count() {
        assert_eq!(CorPreferida::all().len(), CorPreferida::COUNT);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for cor in CorPreferida::all() {
            let parsed: CorPreferida = cor.as_str().parse().unwrap();
            assert_eq!(parsed, *cor);
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&CorPreferida::Azul).unwrap();
        assert_eq!(json, "\"azul\"");
        let back: CorPreferida = serde_json::from_str("\"violeta\"").unwrap();
        assert_eq!(back, CorPreferida::Violeta);
    }

    #[test]
    fn unknown_color_rejected_by_serde() {
        let result: Result<CorPreferida, _> = serde_json::from_str("\"magenta\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_color_rejected_by_from_str() {
        let err = "Azul".parse::<CorPreferida>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCor(_)));
    }
}
