//! Common domain type definitions
//!
//! Enum types shared by the family model and the layout output.

use serde::{Deserialize, Serialize};

/// Sex of a family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Unknown or not specified
    #[default]
    Unspecified,
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Unspecified,
        }
    }
}

impl From<i32> for Sex {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unspecified,
        }
    }
}
