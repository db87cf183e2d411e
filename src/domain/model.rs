use serde::{Deserialize, Serialize};
use std::fmt;

/// Which implementation of the operations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CalculatorMode {
    /// Keeps the seeded defects exactly as shipped.
    #[default]
    Seeded,
    /// Reports every out-of-domain input as `InvalidArgument`.
    Checked,
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeded => write!(f, "seeded"),
            Self::Checked => write!(f, "checked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add { a: i64, b: i64 },
    Divide { a: i64, b: i64 },
    FormatUser { name: String },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { a, b } => write!(f, "add({}, {})", a, b),
            Self::Divide { a, b } => write!(f, "divide({}, {})", a, b),
            Self::FormatUser { name } => write!(f, "format_user({:?})", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}
