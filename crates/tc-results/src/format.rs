//! Numeric display options.

use serde::{Deserialize, Serialize};
use tc_core::Real;

/// How result values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "digits", rename_all = "lowercase")]
pub enum Precision {
    /// Rounded to the nearest integer.
    Integer,
    /// Fixed number of decimals.
    Fixed(usize),
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Fixed(4)
    }
}

impl Precision {
    /// Format one value. Values that round to zero print without a sign.
    pub fn format(self, value: Real) -> String {
        let digits = match self {
            Precision::Integer => 0,
            Precision::Fixed(d) => d,
        };
        let text = format!("{value:.digits$}");
        match text.strip_prefix('-') {
            Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
                magnitude.to_string()
            }
            _ => text,
        }
    }
}
