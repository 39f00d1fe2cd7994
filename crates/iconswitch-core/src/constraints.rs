//! Measure specifications handed down by the host layout system.

use serde::{Deserialize, Serialize};

/// How the host constrains one dimension of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "size", rename_all = "snake_case")]
pub enum MeasureSpec {
    /// The host dictates the exact size.
    Exactly(f32),
    /// The switch may be as large as the given size.
    AtMost(f32),
    /// No constraint; the switch picks its desired size.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve this spec against the size the switch would like to have.
    #[must_use]
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => size.min(desired),
            Self::Unspecified => desired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_ignores_desired() {
        assert_eq!(MeasureSpec::Exactly(40.0).resolve(80.0), 40.0);
        assert_eq!(MeasureSpec::Exactly(120.0).resolve(80.0), 120.0);
    }

    #[test]
    fn test_at_most_takes_minimum() {
        assert_eq!(MeasureSpec::AtMost(40.0).resolve(80.0), 40.0);
        assert_eq!(MeasureSpec::AtMost(200.0).resolve(80.0), 80.0);
    }

    #[test]
    fn test_unspecified_uses_desired() {
        assert_eq!(MeasureSpec::Unspecified.resolve(80.0), 80.0);
        assert_eq!(MeasureSpec::default(), MeasureSpec::Unspecified);
    }
}
