//! Player markers.

use std::str::FromStr;
use tracing::instrument;

/// The symbol a player places on the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Marker {
    /// Returns the other marker.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Parses a marker, ignoring ASCII case. Returns `None` for anything but x/X/o/O.
    #[instrument]
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_str(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Marker::parse("x"), Some(Marker::X));
        assert_eq!(Marker::parse("X"), Some(Marker::X));
        assert_eq!(Marker::parse("o"), Some(Marker::O));
        assert_eq!(Marker::parse("O"), Some(Marker::O));
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for value in ["", "0", "XO", "y", " x"] {
            assert_eq!(Marker::parse(value), None, "{value:?} should not parse");
        }
    }

    #[test]
    fn test_display_is_uppercase() {
        let rendered: Vec<String> = [Marker::X, Marker::O].iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, ["X", "O"]);
    }

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent().opponent(), Marker::O);
    }
}
