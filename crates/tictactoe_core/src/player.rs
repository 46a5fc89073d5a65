//! Player identities.

use crate::Marker;
use tracing::{debug, instrument};

/// Why a player could not be created or changed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayerError {
    /// Names must contain at least one character.
    #[display("Name must not be empty")]
    EmptyName,

    /// Only X and O (any case) are markers.
    #[display("Invalid marker {:?}. Must be 'X' or 'O'.", _0)]
    InvalidMarker(String),
}

impl std::error::Error for PlayerError {}

/// A named participant with a marker.
///
/// The name is never empty. Both fields are validated on construction and on
/// every change.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Player {} with marker {}", name, marker)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    /// Creates a player, validating the name and parsing the marker.
    ///
    /// # Errors
    ///
    /// [`PlayerError::EmptyName`] or [`PlayerError::InvalidMarker`].
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, marker: &str) -> Result<Self, PlayerError> {
        let name = validate_name(name.as_ref())?;
        let marker = parse_marker(marker)?;
        Ok(Self { name, marker })
    }

    /// Creates a player from an already-typed marker.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn with_marker(name: impl AsRef<str>, marker: Marker) -> Result<Self, PlayerError> {
        Ok(Self {
            name: validate_name(name.as_ref())?,
            marker,
        })
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Renames the player. The old name is kept on failure.
    #[instrument(skip(self), fields(old = %self.name))]
    pub fn set_name(&mut self, name: &str) -> Result<(), PlayerError> {
        self.name = validate_name(name)?;
        debug!(new = %self.name, "Player renamed");
        Ok(())
    }

    /// Changes the marker. Accepts x/X/o/O; stored uppercase.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn set_marker(&mut self, marker: &str) -> Result<(), PlayerError> {
        self.marker = parse_marker(marker)?;
        Ok(())
    }
}

#[instrument]
fn validate_name(name: &str) -> Result<String, PlayerError> {
    if name.is_empty() {
        Err(PlayerError::EmptyName)
    } else {
        Ok(name.to_string())
    }
}

#[instrument]
fn parse_marker(value: &str) -> Result<Marker, PlayerError> {
    Marker::parse(value).ok_or_else(|| PlayerError::InvalidMarker(value.to_string()))
}
