use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when converting degrees to a rotation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
    InvalidDegrees(u16),
}

//
// ─── ROTATION ──────────────────────────────────────────────────────────────────
//

/// Quarter-turn applied to the round image in hard mode.
///
/// Easy mode always shows the image upright (`R0`); hard mode picks one of
/// the four variants uniformly at random when a round begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All four quarter-turns, in increasing order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Converts a degree value to a `Rotation`.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::InvalidDegrees` unless the value is a multiple
    /// of 90 below 360.
    pub fn from_degrees(value: u16) -> Result<Self, RotationError> {
        match value {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            _ => Err(RotationError::InvalidDegrees(value)),
        }
    }

    /// The rotation angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// True for the identity rotation.
    #[must_use]
    pub fn is_upright(self) -> bool {
        matches!(self, Rotation::R0)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
