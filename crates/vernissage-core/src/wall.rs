//! The fixed enumeration of mountable wall surfaces.
//!
//! An exhibition room has four walls, but only three of them host images:
//! the back wall stays clear for the entrance and is not part of the
//! enumeration. Each wall hosts a single horizontal row of panels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A wall surface that can host a horizontal row of image panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Front,
    Right,
    Left,
}

impl Wall {
    /// Walls in the order the planner fills them.
    pub const PLACEMENT_ORDER: [Wall; 3] = [Wall::Front, Wall::Right, Wall::Left];

    /// Whether images accepted onto this wall are laid out in reverse of
    /// their input order.
    ///
    /// The front and left walls are viewed mirrored from the room center,
    /// so their rows run right-to-left; reversing the placement order keeps
    /// the visual reading order consistent. Only the placement order is
    /// reversed, never which images a wall accepts.
    pub fn reversed(self) -> bool {
        matches!(self, Wall::Front | Wall::Left)
    }

    /// Lowercase wall name, as used in manifests and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Wall::Front => "front",
            Wall::Right => "right",
            Wall::Left => "left",
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
