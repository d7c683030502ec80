use crate::{
    face::{Color, Face},
    rotation::Turn,
};

/// A colored sticker and the direction it currently points.
///
/// The color is fixed when the sticker is made; turns only change the facing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sticker {
    facing: Face,
    color: Color,
}

impl Sticker {
    /// Make a sticker with the color it has on a solved cube when facing `facing`.
    pub fn new(facing: Face) -> Self {
        Sticker {
            facing,
            color: facing.solved_color(),
        }
    }

    pub fn facing(&self) -> Face {
        self.facing
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The same sticker after `turn` carries it around.
    #[must_use]
    pub fn turned(self, turn: Turn) -> Self {
        Sticker {
            facing: self.facing.turned(turn),
            color: self.color,
        }
    }
}
