//! Quarter turns of the outer layers.
//!
//! A turn moves the nine pieces of one layer around the layer's axis and
//! re-orients each of them by the same quarter rotation. Clockwise is judged
//! looking at the turned face from outside the cube.

use std::fmt;

use log::debug;

use crate::{
    face::{Axis, Face},
    grid::{Coord, CubeGrid},
};

/// A quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub face: Face,
    pub clockwise: bool,
}

impl Turn {
    pub const fn new(face: Face, clockwise: bool) -> Turn {
        Turn { face, clockwise }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Turn {
        Turn {
            face: self.face,
            clockwise: !self.clockwise,
        }
    }

    /// Whether this turn rotates its layer counter-clockwise about the positive
    /// direction of its axis (the right-handed sense).
    fn is_positive_rotation(self) -> bool {
        self.clockwise != self.face.is_positive()
    }

    /// Rotate a vector relative to the core by this turn's quarter rotation.
    pub(crate) fn rotate_vector(self, v: [i8; 3]) -> [i8; 3] {
        quarter(v, self.face.axis(), self.is_positive_rotation())
    }

    /// The slot a piece in `coord` moves to.
    pub fn destination(self, coord: Coord) -> Coord {
        if !coord.lies_on(self.face) {
            return coord;
        }

        Coord::from_centered(self.rotate_vector(coord.centered()))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if !self.clockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

fn quarter(v: [i8; 3], axis: Axis, positive: bool) -> [i8; 3] {
    let (i, j) = axis.others();
    let (i, j) = (i.index(), j.index());

    let mut out = v;
    if positive {
        out[i] = -v[j];
        out[j] = v[i];
    } else {
        out[i] = v[j];
        out[j] = -v[i];
    }
    out
}

impl CubeGrid {
    /// Turn one layer of the cube. Every piece of the layer is moved and
    /// re-oriented at once; slots outside of the layer are untouched.
    pub fn apply_turn(&mut self, turn: Turn) {
        let mut next = self.pieces;

        for from in CubeGrid::layer(turn.face) {
            let to = turn.destination(from);
            next[to.index()] = self[from].turned(turn);
        }

        self.pieces = next;

        debug!("Applied {turn}");
    }
}
