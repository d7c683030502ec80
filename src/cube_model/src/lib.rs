#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! A 3x3x3 twisty puzzle: the pieces, their stickers, quarter turns of the
//! outer layers and detection of the solved state.
//!
//! Slots are addressed by `(x, y, z)` with each component in `0..3`. X runs
//! from left to right, Y from down to up and Z from back to front, so the Up
//! layer is `y == 2` and the Front layer is `z == 2`.

pub mod controller;
pub mod cube;
pub mod face;
pub mod grid;
pub mod notation;
pub mod piece;
pub mod rotation;
pub mod sticker;

pub use controller::{CubeController, CubeView};
pub use cube::{Cube, CubeEvent};
pub use face::{Axis, Color, Face};
pub use grid::{Coord, CoordError, CubeGrid};
pub use notation::{NotationError, format_moves, parse_moves};
pub use piece::{Piece, PieceKind};
pub use rotation::Turn;
pub use sticker::Sticker;
