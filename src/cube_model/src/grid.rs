use std::{fmt, ops::Index};

use itertools::{Itertools, iproduct};
use thiserror::Error;

use crate::{
    face::{Color, Face},
    piece::Piece,
    sticker::Sticker,
};

/// Number of slots along each axis.
pub const SIDE: usize = 3;

/// Number of slots in the grid.
pub const SLOTS: usize = SIDE * SIDE * SIDE;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Coordinate ({x}, {y}, {z}) is outside of the 3x3x3 grid")]
pub struct CoordError {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// The address of one of the 27 slots. Slots never move; pieces move between them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: usize,
    y: usize,
    z: usize,
}

impl Coord {
    /// # Panics
    ///
    /// Panics if any component is not in `0..3`.
    pub fn new(x: usize, y: usize, z: usize) -> Coord {
        match Coord::try_new(x, y, z) {
            Ok(coord) => coord,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(x: usize, y: usize, z: usize) -> Result<Coord, CoordError> {
        if x < SIDE && y < SIDE && z < SIDE {
            Ok(Coord { x, y, z })
        } else {
            Err(CoordError { x, y, z })
        }
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    pub fn z(self) -> usize {
        self.z
    }

    /// Every slot, with `x` varying slowest.
    pub fn all() -> impl Iterator<Item = Coord> {
        iproduct!(0..SIDE, 0..SIDE, 0..SIDE).map(|(x, y, z)| Coord { x, y, z })
    }

    pub(crate) fn index(self) -> usize {
        self.x * SIDE * SIDE + self.y * SIDE + self.z
    }

    /// The slot's position relative to the core, each component in `-1..=1`.
    pub(crate) fn centered(self) -> [i8; 3] {
        [self.x, self.y, self.z].map(|c| i8::try_from(c).unwrap_or(0) - 1)
    }

    pub(crate) fn from_centered(v: [i8; 3]) -> Coord {
        let [x, y, z] = v.map(|c| usize::try_from(c + 1).unwrap_or(0));
        Coord::new(x, y, z)
    }

    /// The outer faces this slot lies on, ordered by axis.
    pub fn faces(self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|&face| self.lies_on(face))
            .sorted_by_key(|face| face.axis().index())
            .collect()
    }

    /// Whether this slot belongs to the layer on `face`.
    pub fn lies_on(self, face: Face) -> bool {
        let extreme = if face.is_positive() { SIDE - 1 } else { 0 };
        [self.x, self.y, self.z][face.axis().index()] == extreme
    }

    /// The slot behind the sticker at `row`, `col` of `face` as seen from
    /// outside the cube in the unfolded net. Up is seen with Back at the top
    /// and Down with Front at the top; the side faces are seen upright.
    pub(crate) fn facelet(face: Face, row: usize, col: usize) -> Coord {
        let top = SIDE - 1 - row;
        let far = SIDE - 1 - col;

        match face {
            Face::Up => Coord::new(col, 2, row),
            Face::Down => Coord::new(col, 0, top),
            Face::Front => Coord::new(col, top, 2),
            Face::Back => Coord::new(far, top, 0),
            Face::Left => Coord::new(0, top, col),
            Face::Right => Coord::new(2, top, far),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// All 27 pieces of the cube, addressed by slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeGrid {
    pub(crate) pieces: [Piece; SLOTS],
}

impl CubeGrid {
    /// The cube in its solved configuration.
    pub fn solved() -> CubeGrid {
        let mut pieces = [Piece::Core; SLOTS];

        for coord in Coord::all() {
            let stickers = coord
                .faces()
                .into_iter()
                .map(Sticker::new)
                .collect::<Vec<_>>();
            pieces[coord.index()] = Piece::from_stickers(&stickers);
        }

        CubeGrid { pieces }
    }

    /// # Panics
    ///
    /// Panics if any component is not in `0..3`.
    pub fn piece_at(&self, x: usize, y: usize, z: usize) -> &Piece {
        &self[Coord::new(x, y, z)]
    }

    pub fn try_piece_at(&self, x: usize, y: usize, z: usize) -> Result<&Piece, CoordError> {
        Coord::try_new(x, y, z).map(|coord| &self[coord])
    }

    pub fn get(&self, coord: Coord) -> &Piece {
        &self.pieces[coord.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Piece)> {
        Coord::all().map(|coord| (coord, &self[coord]))
    }

    /// The nine slots of the layer on `face`.
    pub fn layer(face: Face) -> impl Iterator<Item = Coord> {
        Coord::all().filter(move |coord| coord.lies_on(face))
    }

    /// The color of every sticker on `face`, laid out as seen in the unfolded net.
    ///
    /// # Panics
    ///
    /// Panics if a slot on `face` has no sticker pointing that way, which only
    /// happens if the grid was assembled wrongly.
    pub fn face_colors(&self, face: Face) -> [[Color; SIDE]; SIDE] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                self[Coord::facelet(face, row, col)]
                    .sticker_facing(face)
                    .map(Sticker::color)
                    .expect("every outer slot carries a sticker facing its side")
            })
        })
    }

    /// Whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let colors = self
                .pieces
                .iter()
                .flat_map(Piece::stickers)
                .filter(|sticker| sticker.facing() == face)
                .map(Sticker::color)
                .collect::<Vec<_>>();

            colors.len() == SIDE * SIDE && colors.iter().all_equal()
        })
    }

    /// A diagram of the unfolded cube with one letter per sticker.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Default for CubeGrid {
    fn default() -> Self {
        CubeGrid::solved()
    }
}

impl Index<Coord> for CubeGrid {
    type Output = Piece;

    fn index(&self, index: Coord) -> &Self::Output {
        self.get(index)
    }
}

fn write_face_row(
    f: &mut fmt::Formatter<'_>,
    colors: &[[Color; SIDE]; SIDE],
    row: usize,
) -> fmt::Result {
    write!(f, "{}", colors[row].iter().map(|c| c.initial()).join(" "))
}

impl fmt::Display for CubeGrid {
    /// ```text
    ///       W W W
    ///       W W W
    ///       W W W
    /// O O O G G G R R R B B B
    /// O O O G G G R R R B B B
    /// O O O G G G R R R B B B
    ///       Y Y Y
    ///       Y Y Y
    ///       Y Y Y
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(SIDE * 2);

        let up = self.face_colors(Face::Up);
        for row in 0..SIDE {
            write!(f, "{indent}")?;
            write_face_row(f, &up, row)?;
            writeln!(f)?;
        }

        let strip =
            [Face::Left, Face::Front, Face::Right, Face::Back].map(|face| self.face_colors(face));
        for row in 0..SIDE {
            for (i, colors) in strip.iter().enumerate() {
                if i != 0 {
                    write!(f, " ")?;
                }
                write_face_row(f, colors, row)?;
            }
            writeln!(f)?;
        }

        let down = self.face_colors(Face::Down);
        for row in 0..SIDE {
            write!(f, "{indent}")?;
            write_face_row(f, &down, row)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
