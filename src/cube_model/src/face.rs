use std::{fmt, str::FromStr};

use crate::rotation::Turn;

/// One of the three coordinate axes of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The two remaining axes, in cyclic order. A positive quarter turn about
    /// `self` carries the first of them onto the second.
    pub(crate) fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// A direction in the cube's frame, also naming the layer lying on that side.
///
/// X runs from left to right, Y from down to up, and Z from back to front.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Up, Down, Left, Right, Front, Back];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Whether this face points along the positive direction of its axis.
    pub fn is_positive(self) -> bool {
        matches!(self, Face::Up | Face::Right | Face::Front)
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// The outward unit vector of this face.
    pub fn normal(self) -> [i8; 3] {
        let mut v = [0; 3];
        v[self.axis().index()] = if self.is_positive() { 1 } else { -1 };
        v
    }

    pub fn from_normal(normal: [i8; 3]) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.normal() == normal)
    }

    /// The color a sticker facing this way carries on a solved cube.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        }
    }

    /// The four faces bordering this one, in the order a clockwise quarter
    /// turn of this face carries stickers from one to the next.
    pub fn side_cycle(self) -> [Face; 4] {
        use Face::*;

        match self {
            Up => [Front, Left, Back, Right],
            Down => [Front, Right, Back, Left],
            Right => [Front, Up, Back, Down],
            Left => [Front, Down, Back, Up],
            Front => [Up, Right, Down, Left],
            Back => [Up, Left, Down, Right],
        }
    }

    /// Where a sticker facing `self` points after `turn` moves it.
    ///
    /// The turned face and its opposite are fixed points.
    pub fn turned(self, turn: Turn) -> Face {
        let cycle = turn.face.side_cycle();
        let Some(i) = cycle.iter().position(|&side| side == self) else {
            return self;
        };

        let step = if turn.clockwise { 1 } else { 3 };
        cycle[(i + step) % 4]
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" | "u" => Ok(Face::Up),
            "D" | "d" => Ok(Face::Down),
            "L" | "l" => Ok(Face::Left),
            "R" | "r" => Ok(Face::Right),
            "F" | "f" => Ok(Face::Front),
            "B" | "b" => Ok(Face::Back),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Sticker colors of the standard scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
    ];

    pub fn from_initial(initial: char) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| color.initial() == initial)
    }

    /// The first letter of the color's name, used by the text dump.
    pub fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
