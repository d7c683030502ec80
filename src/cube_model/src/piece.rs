use crate::{
    face::{Color, Face},
    rotation::Turn,
    sticker::Sticker,
};

/// The role of a piece, determined by how many outer faces it touches.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Corner,
    Edge,
    Center,
    /// The hidden piece in the middle of the cube.
    Core,
}

impl PieceKind {
    pub fn sticker_count(self) -> usize {
        match self {
            PieceKind::Corner => 3,
            PieceKind::Edge => 2,
            PieceKind::Center => 1,
            PieceKind::Core => 0,
        }
    }

    pub fn from_sticker_count(count: usize) -> Option<PieceKind> {
        match count {
            3 => Some(PieceKind::Corner),
            2 => Some(PieceKind::Edge),
            1 => Some(PieceKind::Center),
            0 => Some(PieceKind::Core),
            _ => None,
        }
    }
}

/// A movable piece of the cube and its stickers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    Corner([Sticker; 3]),
    Edge([Sticker; 2]),
    Center([Sticker; 1]),
    Core,
}

impl Piece {
    /// Build a piece of the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the number of stickers does not match `kind`.
    pub fn new(kind: PieceKind, stickers: &[Sticker]) -> Piece {
        assert_eq!(
            stickers.len(),
            kind.sticker_count(),
            "a {kind:?} piece needs exactly {} stickers",
            kind.sticker_count(),
        );

        match kind {
            PieceKind::Corner => Piece::Corner([stickers[0], stickers[1], stickers[2]]),
            PieceKind::Edge => Piece::Edge([stickers[0], stickers[1]]),
            PieceKind::Center => Piece::Center([stickers[0]]),
            PieceKind::Core => Piece::Core,
        }
    }

    /// Build a piece whose kind is implied by the number of stickers.
    ///
    /// # Panics
    ///
    /// Panics if given more than three stickers.
    pub fn from_stickers(stickers: &[Sticker]) -> Piece {
        let Some(kind) = PieceKind::from_sticker_count(stickers.len()) else {
            panic!("no piece carries {} stickers", stickers.len());
        };

        Piece::new(kind, stickers)
    }

    pub fn kind(&self) -> PieceKind {
        match self {
            Piece::Corner(_) => PieceKind::Corner,
            Piece::Edge(_) => PieceKind::Edge,
            Piece::Center(_) => PieceKind::Center,
            Piece::Core => PieceKind::Core,
        }
    }

    pub fn stickers(&self) -> &[Sticker] {
        match self {
            Piece::Corner(stickers) => stickers,
            Piece::Edge(stickers) => stickers,
            Piece::Center(stickers) => stickers,
            Piece::Core => &[],
        }
    }

    /// The sticker currently pointing toward `face`, if any.
    pub fn sticker_facing(&self, face: Face) -> Option<&Sticker> {
        self.stickers()
            .iter()
            .find(|sticker| sticker.facing() == face)
    }

    /// The piece's colors, sorted. This identifies the piece on a standard cube
    /// regardless of where it sits or how it is twisted.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors = self
            .stickers()
            .iter()
            .map(Sticker::color)
            .collect::<Vec<_>>();
        colors.sort_unstable();
        colors
    }

    /// The piece re-oriented by `turn`. Sticker order and colors are kept.
    #[must_use]
    pub fn turned(&self, turn: Turn) -> Piece {
        match self {
            Piece::Corner(stickers) => Piece::Corner(stickers.map(|s| s.turned(turn))),
            Piece::Edge(stickers) => Piece::Edge(stickers.map(|s| s.turned(turn))),
            Piece::Center(stickers) => Piece::Center(stickers.map(|s| s.turned(turn))),
            Piece::Core => Piece::Core,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_sticker_count() {
        let stickers = [
            Sticker::new(Face::Up),
            Sticker::new(Face::Front),
            Sticker::new(Face::Right),
        ];

        for count in 0..=3 {
            let piece = Piece::from_stickers(&stickers[..count]);
            assert_eq!(piece.stickers().len(), count);
            assert_eq!(piece.kind().sticker_count(), count);
        }
    }

    #[test]
    #[should_panic(expected = "exactly 3 stickers")]
    fn corner_with_two_stickers_panics() {
        Piece::new(
            PieceKind::Corner,
            &[Sticker::new(Face::Up), Sticker::new(Face::Front)],
        );
    }

    #[test]
    #[should_panic(expected = "no piece carries 4 stickers")]
    fn four_stickers_panics() {
        Piece::from_stickers(&[Sticker::new(Face::Up); 4]);
    }

    #[test]
    fn sticker_lookup_by_facing() {
        let piece = Piece::new(
            PieceKind::Edge,
            &[Sticker::new(Face::Up), Sticker::new(Face::Front)],
        );

        assert_eq!(
            piece.sticker_facing(Face::Front).map(Sticker::color),
            Some(Color::Green)
        );
        assert!(piece.sticker_facing(Face::Back).is_none());
        assert_eq!(piece.colors(), vec![Color::White, Color::Green]);
    }

    #[test]
    fn turning_keeps_colors() {
        let piece = Piece::new(
            PieceKind::Corner,
            &[
                Sticker::new(Face::Up),
                Sticker::new(Face::Front),
                Sticker::new(Face::Right),
            ],
        );
        let turned = piece.turned(Turn::new(Face::Up, true));

        assert_eq!(turned.colors(), piece.colors());
        assert_eq!(turned.sticker_facing(Face::Up), piece.sticker_facing(Face::Up));
        assert_eq!(
            turned.sticker_facing(Face::Left).map(Sticker::color),
            Some(Color::Green)
        );
        assert_eq!(
            turned.sticker_facing(Face::Front).map(Sticker::color),
            Some(Color::Red)
        );
    }
}
