use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The symbol on the face of a [card](crate::Card).
///
/// Two cards with the same figure form a pair. Apart from equality, the
/// game logic does not care what a figure looks like; [`Figure::glyph()`]
/// only exists for text output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Figure {
    Square,
    Circle,
    Triangle,
    InvertedTriangle,
    Star,
    RectangleHorizontal,
    RectangleVertical,
    Arrow,
}

/// All figures, in the order the [`DeckFactory`](crate::DeckFactory) cycles through them.
pub static FIGURES: [Figure; 8] = [
    Figure::Square,
    Figure::Circle,
    Figure::Triangle,
    Figure::InvertedTriangle,
    Figure::Star,
    Figure::RectangleHorizontal,
    Figure::RectangleVertical,
    Figure::Arrow,
];

impl Figure {
    /// The name used for this figure in JSON.
    pub fn key(self) -> &'static str {
        match self {
            Figure::Square => "square",
            Figure::Circle => "circle",
            Figure::Triangle => "triangle",
            Figure::InvertedTriangle => "invertedTriangle",
            Figure::Star => "star",
            Figure::RectangleHorizontal => "rectangleHorizontal",
            Figure::RectangleVertical => "rectangleVertical",
            Figure::Arrow => "arrow",
        }
    }

    /// Render this figure as a single Unicode character.
    pub fn glyph(self) -> char {
        match self {
            Figure::Square => '■',
            Figure::Circle => '●',
            Figure::Triangle => '▲',
            Figure::InvertedTriangle => '▼',
            Figure::Star => '★',
            Figure::RectangleHorizontal => '▬',
            Figure::RectangleVertical => '▮',
            Figure::Arrow => '➜',
        }
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The error type for the [`FromStr`] instance of [`Figure`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFigure(pub String);

impl std::error::Error for UnknownFigure {}

impl std::fmt::Display for UnknownFigure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not the name of a figure", self.0)
    }
}

impl FromStr for Figure {
    type Err = UnknownFigure;

    /// Parses the same names that [`Figure::key()`] returns.
    ///
    /// ```
    /// # use concentration::Figure;
    /// assert_eq!("invertedTriangle".parse(), Ok(Figure::InvertedTriangle));
    /// assert!("hexagon".parse::<Figure>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FIGURES
            .iter()
            .copied()
            .find(|figure| figure.key() == s)
            .ok_or_else(|| UnknownFigure(String::from(s)))
    }
}
