/// The error type for setting up a [`DeckFactory`](crate::DeckFactory).
#[derive(Debug, PartialEq, Eq)]
pub enum DeckError {
    NoFigures,
    UnpairedDeckSize { size: usize, num_figures: usize },
}

impl std::error::Error for DeckError {}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::NoFigures => write!(f, "A deck needs at least one figure"),
            DeckError::UnpairedDeckSize { size, num_figures } => write!(
                f,
                "A deck of {} cards does not contain every one of the {} figures an even number of times",
                size, num_figures
            ),
        }
    }
}

/// The error type for [`Board::flip()`](crate::Board::flip), i.e. for turning over a single card.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalFlip {
    OutOfBounds { index: usize, num_cards: usize },
    AlreadyLocked { index: usize },
    AlreadyFaceUp { index: usize },
    TooManyFaceUp,
}

impl std::error::Error for IllegalFlip {}

impl std::fmt::Display for IllegalFlip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalFlip::OutOfBounds { index, num_cards } => write!(
                f,
                "Tried to flip card {}, but there are only {} cards on the table",
                index, num_cards
            ),
            IllegalFlip::AlreadyLocked { index } => {
                write!(f, "Card {} is already part of a matched pair", index)
            }
            IllegalFlip::AlreadyFaceUp { index } => write!(f, "Card {} is already face-up", index),
            IllegalFlip::TooManyFaceUp => {
                write!(f, "Two cards are already face-up and have not been resolved")
            }
        }
    }
}
