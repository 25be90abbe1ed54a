use serde::{Deserialize, Serialize};

use crate::{Card, CardId, CardState, Figure};

/// Request for a bot to do something.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame { num_cards: usize },
    /// Request to turn over one card.
    ///
    /// The response should be a [`PickCardResponse`]. This is sent twice per
    /// turn; on the second request, the first card is already face-up.
    PickCard {
        /// The table, in the order the cards lie on it.
        cards: Vec<CardView>,
    },
    /// Both cards of a turn have been revealed and judged.
    ///
    /// Sent to every player, not only the one whose turn it was. The
    /// response should be an [`Okay`].
    TurnResult {
        revealed: [RevealedCard; 2],
        cards_are_equal: bool,
    },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// A card as a player sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView<F = Figure> {
    pub id: CardId,
    pub state: CardState,
    /// Only present while the card is face-up, omitted from the JSON otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<F>,
}

impl<F: Copy> From<&Card<F>> for CardView<F> {
    fn from(card: &Card<F>) -> Self {
        Self {
            id: card.id,
            state: card.state(),
            figure: card.is_flipped.then_some(card.figure),
        }
    }
}

/// A card that was turned over during a turn, and where it lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCard {
    pub index: usize,
    pub figure: Figure,
}

/// The index of the card to turn over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickCardResponse(pub usize);
